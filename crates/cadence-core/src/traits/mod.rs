mod adjustment_log;
mod clock;
mod event_store;
mod profile;
mod review;

pub use adjustment_log::AdjustmentLog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use event_store::EventStore;
pub use profile::ProfileProvider;
pub use review::ReviewProvider;
