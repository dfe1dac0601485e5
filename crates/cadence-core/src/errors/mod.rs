mod cadence_error;
mod storage_error;

pub use cadence_error::{CadenceError, CadenceResult};
pub use storage_error::StorageError;
