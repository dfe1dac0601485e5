use chrono::NaiveDate;

use crate::errors::CadenceResult;
use crate::models::AdjustmentRecord;

/// Append-only log of emitted system adjustments, keyed by user and emission date.
pub trait AdjustmentLog: Send + Sync {
    async fn append_adjustments(&self, records: &[AdjustmentRecord]) -> CadenceResult<usize>;

    /// Records emitted on or after `since`, oldest first.
    async fn adjustments_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> CadenceResult<Vec<AdjustmentRecord>>;
}
