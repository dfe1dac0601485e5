use crate::errors::CadenceResult;
use crate::models::ReviewHistory;

/// Evening-review collaborator.
pub trait ReviewProvider: Send + Sync {
    async fn get_review_history(&self, user_id: &str, days: u32) -> CadenceResult<ReviewHistory>;
}
