use crate::errors::CadenceResult;
use crate::models::Profile;

/// Profile collaborator.
pub trait ProfileProvider: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> CadenceResult<Option<Profile>>;

    /// Externally computed identity alignment, 0-100.
    async fn identity_alignment(&self, user_id: &str) -> CadenceResult<f64>;
}
