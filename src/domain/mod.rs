//! # Use Cases
//!
//! Each use case calls exactly one collaborator operation and turns its
//! outcome into exactly one [`Resource`]. The translation is the same for
//! every feature and lives in [`wrap`]:
//!
//! ```text
//! Ok(Success(Some(p)))  →  success(p)
//! Ok(Success(None))     →  error("No Data")
//! Ok(Failed { .. })     →  error("Error")
//! Err(fault)            →  error("No Data")     fault is logged, never returned
//! ```
//!
//! Updates by id go through [`run_update`]: an empty id never reaches the
//! collaborator, and the outcome is only logged.

pub mod bookmark;
pub mod detail;
pub mod home;
pub mod trip;

pub use bookmark::BookmarkUseCase;
pub use detail::DetailUseCase;
pub use home::HomeUseCase;
pub use trip::TripUseCase;

use log::{debug, warn};

use crate::core::resource::{NO_DATA, REQUEST_FAILED, Resource};
use crate::data::{Outcome, RepositoryResult};

/// Awaits one collaborator call and classifies its outcome.
pub async fn wrap<T, F>(operation: &str, call: F) -> Resource<T>
where
    F: Future<Output = RepositoryResult<T>>,
{
    match call.await {
        Ok(Outcome::Success(Some(data))) => {
            debug!("{}: success", operation);
            Resource::success(data)
        }
        Ok(Outcome::Success(None)) => {
            debug!("{}: success without a body", operation);
            Resource::error(NO_DATA, None)
        }
        Ok(Outcome::Failed { status, message }) => {
            warn!("{}: request failed ({}): {}", operation, status, message);
            Resource::error(REQUEST_FAILED, None)
        }
        Err(e) => {
            warn!("{}: {}", operation, e);
            Resource::error(NO_DATA, None)
        }
    }
}

/// Issues one update for `id`. Returns `false` without calling anything when
/// `id` is empty, `true` once the call was made, whatever it answered.
pub async fn run_update<F, Fut>(operation: &str, id: &str, call: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = RepositoryResult<()>>,
{
    if id.is_empty() {
        warn!("{}: empty id, skipping", operation);
        return false;
    }
    match call().await {
        Ok(Outcome::Success(_)) => debug!("{}: {} updated", operation, id),
        Ok(Outcome::Failed { status, message }) => {
            warn!("{}: {} not updated ({}): {}", operation, id, status, message)
        }
        Err(e) => warn!("{}: {} not updated: {}", operation, id, e),
    }
    true
}
