use std::fmt;

use async_trait::async_trait;

use crate::api::{Category, TravelItem};
use crate::data::trips::Trip;

/// Faults raised while talking to a collaborator.
/// These never reach the UI: use cases fold them into a `Resource::Error`.
#[derive(Debug)]
pub enum RepositoryError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The payload could not be decoded.
    Parse(String),
    /// Local store could not be read or written.
    Io(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Network(msg) => write!(f, "network error: {msg}"),
            RepositoryError::Parse(msg) => write!(f, "parse error: {msg}"),
            RepositoryError::Io(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// What a collaborator call came back with, when it came back at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 2xx (or a local call that completed). `None` means no body.
    Success(Option<T>),
    /// The collaborator answered, but not with success.
    Failed { status: u16, message: String },
}

pub type RepositoryResult<T> = Result<Outcome<T>, RepositoryError>;

/// Remote travel listings.
#[async_trait]
pub trait TravelRepository: Send + Sync {
    async fn get_all_list(&self) -> RepositoryResult<Vec<TravelItem>>;

    async fn get_list_by_category(&self, category: Category) -> RepositoryResult<Vec<TravelItem>>;

    async fn get_bookmark_list(&self) -> RepositoryResult<Vec<TravelItem>>;

    /// Sets `isBookmark` on one item. The updated item is not returned.
    async fn update_bookmark(&self, id: &str, is_bookmark: bool) -> RepositoryResult<()>;
}

/// Locally planned trips.
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn get_all_trips(&self) -> RepositoryResult<Vec<Trip>>;

    async fn insert_trip(&self, trip: Trip) -> RepositoryResult<()>;

    async fn delete_trip(&self, id: &str) -> RepositoryResult<()>;
}
