//! # Collaborators
//!
//! The capabilities the use cases consume: remote travel listings and the
//! local trip store. Each method is a single call that reports a raw
//! [`Outcome`] or a [`RepositoryError`] and makes no judgement about either.

pub mod repository;
pub mod trips;

pub use repository::{Outcome, RepositoryError, RepositoryResult, TravelRepository, TripRepository};
pub use trips::{NewTrip, Trip, TripStore};
