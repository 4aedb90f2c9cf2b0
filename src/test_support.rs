//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::api::{Category, TravelItem};
use crate::data::{
    Outcome, RepositoryError, RepositoryResult, TravelRepository, Trip, TripRepository,
};

/// A scripted collaborator answer.
#[derive(Clone, Debug)]
pub enum Reply<T> {
    Body(T),
    NoBody,
    Status(u16),
    Fault,
    /// Wait, then answer with the inner reply.
    Delayed(Duration, Box<Reply<T>>),
}

impl<T: Clone> Reply<T> {
    async fn resolve(self) -> RepositoryResult<T> {
        let mut reply = self;
        while let Reply::Delayed(delay, inner) = reply {
            tokio::time::sleep(delay).await;
            reply = *inner;
        }
        match reply {
            Reply::Body(body) => Ok(Outcome::Success(Some(body))),
            Reply::NoBody => Ok(Outcome::Success(None)),
            Reply::Status(status) => Ok(Outcome::Failed {
                status,
                message: format!("HTTP {status}"),
            }),
            Reply::Fault => Err(RepositoryError::Network("connection refused".to_string())),
            Reply::Delayed(..) => unreachable!(),
        }
    }
}

/// Hands out replies in order; the last one repeats forever.
struct Script<T> {
    replies: Mutex<VecDeque<Reply<T>>>,
}

impl<T: Clone> Script<T> {
    fn new(replies: Vec<Reply<T>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    fn next(&self) -> Reply<T> {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap_or(Reply::NoBody)
        }
    }
}

pub fn item(id: &str, is_bookmark: bool) -> TravelItem {
    TravelItem {
        id: id.to_string(),
        is_bookmark,
        ..Default::default()
    }
}

/// In-memory `TravelRepository` with scripted list replies.
pub struct FakeTravelRepository {
    lists: Script<Vec<TravelItem>>,
    update_reply: Reply<()>,
    /// When set, every update waits for a permit before answering.
    update_gate: Option<std::sync::Arc<Semaphore>>,
    list_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<(String, bool)>>,
}

impl FakeTravelRepository {
    pub fn with_lists(replies: Vec<Reply<Vec<TravelItem>>>) -> Self {
        Self {
            lists: Script::new(replies),
            update_reply: Reply::Body(()),
            update_gate: None,
            list_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(items: Vec<TravelItem>) -> Self {
        Self::with_lists(vec![Reply::Body(items)])
    }

    pub fn update_reply(mut self, reply: Reply<()>) -> Self {
        self.update_reply = reply;
        self
    }

    pub fn gated_updates(mut self, gate: std::sync::Arc<Semaphore>) -> Self {
        self.update_gate = Some(gate);
        self
    }

    pub fn updates(&self) -> Vec<(String, bool)> {
        self.update_calls.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    async fn list(&self, what: &str) -> RepositoryResult<Vec<TravelItem>> {
        self.list_calls.lock().unwrap().push(what.to_string());
        self.lists.next().resolve().await
    }
}

#[async_trait]
impl TravelRepository for FakeTravelRepository {
    async fn get_all_list(&self) -> RepositoryResult<Vec<TravelItem>> {
        self.list("all").await
    }

    async fn get_list_by_category(&self, category: Category) -> RepositoryResult<Vec<TravelItem>> {
        self.list(category.as_str()).await
    }

    async fn get_bookmark_list(&self) -> RepositoryResult<Vec<TravelItem>> {
        self.list("bookmarks").await
    }

    async fn update_bookmark(&self, id: &str, is_bookmark: bool) -> RepositoryResult<()> {
        self.update_calls
            .lock()
            .unwrap()
            .push((id.to_string(), is_bookmark));
        if let Some(gate) = &self.update_gate {
            gate.acquire().await.unwrap().forget();
        }
        self.update_reply.clone().resolve().await
    }
}

/// In-memory `TripRepository`.
#[derive(Default)]
pub struct FakeTripRepository {
    pub trips: Mutex<Vec<Trip>>,
    pub fail: bool,
}

impl FakeTripRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Io("disk full".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TripRepository for FakeTripRepository {
    async fn get_all_trips(&self) -> RepositoryResult<Vec<Trip>> {
        self.check()?;
        Ok(Outcome::Success(Some(self.trips.lock().unwrap().clone())))
    }

    async fn insert_trip(&self, trip: Trip) -> RepositoryResult<()> {
        self.check()?;
        self.trips.lock().unwrap().push(trip);
        Ok(Outcome::Success(Some(())))
    }

    async fn delete_trip(&self, id: &str) -> RepositoryResult<()> {
        self.check()?;
        self.trips.lock().unwrap().retain(|t| t.id != id);
        Ok(Outcome::Success(Some(())))
    }
}
