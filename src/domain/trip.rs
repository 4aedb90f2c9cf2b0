use std::sync::Arc;

use log::info;

use crate::core::resource::Resource;
use crate::data::{NewTrip, Trip, TripRepository};
use crate::domain::{run_update, wrap};

/// Planned trips, kept in the local store.
pub struct TripUseCase {
    repository: Arc<dyn TripRepository>,
}

impl TripUseCase {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_trip_list(&self) -> Resource<Vec<Trip>> {
        wrap("get_trip_list", self.repository.get_all_trips()).await
    }

    /// Stores a new trip and answers with it, id and timestamp filled in.
    pub async fn add_trip(&self, new: NewTrip) -> Resource<Trip> {
        let trip = Trip::create(new);
        info!("Adding trip {} to {}", trip.id, trip.city);
        let stored = trip.clone();
        wrap("add_trip", self.repository.insert_trip(trip))
            .await
            .map(|()| stored)
    }

    pub async fn delete_trip(&self, id: &str) -> bool {
        run_update("delete_trip", id, move || self.repository.delete_trip(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeTripRepository;

    fn new_trip() -> NewTrip {
        NewTrip {
            title: "Weekend in Lisbon".to_string(),
            city: "Lisbon".to_string(),
            date: "2026-12-05".to_string(),
            note: Some("pastel de nata".to_string()),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let repo = Arc::new(FakeTripRepository::default());
        let uc = TripUseCase::new(repo.clone());

        let added = uc.add_trip(new_trip()).await;
        let trip = added.data().cloned().unwrap();
        assert_eq!(trip.city, "Lisbon");

        assert_eq!(uc.get_trip_list().await, Resource::success(vec![trip]));
    }

    #[tokio::test]
    async fn test_empty_store_is_success_with_empty_list() {
        let uc = TripUseCase::new(Arc::new(FakeTripRepository::default()));
        assert_eq!(uc.get_trip_list().await, Resource::success(vec![]));
    }

    #[tokio::test]
    async fn test_store_fault_is_no_data() {
        let uc = TripUseCase::new(Arc::new(FakeTripRepository::failing()));
        assert_eq!(uc.get_trip_list().await, Resource::error("No Data", None));
        assert!(uc.add_trip(new_trip()).await.is_error());
    }

    #[tokio::test]
    async fn test_delete_with_empty_id_is_skipped() {
        let repo = Arc::new(FakeTripRepository::default());
        let uc = TripUseCase::new(repo.clone());
        uc.add_trip(new_trip()).await;

        assert!(!uc.delete_trip("").await);
        assert_eq!(repo.trips.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_trip() {
        let repo = Arc::new(FakeTripRepository::default());
        let uc = TripUseCase::new(repo.clone());
        let id = uc.add_trip(new_trip()).await.into_data().unwrap().id;

        assert!(uc.delete_trip(&id).await);
        assert!(repo.trips.lock().unwrap().is_empty());
    }
}
