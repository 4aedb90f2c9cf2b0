use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;

use crate::api::TravelItem;
use crate::data::{NewTrip, Trip};
use crate::domain::{BookmarkUseCase, TripUseCase};
use crate::presentation::{Observable, ViewModelScope};

/// The trip tab: saved bookmarks on one side, planned trips on the other.
///
/// Mutations re-fetch the list they touched once they finish, so observers
/// of `bookmark_list` and `trip_list` never need to refresh by hand.
pub struct TripViewModel {
    bookmarks: Arc<BookmarkUseCase>,
    trips: Arc<TripUseCase>,
    scope: ViewModelScope,
    bookmark_list: Observable<Vec<TravelItem>>,
    trip_list: Observable<Vec<Trip>>,
    update_status: Observable<TravelItem>,
    trip_status: Observable<Trip>,
}

impl TripViewModel {
    pub fn new(bookmarks: Arc<BookmarkUseCase>, trips: Arc<TripUseCase>, runtime: Handle) -> Self {
        let vm = Self {
            bookmarks,
            trips,
            scope: ViewModelScope::new(runtime),
            bookmark_list: Observable::new(),
            trip_list: Observable::new(),
            update_status: Observable::new(),
            trip_status: Observable::new(),
        };
        vm.load_bookmarks();
        vm.load_trips();
        vm
    }

    pub fn load_bookmarks(&self) {
        let uc = Arc::clone(&self.bookmarks);
        self.scope
            .launch_fetch(&self.bookmark_list, async move { uc.get_bookmark_list().await });
    }

    pub fn load_trips(&self) {
        let uc = Arc::clone(&self.trips);
        self.scope
            .launch_fetch(&self.trip_list, async move { uc.get_trip_list().await });
    }

    /// Clears the bookmark on `id`, then reloads `bookmark_list`.
    pub fn remove_bookmark(&self, id: &str) {
        let uc = Arc::clone(&self.bookmarks);
        let list = self.bookmark_list.clone();
        let owned_id = id.to_string();
        self.scope.launch_update(&self.update_status, id, move |token| async move {
            uc.update_data(&owned_id, false).await;
            list.refresh(&token, uc.get_bookmark_list()).await;
        });
    }

    /// Stores a trip. `trip_status` ends with the stored trip or an error;
    /// on success `trip_list` is reloaded.
    pub fn add_trip(&self, new: NewTrip) {
        info!("Planning trip '{}'", new.title);
        let uc = Arc::clone(&self.trips);
        let list = self.trip_list.clone();
        self.scope.launch_with_progress(&self.trip_status, move |token| async move {
            let added = uc.add_trip(new).await;
            if added.is_success() {
                list.refresh(&token, uc.get_trip_list()).await;
            }
            added
        });
    }

    pub fn delete_trip(&self, id: &str) {
        let uc = Arc::clone(&self.trips);
        let list = self.trip_list.clone();
        let owned_id = id.to_string();
        self.scope.launch_update(&self.trip_status, id, move |token| async move {
            uc.delete_trip(&owned_id).await;
            list.refresh(&token, uc.get_trip_list()).await;
        });
    }

    pub fn bookmark_list(&self) -> Observable<Vec<TravelItem>> {
        self.bookmark_list.clone()
    }

    pub fn trip_list(&self) -> Observable<Vec<Trip>> {
        self.trip_list.clone()
    }

    pub fn update_status(&self) -> Observable<TravelItem> {
        self.update_status.clone()
    }

    pub fn trip_status(&self) -> Observable<Trip> {
        self.trip_status.clone()
    }
}
