//! # Composition Root
//!
//! Builds the collaborators once from a [`ResolvedConfig`] and hands out
//! view-models wired to them. Use cases are shared; each view-model gets its
//! own scope.

use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;

use crate::api::{Category, TravelApiClient};
use crate::core::config::ResolvedConfig;
use crate::data::{RepositoryError, TravelRepository, TripRepository, TripStore};
use crate::domain::{BookmarkUseCase, DetailUseCase, HomeUseCase, TripUseCase};
use crate::presentation::{
    AddBookmarkViewModel, CategoryViewModel, DetailViewModel, HomeViewModel, TripViewModel,
};

pub struct AppContainer {
    home: Arc<HomeUseCase>,
    bookmark: Arc<BookmarkUseCase>,
    detail: Arc<DetailUseCase>,
    trip: Arc<TripUseCase>,
}

impl AppContainer {
    pub fn new(config: &ResolvedConfig) -> Result<Self, RepositoryError> {
        let client = TravelApiClient::new(&config.api_base_url, config.request_timeout)?;
        let store = TripStore::new(&config.data_dir);
        info!(
            "Wiring app against {} (trips in {})",
            config.api_base_url,
            store.path().display()
        );
        Ok(Self::with_repositories(Arc::new(client), Arc::new(store)))
    }

    pub fn with_repositories(
        travel: Arc<dyn TravelRepository>,
        trips: Arc<dyn TripRepository>,
    ) -> Self {
        Self {
            home: Arc::new(HomeUseCase::new(Arc::clone(&travel))),
            bookmark: Arc::new(BookmarkUseCase::new(Arc::clone(&travel))),
            detail: Arc::new(DetailUseCase::new(travel)),
            trip: Arc::new(TripUseCase::new(trips)),
        }
    }

    pub fn home_view_model(&self, runtime: Handle) -> HomeViewModel {
        HomeViewModel::new(Arc::clone(&self.home), runtime)
    }

    pub fn category_view_model(&self, category: Category, runtime: Handle) -> CategoryViewModel {
        CategoryViewModel::new(Arc::clone(&self.home), category, runtime)
    }

    pub fn add_bookmark_view_model(&self, runtime: Handle) -> AddBookmarkViewModel {
        AddBookmarkViewModel::new(Arc::clone(&self.bookmark), runtime)
    }

    pub fn detail_view_model(&self, runtime: Handle) -> DetailViewModel {
        DetailViewModel::new(Arc::clone(&self.detail), runtime)
    }

    pub fn trip_view_model(&self, runtime: Handle) -> TripViewModel {
        TripViewModel::new(Arc::clone(&self.bookmark), Arc::clone(&self.trip), runtime)
    }
}
