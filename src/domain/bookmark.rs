use std::sync::Arc;

use crate::api::TravelItem;
use crate::core::resource::Resource;
use crate::data::TravelRepository;
use crate::domain::{run_update, wrap};

/// Backs the "add bookmark" sheet and the bookmarks tab.
pub struct BookmarkUseCase {
    repository: Arc<dyn TravelRepository>,
}

impl BookmarkUseCase {
    pub fn new(repository: Arc<dyn TravelRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_list(&self) -> Resource<Vec<TravelItem>> {
        wrap("get_all_list", self.repository.get_all_list()).await
    }

    pub async fn get_bookmark_list(&self) -> Resource<Vec<TravelItem>> {
        wrap("get_bookmark_list", self.repository.get_bookmark_list()).await
    }

    /// Sets `isBookmark` for `id`. Callers re-fetch to see the result.
    pub async fn update_data(&self, id: &str, is_bookmark: bool) -> bool {
        run_update("update_bookmark", id, move || {
            self.repository.update_bookmark(id, is_bookmark)
        })
        .await
    }
}
