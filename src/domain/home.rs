use std::sync::Arc;

use crate::api::{Category, TravelItem};
use crate::core::resource::Resource;
use crate::data::TravelRepository;
use crate::domain::wrap;

/// Listings shown on the home screen: everything, plus the three
/// transport-related categories.
pub struct HomeUseCase {
    repository: Arc<dyn TravelRepository>,
}

impl HomeUseCase {
    pub fn new(repository: Arc<dyn TravelRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_list(&self) -> Resource<Vec<TravelItem>> {
        wrap("get_all_list", self.repository.get_all_list()).await
    }

    pub async fn get_category_list(&self, category: Category) -> Resource<Vec<TravelItem>> {
        wrap(
            &format!("get_{}_list", category),
            self.repository.get_list_by_category(category),
        )
        .await
    }

    pub async fn get_flight_list(&self) -> Resource<Vec<TravelItem>> {
        self.get_category_list(Category::Flight).await
    }

    pub async fn get_hotel_list(&self) -> Resource<Vec<TravelItem>> {
        self.get_category_list(Category::Hotel).await
    }

    pub async fn get_transportation_list(&self) -> Resource<Vec<TravelItem>> {
        self.get_category_list(Category::Transportation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeTravelRepository, Reply, item};

    fn use_case(repo: FakeTravelRepository) -> (HomeUseCase, Arc<FakeTravelRepository>) {
        let repo = Arc::new(repo);
        (HomeUseCase::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_all_list_success() {
        let (uc, _) = use_case(FakeTravelRepository::returning(vec![item("1", false)]));
        assert_eq!(uc.get_all_list().await, Resource::success(vec![item("1", false)]));
    }

    #[tokio::test]
    async fn test_all_list_null_body() {
        let (uc, _) = use_case(FakeTravelRepository::with_lists(vec![Reply::NoBody]));
        let r = uc.get_all_list().await;
        assert!(r.is_error());
        assert_eq!(r.message(), Some("No Data"));
    }

    #[tokio::test]
    async fn test_all_list_http_error() {
        let (uc, _) = use_case(FakeTravelRepository::with_lists(vec![Reply::Status(503)]));
        assert_eq!(uc.get_all_list().await, Resource::error("Error", None));
    }

    #[tokio::test]
    async fn test_all_list_fault() {
        let (uc, _) = use_case(FakeTravelRepository::with_lists(vec![Reply::Fault]));
        assert_eq!(uc.get_all_list().await, Resource::error("No Data", None));
    }

    #[tokio::test]
    async fn test_repeat_fetch_is_structurally_equal() {
        let (uc, _) = use_case(FakeTravelRepository::returning(vec![item("1", true)]));
        assert_eq!(uc.get_all_list().await, uc.get_all_list().await);
    }

    #[tokio::test]
    async fn test_category_lists_ask_for_their_category() {
        let (uc, repo) = use_case(FakeTravelRepository::returning(vec![]));
        uc.get_flight_list().await;
        uc.get_hotel_list().await;
        uc.get_transportation_list().await;
        assert_eq!(repo.list_requests(), vec!["flight", "hotel", "transportation"]);
    }
}
