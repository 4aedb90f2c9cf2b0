use std::sync::Arc;

use crate::data::TravelRepository;
use crate::domain::run_update;

/// The detail screen only toggles the bookmark of the item it shows.
pub struct DetailUseCase {
    repository: Arc<dyn TravelRepository>,
}

impl DetailUseCase {
    pub fn new(repository: Arc<dyn TravelRepository>) -> Self {
        Self { repository }
    }

    pub async fn update_data(&self, id: &str, is_bookmark: bool) -> bool {
        run_update("update_bookmark", id, move || {
            self.repository.update_bookmark(id, is_bookmark)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeTravelRepository, Reply};

    #[tokio::test]
    async fn test_update_reaches_repository_once() {
        let repo = Arc::new(FakeTravelRepository::returning(vec![]));
        let uc = DetailUseCase::new(repo.clone());

        uc.update_data("42", false).await;
        assert_eq!(repo.updates(), vec![("42".to_string(), false)]);
    }

    #[tokio::test]
    async fn test_failed_update_is_not_retried() {
        let repo = Arc::new(FakeTravelRepository::returning(vec![]).update_reply(Reply::Status(500)));
        let uc = DetailUseCase::new(repo.clone());

        assert!(uc.update_data("42", true).await);
        assert_eq!(repo.updates().len(), 1);
    }
}
