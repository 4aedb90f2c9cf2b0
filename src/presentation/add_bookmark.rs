use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::TravelItem;
use crate::domain::BookmarkUseCase;
use crate::presentation::{Observable, ViewModelScope};

/// The sheet that lists everything and lets the user bookmark an entry.
pub struct AddBookmarkViewModel {
    use_case: Arc<BookmarkUseCase>,
    scope: ViewModelScope,
    all_data_list: Observable<Vec<TravelItem>>,
    update_status: Observable<TravelItem>,
}

impl AddBookmarkViewModel {
    pub fn new(use_case: Arc<BookmarkUseCase>, runtime: Handle) -> Self {
        let vm = Self {
            use_case,
            scope: ViewModelScope::new(runtime),
            all_data_list: Observable::new(),
            update_status: Observable::new(),
        };
        vm.refresh();
        vm
    }

    pub fn refresh(&self) {
        let uc = Arc::clone(&self.use_case);
        self.scope
            .launch_fetch(&self.all_data_list, async move { uc.get_all_list().await });
    }

    /// Sets `isBookmark` for `id`. `update_status` goes Loading → Success;
    /// an empty id leaves it untouched.
    pub fn update_data(&self, id: &str, is_bookmark: bool) {
        let uc = Arc::clone(&self.use_case);
        let owned_id = id.to_string();
        self.scope.launch_update(&self.update_status, id, move |_| async move {
            uc.update_data(&owned_id, is_bookmark).await;
        });
    }

    pub fn all_data_list(&self) -> Observable<Vec<TravelItem>> {
        self.all_data_list.clone()
    }

    pub fn update_status(&self) -> Observable<TravelItem> {
        self.update_status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::Resource;
    use crate::test_support::{FakeTravelRepository, Reply, item};
    use std::time::Duration;
    use tokio::sync::Semaphore;

    fn view_model(repo: &Arc<FakeTravelRepository>) -> AddBookmarkViewModel {
        AddBookmarkViewModel::new(
            Arc::new(BookmarkUseCase::new(repo.clone())),
            Handle::current(),
        )
    }

    #[tokio::test]
    async fn test_all_data_list_success() {
        let repo = Arc::new(FakeTravelRepository::returning(vec![item("1", false)]));
        let vm = view_model(&repo);

        assert_eq!(
            vm.all_data_list().settled().await,
            Some(Resource::success(vec![item("1", false)]))
        );
    }

    #[tokio::test]
    async fn test_all_data_list_null_body() {
        let repo = Arc::new(FakeTravelRepository::with_lists(vec![Reply::NoBody]));
        let vm = view_model(&repo);

        let settled = vm.all_data_list().settled().await.unwrap();
        assert!(settled.is_error());
        assert_eq!(settled.message(), Some("No Data"));
    }

    #[tokio::test]
    async fn test_update_goes_loading_then_success() {
        let gate = Arc::new(Semaphore::new(0));
        let repo = Arc::new(FakeTravelRepository::returning(vec![]).gated_updates(gate.clone()));
        let vm = view_model(&repo);
        let status = vm.update_status();

        vm.update_data("1", true);
        assert_eq!(status.current(), Some(Resource::loading(None)));

        gate.add_permits(1);
        assert_eq!(status.settled().await, Some(Resource::success_empty()));
        assert_eq!(repo.updates(), vec![("1".to_string(), true)]);
    }

    #[tokio::test]
    async fn test_update_with_failing_collaborator_still_succeeds() {
        let repo = Arc::new(FakeTravelRepository::returning(vec![]).update_reply(Reply::Status(500)));
        let vm = view_model(&repo);

        vm.update_data("1", true);
        assert_eq!(vm.update_status().settled().await, Some(Resource::success_empty()));
    }

    #[tokio::test]
    async fn test_empty_id_produces_no_transition() {
        let repo = Arc::new(FakeTravelRepository::returning(vec![]));
        let vm = view_model(&repo);

        vm.update_data("", true);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(vm.update_status().current().is_none());
        assert!(repo.updates().is_empty());
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer_one() {
        let repo = Arc::new(FakeTravelRepository::with_lists(vec![
            Reply::Delayed(
                Duration::from_millis(150),
                Box::new(Reply::Body(vec![item("old", false)])),
            ),
            Reply::Body(vec![item("new", false)]),
        ]));
        let vm = view_model(&repo);
        vm.refresh();

        let fresh = Some(Resource::success(vec![item("new", false)]));
        assert_eq!(vm.all_data_list().settled().await, fresh);

        // Let the slow first request finish; its answer must be dropped
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(vm.all_data_list().current(), fresh);
    }

    #[tokio::test]
    async fn test_dropped_view_model_never_publishes() {
        let repo = Arc::new(FakeTravelRepository::with_lists(vec![Reply::Delayed(
            Duration::from_millis(50),
            Box::new(Reply::Body(vec![item("1", false)])),
        )]));
        let vm = view_model(&repo);
        let stream = vm.all_data_list();

        drop(vm);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(stream.current().is_none());
    }
}
