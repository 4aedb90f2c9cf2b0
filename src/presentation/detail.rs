use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::TravelItem;
use crate::domain::DetailUseCase;
use crate::presentation::{Observable, ViewModelScope};

pub struct DetailViewModel {
    use_case: Arc<DetailUseCase>,
    scope: ViewModelScope,
    update_status: Observable<TravelItem>,
}

impl DetailViewModel {
    pub fn new(use_case: Arc<DetailUseCase>, runtime: Handle) -> Self {
        Self {
            use_case,
            scope: ViewModelScope::new(runtime),
            update_status: Observable::new(),
        }
    }

    pub fn update_data(&self, id: &str, is_bookmark: bool) {
        let uc = Arc::clone(&self.use_case);
        let owned_id = id.to_string();
        self.scope.launch_update(&self.update_status, id, move |_| async move {
            uc.update_data(&owned_id, is_bookmark).await;
        });
    }

    pub fn update_status(&self) -> Observable<TravelItem> {
        self.update_status.clone()
    }
}
