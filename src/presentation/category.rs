use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::{Category, TravelItem};
use crate::domain::HomeUseCase;
use crate::presentation::{Observable, ViewModelScope};

/// A single category's listing, e.g. "see all" from a home section.
pub struct CategoryViewModel {
    use_case: Arc<HomeUseCase>,
    category: Category,
    scope: ViewModelScope,
    list: Observable<Vec<TravelItem>>,
}

impl CategoryViewModel {
    pub fn new(use_case: Arc<HomeUseCase>, category: Category, runtime: Handle) -> Self {
        let vm = Self {
            use_case,
            category,
            scope: ViewModelScope::new(runtime),
            list: Observable::new(),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let uc = Arc::clone(&self.use_case);
        let category = self.category;
        self.scope
            .launch_fetch(&self.list, async move { uc.get_category_list(category).await });
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn list(&self) -> Observable<Vec<TravelItem>> {
        self.list.clone()
    }
}
