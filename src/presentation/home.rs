use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;

use crate::api::TravelItem;
use crate::domain::HomeUseCase;
use crate::presentation::{Observable, ViewModelScope};

pub struct HomeViewModel {
    use_case: Arc<HomeUseCase>,
    scope: ViewModelScope,
    all_list: Observable<Vec<TravelItem>>,
    flight_list: Observable<Vec<TravelItem>>,
    hotel_list: Observable<Vec<TravelItem>>,
    transportation_list: Observable<Vec<TravelItem>>,
}

impl HomeViewModel {
    /// Starts loading every list right away.
    pub fn new(use_case: Arc<HomeUseCase>, runtime: Handle) -> Self {
        let vm = Self {
            use_case,
            scope: ViewModelScope::new(runtime),
            all_list: Observable::new(),
            flight_list: Observable::new(),
            hotel_list: Observable::new(),
            transportation_list: Observable::new(),
        };
        vm.load();
        vm
    }

    /// Re-fetches all four lists. Each stream is replaced independently.
    pub fn load(&self) {
        info!("Loading home lists");

        let uc = Arc::clone(&self.use_case);
        self.scope
            .launch_fetch(&self.all_list, async move { uc.get_all_list().await });

        let uc = Arc::clone(&self.use_case);
        self.scope
            .launch_fetch(&self.flight_list, async move { uc.get_flight_list().await });

        let uc = Arc::clone(&self.use_case);
        self.scope
            .launch_fetch(&self.hotel_list, async move { uc.get_hotel_list().await });

        let uc = Arc::clone(&self.use_case);
        self.scope.launch_fetch(&self.transportation_list, async move {
            uc.get_transportation_list().await
        });
    }

    pub fn all_list(&self) -> Observable<Vec<TravelItem>> {
        self.all_list.clone()
    }

    pub fn flight_list(&self) -> Observable<Vec<TravelItem>> {
        self.flight_list.clone()
    }

    pub fn hotel_list(&self) -> Observable<Vec<TravelItem>> {
        self.hotel_list.clone()
    }

    pub fn transportation_list(&self) -> Observable<Vec<TravelItem>> {
        self.transportation_list.clone()
    }
}
