use std::sync::Arc;

use civicstats_coordinates::CoordinateStore;
use civicstats_infra::services::{CoordinateService, PartyService, UserService};
use civicstats_infra::store::{InMemoryCoordinateStore, InMemoryPartyStore, InMemoryUserStore};
use civicstats_parties::PartyStore;
use civicstats_statistics::StatisticsEngine;
use civicstats_users::UserStore;

pub type CoordinateStoreRef = Arc<dyn CoordinateStore>;
pub type PartyStoreRef = Arc<dyn PartyStore>;
pub type UserStoreRef = Arc<dyn UserStore>;

/// Everything the handlers need. The CRUD services and the statistics engine
/// share the same store instances, so statistics always see the latest writes.
#[derive(Clone)]
pub struct AppServices {
    pub coordinates: CoordinateService<CoordinateStoreRef>,
    pub parties: PartyService<PartyStoreRef>,
    pub users: UserService<UserStoreRef>,
    pub statistics: StatisticsEngine<CoordinateStoreRef, UserStoreRef, PartyStoreRef>,
}

impl AppServices {
    pub fn new(
        coordinates: CoordinateStoreRef,
        parties: PartyStoreRef,
        users: UserStoreRef,
    ) -> Self {
        Self {
            statistics: StatisticsEngine::new(coordinates.clone(), users.clone(), parties.clone()),
            coordinates: CoordinateService::new(coordinates),
            parties: PartyService::new(parties),
            users: UserService::new(users),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCoordinateStore::new()),
            Arc::new(InMemoryPartyStore::new()),
            Arc::new(InMemoryUserStore::new()),
        )
    }
}
