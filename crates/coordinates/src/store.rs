//! Storage port for coordinates.

use std::sync::Arc;

use civicstats_core::{CoordinateId, StoreResult};

use crate::coordinate::{Coordinate, CoordinateDraft};

/// Coordinate persistence contract.
///
/// City and country lookups are exact, case-sensitive matches and return every
/// matching record.
pub trait CoordinateStore: Send + Sync {
    fn find_all(&self) -> StoreResult<Vec<Coordinate>>;
    fn find_by_id(&self, id: &CoordinateId) -> StoreResult<Option<Coordinate>>;
    fn find_by_city(&self, city: &str) -> StoreResult<Vec<Coordinate>>;
    fn find_by_country(&self, country: &str) -> StoreResult<Vec<Coordinate>>;
    fn save(&self, draft: CoordinateDraft) -> StoreResult<Coordinate>;
    fn update(&self, id: &CoordinateId, draft: CoordinateDraft) -> StoreResult<Option<Coordinate>>;
    fn delete(&self, id: &CoordinateId) -> StoreResult<bool>;
}

impl<S> CoordinateStore for Arc<S>
where
    S: CoordinateStore + ?Sized,
{
    fn find_all(&self) -> StoreResult<Vec<Coordinate>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &CoordinateId) -> StoreResult<Option<Coordinate>> {
        (**self).find_by_id(id)
    }

    fn find_by_city(&self, city: &str) -> StoreResult<Vec<Coordinate>> {
        (**self).find_by_city(city)
    }

    fn find_by_country(&self, country: &str) -> StoreResult<Vec<Coordinate>> {
        (**self).find_by_country(country)
    }

    fn save(&self, draft: CoordinateDraft) -> StoreResult<Coordinate> {
        (**self).save(draft)
    }

    fn update(&self, id: &CoordinateId, draft: CoordinateDraft) -> StoreResult<Option<Coordinate>> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: &CoordinateId) -> StoreResult<bool> {
        (**self).delete(id)
    }
}
