use civicstats_coordinates::{Coordinate, CoordinateDraft, CoordinateStore};
use civicstats_core::{CoordinateId, Entity, StoreResult};

/// Coordinate CRUD service.
#[derive(Debug, Clone)]
pub struct CoordinateService<S: CoordinateStore> {
    store: S,
}

impl<S: CoordinateStore> CoordinateService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Coordinate>> {
        self.store.find_all()
    }

    pub fn list_by_city(&self, city: &str) -> StoreResult<Vec<Coordinate>> {
        self.store.find_by_city(city)
    }

    pub fn list_by_country(&self, country: &str) -> StoreResult<Vec<Coordinate>> {
        self.store.find_by_country(country)
    }

    pub fn get(&self, id: &CoordinateId) -> StoreResult<Option<Coordinate>> {
        self.store.find_by_id(id)
    }

    pub fn create(&self, draft: CoordinateDraft) -> StoreResult<Coordinate> {
        let coordinate = self.store.save(draft)?;
        tracing::info!(
            coordinate_id = %coordinate.id(),
            city = coordinate.city(),
            country = coordinate.country(),
            "coordinate created"
        );
        Ok(coordinate)
    }

    pub fn update(
        &self,
        id: &CoordinateId,
        draft: CoordinateDraft,
    ) -> StoreResult<Option<Coordinate>> {
        let updated = self.store.update(id, draft)?;
        if updated.is_some() {
            tracing::info!(coordinate_id = %id, "coordinate updated");
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &CoordinateId) -> StoreResult<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(coordinate_id = %id, "coordinate deleted");
        }
        Ok(deleted)
    }
}
