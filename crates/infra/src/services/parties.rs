use civicstats_core::{Entity, PartyId, StoreResult};
use civicstats_parties::{Party, PartyDraft, PartyStore};

/// Party CRUD service.
#[derive(Debug, Clone)]
pub struct PartyService<S: PartyStore> {
    store: S,
}

impl<S: PartyStore> PartyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Party>> {
        self.store.find_all()
    }

    pub fn get(&self, id: &PartyId) -> StoreResult<Option<Party>> {
        self.store.find_by_id(id)
    }

    pub fn get_by_name(&self, name: &str) -> StoreResult<Option<Party>> {
        self.store.find_by_name(name)
    }

    pub fn create(&self, draft: PartyDraft) -> StoreResult<Party> {
        let party = self.store.save(draft)?;
        tracing::info!(party_id = %party.id(), name = party.name(), "party created");
        Ok(party)
    }

    pub fn update(&self, id: &PartyId, draft: PartyDraft) -> StoreResult<Option<Party>> {
        let updated = self.store.update(id, draft)?;
        if updated.is_some() {
            tracing::info!(party_id = %id, "party updated");
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &PartyId) -> StoreResult<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(party_id = %id, "party deleted");
        }
        Ok(deleted)
    }
}
