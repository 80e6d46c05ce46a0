//! Storage port for parties.

use std::sync::Arc;

use civicstats_core::{PartyId, StoreResult};

use crate::party::{Party, PartyDraft};

/// Party persistence contract.
///
/// `find_all` returns a snapshot copy; absence is `Ok(None)`, never an error.
pub trait PartyStore: Send + Sync {
    fn find_all(&self) -> StoreResult<Vec<Party>>;
    fn find_by_id(&self, id: &PartyId) -> StoreResult<Option<Party>>;
    /// First party (in insertion order) carrying exactly this name.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Party>>;
    /// Assign a fresh id and store the draft.
    fn save(&self, draft: PartyDraft) -> StoreResult<Party>;
    /// Replace every field except the id.
    fn update(&self, id: &PartyId, draft: PartyDraft) -> StoreResult<Option<Party>>;
    fn delete(&self, id: &PartyId) -> StoreResult<bool>;
}

impl<S> PartyStore for Arc<S>
where
    S: PartyStore + ?Sized,
{
    fn find_all(&self) -> StoreResult<Vec<Party>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &PartyId) -> StoreResult<Option<Party>> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Party>> {
        (**self).find_by_name(name)
    }

    fn save(&self, draft: PartyDraft) -> StoreResult<Party> {
        (**self).save(draft)
    }

    fn update(&self, id: &PartyId, draft: PartyDraft) -> StoreResult<Option<Party>> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: &PartyId) -> StoreResult<bool> {
        (**self).delete(id)
    }
}
