use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use civicstats_coordinates::{Coordinate, CoordinateDraft, CoordinateStore};
use civicstats_core::{
    CoordinateId, Entity, PartyId, Record, StoreError, StoreResult, UserId,
};
use civicstats_parties::{Party, PartyDraft, PartyStore};
use civicstats_users::{User, UserDraft, UserStore};

pub type InMemoryCoordinateStore = InMemoryStore<Coordinate>;
pub type InMemoryPartyStore = InMemoryStore<Party>;
pub type InMemoryUserStore = InMemoryStore<User>;

/// In-memory, insertion-ordered record store for tests/dev.
///
/// Every instance owns its records. Reads hand out clones, never references
/// into the collection.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    inner: RwLock<Vec<E>>,
}

impl<E> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStore<E>
where
    E: Record + Clone,
{
    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<E>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("in-memory store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("in-memory store lock poisoned"))
    }

    pub fn all(&self) -> StoreResult<Vec<E>> {
        Ok(self.read()?.clone())
    }

    pub fn get(&self, id: &E::Id) -> StoreResult<Option<E>> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    pub fn filter(&self, pred: impl Fn(&E) -> bool) -> StoreResult<Vec<E>> {
        Ok(self.read()?.iter().filter(|e| pred(e)).cloned().collect())
    }

    pub fn first(&self, pred: impl Fn(&E) -> bool) -> StoreResult<Option<E>> {
        Ok(self.read()?.iter().find(|e| pred(e)).cloned())
    }

    /// Mint an id and append the new record.
    pub fn insert(&self, draft: E::Draft) -> StoreResult<E> {
        let record = E::from_draft(E::fresh_id(), draft);
        self.write()?.push(record.clone());
        Ok(record)
    }

    /// Swap in a rebuilt record at the same position; `None` if `id` is absent.
    pub fn replace(&self, id: &E::Id, draft: E::Draft) -> StoreResult<Option<E>> {
        let mut records = self.write()?;
        let Some(slot) = records.iter_mut().find(|e| e.id() == id) else {
            return Ok(None);
        };
        *slot = E::from_draft(id.clone(), draft);
        Ok(Some(slot.clone()))
    }

    pub fn remove(&self, id: &E::Id) -> StoreResult<bool> {
        let mut records = self.write()?;
        let Some(idx) = records.iter().position(|e| e.id() == id) else {
            return Ok(false);
        };
        records.remove(idx);
        Ok(true)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl CoordinateStore for InMemoryStore<Coordinate> {
    fn find_all(&self) -> StoreResult<Vec<Coordinate>> {
        self.all()
    }

    fn find_by_id(&self, id: &CoordinateId) -> StoreResult<Option<Coordinate>> {
        self.get(id)
    }

    fn find_by_city(&self, city: &str) -> StoreResult<Vec<Coordinate>> {
        self.filter(|c| c.city() == city)
    }

    fn find_by_country(&self, country: &str) -> StoreResult<Vec<Coordinate>> {
        self.filter(|c| c.country() == country)
    }

    fn save(&self, draft: CoordinateDraft) -> StoreResult<Coordinate> {
        self.insert(draft)
    }

    fn update(&self, id: &CoordinateId, draft: CoordinateDraft) -> StoreResult<Option<Coordinate>> {
        self.replace(id, draft)
    }

    fn delete(&self, id: &CoordinateId) -> StoreResult<bool> {
        self.remove(id)
    }
}

impl PartyStore for InMemoryStore<Party> {
    fn find_all(&self) -> StoreResult<Vec<Party>> {
        self.all()
    }

    fn find_by_id(&self, id: &PartyId) -> StoreResult<Option<Party>> {
        self.get(id)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Party>> {
        self.first(|p| p.name() == name)
    }

    fn save(&self, draft: PartyDraft) -> StoreResult<Party> {
        self.insert(draft)
    }

    fn update(&self, id: &PartyId, draft: PartyDraft) -> StoreResult<Option<Party>> {
        self.replace(id, draft)
    }

    fn delete(&self, id: &PartyId) -> StoreResult<bool> {
        self.remove(id)
    }
}

impl UserStore for InMemoryStore<User> {
    fn find_all(&self) -> StoreResult<Vec<User>> {
        self.all()
    }

    fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        self.get(id)
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.first(|u| u.email() == email)
    }

    fn save(&self, draft: UserDraft) -> StoreResult<User> {
        self.insert(draft)
    }

    fn update(&self, id: &UserId, draft: UserDraft) -> StoreResult<Option<User>> {
        self.replace(id, draft)
    }

    fn delete(&self, id: &UserId) -> StoreResult<bool> {
        self.remove(id)
    }
}
