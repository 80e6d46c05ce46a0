use civicstats_core::{Entity, StoreResult, UserId};
use civicstats_users::{User, UserDraft, UserStore};

/// User CRUD service.
///
/// References to coordinates and parties are not checked here.
#[derive(Debug, Clone)]
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<User>> {
        self.store.find_all()
    }

    pub fn get(&self, id: &UserId) -> StoreResult<Option<User>> {
        self.store.find_by_id(id)
    }

    pub fn get_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.store.find_by_email(email)
    }

    pub fn create(&self, draft: UserDraft) -> StoreResult<User> {
        let user = self.store.save(draft)?;
        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    pub fn update(&self, id: &UserId, draft: UserDraft) -> StoreResult<Option<User>> {
        let updated = self.store.update(id, draft)?;
        if updated.is_some() {
            tracing::info!(user_id = %id, "user updated");
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &UserId) -> StoreResult<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(user_id = %id, "user deleted");
        }
        Ok(deleted)
    }
}
