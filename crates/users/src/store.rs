//! Storage port for users.

use std::sync::Arc;

use civicstats_core::{StoreResult, UserId};

use crate::user::{User, UserDraft};

/// User persistence contract.
pub trait UserStore: Send + Sync {
    /// Full snapshot; no index on `coordinate_id` is assumed.
    fn find_all(&self) -> StoreResult<Vec<User>>;
    fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>>;
    /// First user (in insertion order) with exactly this email.
    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    fn save(&self, draft: UserDraft) -> StoreResult<User>;
    fn update(&self, id: &UserId, draft: UserDraft) -> StoreResult<Option<User>>;
    fn delete(&self, id: &UserId) -> StoreResult<bool>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn find_all(&self) -> StoreResult<Vec<User>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        (**self).find_by_id(id)
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        (**self).find_by_email(email)
    }

    fn save(&self, draft: UserDraft) -> StoreResult<User> {
        (**self).save(draft)
    }

    fn update(&self, id: &UserId, draft: UserDraft) -> StoreResult<Option<User>> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: &UserId) -> StoreResult<bool> {
        (**self).delete(id)
    }
}
