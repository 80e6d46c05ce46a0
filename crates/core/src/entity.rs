//! Entity traits: identity + construction from an id-less draft.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// An entity that a store can create from a draft (the entity without its id).
///
/// Stores own id assignment; callers only ever hand over drafts.
pub trait Record: Entity + Sized {
    type Draft;

    /// Mint a fresh, unique identifier.
    fn fresh_id() -> Self::Id;

    /// Assemble the stored record. `update` reuses this with the existing id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}
