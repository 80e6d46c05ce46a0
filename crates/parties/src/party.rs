use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use civicstats_core::error::require_non_empty;
use civicstats_core::{DomainResult, Entity, PartyId, Record};

/// A named political affiliation.
///
/// Names are not unique: two records may share one, and statistics merge
/// their counts under that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Party {
    #[schema(value_type = String)]
    id: PartyId,
    name: String,
}

impl Party {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Party {
    type Id = PartyId;

    fn id(&self) -> &PartyId {
        &self.id
    }
}

impl Record for Party {
    type Draft = PartyDraft;

    fn fresh_id() -> PartyId {
        PartyId::generate()
    }

    fn from_draft(id: PartyId, draft: PartyDraft) -> Self {
        Self { id, name: draft.name }
    }
}

/// Party without its id: input to `save` and `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyDraft {
    name: String,
}

impl PartyDraft {
    /// Validate and build a draft. `name` must be non-empty.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: require_non_empty("name", name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
