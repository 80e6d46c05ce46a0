use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use civicstats_core::error::require_non_empty;
use civicstats_core::{CoordinateId, DomainResult, Entity, Record};

/// A city/country location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    #[schema(value_type = String)]
    id: CoordinateId,
    city: String,
    country: String,
}

impl Coordinate {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Entity for Coordinate {
    type Id = CoordinateId;

    fn id(&self) -> &CoordinateId {
        &self.id
    }
}

impl Record for Coordinate {
    type Draft = CoordinateDraft;

    fn fresh_id() -> CoordinateId {
        CoordinateId::generate()
    }

    fn from_draft(id: CoordinateId, draft: CoordinateDraft) -> Self {
        Self {
            id,
            city: draft.city,
            country: draft.country,
        }
    }
}

/// Coordinate without its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateDraft {
    city: String,
    country: String,
}

impl CoordinateDraft {
    /// Both `city` and `country` must be non-empty.
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            city: require_non_empty("city", city.into())?,
            country: require_non_empty("country", country.into())?,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}
