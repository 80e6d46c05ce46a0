use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use civicstats_coordinates::CoordinateDraft;
use civicstats_core::DomainResult;
use civicstats_parties::PartyDraft;
use civicstats_users::UserDraft;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are optional so a missing field reaches draft validation and comes
// back as a 400 with the field name, not as a deserialization failure.

#[derive(Debug, Deserialize, ToSchema)]
pub struct PartyRequest {
    pub name: Option<String>,
}

impl PartyRequest {
    pub fn into_draft(self) -> DomainResult<PartyDraft> {
        PartyDraft::new(self.name.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CoordinateRequest {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl CoordinateRequest {
    pub fn into_draft(self) -> DomainResult<CoordinateDraft> {
        CoordinateDraft::new(
            self.city.unwrap_or_default(),
            self.country.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub coordinate_id: Option<String>,
    pub party_id: Option<String>,
}

impl UserRequest {
    pub fn into_draft(self) -> DomainResult<UserDraft> {
        UserDraft::new(
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
            self.coordinate_id.unwrap_or_default(),
            self.party_id,
        )
    }
}

// -------------------------
// Query strings
// -------------------------
//
// An empty value (`?city=`) counts as not given.

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CoordinateQuery {
    /// Exact city match; takes precedence over `country`.
    pub city: Option<String>,
    /// Exact country match.
    pub country: Option<String>,
}

impl CoordinateQuery {
    pub fn city(&self) -> Option<&str> {
        present(self.city.as_deref())
    }

    pub fn country(&self) -> Option<&str> {
        present(self.country.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PartyQuery {
    /// Return the first party with this exact name.
    pub name: Option<String>,
}

impl PartyQuery {
    pub fn name(&self) -> Option<&str> {
        present(self.name.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Return the first user with this exact email.
    pub email: Option<String>,
}

impl UserQuery {
    pub fn email(&self) -> Option<&str> {
        present(self.email.as_deref())
    }
}
