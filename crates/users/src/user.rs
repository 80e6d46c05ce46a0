use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use civicstats_core::error::require_non_empty;
use civicstats_core::{CoordinateId, DomainResult, Entity, PartyId, Record, UserId};

/// A person record.
///
/// `password` is opaque and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = String)]
    id: UserId,
    email: String,
    password: String,
    #[schema(value_type = String)]
    coordinate_id: CoordinateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    party_id: Option<PartyId>,
}

impl User {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn coordinate_id(&self) -> &CoordinateId {
        &self.coordinate_id
    }

    pub fn party_id(&self) -> Option<&PartyId> {
        self.party_id.as_ref()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Record for User {
    type Draft = UserDraft;

    fn fresh_id() -> UserId {
        UserId::generate()
    }

    fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            password: draft.password,
            coordinate_id: draft.coordinate_id,
            party_id: draft.party_id,
        }
    }
}

/// User without its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    email: String,
    password: String,
    coordinate_id: CoordinateId,
    party_id: Option<PartyId>,
}

impl UserDraft {
    /// `email`, `password` and `coordinate_id` must be non-empty.
    ///
    /// An empty `party_id` counts as no party.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        coordinate_id: impl Into<String>,
        party_id: Option<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            email: require_non_empty("email", email.into())?,
            password: require_non_empty("password", password.into())?,
            coordinate_id: CoordinateId::new(require_non_empty(
                "coordinate_id",
                coordinate_id.into(),
            )?),
            party_id: party_id.filter(|p| !p.is_empty()).map(PartyId::new),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn coordinate_id(&self) -> &CoordinateId {
        &self.coordinate_id
    }

    pub fn party_id(&self) -> Option<&PartyId> {
        self.party_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicstats_core::DomainError;

    fn draft(party: Option<&str>) -> UserDraft {
        UserDraft::new("john@example.com", "pass", "c1", party.map(str::to_string)).unwrap()
    }

    #[test]
    fn draft_requires_email_password_and_coordinate() {
        for (email, password, coord, field) in [
            ("", "pass", "c1", "email"),
            ("a@b.c", "", "c1", "password"),
            ("a@b.c", "pass", "", "coordinate_id"),
        ] {
            assert_eq!(
                UserDraft::new(email, password, coord, None).unwrap_err(),
                DomainError::Validation(format!("{field} required"))
            );
        }
    }

    #[test]
    fn empty_party_id_means_no_party() {
        assert_eq!(draft(Some("")).party_id(), None);
        assert_eq!(draft(Some("p1")).party_id(), Some(&PartyId::from("p1")));
    }

    #[test]
    fn absent_party_is_omitted_from_json() {
        let user = User::from_draft(UserId::from("u1"), draft(None));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u1",
                "email": "john@example.com",
                "password": "pass",
                "coordinate_id": "c1",
            })
        );
    }
}
