use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geographic filter: which coordinate field is compared, and against what.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GeoFilter {
    City(String),
    Country(String),
}

impl GeoFilter {
    pub fn city(city: impl Into<String>) -> Self {
        Self::City(city.into())
    }

    pub fn country(country: impl Into<String>) -> Self {
        Self::Country(country.into())
    }

    /// The filter value, echoed back in every aggregate record.
    pub fn value(&self) -> &str {
        match self {
            Self::City(v) | Self::Country(v) => v,
        }
    }

    /// Name of the compared field (`"city"` or `"country"`).
    pub fn field(&self) -> &'static str {
        match self {
            Self::City(_) => "city",
            Self::Country(_) => "country",
        }
    }
}

/// One (party, geography, count) tuple.
///
/// Serializes as `{"party_name", "city" | "country", "member_count"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyAggregate {
    pub party_name: String,
    #[serde(flatten)]
    pub scope: GeoFilter,
    pub member_count: u64,
}

/// Result of one aggregation pass plus diagnostics that never alter `records`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub filter: GeoFilter,
    /// One record per distinct party name, in first-encounter order.
    pub records: Vec<PartyAggregate>,
    /// Users in scope whose `party_id` did not resolve to a stored party.
    pub dangling_party_refs: u64,
}

impl Tally {
    pub fn empty(filter: GeoFilter) -> Self {
        Self {
            filter,
            records: Vec::new(),
            dangling_party_refs: 0,
        }
    }

    /// Sum of all member counts.
    pub fn total_members(&self) -> u64 {
        self.records.iter().map(|r| r.member_count).sum()
    }
}
