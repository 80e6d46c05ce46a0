//! Strongly-typed identifiers used across the domain.
//!
//! Ids are opaque strings. Freshly minted ones are UUIDv7, but any string is
//! accepted so foreign keys may point at records that no longer exist.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a coordinate (city/country location).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateId(String);

/// Identifier of a political party.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

/// Identifier of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            /// Mint a new identifier (UUIDv7, time-ordered).
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(CoordinateId);
impl_string_newtype!(PartyId);
impl_string_newtype!(UserId);
