//! Typed payload models for the PetFriends API.
//!
//! All state lives on the remote service; these types only describe the
//! request/response payloads the scenarios assert on. Decoding is on demand
//! via [`ApiOutcome::decode`](crate::client::ApiOutcome::decode), so error
//! bodies that don't match a model never fail a call.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque bearer token issued after successful login.
///
/// Passed on all subsequent calls via the `auth_key` request header.
/// Lifetime is one test session; it is never renewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKey {
    pub key: String,
}

/// A single pet record owned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Service-assigned identifier.
    pub id: String,
    pub name: String,
    pub animal_type: String,
    /// The live service echoes age sometimes as a string, sometimes as a
    /// number.
    #[serde(deserialize_with = "age_as_string")]
    pub age: String,
    /// Photo URL or data reference; empty when no photo was uploaded.
    #[serde(default)]
    pub pet_photo: String,
}

/// A filtered listing of pets, one per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Whether the listing contains a pet with the given id.
    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == pet_id)
    }
}

/// Query parameter selecting which pets the listing call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFilter {
    /// Only pets owned by the authenticated account (`filter=my_pets`).
    MyPets,
    /// Every pet on the service (empty filter value).
    All,
}

impl PetFilter {
    /// The wire value of the `filter` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::MyPets => "my_pets",
            Self::All => "",
        }
    }
}

fn age_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "age must be a string or number, got: {other}"
        ))),
    }
}
