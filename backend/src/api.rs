//! Public API surface for the contacts backend.
//!
//! This file consolidates the domain types exchanged over the HTTP API and
//! with the repository layer. All types derive Serialize/Deserialize for
//! JSON serialization; field names follow the camelCase wire format.

use serde::{Deserialize, Serialize};

/// Contact identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ContactId(pub i64);

impl ContactId {
    pub fn new(value: i64) -> Self {
        ContactId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContactId> for i64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        ContactId(value)
    }
}

/// A persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier, immutable once created
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Contact {
    /// Build a contact from an identifier and its writable fields.
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone: fields.phone,
        }
    }

    /// Overwrite every writable field. There is no partial update.
    pub fn apply(&mut self, fields: ContactFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.phone = fields.phone;
    }
}

/// Writable contact fields, used as the body of create and update requests.
///
/// All three fields must be present and be strings. Empty strings are
/// accepted as-is. Only JSON objects are accepted; a positional array is
/// rejected even when it has three strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "serde_json::Map<String, serde_json::Value>"
)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactFieldsObject {
    first_name: String,
    last_name: String,
    phone: String,
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for ContactFields {
    type Error = serde_json::Error;

    fn try_from(object: serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let fields: ContactFieldsObject = serde_json::from_value(object.into())?;
        Ok(Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone: fields.phone,
        })
    }
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }
}

/// Confirmation body returned after a contact is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedContact {
    pub id: ContactId,
}
