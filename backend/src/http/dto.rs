//! Data Transfer Objects for the HTTP API.
//!
//! Contact payloads are the domain types from [`crate::api`], re-exported
//! here so handlers only import from one place.

use serde::{Deserialize, Serialize};

pub use crate::api::{Contact, ContactFields, ContactId, DeletedContact};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
