//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::dto::{Contact, ContactFields, ContactId, DeletedContact, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Contact CRUD
// =============================================================================

/// GET /api/contacts
///
/// List all contacts, ordered by id.
pub async fn list_contacts(State(state): State<AppState>) -> HandlerResult<Vec<Contact>> {
    let contacts = db_services::list_contacts(state.repository.as_ref()).await?;
    Ok(Json(contacts))
}

/// POST /api/contacts
///
/// Create a contact from `{firstName, lastName, phone}`.
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> HandlerResult<Contact> {
    let Json(fields) = payload?;
    let contact = db_services::create_contact(state.repository.as_ref(), fields).await?;
    Ok(Json(contact))
}

/// PUT /api/contacts/{id}
///
/// Overwrite all fields of an existing contact.
pub async fn update_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> HandlerResult<Contact> {
    let Path(id) = id?;
    let Json(fields) = payload?;
    let contact =
        db_services::update_contact(state.repository.as_ref(), ContactId::new(id), fields).await?;
    Ok(Json(contact))
}

/// DELETE /api/contacts/{id}
///
/// Permanently delete a contact and echo its id.
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<DeletedContact> {
    let Path(id) = id?;
    let deleted = db_services::delete_contact(state.repository.as_ref(), ContactId::new(id)).await?;
    Ok(Json(deleted))
}
