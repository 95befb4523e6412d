//! High-level database service layer.
//!
//! Repository-agnostic contact operations used by the HTTP handlers. The
//! service layer owns the explicit not-found checks for update and delete so
//! every backend reports a missing contact the same way.
//!
//! # Usage
//!
//! ```no_run
//! use contacts_api::api::ContactFields;
//! use contacts_api::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     services::create_contact(&repo, ContactFields::new("Ada", "Lovelace", "5551234")).await?;
//!     let contacts = services::list_contacts(&repo).await?;
//!     println!("Found {} contacts", contacts.len());
//!
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{ContactRepository, RepositoryError, RepositoryResult};
use crate::api::{Contact, ContactFields, ContactId, DeletedContact};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: ContactRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Contact Operations ====================

/// List every stored contact, ordered by id.
pub async fn list_contacts<R: ContactRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Contact>> {
    let contacts = repo.list_contacts().await?;
    debug!("listed {} contacts", contacts.len());
    Ok(contacts)
}

/// Persist a new contact from exactly the given fields.
pub async fn create_contact<R: ContactRepository + ?Sized>(
    repo: &R,
    fields: ContactFields,
) -> RepositoryResult<Contact> {
    let contact = repo.create_contact(&fields).await?;
    info!("created contact {}", contact.id);
    Ok(contact)
}

/// Overwrite all fields of an existing contact.
///
/// # Returns
/// * `Ok(Contact)` - The contact after the update
/// * `Err(RepositoryError::NotFound)` - If no contact has this id
pub async fn update_contact<R: ContactRepository + ?Sized>(
    repo: &R,
    id: ContactId,
    fields: ContactFields,
) -> RepositoryResult<Contact> {
    ensure_exists(repo, id, "update_contact").await?;

    let contact = repo.update_contact(id, &fields).await?;
    info!("updated contact {}", contact.id);
    Ok(contact)
}

/// Permanently delete an existing contact.
///
/// # Returns
/// * `Ok(DeletedContact)` - Confirmation carrying the deleted id
/// * `Err(RepositoryError::NotFound)` - If no contact has this id
pub async fn delete_contact<R: ContactRepository + ?Sized>(
    repo: &R,
    id: ContactId,
) -> RepositoryResult<DeletedContact> {
    ensure_exists(repo, id, "delete_contact").await?;

    repo.delete_contact(id).await?;
    info!("deleted contact {}", id);
    Ok(DeletedContact { id })
}

async fn ensure_exists<R: ContactRepository + ?Sized>(
    repo: &R,
    id: ContactId,
    operation: &str,
) -> RepositoryResult<()> {
    match repo.get_contact(id).await? {
        Some(_) => Ok(()),
        None => Err(RepositoryError::contact_not_found(operation, id)),
    }
}
