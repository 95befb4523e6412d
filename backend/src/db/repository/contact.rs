//! Contact repository trait for CRUD operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Contact, ContactFields, ContactId};

/// Repository trait for contact database operations.
///
/// Every method is attempted exactly once; retry policy, if any, belongs to
/// the connection layer of an implementation.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Contact Operations ====================

    /// List every contact, ordered by ascending id.
    async fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;

    /// Retrieve a contact by primary key.
    ///
    /// # Returns
    /// * `Ok(Some(Contact))` - The contact
    /// * `Ok(None)` - If no contact has this id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_contact(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;

    /// Insert a new contact. The store assigns the id.
    ///
    /// # Arguments
    /// * `fields` - The values stored verbatim
    ///
    /// # Returns
    /// * `Ok(Contact)` - The stored contact including its assigned id
    /// * `Err(RepositoryError::ValidationError)` - On constraint violation
    async fn create_contact(&self, fields: &ContactFields) -> RepositoryResult<Contact>;

    /// Overwrite all writable fields of an existing contact.
    ///
    /// # Returns
    /// * `Ok(Contact)` - The contact as stored after the update
    /// * `Err(RepositoryError::NotFound)` - If the contact doesn't exist
    async fn update_contact(
        &self,
        id: ContactId,
        fields: &ContactFields,
    ) -> RepositoryResult<Contact>;

    /// Permanently remove a contact.
    ///
    /// # Returns
    /// * `Ok(())` - Exactly one row was removed
    /// * `Err(RepositoryError::NotFound)` - If the contact doesn't exist
    async fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
}
