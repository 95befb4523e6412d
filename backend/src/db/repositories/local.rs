//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`ContactRepository`]
//! suitable for unit testing and local development. Contacts live in a
//! `BTreeMap` keyed by id, so listing is naturally ordered by primary key.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{Contact, ContactFields, ContactId};
use crate::db::repository::{ContactRepository, RepositoryError, RepositoryResult};

/// In-memory local repository.
///
/// Ids are assigned from a monotonically increasing counter starting at 1
/// and are never reused, even after a delete.
///
/// # Example
/// ```
/// use contacts_api::api::ContactFields;
/// use contacts_api::db::repositories::LocalRepository;
/// use contacts_api::db::repository::ContactRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = LocalRepository::new();
///     let contact = repo
///         .create_contact(&ContactFields::new("Ada", "Lovelace", "5551234"))
///         .await
///         .unwrap();
///     assert_eq!(contact.id.value(), 1);
/// }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    contacts: BTreeMap<ContactId, Contact>,

    // ID counter
    next_contact_id: ContactId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            contacts: BTreeMap::new(),
            next_contact_id: ContactId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every contact operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository and reset the id counter.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of contacts stored.
    pub fn contact_count(&self) -> usize {
        self.data.read().contacts.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_contacts(&self) -> RepositoryResult<Vec<Contact>> {
        self.check_health()
            .map_err(|e| e.with_operation("list_contacts"))?;

        Ok(self.data.read().contacts.values().cloned().collect())
    }

    async fn get_contact(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        self.check_health()
            .map_err(|e| e.with_operation("get_contact"))?;

        Ok(self.data.read().contacts.get(&id).cloned())
    }

    async fn create_contact(&self, fields: &ContactFields) -> RepositoryResult<Contact> {
        self.check_health()
            .map_err(|e| e.with_operation("create_contact"))?;

        let mut data = self.data.write();
        let id = data.next_contact_id;
        data.next_contact_id = ContactId(id.0 + 1);

        let contact = Contact::from_fields(id, fields.clone());
        data.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        fields: &ContactFields,
    ) -> RepositoryResult<Contact> {
        self.check_health()
            .map_err(|e| e.with_operation("update_contact"))?;

        let mut data = self.data.write();
        let contact = data
            .contacts
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::contact_not_found("update_contact", id))?;
        contact.apply(fields.clone());
        Ok(contact.clone())
    }

    async fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        self.check_health()
            .map_err(|e| e.with_operation("delete_contact"))?;

        match self.data.write().contacts.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::contact_not_found("delete_contact", id)),
        }
    }
}
