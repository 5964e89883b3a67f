use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::contract::model::Contact;
use crate::domain::repo::{ContactsRepository, StoreError};

/// In-memory contact store keyed by id.
///
/// Reads share the lock; writes take it exclusively, so the uniqueness
/// checks and the mutation they guard happen in one critical section.
#[derive(Debug, Default)]
pub struct InMemoryContactsRepository {
    contacts: RwLock<HashMap<Uuid, Contact>>,
}

impl InMemoryContactsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}

#[async_trait]
impl ContactsRepository for InMemoryContactsRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, StoreError> {
        Ok(self.contacts.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.contacts.read().values().cloned().collect())
    }

    async fn insert(&self, contact: Contact) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write();
        if contacts.contains_key(&contact.id) {
            return Err(StoreError::DuplicateId { id: contact.id });
        }
        if contacts.values().any(|c| c.email == contact.email) {
            return Err(StoreError::DuplicateEmail {
                email: contact.email,
            });
        }
        contacts.insert(contact.id, contact);
        Ok(())
    }

    async fn update(&self, contact: Contact) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write();
        if !contacts.contains_key(&contact.id) {
            return Err(StoreError::Missing { id: contact.id });
        }
        if contacts
            .values()
            .any(|c| c.id != contact.id && c.email == contact.email)
        {
            return Err(StoreError::DuplicateEmail {
                email: contact.email,
            });
        }
        contacts.insert(contact.id, contact);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.contacts.write().remove(&id).is_some())
    }
}
