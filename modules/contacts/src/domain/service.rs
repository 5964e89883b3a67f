use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Contact, ContactPatch, ContactQuery, NewContact, Page};
use crate::domain::error::DomainError;
use crate::domain::query;
use crate::domain::repo::{ContactsRepository, StoreError};
use crate::domain::validation::{validate_contact_patch, validate_new_contact};

/// Domain service with the business rules for contact management.
/// Owns no state; the repository is the single injected dependency.
#[derive(Clone)]
pub struct ContactService {
    repo: Arc<dyn ContactsRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self { repo }
    }

    /// Run a list query against a snapshot of the store.
    #[instrument(name = "contacts.service.list", skip(self, query))]
    pub async fn list(&self, query: &ContactQuery) -> Result<Page<Contact>, DomainError> {
        let records = self.repo.list().await.map_err(storage_error)?;
        let page = query::run(records, query);
        debug!(
            total = page.total,
            returned = page.items.len(),
            "listed contacts"
        );
        Ok(page)
    }

    #[instrument(name = "contacts.service.get", skip(self), fields(contact_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Contact, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::contact_not_found(id))
    }

    #[instrument(name = "contacts.service.create", skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: NewContact) -> Result<Contact, DomainError> {
        validate_new_contact(&new).map_err(DomainError::validation)?;

        let now = Utc::now();
        let contact = Contact::from_new(new, Uuid::new_v4(), now);

        // The store checks email uniqueness inside the same critical section
        // as the insert, so two concurrent creates cannot both win.
        match self.repo.insert(contact.clone()).await {
            Ok(()) => {
                info!(contact_id = %contact.id, "created contact");
                Ok(contact)
            }
            Err(StoreError::DuplicateEmail { email }) => {
                Err(DomainError::email_already_exists(email))
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    #[instrument(name = "contacts.service.update", skip(self, patch), fields(contact_id = %id))]
    pub async fn update(&self, id: Uuid, patch: ContactPatch) -> Result<Contact, DomainError> {
        validate_contact_patch(&patch).map_err(DomainError::validation)?;

        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::contact_not_found(id))?;

        let mut next = current.apply_patch(patch);
        next.updated_at = Utc::now();

        match self.repo.update(next.clone()).await {
            Ok(()) => {
                info!("updated contact");
                Ok(next)
            }
            Err(StoreError::DuplicateEmail { email }) => {
                Err(DomainError::email_already_exists(email))
            }
            Err(StoreError::Missing { id }) => Err(DomainError::contact_not_found(id)),
            Err(e) => Err(storage_error(e)),
        }
    }

    #[instrument(name = "contacts.service.delete", skip(self), fields(contact_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = self.repo.delete(id).await.map_err(storage_error)?;
        if !deleted {
            return Err(DomainError::contact_not_found(id));
        }
        info!("deleted contact");
        Ok(())
    }
}

fn storage_error(e: StoreError) -> DomainError {
    DomainError::storage(e.to_string())
}
