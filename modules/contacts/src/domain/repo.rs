use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::Contact;

/// Failures the store can report. Duplicate email is its own variant so the
/// service can surface it as a conflict instead of a generic fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("a record with id {id} already exists")]
    DuplicateId { id: Uuid },

    #[error("email '{email}' is already taken")]
    DuplicateEmail { email: String },

    #[error("no record with id {id}")]
    Missing { id: Uuid },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Holds no query logic; ordering and paging are the query engine's job.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Load a contact by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, StoreError>;

    /// Snapshot of every stored contact, in unspecified order.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Insert a fully-formed contact. Fails if the id or the email is
    /// already present; the email check and the insert are atomic.
    async fn insert(&self, contact: Contact) -> Result<(), StoreError>;

    /// Replace the record with `contact.id`. Fails if the id is absent or
    /// the email is held by a different record.
    async fn update(&self, contact: Contact) -> Result<(), StoreError>;

    /// Delete by id. Returns true if a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
