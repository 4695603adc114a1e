//! Driven port for contact storage.
//!
//! The [`ContactRepository`] trait is the storage collaborator of the
//! contacts service: it lists, fetches, inserts, updates, and deletes contact
//! rows, committing each mutation atomically. Adapters map their native
//! failures into [`ContactPersistenceError`], keeping constraint violations
//! distinct from connectivity and other query faults.

use async_trait::async_trait;

use crate::domain::{Contact, ContactChanges, ContactId, NewContact};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactPersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Connection failure reported by the pool or driver.
            message: String,
        } => "contact repository connection failed: {message}",
        /// A uniqueness constraint rejected the write.
        UniqueViolation {
            /// Database wording of the violated constraint.
            message: String,
        } => "{message}",
        /// Query or mutation failed during execution.
        Query {
            /// Database wording of the failure.
            message: String,
        } => "{message}",
    }
}

/// Storage collaborator for contacts.
///
/// Every mutating method either commits fully or leaves storage unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Return every stored contact in storage iteration order.
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError>;

    /// Fetch a contact by identifier.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Insert a contact and return it with its assigned identifier.
    async fn insert(&self, contact: &NewContact) -> Result<Contact, ContactPersistenceError>;

    /// Apply `changes` to the contact with `id`.
    ///
    /// Returns `None` without writing anything when no such contact exists.
    async fn update(
        &self,
        id: ContactId,
        changes: &ContactChanges,
    ) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Remove the contact with `id`, returning `false` when it does not exist.
    async fn delete(&self, id: ContactId) -> Result<bool, ContactPersistenceError>;
}
