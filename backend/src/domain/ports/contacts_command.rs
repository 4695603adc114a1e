//! Driving port for contact mutations.
//!
//! HTTP handlers call [`ContactsCommand`] to create, update, and delete
//! contacts without knowing which storage collaborator sits behind it.

use async_trait::async_trait;

use crate::domain::{Contact, ContactChanges, ContactId, Error, NewContact};

/// Inbound contract for contact mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Persist a new contact.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::ErrorCode::Rejected`] when storage refuses the write
    ///   (for example a duplicate email), carrying the storage description.
    /// - [`crate::domain::ErrorCode::ServiceUnavailable`] when storage is
    ///   unreachable.
    async fn create(&self, contact: NewContact) -> Result<Contact, Error>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::NotFound`] when `id` matches no contact.
    async fn update(&self, id: ContactId, changes: ContactChanges) -> Result<Contact, Error>;

    /// Delete a contact.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::NotFound`] when `id` matches no contact.
    async fn delete(&self, id: ContactId) -> Result<(), Error>;
}
