//! Driving port for reading contacts.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Inbound contract for contact reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return every stored contact.
    async fn list(&self) -> Result<Vec<Contact>, Error>;

    /// Fetch one contact, failing with `NotFound` when `id` is unknown.
    async fn find(&self, id: ContactId) -> Result<Contact, Error>;
}
