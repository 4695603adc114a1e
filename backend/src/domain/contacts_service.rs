//! Contact resource service.
//!
//! Implements the [`ContactsCommand`] and [`ContactsQuery`] driving ports on
//! top of an injected [`ContactRepository`]. The service holds no state of its
//! own; every request is a single round trip to the storage collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ContactPersistenceError, ContactRepository, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactChanges, ContactId, Error, NewContact};

/// Message reported when an update or delete targets an unknown contact.
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "User not found";

/// Message reported when storage cannot be reached; the cause is only logged.
const STORAGE_UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

/// Contacts service implementing the driving ports.
#[derive(Clone)]
pub struct ContactsService<R> {
    repository: Arc<R>,
}

impl<R> ContactsService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ContactsService<R>
where
    R: ContactRepository,
{
    /// Map failures that the caller did not provoke.
    fn map_unexpected_error(error: ContactPersistenceError) -> Error {
        match error {
            ContactPersistenceError::Connection { message } => {
                warn!(%message, "contact storage unreachable");
                Error::service_unavailable(STORAGE_UNAVAILABLE_MESSAGE)
            }
            ContactPersistenceError::UniqueViolation { message }
            | ContactPersistenceError::Query { message } => {
                Error::internal(format!("contact repository error: {message}"))
            }
        }
    }

    /// Map insert failures; storage rejections go back to the caller verbatim.
    fn map_create_error(error: ContactPersistenceError) -> Error {
        match error {
            ContactPersistenceError::UniqueViolation { message }
            | ContactPersistenceError::Query { message } => Error::rejected(message),
            connection @ ContactPersistenceError::Connection { .. } => {
                Self::map_unexpected_error(connection)
            }
        }
    }

    fn not_found() -> Error {
        Error::not_found(CONTACT_NOT_FOUND_MESSAGE)
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: ContactRepository,
{
    async fn list(&self) -> Result<Vec<Contact>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_unexpected_error)
    }

    async fn find(&self, id: ContactId) -> Result<Contact, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_unexpected_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: ContactRepository,
{
    async fn create(&self, contact: NewContact) -> Result<Contact, Error> {
        match self.repository.insert(&contact).await {
            Ok(created) => {
                debug!(contact_id = %created.id(), "contact created");
                Ok(created)
            }
            Err(error) => {
                warn!(%error, "contact insert failed");
                Err(Self::map_create_error(error))
            }
        }
    }

    async fn update(&self, id: ContactId, changes: ContactChanges) -> Result<Contact, Error> {
        let updated = self
            .repository
            .update(id, &changes)
            .await
            .map_err(Self::map_unexpected_error)?;
        let contact = updated.ok_or_else(Self::not_found)?;
        debug!(contact_id = %id, "contact updated");
        Ok(contact)
    }

    async fn delete(&self, id: ContactId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_unexpected_error)?;
        if !deleted {
            return Err(Self::not_found());
        }
        debug!(contact_id = %id, "contact deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "contacts_service_tests.rs"]
mod tests;
