//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Contact, ContactChanges, ContactId, NewContact};

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self::new(
            ContactId::new(row.id),
            row.first_name,
            row.last_name,
            row.email,
        )
    }
}

/// Insertable struct for creating contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a NewContact> for NewContactRow<'a> {
    fn from(contact: &'a NewContact) -> Self {
        Self {
            first_name: contact.first_name(),
            last_name: contact.last_name(),
            email: contact.email(),
        }
    }
}

/// Changeset struct for partial contact updates.
///
/// `None` fields are skipped by Diesel, leaving the stored column untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a ContactChanges> for ContactChangeset<'a> {
    fn from(changes: &'a ContactChanges) -> Self {
        Self {
            first_name: changes.first_name.as_deref(),
            last_name: changes.last_name.as_deref(),
            email: changes.email.as_deref(),
        }
    }
}
