//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Every mutation runs in its own transaction. Updates lock the target row
//! with `SELECT ... FOR UPDATE` before writing so the returned record is the
//! one this request produced.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactChanges, ContactId, NewContact};

use super::models::{ContactChangeset, ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the contact repository port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactPersistenceError {
    ContactPersistenceError::connection(error.message())
}

/// Map Diesel errors to port errors, keeping the database's own wording so
/// rejected writes can be reported verbatim.
fn map_diesel_error(error: DieselError) -> ContactPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            ContactPersistenceError::unique_violation(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            ContactPersistenceError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => ContactPersistenceError::query(info.message()),
        other => ContactPersistenceError::query(other.to_string()),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ContactRow> = contacts::table
            .select(ContactRow::as_select())
            .order_by(contacts::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .find(id.get())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Contact::from))
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewContactRow::from(contact);
        let row = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(contacts::table)
                        .values(&new_row)
                        .returning(ContactRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: ContactId,
        changes: &ContactChanges,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = ContactChangeset::from(changes);
        let nothing_to_write = changes.is_empty();
        let row = conn
            .transaction(|conn| {
                async move {
                    let existing: Option<ContactRow> = contacts::table
                        .find(id.get())
                        .select(ContactRow::as_select())
                        .for_update()
                        .get_result(conn)
                        .await
                        .optional()?;
                    let Some(existing) = existing else {
                        return Ok(None);
                    };
                    // Diesel rejects an UPDATE with an empty SET list.
                    if nothing_to_write {
                        return Ok(Some(existing));
                    }
                    diesel::update(contacts::table.find(id.get()))
                        .set(&changeset)
                        .returning(ContactRow::as_returning())
                        .get_result(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(row.map(Contact::from))
    }

    async fn delete(&self, id: ContactId) -> Result<bool, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(contacts::table.find(id.get()))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
