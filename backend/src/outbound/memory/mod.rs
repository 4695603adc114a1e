//! In-process storage adapter.
//!
//! [`InMemoryContactRepository`] keeps contacts in a mutex-guarded ordered
//! map. It mirrors the constraints of the `contacts` table so the service
//! behaves the same with or without a database: identifiers come from a
//! monotonic counter and are never reused, `email` is unique, and string
//! columns reject values longer than their `VARCHAR` limits.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactChanges, ContactId, EMAIL_MAX, NAME_MAX, NewContact};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<ContactId, Contact>,
    last_id: i32,
}

impl Store {
    fn next_id(&mut self) -> Result<ContactId, ContactPersistenceError> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            ContactPersistenceError::query(
                "nextval: reached maximum value of sequence \"contacts_id_seq\"",
            )
        })?;
        self.last_id = next;
        Ok(ContactId::new(next))
    }

    fn email_taken(&self, email: &str, except: Option<ContactId>) -> bool {
        self.rows
            .values()
            .any(|row| row.email() == email && Some(row.id()) != except)
    }
}

/// Mutex-guarded contact store with `contacts` table semantics.
///
/// # Examples
/// ```
/// use backend::domain::ports::ContactRepository;
/// use backend::domain::NewContact;
/// use backend::outbound::memory::InMemoryContactRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryContactRepository::new();
/// let input = NewContact::try_new(Some("A".into()), Some("B".into()), Some("a@x.com".into()))
///     .expect("valid contact");
/// let created = repo.insert(&input).await.expect("insert succeeds");
/// assert_eq!(created.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    store: Mutex<Store>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ContactPersistenceError> {
        self.store
            .lock()
            .map_err(|_| ContactPersistenceError::connection("contact store lock poisoned"))
    }
}

fn check_length(value: &str, max: usize) -> Result<(), ContactPersistenceError> {
    if value.chars().count() > max {
        return Err(ContactPersistenceError::query(format!(
            "value too long for type character varying({max})"
        )));
    }
    Ok(())
}

fn check_columns(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(), ContactPersistenceError> {
    check_length(first_name, NAME_MAX)?;
    check_length(last_name, NAME_MAX)?;
    check_length(email, EMAIL_MAX)
}

fn duplicate_email() -> ContactPersistenceError {
    ContactPersistenceError::unique_violation(
        "duplicate key value violates unique constraint \"contacts_email_key\"",
    )
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactPersistenceError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, ContactPersistenceError> {
        check_columns(contact.first_name(), contact.last_name(), contact.email())?;
        let mut store = self.lock()?;
        if store.email_taken(contact.email(), None) {
            return Err(duplicate_email());
        }
        let id = store.next_id()?;
        let created = contact.clone().into_contact(id);
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: ContactId,
        changes: &ContactChanges,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut store = self.lock()?;
        let Some(existing) = store.rows.get(&id).cloned() else {
            return Ok(None);
        };
        let updated = existing.with_changes(changes);
        check_columns(updated.first_name(), updated.last_name(), updated.email())?;
        if store.email_taken(updated.email(), Some(id)) {
            return Err(duplicate_email());
        }
        store.rows.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: ContactId) -> Result<bool, ContactPersistenceError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn new_contact(first: &str, last: &str, email: &str) -> NewContact {
        NewContact::try_new(
            Some(first.to_owned()),
            Some(last.to_owned()),
            Some(email.to_owned()),
        )
        .expect("valid contact")
    }

    #[fixture]
    fn repo() -> InMemoryContactRepository {
        InMemoryContactRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_increasing_ids(repo: InMemoryContactRepository) {
        let first = repo
            .insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("first insert");
        let second = repo
            .insert(&new_contact("C", "D", "c@x.com"))
            .await
            .expect("second insert");

        assert_eq!(first.id(), ContactId::new(1));
        assert_eq!(second.id(), ContactId::new(2));
        assert_eq!(repo.list().await.expect("list"), vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryContactRepository) {
        let first = repo
            .insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("insert");
        assert!(repo.delete(first.id()).await.expect("delete"));

        let second = repo
            .insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("reinsert");

        assert_eq!(second.id(), ContactId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_rejected(repo: InMemoryContactRepository) {
        repo.insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("insert");

        let err = repo
            .insert(&new_contact("C", "D", "a@x.com"))
            .await
            .expect_err("duplicate email");

        assert!(matches!(err, ContactPersistenceError::UniqueViolation { .. }));
        assert_eq!(repo.list().await.expect("list").len(), 1);
    }

    #[rstest]
    #[case("x".repeat(NAME_MAX + 1), "B".to_owned(), "a@x.com".to_owned())]
    #[case("A".to_owned(), "y".repeat(NAME_MAX + 1), "a@x.com".to_owned())]
    #[case("A".to_owned(), "B".to_owned(), format!("{}@x.com", "z".repeat(EMAIL_MAX)))]
    #[tokio::test]
    async fn over_long_values_are_rejected(
        repo: InMemoryContactRepository,
        #[case] first: String,
        #[case] last: String,
        #[case] email: String,
    ) {
        let err = repo
            .insert(&new_contact(&first, &last, &email))
            .await
            .expect_err("value too long");

        assert!(matches!(err, ContactPersistenceError::Query { .. }));
        assert!(err.to_string().starts_with("value too long"));
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_applies_only_provided_fields(repo: InMemoryContactRepository) {
        let created = repo
            .insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("insert");
        let changes = ContactChanges {
            last_name: Some("C".to_owned()),
            ..ContactChanges::default()
        };

        let updated = repo
            .update(created.id(), &changes)
            .await
            .expect("update")
            .expect("contact exists");

        assert_eq!(updated, Contact::new(created.id(), "A", "C", "a@x.com"));
        assert_eq!(
            repo.find_by_id(created.id()).await.expect("find"),
            Some(updated)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_taken_email_without_writing(repo: InMemoryContactRepository) {
        repo.insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("insert a");
        let other = repo
            .insert(&new_contact("C", "D", "c@x.com"))
            .await
            .expect("insert c");
        let changes = ContactChanges {
            first_name: Some("E".to_owned()),
            email: Some("a@x.com".to_owned()),
            ..ContactChanges::default()
        };

        let err = repo
            .update(other.id(), &changes)
            .await
            .expect_err("email taken");

        assert!(matches!(err, ContactPersistenceError::UniqueViolation { .. }));
        assert_eq!(
            repo.find_by_id(other.id()).await.expect("find"),
            Some(other)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_missing_rows(repo: InMemoryContactRepository) {
        let seeded = repo
            .insert(&new_contact("A", "B", "a@x.com"))
            .await
            .expect("insert");
        let missing = ContactId::new(9999);
        let changes = ContactChanges {
            last_name: Some("Z".to_owned()),
            ..ContactChanges::default()
        };

        assert_eq!(repo.update(missing, &changes).await.expect("update"), None);
        assert!(!repo.delete(missing).await.expect("delete"));
        assert_eq!(repo.list().await.expect("list"), vec![seeded]);
    }
}
