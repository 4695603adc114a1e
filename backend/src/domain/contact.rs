//! Contact data model.
//!
//! A contact is created from a [`NewContact`], whose constructor enforces the
//! required-field rule, and modified through [`ContactChanges`], where every
//! field is optional and an absent field keeps its stored value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum stored length of a first or last name, in characters.
pub const NAME_MAX: usize = 80;
/// Maximum stored length of an email address, in characters.
pub const EMAIL_MAX: usize = 120;

/// Validation errors returned by [`NewContact::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required field was absent or empty.
    MissingField {
        /// Wire name of the offending field.
        field: &'static str,
    },
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} must be present and non-empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Storage-assigned contact identifier.
///
/// # Examples
/// ```
/// use backend::domain::ContactId;
///
/// let id = ContactId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ContactId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted contact record.
///
/// Serialises as `{"id", "firstName", "lastName", "email"}`.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
/// - `email` is unique across all stored contacts (storage constraint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    email: String,
}

impl Contact {
    /// Assemble a contact from stored values.
    pub fn new(
        id: ContactId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Return a copy with every provided field overwritten.
    ///
    /// Values are applied as given; empty strings are not rejected here.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Contact, ContactChanges, ContactId};
    ///
    /// let contact = Contact::new(ContactId::new(1), "A", "B", "a@x.com");
    /// let changes = ContactChanges {
    ///     last_name: Some("C".to_owned()),
    ///     ..ContactChanges::default()
    /// };
    /// let updated = contact.with_changes(&changes);
    /// assert_eq!(updated.first_name(), "A");
    /// assert_eq!(updated.last_name(), "C");
    /// ```
    #[must_use]
    pub fn with_changes(mut self, changes: &ContactChanges) -> Self {
        if let Some(first_name) = &changes.first_name {
            self.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name.clone_from(last_name);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        self
    }
}

/// Validated input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email: String,
}

impl NewContact {
    /// Build a new contact, rejecting absent or empty fields.
    ///
    /// Fields are checked in `firstName`, `lastName`, `email` order and the
    /// first failure is reported. Whitespace-only values are accepted.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{ContactValidationError, NewContact};
    ///
    /// let ok = NewContact::try_new(Some("Ada".into()), Some("Lovelace".into()), Some("ada@x.com".into()));
    /// assert!(ok.is_ok());
    ///
    /// let err = NewContact::try_new(Some("Ada".into()), Some(String::new()), None);
    /// assert_eq!(err, Err(ContactValidationError::MissingField { field: "lastName" }));
    /// ```
    pub fn try_new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self {
            first_name: required(first_name, "firstName")?,
            last_name: required(last_name, "lastName")?,
            email: required(email, "email")?,
        })
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attach the identifier assigned by storage.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ContactValidationError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ContactValidationError::MissingField { field })
}

/// Partial update for an existing contact.
///
/// `None` means the field was absent from the request and keeps its stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
}

impl ContactChanges {
    /// Return `true` when no field is provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for contact construction and partial updates.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn some(value: &str) -> Option<String> {
        Some(value.to_owned())
    }

    #[rstest]
    #[case(None, some("B"), some("a@x.com"), "firstName")]
    #[case(some(""), some("B"), some("a@x.com"), "firstName")]
    #[case(some("A"), None, some("a@x.com"), "lastName")]
    #[case(some("A"), some(""), some("a@x.com"), "lastName")]
    #[case(some("A"), some("B"), None, "email")]
    #[case(some("A"), some("B"), some(""), "email")]
    #[case(None, None, None, "firstName")]
    fn try_new_rejects_missing_or_empty_fields(
        #[case] first_name: Option<String>,
        #[case] last_name: Option<String>,
        #[case] email: Option<String>,
        #[case] field: &'static str,
    ) {
        let err = NewContact::try_new(first_name, last_name, email).expect_err("invalid input");
        assert_eq!(err, ContactValidationError::MissingField { field });
    }

    #[rstest]
    fn try_new_accepts_whitespace_values() {
        let contact = NewContact::try_new(some(" "), some("B"), some("a@x.com"))
            .expect("whitespace is not treated as empty");
        assert_eq!(contact.first_name(), " ");
    }

    #[rstest]
    fn into_contact_keeps_fields() {
        let contact = NewContact::try_new(some("A"), some("B"), some("a@x.com"))
            .expect("valid contact")
            .into_contact(ContactId::new(4));
        assert_eq!(contact, Contact::new(ContactId::new(4), "A", "B", "a@x.com"));
    }

    #[rstest]
    #[case(ContactChanges::default(), ("A", "B", "a@x.com"))]
    #[case(ContactChanges { last_name: some("C"), ..ContactChanges::default() }, ("A", "C", "a@x.com"))]
    #[case(ContactChanges { first_name: some(""), email: some("b@x.com"), ..ContactChanges::default() }, ("", "B", "b@x.com"))]
    fn with_changes_overwrites_only_provided_fields(
        #[case] changes: ContactChanges,
        #[case] expected: (&str, &str, &str),
    ) {
        let contact = Contact::new(ContactId::new(1), "A", "B", "a@x.com");
        let updated = contact.with_changes(&changes);
        assert_eq!(updated.id(), ContactId::new(1));
        assert_eq!(
            (updated.first_name(), updated.last_name(), updated.email()),
            expected
        );
    }

    #[rstest]
    fn changes_report_emptiness() {
        assert!(ContactChanges::default().is_empty());
        assert!(!ContactChanges { email: some("x"), ..ContactChanges::default() }.is_empty());
    }

    #[rstest]
    fn contact_serialises_with_camel_case_keys() {
        let contact = Contact::new(ContactId::new(1), "Ada", "Lovelace", "ada@x.com");
        let value = serde_json::to_value(&contact).expect("serialise contact");
        assert_eq!(
            value,
            json!({"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x.com"})
        );
    }
}
