//! Domain ports: the traits inbound and outbound adapters plug into.
//!
//! - [`ContactsCommand`] and [`ContactsQuery`] are driving ports consumed by
//!   the HTTP adapter.
//! - [`ContactRepository`] is the driven port implemented by storage adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactPersistenceError, ContactRepository};
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_command::ContactsCommand;
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use contacts_query::ContactsQuery;
