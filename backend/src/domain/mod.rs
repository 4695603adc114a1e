//! Domain primitives, services, and ports.
//!
//! Purpose: Define the contact entity, its validation rules, and the services
//! that drive persistence through ports. Keep types free of transport and
//! storage concerns; adapters translate at the edges.
//!
//! Public surface:
//! - Contact, NewContact, ContactChanges, ContactId: the contact model.
//! - ContactsService: implements the driving ports over a repository.
//! - Error, ErrorCode: transport-agnostic failure payload.

pub mod contact;
mod contacts_service;
pub mod error;
pub mod ports;

pub use self::contact::{
    Contact, ContactChanges, ContactId, ContactValidationError, EMAIL_MAX, NAME_MAX, NewContact,
};
pub use self::contacts_service::{CONTACT_NOT_FOUND_MESSAGE, ContactsService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
