//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update, and delete use-cases.
    pub contacts: Arc<dyn ContactsCommand>,
    /// Read use-cases.
    pub contacts_query: Arc<dyn ContactsQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ContactsService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = Arc::new(ContactsService::new(Arc::new(InMemoryContactRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.contacts_query.clone();
    /// ```
    pub fn new(contacts: Arc<dyn ContactsCommand>, contacts_query: Arc<dyn ContactsQuery>) -> Self {
        Self {
            contacts,
            contacts_query,
        }
    }
}
