//! Builder for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use backend::domain::ContactsService;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryContactRepository;
use backend::outbound::persistence::{DbPool, DieselContactRepository};

/// Wire the contacts service to PostgreSQL when a pool is configured,
/// otherwise to the in-memory repository.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => {
            info!("contacts stored in PostgreSQL");
            let service = Arc::new(ContactsService::new(Arc::new(
                DieselContactRepository::new(pool.clone()),
            )));
            HttpState::new(service.clone(), service)
        }
        None => {
            warn!("no database configured; contacts are kept in memory");
            let service = Arc::new(ContactsService::new(Arc::new(
                InMemoryContactRepository::new(),
            )));
            HttpState::new(service.clone(), service)
        }
    };
    web::Data::new(state)
}
