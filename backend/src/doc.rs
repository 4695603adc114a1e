//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact and health endpoints along with the
//! request, response, and domain schema wrappers. The document backs Swagger
//! UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::contacts::{
    ContactsResponse, CreateContactRequest, MessageResponse, UpdateContactRequest,
};
use crate::inbound::http::schemas::ContactSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts backend API",
        description = "CRUD interface for a contact list, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactSchema,
        ContactsResponse,
        CreateContactRequest,
        UpdateContactRequest,
        MessageResponse
    )),
    tags(
        (name = "contacts", description = "Contact list operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/contacts", "get")]
    #[case("/create_contact", "post")]
    #[case("/update_contact/{id}", "patch")]
    #[case("/delete_contact/{id}", "delete")]
    #[case("/health/ready", "get")]
    #[case("/health/live", "get")]
    fn document_lists_endpoint(#[case] path: &str, #[case] method: &str) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path registered");
        let operation = match method {
            "get" => item.get.as_ref(),
            "post" => item.post.as_ref(),
            "patch" => item.patch.as_ref(),
            "delete" => item.delete.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "{path} should expose {method}");
    }

    #[rstest]
    fn contact_schema_is_registered_under_wire_name() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Contact"));
        assert!(schemas.contains_key("MessageResponse"));
    }
}
