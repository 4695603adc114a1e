//! Contacts API handlers.
//!
//! ```text
//! GET /contacts
//! POST /create_contact {"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}
//! PATCH /update_contact/{id} {"lastName":"Byron"}
//! DELETE /delete_contact/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Contact, ContactChanges, ContactId, ContactValidationError, Error, NewContact,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extractors::{json_config, path_config};
use crate::inbound::http::schemas::ContactSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when a create request omits a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "You must include a first name, last name and email";
/// Message returned after a successful create.
pub const CREATED_MESSAGE: &str = "User created!";
/// Message returned after a successful update.
pub const UPDATED_MESSAGE: &str = "User updated.";
/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "User deleted!";

/// Request body for `POST /create_contact`.
///
/// Every field is required; absence and empty strings are rejected together.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateContactRequest {
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    /// Unique email address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl TryFrom<CreateContactRequest> for NewContact {
    type Error = ContactValidationError;

    fn try_from(value: CreateContactRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.first_name, value.last_name, value.email)
    }
}

/// Request body for `PATCH /update_contact/{id}`.
///
/// Omitted and `null` fields keep their stored value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateContactRequest {
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    #[schema(example = "Byron")]
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
}

impl From<UpdateContactRequest> for ContactChanges {
    fn from(value: UpdateContactRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

/// Body of `GET /contacts`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactsResponse {
    /// Every stored contact, ordered by id.
    #[schema(value_type = Vec<ContactSchema>)]
    pub contacts: Vec<Contact>,
}

/// Single-message body used by mutations and error responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    #[schema(example = "User created!")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

fn map_validation_error(_err: ContactValidationError) -> Error {
    Error::invalid_request(MISSING_FIELDS_MESSAGE)
}

/// Register the contact endpoints and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::contacts;
///
/// let _app = App::new().configure(contacts::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(list_contacts)
        .service(create_contact)
        .service(update_contact)
        .service(delete_contact);
}

/// List every stored contact.
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "All contacts", body = ContactsResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
        (status = 503, description = "Storage unavailable", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<web::Json<ContactsResponse>> {
    let contacts = state.contacts_query.list().await?;
    Ok(web::Json(ContactsResponse { contacts }))
}

/// Create a contact from a complete set of fields.
#[utoipa::path(
    post,
    path = "/create_contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = MessageResponse),
        (
            status = 400,
            description = "Missing field, malformed body, or write rejected by storage",
            body = MessageResponse
        ),
        (status = 503, description = "Storage unavailable", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/create_contact")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let contact = NewContact::try_from(payload.into_inner()).map_err(map_validation_error)?;
    state.contacts.create(contact).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(CREATED_MESSAGE)))
}

/// Overwrite the provided fields of an existing contact.
///
/// An unknown id is reported as not found even when the body cannot be
/// parsed; the parse failure is only returned for existing contacts.
#[utoipa::path(
    patch,
    path = "/update_contact/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = MessageResponse),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[patch("/update_contact/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Result<web::Json<UpdateContactRequest>, actix_web::Error>,
) -> Result<web::Json<MessageResponse>, actix_web::Error> {
    let id = ContactId::new(path.into_inner());
    let request = match payload {
        Ok(body) => body.into_inner(),
        Err(parse_error) => {
            state.contacts_query.find(id).await?;
            return Err(parse_error);
        }
    };
    state
        .contacts
        .update(id, ContactChanges::from(request))
        .await?;
    Ok(web::Json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// Remove a contact.
#[utoipa::path(
    delete,
    path = "/delete_contact/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/delete_contact/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.contacts.delete(ContactId::new(path.into_inner())).await?;
    Ok(web::Json(MessageResponse::new(DELETED_MESSAGE)))
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
