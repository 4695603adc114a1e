//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = Contact, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Given name, at most 80 characters.
    #[schema(example = "Ada", max_length = 80)]
    first_name: String,
    /// Family name, at most 80 characters.
    #[schema(example = "Lovelace", max_length = 80)]
    last_name: String,
    /// Unique email address, at most 120 characters.
    #[schema(example = "ada@example.com", max_length = 120)]
    email: String,
}
