//! Extractor configuration for the contact endpoints.
//!
//! Actix answers extractor failures with plain-text bodies by default. These
//! handlers route them through the domain [`Error`] so clients always receive
//! `{"message": ...}`:
//!
//! - an unreadable JSON body is a 400 carrying the parser's description;
//! - a path id that is not an integer cannot name a stored contact, so it is
//!   reported exactly like an unknown id.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{CONTACT_NOT_FOUND_MESSAGE, Error};

fn json_error(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(%error, path = req.path(), "rejected request body");
    Error::invalid_request(error.to_string()).into()
}

fn path_error(error: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(%error, path = req.path(), "rejected path parameter");
    Error::not_found(CONTACT_NOT_FOUND_MESSAGE).into()
}

/// JSON body configuration answering parse failures with 400 `{"message"}`.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path configuration answering malformed ids with 404 `User not found`.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, patch, test as actix_test};
    use serde_json::Value;

    #[derive(serde::Deserialize)]
    struct Body {
        #[expect(dead_code, reason = "only deserialisation is exercised")]
        name: String,
    }

    #[patch("/items/{id}")]
    async fn echo(_id: web::Path<i32>, _body: web::Json<Body>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn call(req: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(path_config())
                .service(echo),
        )
        .await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: Value = actix_test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn malformed_json_is_bad_request_with_message() {
        let req = actix_test::TestRequest::patch()
            .uri("/items/1")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");

        let (status, body) = call(req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().is_some_and(|msg| !msg.is_empty()));
    }

    #[actix_web::test]
    async fn non_integer_id_is_not_found() {
        let req = actix_test::TestRequest::patch()
            .uri("/items/abc")
            .set_json(serde_json::json!({"name": "x"}));

        let (status, body) = call(req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }
}
