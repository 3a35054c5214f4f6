use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::common::ApiResponse;

/// Malformed or mistyped JSON bodies are a caller error, never a 500.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!("Invalid JSON body for {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_with_message("Invalid request body", err.to_string()));
    InternalError::from_response(err, response).into()
}

/// A non-numeric match id is a bad request rather than a missing route.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    tracing::warn!("Invalid path parameter for {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_with_message("Invalid match id", err.to_string()));
    InternalError::from_response(err, response).into()
}
