use crate::errors::ServerError;
use crate::responses::json_response;
use astra::{Body, Response};
use http::StatusCode;
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Internal(_) => 500,
    };

    if status == 500 {
        tracing::error!(error = %err, "request failed");
    }

    json_response(status, &json!({ "error": err.to_string() }))
        .unwrap_or_else(|_| plain_internal_error())
}

/// Plain-text 500, used when even the JSON error response can't be built.
pub fn plain_internal_error() -> Response {
    let mut resp = Response::new(Body::from(String::from("Internal Server Error")));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}
