/*!
Interoperation between the client (user) and server.

(Not the application and the data; that's covered by `store`.)
*/
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

pub mod api;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// A JSON `{ "message": ... }` body with the given status.
pub fn respond_message(code: StatusCode, msg: &str) -> Response {
    (
        code,
        Json(json!({ "message": msg }))
    ).into_response()
}

pub fn respond_store_error(e: StoreError) -> Response {
    log::trace!("respond_store_error( {:?} ) called.", &e);

    let code = match &e {
        StoreError::Unauthorized => StatusCode::UNAUTHORIZED,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::Exhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    respond_message(code, &e.to_string())
}

/// Middleware function to carry an `x-request-id` header, if the client
/// sent one, from the request over to the response.
pub async fn request_identity(
    req: Request<Body>,
    next: Next<Body>
) -> Response {
    let id_header = req.headers().get(REQUEST_ID_HEADER).cloned();

    let mut response = next.run(req).await;
    if let Some(id) = id_header {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }
    response
}
