//! Method-routed handler for the links endpoint.
//!
//! The whole resource lives on one path; the verb picks the operation:
//!
//! - `GET`  - list all links
//! - `POST` - create a link from a URL-encoded form body
//! - `PUT` with `?id` and an empty body - serve the inline edit form
//! - `PUT` with `?id` and a form body - apply an update
//!
//! Anything else gets `405 Method Not Allowed`. Delete is intentionally not
//! wired up.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::link_form::LinkForm;
use crate::api::negotiation::{self, LinkPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters of the links endpoint.
#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    /// Target link id; required for `PUT`, ignored elsewhere.
    pub id: Option<String>,
}

/// Dispatches one request on `/links` to exactly one store operation.
///
/// # Endpoint
///
/// `GET | POST | PUT /links`
///
/// # Content negotiation
///
/// Success bodies go through [`negotiation::respond`]: HTML fragment when
/// the request carries `HX-Request: true`, JSON otherwise. The sole
/// exception is the edit-form variant of `PUT`, which always returns HTML.
///
/// # Errors
///
/// - 400 for malformed bodies, empty fields, bad ids, and unknown ids
/// - 405 for methods the endpoint does not implement
/// - 500 for store and rendering failures
pub async fn links_handler(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<LinkQuery>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    match method {
        Method::GET => {
            let links = state.link_service.list_links().await?;
            negotiation::respond(&headers, LinkPayload::List(links))
        }
        Method::POST => {
            let form = LinkForm::from_body(&body)?;
            let link = state.link_service.create_link(form.into()).await?;
            negotiation::respond(&headers, LinkPayload::Single(link))
        }
        Method::PUT => {
            let id = parse_id(query.id.as_deref())?;

            // An empty body asks for the edit form; a form body applies it.
            if body.is_empty() {
                let link = state.link_service.get_link(id).await?;
                negotiation::render_edit_form(&link)
            } else {
                let form = LinkForm::from_body(&body)?;
                let link = state.link_service.update_link(id, form.into()).await?;
                negotiation::respond(&headers, LinkPayload::Single(link))
            }
        }
        _ => Ok((
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, POST, PUT")],
        )
            .into_response()),
    }
}

/// Parses the `id` query parameter into a store id.
fn parse_id(raw: Option<&str>) -> Result<i64, AppError> {
    raw.and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::bad_request("Invalid link ID", json!({ "id": raw })))
}
