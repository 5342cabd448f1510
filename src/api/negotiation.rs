//! Response content negotiation between HTML fragments and JSON.
//!
//! An HTMX client marks its requests with `HX-Request: true`; successful
//! responses to such requests carry an HTML fragment meant for partial-page
//! replacement. Every other caller gets JSON. The choice is a pure function
//! of the payload tag and the header signal — handlers decide *what* to
//! return, this module decides *how*.

use askama::Template;
use axum::Json;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::api::dto::link::LinkResponse;
use crate::domain::entities::Link;
use crate::error::AppError;

/// Header HTMX sets on every request it issues itself.
const HX_REQUEST: &str = "hx-request";

/// Result value of a dispatched operation, tagged by shape.
///
/// The dispatcher decides the tag; negotiation never inspects anything
/// beyond it.
#[derive(Debug)]
pub enum LinkPayload {
    Single(Link),
    List(Vec<Link>),
}

/// Fragment for one link entry.
#[derive(Template)]
#[template(path = "links/item.html")]
struct LinkFragment<'a> {
    link: &'a Link,
}

/// Fragment for the full link list.
#[derive(Template)]
#[template(path = "links/list.html")]
struct LinkListFragment<'a> {
    links: &'a [Link],
}

/// Inline edit form for one link, pre-filled with its stored fields.
#[derive(Template)]
#[template(path = "links/edit.html")]
struct EditFormFragment<'a> {
    link: &'a Link,
}

/// Returns true when the caller asked for a partial HTML update.
fn wants_fragment(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Serializes a payload according to the caller's negotiation signal.
///
/// Fragment-requesting callers get `text/html`; everyone else gets
/// `application/json`. Both paths answer 200 on success.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if template rendering fails.
pub fn respond(headers: &HeaderMap, payload: LinkPayload) -> Result<Response, AppError> {
    if wants_fragment(headers) {
        let html = match &payload {
            LinkPayload::Single(link) => LinkFragment { link }.render(),
            LinkPayload::List(links) => LinkListFragment {
                links: links.as_slice(),
            }
            .render(),
        }
        .map_err(render_error)?;

        return Ok(Html(html).into_response());
    }

    let response = match payload {
        LinkPayload::Single(link) => Json(LinkResponse::from(link)).into_response(),
        LinkPayload::List(links) => {
            let body: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();
            Json(body).into_response()
        }
    };

    Ok(response)
}

/// Renders the inline edit form for a link.
///
/// This path is HTML-only regardless of the negotiation signal: it exists
/// solely to hand an HTMX client a form it can swap in place.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if template rendering fails.
pub fn render_edit_form(link: &Link) -> Result<Response, AppError> {
    let html = EditFormFragment { link }.render().map_err(render_error)?;
    Ok(Html(html).into_response())
}

fn render_error(e: askama::Error) -> AppError {
    AppError::internal(
        "Template rendering failed",
        json!({ "reason": e.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::CONTENT_TYPE;

    fn sample_link(id: i64) -> Link {
        Link::new(
            id,
            format!("https://example.com/{id}"),
            format!("commentary {id}"),
        )
    }

    fn hx_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        headers
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> String {
        response
            .headers()
            .get(CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_wants_fragment_signal() {
        assert!(wants_fragment(&hx_headers()));
        assert!(!wants_fragment(&HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert(HX_REQUEST, HeaderValue::from_static("false"));
        assert!(!wants_fragment(&headers));
    }

    #[tokio::test]
    async fn test_single_without_signal_is_json() {
        let response = respond(&HeaderMap::new(), LinkPayload::Single(sample_link(1))).unwrap();

        assert!(content_type(&response).starts_with("application/json"));

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["url"], "https://example.com/1");
        assert_eq!(json["commentary"], "commentary 1");
    }

    #[tokio::test]
    async fn test_list_without_signal_is_json_array() {
        let response = respond(
            &HeaderMap::new(),
            LinkPayload::List(vec![sample_link(1), sample_link(2)]),
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_single_with_signal_is_html_fragment() {
        let response = respond(&hx_headers(), LinkPayload::Single(sample_link(5))).unwrap();

        assert!(content_type(&response).starts_with("text/html"));

        let body = body_string(response).await;
        assert!(body.contains(r#"id="link-5""#));
        assert!(body.contains("https://example.com/5"));
        assert!(body.contains("commentary 5"));
    }

    #[tokio::test]
    async fn test_list_with_signal_preserves_order() {
        let response = respond(
            &hx_headers(),
            LinkPayload::List(vec![sample_link(1), sample_link(2)]),
        )
        .unwrap();

        let body = body_string(response).await;
        let first = body.find("link-1").unwrap();
        let second = body.find("link-2").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_edit_form_is_prefilled_html() {
        let link = sample_link(3);
        let response = render_edit_form(&link).unwrap();

        assert!(content_type(&response).starts_with("text/html"));

        let body = body_string(response).await;
        assert!(body.contains("<form"));
        assert!(body.contains(r#"value="https://example.com/3""#));
        assert!(body.contains("commentary 3"));
    }

    #[tokio::test]
    async fn test_commentary_is_escaped_in_fragments() {
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "<script>alert(1)</script>".to_string(),
        );

        let response = respond(&hx_headers(), LinkPayload::Single(link)).unwrap();

        let body = body_string(response).await;
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
