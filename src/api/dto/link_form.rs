//! Form DTO shared by the create and update paths of the links endpoint.

use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::domain::entities::{LinkChange, NewLink};
use crate::error::AppError;

/// URL-encoded body of `POST /links` and `PUT /links?id={id}`.
///
/// Both fields are required and must be non-empty. Missing fields
/// deserialize to empty strings so that "absent" and "blank" fail the same
/// validation with the same client-facing message.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "commentary must not be empty"))]
    pub commentary: String,
}

impl LinkForm {
    /// Parses and validates a URL-encoded request body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with message `Invalid request body`
    /// when the body is not valid URL-encoding or either field is empty.
    pub fn from_body(body: &str) -> Result<Self, AppError> {
        let form: LinkForm = serde_urlencoded::from_str(body).map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
        })?;

        form.validate().map_err(|e| {
            AppError::bad_request(
                "Invalid request body",
                serde_json::to_value(&e).unwrap_or(Value::Null),
            )
        })?;

        Ok(form)
    }
}

impl From<LinkForm> for NewLink {
    fn from(form: LinkForm) -> Self {
        Self {
            url: form.url,
            commentary: form.commentary,
        }
    }
}

impl From<LinkForm> for LinkChange {
    fn from(form: LinkForm) -> Self {
        Self {
            url: form.url,
            commentary: form.commentary,
        }
    }
}
