//! JSON representation of a link.

use serde::Serialize;

use crate::domain::entities::Link;

/// Link record as returned by the JSON paths of the links endpoint.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub commentary: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            commentary: link.commentary,
        }
    }
}
