//! Link entity representing one journaled URL with commentary.

/// A saved link.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
/// A persisted link always has a non-empty `url` and `commentary`; input
/// validation upholds this before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub commentary: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, url: String, commentary: String) -> Self {
        Self {
            id,
            url,
            commentary,
        }
    }
}

/// Input data for creating a new link. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub commentary: String,
}

/// Full replacement of a link's mutable fields.
///
/// The id is immutable; `url` and `commentary` are always replaced together.
#[derive(Debug, Clone)]
pub struct LinkChange {
    pub url: String,
    pub commentary: String,
}
