//! HTML template rendering handlers for the web frontend.

mod index;

pub use index::index_handler;
