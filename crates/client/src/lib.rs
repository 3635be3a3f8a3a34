//! Browsing client for the catalog API.
//!
//! Loads both collections once into a [`Catalog`] snapshot (falling back to a
//! built-in dataset when the backend is unreachable) and derives every view
//! from that snapshot without further requests.

pub mod api;
pub mod errors;
pub mod fallback;
pub mod render;
pub mod snapshot;
pub mod source;
pub mod view;

pub use api::{CatalogApi, HttpCatalogApi};
pub use errors::ClientError;
pub use render::Screen;
pub use snapshot::Catalog;
pub use source::{CatalogSource, Loaded, Tier};
pub use view::{Session, View};
