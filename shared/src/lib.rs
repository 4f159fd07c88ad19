//! Data model shared by the curated-topic frontend: topics, content items,
//! the static catalog they are read from, and the tracking events emitted
//! when visitors interact with them.

pub mod content;
pub mod error;
pub mod tracking;

pub use content::{Catalog, ContentItem, Image, ImageSource, Instructor, Topic, JUMBOTRON_ID};
pub use error::CatalogError;
pub use tracking::{LinkType, TrackEvent};
