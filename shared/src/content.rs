//! Topics, content items and the read-only catalog they live in.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Id of the record promoted by a topic's jumbotron banner.
pub const JUMBOTRON_ID: &str = "jumbotron";

/// A curated topic page, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Human readable label, e.g. "Docker".
    pub label: String,
    /// Identifier used in routes and tracking locations.
    pub name: String,
    /// Long-form description (markdown).
    pub description: String,
}

/// Author of a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    /// Route of the instructor's profile page.
    pub path: String,
    /// Avatar URL.
    pub image: String,
    /// Display name.
    pub name: String,
    /// Stable identifier reported to analytics.
    pub slug: String,
}

/// Image reference as it appears in catalog documents: either a bare URL or
/// an object carrying its own alt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// `"image": "https://..."`
    Bare(String),
    /// `"image": { "src": "https://...", "alt": "..." }`
    Structured {
        /// Image URL.
        src: String,
        /// Alt text; falls back to a title-derived description when absent.
        #[serde(default)]
        alt: Option<String>,
    },
}

/// Image ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image URL.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

impl ImageSource {
    /// Normalize into a renderable image, using `title` to describe images
    /// that carry no alt text of their own.
    pub fn resolve(&self, title: &str) -> Image {
        match self {
            ImageSource::Bare(src) => Image {
                src: src.clone(),
                alt: default_alt(title),
            },
            ImageSource::Structured {
                src,
                alt,
            } => Image {
                src: src.clone(),
                alt: alt.clone().unwrap_or_else(|| default_alt(title)),
            },
        }
    }
}

fn default_alt(title: &str) -> String {
    format!("illustration for {title}")
}

/// A single promotable resource (course, lesson, article).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique id within its catalog.
    pub id: String,
    /// Route of the resource.
    pub path: String,
    /// Preview image.
    pub image: ImageSource,
    /// Title shown as the heading.
    pub title: String,
    /// Short label shown above the title, e.g. "NEW COURSE".
    pub byline: String,
    /// Who made it.
    pub instructor: Instructor,
}

impl ContentItem {
    /// The item's preview image with alt text resolved.
    pub fn image(&self) -> Image {
        self.image.resolve(&self.title)
    }
}

/// Ordered, read-only list of content items for one topic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Wrap an already-built list of items.
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
        }
    }

    /// Parse a JSON array of content items.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let items: Vec<ContentItem> = serde_json::from_str(document)?;
        tracing::debug!(count = items.len(), "loaded content catalog");
        Ok(Self::new(items))
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// First item whose id matches.
    pub fn find(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The item featured in the topic's jumbotron banner.
    pub fn jumbotron(&self) -> Result<&ContentItem, CatalogError> {
        self.find(JUMBOTRON_ID).ok_or_else(|| {
            tracing::warn!("content catalog has no jumbotron item");
            CatalogError::MissingItem {
                id: JUMBOTRON_ID.to_string(),
            }
        })
    }

    /// Every item except the jumbotron, in catalog order.
    pub fn essentials(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.id != JUMBOTRON_ID)
    }
}
