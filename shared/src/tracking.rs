//! Analytics events emitted by curated-topic pages.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Which part of a resource teaser was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    /// The preview image.
    Image,
    /// The title text.
    Text,
}

impl LinkType {
    /// Wire value reported in the `linkType` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Image => "image",
            LinkType::Text => "text",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named analytics event with string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackEvent {
    /// Event name, e.g. "clicked jumbotron resource".
    #[serde(rename = "event")]
    pub name: String,
    /// Event parameters.
    pub params: BTreeMap<String, String>,
}

impl TrackEvent {
    /// Build an event from a name and parameter pairs.
    pub fn new<N, I, K, V>(name: N, params: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            params: params
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Click on the jumbotron's image or title.
    pub fn jumbotron_resource(path: &str, link_type: LinkType) -> Self {
        Self::new("clicked jumbotron resource", [
            ("resource", path),
            ("linkType", link_type.as_str()),
        ])
    }

    /// Click on the instructor block inside the jumbotron.
    pub fn jumbotron_instructor(slug: &str) -> Self {
        Self::new("clicked instructor in jumbotron", [("instructor", slug)])
    }

    /// Click anywhere on the promotional banner.
    pub fn promo_banner(location: &str) -> Self {
        Self::new("clicked epic react banner", [("location", location)])
    }

    /// Look up a parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
