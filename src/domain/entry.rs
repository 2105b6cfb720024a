//! Loosely-typed feed entries as delivered by the fetch collaborator.
//!
//! Feed providers agree on almost nothing, so every field is optional and
//! absence is always explicit - there is no dynamic fallback lookup.

/// One entry as parsed from a feed, before normalization.
///
/// All fields are passthrough from the wire format; none are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    /// Globally-unique identifier claimed by the feed (RSS guid)
    pub guid: Option<String>,

    /// Entry link URL
    pub link: Option<String>,

    /// Entry title
    pub title: Option<String>,

    /// Raw publication timestamp string, format unknown
    pub published: Option<String>,

    /// Raw last-updated timestamp string, format unknown
    pub updated: Option<String>,

    /// Entry summary/description
    pub summary: Option<String>,

    /// Media enclosures attached to the entry
    pub enclosures: Vec<RawEnclosure>,
}

/// A media enclosure reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnclosure {
    pub url: Option<String>,
}

impl RawEntry {
    /// The first enclosure's reference URL, if one is present and non-empty.
    ///
    /// Only the first enclosure is consulted, even when later ones carry
    /// a URL and the first does not.
    pub fn first_enclosure_url(&self) -> Option<&str> {
        self.enclosures
            .first()
            .and_then(|e| present(e.url.as_deref()))
    }
}

/// Treat empty strings the same as missing values.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
