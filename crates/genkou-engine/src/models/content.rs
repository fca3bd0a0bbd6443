use serde::{Deserialize, Serialize};

/// One record of a content collection, as handed over by whatever owns
/// content loading. Collection loading failures are that layer's problem;
/// the engine only ever sees an already-built snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub slug: String,
    pub title: String,
    /// Localized title, preferred over `title` when present.
    #[serde(default)]
    pub title_ja: Option<String>,
    /// Alternate display name, used when both titles are empty.
    #[serde(default)]
    pub name: Option<String>,
}

impl ContentEntry {
    /// Title preference: localized title, generic title, name, slug —
    /// first non-blank wins.
    pub fn display_title(&self) -> &str {
        [
            self.title_ja.as_deref(),
            Some(self.title.as_str()),
            self.name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(&self.slug)
    }
}

/// A taxonomy value a car belongs to (maker, body type or segment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonRef {
    pub slug: String,
    pub label: String,
}

/// A car record: the common entry fields plus its taxonomy memberships,
/// from which the hub pages are computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarEntry {
    #[serde(flatten)]
    pub entry: ContentEntry,
    #[serde(default)]
    pub maker: Option<TaxonRef>,
    #[serde(default)]
    pub body_type: Option<TaxonRef>,
    #[serde(default)]
    pub segment: Option<TaxonRef>,
}

/// The full content snapshot the link index is built from. Built once per
/// process by the content-service layer and injected, never loaded here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub guides: Vec<ContentEntry>,
    #[serde(default)]
    pub columns: Vec<ContentEntry>,
    #[serde(default)]
    pub cars: Vec<CarEntry>,
    #[serde(default)]
    pub heritage: Vec<ContentEntry>,
}
