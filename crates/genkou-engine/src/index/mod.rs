//! Path → page-metadata index for internal-link cards.
//!
//! Every known internal path maps to a title and a [`ContentKind`]; the
//! rendering layer uses this to label the navigation card for each
//! extracted href, falling back to [`generic_label`] for unknown paths.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::content::ContentSnapshot;

/// The kind of first-party page an internal path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Guide,
    Column,
    Cars,
    Heritage,
    Page,
}

/// Card metadata for one internal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLinkMeta {
    pub title: String,
    pub kind: ContentKind,
}

/// Hand-authored titles for pages that exist outside the collections:
/// section list pages, taxonomy index pages and the evergreen guide hubs.
/// Hub slugs are chosen to never collide with collection slugs, so the
/// merged path space stays disjoint.
const STATIC_PAGES: [(&str, &str, ContentKind); 10] = [
    ("/guide", "輸入車購入GUIDE一覧", ContentKind::Page),
    ("/column", "COLUMN一覧", ContentKind::Page),
    ("/cars", "取扱車種一覧", ContentKind::Page),
    ("/heritage", "HERITAGE一覧", ContentKind::Page),
    ("/news", "ニュース一覧", ContentKind::Page),
    ("/cars/maker", "メーカー別車種一覧", ContentKind::Page),
    ("/cars/body", "ボディタイプ別車種一覧", ContentKind::Page),
    ("/cars/segment", "セグメント別車種一覧", ContentKind::Page),
    ("/guide/first-import", "はじめての輸入車GUIDE", ContentKind::Guide),
    ("/guide/maintenance-basics", "メンテナンス基礎GUIDE", ContentKind::Guide),
];

/// The merged path → metadata map.
#[derive(Debug, Default)]
pub struct LinkIndex {
    entries: HashMap<String, InternalLinkMeta>,
}

impl LinkIndex {
    /// Builds the full index from a content snapshot: static pages, then
    /// detail pages for each collection, then computed car-taxonomy hubs.
    pub fn build(snapshot: &ContentSnapshot) -> Self {
        let mut entries = HashMap::new();

        for (path, title, kind) in STATIC_PAGES {
            entries.insert(
                path.to_string(),
                InternalLinkMeta {
                    title: title.to_string(),
                    kind,
                },
            );
        }

        let collections = [
            ("/guide", ContentKind::Guide, &snapshot.guides),
            ("/column", ContentKind::Column, &snapshot.columns),
            ("/heritage", ContentKind::Heritage, &snapshot.heritage),
        ];
        for (prefix, kind, items) in collections {
            for item in items.iter() {
                entries.insert(
                    format!("{prefix}/{}", item.slug),
                    InternalLinkMeta {
                        title: item.display_title().to_string(),
                        kind,
                    },
                );
            }
        }

        for car in &snapshot.cars {
            entries.insert(
                format!("/cars/{}", car.entry.slug),
                InternalLinkMeta {
                    title: car.entry.display_title().to_string(),
                    kind: ContentKind::Cars,
                },
            );
        }
        for car in &snapshot.cars {
            let taxonomies = [
                ("maker", &car.maker),
                ("body", &car.body_type),
                ("segment", &car.segment),
            ];
            for (base, taxon) in taxonomies {
                if let Some(taxon) = taxon {
                    entries
                        .entry(format!("/cars/{base}/{}", taxon.slug))
                        .or_insert_with(|| InternalLinkMeta {
                            title: format!("{}の車種一覧", taxon.label),
                            kind: ContentKind::Cars,
                        });
                }
            }
        }

        log::debug!("link index built with {} entries", entries.len());
        Self { entries }
    }

    /// Looks up card metadata for a normalized internal path.
    pub fn lookup(&self, href: &str) -> Option<&InternalLinkMeta> {
        self.entries.get(href)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generic card label derived purely from the href's first path segment,
/// for hrefs the index doesn't know.
pub fn generic_label(href: &str) -> &'static str {
    let first_segment = href.trim_start_matches('/').split('/').next().unwrap_or("");
    match first_segment.to_ascii_lowercase().as_str() {
        "guide" => "関連GUIDE",
        "column" => "関連COLUMN",
        "cars" => "関連CARS",
        "heritage" => "関連HERITAGE",
        _ => "関連リンク",
    }
}

/// Owns a content snapshot and the index lazily built from it.
///
/// Constructed once by the content-service layer and shared from there; the
/// first `index()` call pays the build cost, later calls return the cached
/// map. The build is a pure function of the snapshot, so a racing rebuild
/// would produce an equal result; `OnceLock` just makes it single-flight.
#[derive(Debug, Default)]
pub struct LinkIndexService {
    snapshot: ContentSnapshot,
    cache: OnceLock<LinkIndex>,
}

impl LinkIndexService {
    pub fn new(snapshot: ContentSnapshot) -> Self {
        Self {
            snapshot,
            cache: OnceLock::new(),
        }
    }

    pub fn index(&self) -> &LinkIndex {
        self.cache.get_or_init(|| LinkIndex::build(&self.snapshot))
    }

    /// Card title for an href: indexed title, or the kind-derived generic
    /// label when unknown.
    pub fn card_title(&self, href: &str) -> String {
        match self.index().lookup(href) {
            Some(meta) => meta.title.clone(),
            None => generic_label(href).to_string(),
        }
    }
}
