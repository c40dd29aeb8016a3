//! The normalization step: one uniform item per feed entry, whatever the
//! format the feed arrived in.

use crate::feed::parser::RawFeed;
use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use serde::Serialize;

/// The uniform representation of one feed entry.
///
/// Absent source fields stay absent. Defaulting (`-` for a missing date and
/// so on) is a display concern and happens at render time, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub link: Option<String>,
}

/// Map a format-tagged feed to its uniform item sequence.
///
/// Produces exactly one [`FeedItem`] per entry, in document order; nothing is
/// dropped, reordered, or deduplicated. An empty feed yields an empty vector.
/// The only format-dependent part is which timestamp each shape carries:
/// Atom entries date from `updated`, RSS and JSON Feed from `published`
/// (`pubDate` / `date_published` in the source documents). The link is the
/// entry's first link reference in every shape.
///
/// Pure and synchronous; callers on any execution context may use it.
pub fn normalize(raw: &RawFeed) -> Vec<FeedItem> {
    match raw {
        RawFeed::Atom(feed) => feed
            .entries
            .iter()
            .map(|entry| uniform_item(entry, entry.updated))
            .collect(),
        RawFeed::Rss(feed) | RawFeed::Json(feed) => feed
            .entries
            .iter()
            .map(|entry| uniform_item(entry, entry.published))
            .collect(),
    }
}

fn uniform_item(entry: &Entry, date: Option<DateTime<Utc>>) -> FeedItem {
    FeedItem {
        title: entry.title.as_ref().map(|t| t.content.clone()),
        date,
        link: entry.links.first().map(|l| l.href.clone()),
    }
}
