//! The built-in catalog of selectable feed sources.
//!
//! The catalog is an ordered constant, not a runtime-loaded file. Sources are
//! addressed either by zero-based index or by a case-insensitive name prefix.

use thiserror::Error;

/// A selectable feed source: a display name and the feed URL behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Numeric selector outside the catalog range.
    #[error("No source at index {index} (catalog has {len} sources)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Name selector matched nothing.
    #[error("No source matching '{0}'")]
    NoMatch(String),

    /// Name selector matched more than one source.
    #[error("'{selector}' is ambiguous: matches {matches:?}")]
    Ambiguous {
        selector: String,
        matches: Vec<String>,
    },
}

/// The fixed source list. Order is part of the interface: indices printed by
/// `--list` must stay valid as selectors.
pub fn builtin() -> Vec<FeedSource> {
    vec![
        FeedSource::new("TechCrunch Japan", "http://jp.techcrunch.com/feed/"),
        FeedSource::new("Engadget Japanese", "http://japanese.engadget.com/rss.xml"),
        FeedSource::new(
            "Impress Watch",
            "http://www.watch.impress.co.jp/headline/rss/headline.rdf",
        ),
        FeedSource::new("ASCII.jp", "http://ascii.jp/cate/1/rss.xml"),
        FeedSource::new("GIZMODO", "https://www.gizmodo.jp/index.xml"),
        FeedSource::new("GIGAZINE", "http://gigazine.net/news/rss_2.0/"),
        FeedSource::new(
            "Mynavi News",
            "http://feeds.news.mynavi.jp/rss/mynavi/index",
        ),
        FeedSource::new("ITmedia", "http://rss.itmedia.co.jp/rss/2.0/itmedia_all.xml"),
    ]
}

/// Resolve a selector against the catalog.
///
/// A selector that parses as an integer is treated as a zero-based index.
/// Anything else matches source names case-insensitively: an exact name match
/// wins outright, otherwise a unique prefix match is accepted.
pub fn resolve<'a>(
    sources: &'a [FeedSource],
    selector: &str,
) -> Result<&'a FeedSource, CatalogError> {
    if let Ok(index) = selector.parse::<usize>() {
        return sources.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: sources.len(),
        });
    }

    let wanted = selector.to_lowercase();

    if let Some(source) = sources.iter().find(|s| s.name.to_lowercase() == wanted) {
        return Ok(source);
    }

    let matches: Vec<&FeedSource> = sources
        .iter()
        .filter(|s| s.name.to_lowercase().starts_with(&wanted))
        .collect();

    match matches.as_slice() {
        [] => Err(CatalogError::NoMatch(selector.to_string())),
        [single] => Ok(single),
        many => Err(CatalogError::Ambiguous {
            selector: selector.to_string(),
            matches: many.iter().map(|s| s.name.clone()).collect(),
        }),
    }
}
