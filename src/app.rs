//! Orchestration: selection to fetch to normalized items, and the single
//! "current result sequence" the presentation layer reads.

use crate::catalog::FeedSource;
use crate::feed::{fetch_bytes, normalize, FeedItem, FetchError, ParseError};
use futures::stream::{self, StreamExt};
use thiserror::Error;

/// Max feeds in flight during a full-catalog refresh.
const REFRESH_CONCURRENCY: usize = 4;

/// Errors from a single fetch-and-normalize cycle.
///
/// Both variants are non-fatal to the application: they are reported and the
/// previously displayed sequence stays in place.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed bytes could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The retrieved bytes were not a parseable feed.
    #[error(transparent)]
    ParseFailed(#[from] ParseError),
}

/// Fetch a feed URL and normalize it to the uniform item sequence.
///
/// This is the whole pipeline for one selection: bytes off the network,
/// format-tagged parse, pure normalization. It holds no state; the caller
/// decides what to do with the result (usually [`App::apply`]).
pub async fn load_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<FeedItem>, FeedError> {
    let bytes = fetch_bytes(client, url).await?;
    let raw = crate::feed::parse(&bytes)?;
    Ok(normalize(&raw))
}

/// Proof that a load was initiated, numbered in initiation order.
///
/// Completions hand their ticket back to [`App::apply`], which only accepts
/// the newest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Outcome of handing a completed load back to the [`App`].
#[derive(Debug, PartialEq, Eq)]
pub enum Applied {
    /// The current sequence was atomically replaced with this many items.
    Replaced(usize),
    /// The load failed; the current sequence was left untouched.
    Unchanged,
    /// A newer load was initiated in the meantime; this result was discarded.
    Stale,
}

/// Owner of the current normalized item sequence.
///
/// Loads may overlap: the picker can be triggered again while a fetch is in
/// flight. Each load takes a [`LoadTicket`] from [`App::begin_load`], and
/// [`App::apply`] enforces last-write-wins: only the most recently initiated
/// load may replace the sequence, stale completions are dropped. In-flight
/// requests are not cancelled. Errors never clear existing items.
#[derive(Debug, Default)]
pub struct App {
    items: Vec<FeedItem>,
    generation: u64,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence most recently applied, in feed document order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Register a new load and get the ticket its completion must present.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Hand a completed load back to the state owner.
    ///
    /// Replaces the whole sequence (no merging) when the ticket is current
    /// and the load succeeded. Must be called from whatever single context
    /// owns presentation; the `App` itself is not synchronized.
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<FeedItem>, FeedError>,
    ) -> Applied {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                newest = self.generation,
                "Discarding stale load result"
            );
            return Applied::Stale;
        }

        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                Applied::Replaced(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Feed load failed, keeping previous items");
                Applied::Unchanged
            }
        }
    }
}

/// Outcome of one source in a full-catalog refresh.
#[derive(Debug)]
pub struct SourceSummary {
    pub name: String,
    pub result: Result<usize, FeedError>,
}

/// Fetch every catalog source and report per-source item counts.
///
/// Runs up to [`REFRESH_CONCURRENCY`] fetches at a time. Results arrive in
/// completion order, not catalog order.
pub async fn refresh_all(
    client: &reqwest::Client,
    sources: &[FeedSource],
) -> Vec<SourceSummary> {
    stream::iter(sources.iter().cloned())
        .map(|source| {
            let client = client.clone();
            async move {
                let result = load_feed(&client, &source.url).await.map(|items| items.len());
                if let Err(e) = &result {
                    tracing::warn!(source = %source.name, error = %e, "Refresh failed");
                }
                SourceSummary {
                    name: source.name,
                    result,
                }
            }
        })
        .buffer_unordered(REFRESH_CONCURRENCY)
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(title: &str) -> FeedItem {
        FeedItem {
            title: Some(title.to_string()),
            date: None,
            link: None,
        }
    }

    fn parse_failure() -> FeedError {
        FeedError::ParseFailed(crate::feed::parse(b"<not a feed").unwrap_err())
    }

    #[test]
    fn test_successful_load_replaces_items() {
        let mut app = App::new();
        let ticket = app.begin_load();

        let applied = app.apply(ticket, Ok(vec![item("A"), item("B")]));

        assert_eq!(applied, Applied::Replaced(2));
        assert_eq!(app.items().len(), 2);
        assert_eq!(app.items()[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut app = App::new();
        let old_ticket = app.begin_load();
        let new_ticket = app.begin_load();

        // The older fetch completes after the newer one started: dropped.
        assert_eq!(app.apply(old_ticket, Ok(vec![item("old")])), Applied::Stale);
        assert!(app.items().is_empty());

        assert_eq!(
            app.apply(new_ticket, Ok(vec![item("new")])),
            Applied::Replaced(1)
        );
        assert_eq!(app.items()[0].title.as_deref(), Some("new"));
    }

    #[test]
    fn test_failed_load_keeps_previous_items() {
        let mut app = App::new();
        let ticket = app.begin_load();
        app.apply(ticket, Ok(vec![item("kept")]));

        let ticket = app.begin_load();
        let applied = app.apply(ticket, Err(parse_failure()));

        assert_eq!(applied, Applied::Unchanged);
        assert_eq!(app.items().len(), 1);
        assert_eq!(app.items()[0].title.as_deref(), Some("kept"));
    }

    #[test]
    fn test_replace_is_total_not_a_merge() {
        let mut app = App::new();
        let ticket = app.begin_load();
        app.apply(ticket, Ok(vec![item("A"), item("B"), item("C")]));

        let ticket = app.begin_load();
        app.apply(ticket, Ok(vec![item("D")]));

        assert_eq!(app.items().len(), 1);
        assert_eq!(app.items()[0].title.as_deref(), Some("D"));
    }
}
