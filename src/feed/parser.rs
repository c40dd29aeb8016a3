use feed_rs::model::{Feed, FeedType};
use feed_rs::parser;
use thiserror::Error;

/// A parsed feed tagged with the syndication format it arrived in.
///
/// The tag matters downstream: Atom carries its timestamp in `updated`,
/// RSS and JSON Feed in `published`, and the normalizer picks per format.
/// All RSS lineages (0.x, 1.0/RDF, 2.0) collapse into the `Rss` variant.
#[derive(Debug, Clone)]
pub enum RawFeed {
    Atom(Feed),
    Rss(Feed),
    Json(Feed),
}

impl RawFeed {
    /// The parsed feed document, whatever the format tag.
    pub fn feed(&self) -> &Feed {
        match self {
            RawFeed::Atom(feed) | RawFeed::Rss(feed) | RawFeed::Json(feed) => feed,
        }
    }
}

#[derive(Debug, Error)]
#[error("Feed could not be parsed: {0}")]
pub struct ParseError(#[from] parser::ParseFeedError);

/// Parse raw feed bytes into a format-tagged feed.
///
/// Format detection is delegated to `feed-rs`; this layer only attaches the
/// tag the rest of the pipeline dispatches on.
pub fn parse(bytes: &[u8]) -> Result<RawFeed, ParseError> {
    let feed = parser::parse(bytes)?;

    Ok(match feed.feed_type {
        FeedType::Atom => RawFeed::Atom(feed),
        FeedType::JSON => RawFeed::Json(feed),
        FeedType::RSS0 | FeedType::RSS1 | FeedType::RSS2 => RawFeed::Rss(feed),
    })
}
