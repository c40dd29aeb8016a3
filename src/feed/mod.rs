//! Feed pipeline: fetch bytes, parse them, normalize the result.
//!
//! The module is organized into three submodules:
//!
//! - [`fetcher`] - HTTP retrieval with retry logic and a response size cap
//! - [`parser`] - Format-tagged parsing using the `feed-rs` crate
//! - [`normalizer`] - The uniform item mapping shared by all feed formats

mod fetcher;
mod normalizer;
mod parser;

pub use fetcher::{default_client, fetch_bytes, FetchError};
pub use normalizer::{normalize, FeedItem};
pub use parser::{parse, ParseError, RawFeed};
