//! feedpick: pick a feed source from a fixed catalog, fetch and parse it,
//! and hand back one uniform item sequence whatever the feed format.
//!
//! The pipeline is `catalog` selection → [`feed::fetch_bytes`] →
//! [`feed::parse`] → [`feed::normalize`], with [`app::App`] owning the
//! current result sequence and [`opener::open_link`] handling selection
//! taps. Rendering lives in [`display`] and is plain stdout text or JSON.

pub mod app;
pub mod catalog;
pub mod display;
pub mod feed;
pub mod opener;
pub mod util;
