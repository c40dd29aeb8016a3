//! The open-link action: hand an entry's link to the system browser.

use crate::util::validate_url_for_open;

/// Attempt to open an item link in the external environment.
///
/// Mirrors the selection tap in a feed reader: an absent link does nothing,
/// a link that is not a usable web URL does nothing (logged at debug level,
/// never surfaced to the user), and an opener failure is logged but not
/// fatal. Returns whether an open request was actually issued.
pub fn open_link(link: Option<&str>) -> bool {
    let Some(link) = link else {
        tracing::debug!("No link on selected item, nothing to open");
        return false;
    };

    let url = match validate_url_for_open(link) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(link = %link, error = %e, "Link is not an openable URL");
            return false;
        }
    };

    match open::that(url.as_str()) {
        Ok(()) => {
            tracing::info!(url = %url, "Opened link externally");
            true
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "System opener failed");
            false
        }
    }
}
