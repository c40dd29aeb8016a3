//! Shared utilities.

mod url_validator;

pub use url_validator::{validate_url, validate_url_for_open, UrlValidationError};
