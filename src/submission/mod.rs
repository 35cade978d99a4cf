//! App submission parsing
//!
//! Turns a PR description into a validated catalog entry:
//! 1. Extraction - find the fenced `json` block and parse it
//! 2. Validation - check the required-field contract

mod entry;
mod extract;
mod validate;

pub use entry::AppEntry;
pub use extract::{END_MARKER, START_MARKER, extract_app_data};
pub use validate::{
    DEVELOPER_FIELDS, REQUIRED_FIELDS, ValidationError, validate_app_data,
};
