//! Required-field validation

use crate::submission::AppEntry;
use serde_json::Value;
use thiserror::Error;

/// Top-level fields every submission must carry, in check order
pub const REQUIRED_FIELDS: [&str; 10] = [
    "name",
    "description",
    "developer",
    "longDescription",
    "downloadUrl",
    "version",
    "releaseDate",
    "size",
    "requirements",
    "features",
];

/// Fields the nested `developer` object must carry
pub const DEVELOPER_FIELDS: [&str; 3] = ["name", "url", "avatar"];

/// Why a submission was rejected
///
/// The `Display` text is posted back to the PR verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The block parsed, but not to a JSON object
    #[error("App data must be a JSON object.")]
    NotAnObject,

    /// A top-level required field is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `developer` is not an object with `name`, `url`, and `avatar`
    #[error("Developer object is missing required fields.")]
    IncompleteDeveloper,

    /// `features` is not an array
    #[error("Features must be a list.")]
    FeaturesNotList,

    /// `screenshots` is present but not an array
    #[error("Screenshots must be a list.")]
    ScreenshotsNotList,
}

/// Validate extracted app data and turn it into an [`AppEntry`]
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_app_data(value: Value) -> Result<AppEntry, ValidationError> {
    let Value::Object(fields) = value else {
        return Err(ValidationError::NotAnObject);
    };

    if let Some(missing) = REQUIRED_FIELDS
        .into_iter()
        .find(|f| !fields.contains_key(*f))
    {
        return Err(ValidationError::MissingField(missing));
    }

    let developer_complete = fields
        .get("developer")
        .and_then(Value::as_object)
        .is_some_and(|dev| DEVELOPER_FIELDS.iter().all(|f| dev.contains_key(*f)));
    if !developer_complete {
        return Err(ValidationError::IncompleteDeveloper);
    }

    if !fields.get("features").is_some_and(Value::is_array) {
        return Err(ValidationError::FeaturesNotList);
    }

    if fields.get("screenshots").is_some_and(|s| !s.is_array()) {
        return Err(ValidationError::ScreenshotsNotList);
    }

    Ok(AppEntry::new(fields))
}
