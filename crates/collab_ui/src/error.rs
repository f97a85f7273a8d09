//! Errors raised at the string and config boundaries of the activity controls.

use thiserror::Error;

/// Failures while turning untyped input into activity button props.
///
/// Rendering itself never fails; these only surface when parsing activity
/// names, passthrough attribute names, or JSON toolbar entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// The activity name is not one of the recognized activity kinds.
    #[error("unknown activity `{0}`")]
    UnknownActivity(String),
    /// The attribute is not on the passthrough allow-list.
    #[error("attribute `{0}` cannot be passed through to the button")]
    UnsupportedAttribute(String),
    /// The attribute is owned by the button itself and cannot be overridden.
    #[error("attribute `{0}` is managed by the activity button")]
    ReservedAttribute(String),
    /// A toolbar entry list could not be decoded.
    #[error("invalid activity button config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
