//! Declarative toolbar entries for predefined activity buttons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ActivityError, ActivityKind, PassthroughAttrs};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One predefined activity button as described in JSON toolbar config.
///
/// ```json
/// { "type": "chat", "large": true, "aria_label": "Chat", "attrs": { "title": "Chat" } }
/// ```
pub struct ActivityButtonEntry {
    /// Activity token, e.g. `share-screen`.
    #[serde(rename = "type")]
    pub activity: ActivityKind,
    /// Large size variant.
    #[serde(default)]
    pub large: bool,
    /// Renders the button disabled.
    #[serde(default)]
    pub disabled: bool,
    /// Extra classes for the button.
    #[serde(default)]
    pub class_name: String,
    /// Accessible label override.
    #[serde(default)]
    pub aria_label: String,
    /// Raw passthrough attributes, validated by [`Self::passthrough`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

impl ActivityButtonEntry {
    /// Entry for `activity` with every option at its default.
    pub fn new(activity: ActivityKind) -> Self {
        Self {
            activity,
            large: false,
            disabled: false,
            class_name: String::new(),
            aria_label: String::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Parses a JSON array of entries.
    pub fn from_json_list(raw: &str) -> Result<Vec<Self>, ActivityError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validates the raw attributes against the passthrough allow-list.
    pub fn passthrough(&self) -> Result<PassthroughAttrs, ActivityError> {
        PassthroughAttrs::try_from(&self.attrs)
    }
}
