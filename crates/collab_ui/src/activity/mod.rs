//! Activity types and the controls that render them.
//!
//! An activity is either one of the predefined [`ActivityKind`]s, which carry
//! their own CSS modifier and icon-font glyph, or a [`CustomActivity`] that
//! brings its own icon view and optional color token.

use std::fmt;
use std::str::FromStr;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{ActivityError, GlyphSize};

mod button;
mod toolbar;

pub use button::{ActivityButton, ActivityButtonPlan, ActivityContent};
pub use toolbar::ActivityToolbar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Predefined activities with a dedicated style modifier and glyph.
pub enum ActivityKind {
    /// Messaging.
    Chat,
    /// Video.
    Camera,
    /// Scheduled meetings.
    Meetings,
    /// Shared whiteboard.
    Whiteboard,
    /// Shared files.
    Files,
    /// Screen sharing.
    ShareScreen,
    /// Task lists.
    Tasks,
}

impl ActivityKind {
    /// Every predefined activity, in display order.
    pub const ALL: [Self; 7] = [
        Self::Chat,
        Self::Camera,
        Self::Meetings,
        Self::Whiteboard,
        Self::Files,
        Self::ShareScreen,
        Self::Tasks,
    ];

    /// Stable token used in class names, glyph names and config.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Camera => "camera",
            Self::Meetings => "meetings",
            Self::Whiteboard => "whiteboard",
            Self::Files => "files",
            Self::ShareScreen => "share-screen",
            Self::Tasks => "tasks",
        }
    }

    /// Icon-font glyph name for this activity at `size`.
    pub fn glyph(self, size: GlyphSize) -> String {
        format!("{}_{}", self.token(), size.px())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ActivityKind {
    type Err = ActivityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == raw)
            .ok_or_else(|| ActivityError::UnknownActivity(raw.to_string()))
    }
}

#[derive(Clone)]
/// Caller-provided activity: an icon view plus an optional color token.
pub struct CustomActivity {
    /// Color token applied by the button primitive, e.g. `mint`.
    pub color: Option<String>,
    /// Icon rendered as the button content, unchanged.
    pub icon: ViewFn,
}

impl CustomActivity {
    /// Custom activity rendering `icon` with no color override.
    pub fn new(icon: impl Into<ViewFn>) -> Self {
        Self {
            color: None,
            icon: icon.into(),
        }
    }

    /// Sets the color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl fmt::Debug for CustomActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomActivity")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
/// What an activity button shows: a predefined activity or a custom icon.
pub enum ActivityType {
    /// Predefined activity.
    Named(ActivityKind),
    /// Caller-supplied icon and color.
    Custom(CustomActivity),
}

impl ActivityType {
    /// Whether the caller supplied the icon.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Color override; only custom activities carry one.
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Named(_) => None,
            Self::Custom(custom) => custom.color.as_deref(),
        }
    }
}

impl From<ActivityKind> for ActivityType {
    fn from(kind: ActivityKind) -> Self {
        Self::Named(kind)
    }
}

impl From<CustomActivity> for ActivityType {
    fn from(custom: CustomActivity) -> Self {
        Self::Custom(custom)
    }
}

impl FromStr for ActivityType {
    type Err = ActivityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<ActivityKind>().map(Self::Named)
    }
}
