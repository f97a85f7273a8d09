//! Shared control primitives and the class/token helpers they emit.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::PassthroughAttrs;

mod controls;

pub use controls::{button_class, Button};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Rounded-rectangle button.
    Standard,
    /// Circular button.
    Circle,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonShape {
    pub(crate) fn from_circle(circle: bool) -> Self {
        if circle {
            Self::Circle
        } else {
            Self::Standard
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Circle => "circle",
        }
    }
}

/// Appends `extra` to a space-separated class list when it is non-empty.
pub(crate) fn push_class(classes: &mut String, extra: &str) {
    let extra = extra.trim();
    if extra.is_empty() {
        return;
    }
    if !classes.is_empty() {
        classes.push(' ');
    }
    classes.push_str(extra);
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Invokes `handler` once with `ev`, if one is attached.
pub(crate) fn forward_event<E: 'static>(handler: Option<&Callback<E>>, ev: E) {
    if let Some(handler) = handler {
        handler.call(ev);
    }
}
