//! Collaboration controls built on shared Leptos button and icon primitives.
//!
//! The crate owns the activity button family: circular buttons for the
//! predefined collaboration activities (chat, camera, meetings, whiteboard,
//! files, share-screen, tasks) or for a caller-supplied icon and color. The
//! `Button` and `Icon` primitives own shape, color, ARIA and click wiring;
//! activity controls only derive the classes, label and content they pass in.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod activity;
mod attrs;
mod config;
mod error;
mod icon;
mod primitives;

pub use activity::{
    ActivityButton, ActivityButtonPlan, ActivityContent, ActivityKind, ActivityToolbar,
    ActivityType, CustomActivity,
};
pub use attrs::{PassthroughAttr, PassthroughAttrs};
pub use config::ActivityButtonEntry;
pub use error::ActivityError;
pub use icon::{icon_class, GlyphSize, Icon};
pub use primitives::{button_class, Button, ButtonShape};

/// Convenience imports for application crates composing activity controls.
pub mod prelude {
    pub use crate::{
        ActivityButton, ActivityButtonEntry, ActivityError, ActivityKind, ActivityToolbar,
        ActivityType, Button, CustomActivity, GlyphSize, Icon, PassthroughAttr,
        PassthroughAttrs,
    };
}
