//! Icon-font glyph abstraction for collaboration controls.
//!
//! Glyphs are addressed by their icon-font name (`chat_28`, `keyboard_16`) and
//! rendered as a single `<i>` element whose `icon-<name>` class selects the glyph
//! from the shared icon stylesheet. Components should go through [`Icon`] instead
//! of emitting icon class strings directly.

use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyph sizes published by the icon font for activity controls.
pub enum GlyphSize {
    /// 28px glyph used by regular activity buttons.
    #[default]
    Regular,
    /// 36px glyph used by large activity buttons.
    Large,
}

impl GlyphSize {
    /// Pixel size encoded in the glyph name suffix.
    pub const fn px(self) -> u16 {
        match self {
            Self::Regular => 28,
            Self::Large => 36,
        }
    }

    /// Size matching the `large` flag of a control.
    pub const fn for_large(large: bool) -> Self {
        if large {
            Self::Large
        } else {
            Self::Regular
        }
    }
}

/// Class list selecting `name` from the icon font.
pub fn icon_class(name: &str) -> String {
    format!("icon icon-{name}")
}

#[component]
/// Renders one icon-font glyph.
pub fn Icon(
    /// Glyph name including its size suffix, e.g. `chat_28`.
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let class = icon_class(&name);

    view! {
        <i
            class=class
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-icon=name
            aria-hidden="true"
        />
    }
}
