//! Allow-listed auxiliary attributes forwarded to the button element.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::ActivityError;

/// Attributes the button primitive sets itself.
const RESERVED: [&str; 5] = ["class", "disabled", "aria-label", "type", "onclick"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Attributes a caller may forward verbatim to the underlying `<button>`.
pub enum PassthroughAttr {
    /// `id`
    Id,
    /// `title`
    Title,
    /// `role`
    Role,
    /// `tabindex`
    TabIndex,
    /// `name`
    Name,
    /// `lang`
    Lang,
    /// `aria-describedby`
    AriaDescribedBy,
    /// `aria-controls`
    AriaControls,
    /// `aria-expanded`
    AriaExpanded,
    /// `aria-haspopup`
    AriaHasPopup,
    /// `aria-pressed`
    AriaPressed,
    /// `data-testid`
    DataTestId,
}

impl PassthroughAttr {
    /// Every forwardable attribute, in allow-list order.
    pub const ALL: [Self; 12] = [
        Self::Id,
        Self::Title,
        Self::Role,
        Self::TabIndex,
        Self::Name,
        Self::Lang,
        Self::AriaDescribedBy,
        Self::AriaControls,
        Self::AriaExpanded,
        Self::AriaHasPopup,
        Self::AriaPressed,
        Self::DataTestId,
    ];

    /// DOM attribute name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Role => "role",
            Self::TabIndex => "tabindex",
            Self::Name => "name",
            Self::Lang => "lang",
            Self::AriaDescribedBy => "aria-describedby",
            Self::AriaControls => "aria-controls",
            Self::AriaExpanded => "aria-expanded",
            Self::AriaHasPopup => "aria-haspopup",
            Self::AriaPressed => "aria-pressed",
            Self::DataTestId => "data-testid",
        }
    }
}

impl FromStr for PassthroughAttr {
    type Err = ActivityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        if let Some(attr) = Self::ALL
            .into_iter()
            .find(|attr| attr.name() == normalized)
        {
            return Ok(attr);
        }
        if RESERVED.contains(&normalized.as_str()) {
            Err(ActivityError::ReservedAttribute(normalized))
        } else {
            Err(ActivityError::UnsupportedAttribute(normalized))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered set of passthrough attributes; a later value for the same
/// attribute replaces the earlier one.
pub struct PassthroughAttrs {
    values: BTreeMap<PassthroughAttr, String>,
}

impl PassthroughAttrs {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `attr` set to `value`.
    pub fn with(mut self, attr: PassthroughAttr, value: impl Into<String>) -> Self {
        self.insert(attr, value);
        self
    }

    /// Sets `attr` to `value`.
    pub fn insert(&mut self, attr: PassthroughAttr, value: impl Into<String>) {
        self.values.insert(attr, value.into());
    }

    /// Parses `name` against the allow-list and sets it.
    pub fn try_insert(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ActivityError> {
        let attr = name.parse::<PassthroughAttr>()?;
        self.insert(attr, value);
        Ok(())
    }

    /// Value currently set for `attr`.
    pub fn get(&self, attr: PassthroughAttr) -> Option<&str> {
        self.values.get(&attr).map(String::as_str)
    }

    /// `(attribute name, value)` pairs in allow-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values
            .iter()
            .map(|(attr, value)| (attr.name(), value.as_str()))
    }
}

impl<'a> TryFrom<&'a BTreeMap<String, String>> for PassthroughAttrs {
    type Error = ActivityError;

    fn try_from(raw: &'a BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut attrs = Self::new();
        for (name, value) in raw {
            attrs.try_insert(name, value.clone())?;
        }
        Ok(attrs)
    }
}
