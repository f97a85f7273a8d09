use leptos::ev::MouseEvent;
use leptos::*;

use super::{ActivityButton, ActivityKind};
use crate::{ActivityButtonEntry, PassthroughAttrs};

/// Keeps entries whose passthrough attributes validate, logging the rest.
pub(crate) fn usable_entries(
    entries: Vec<ActivityButtonEntry>,
) -> Vec<(ActivityButtonEntry, PassthroughAttrs)> {
    entries
        .into_iter()
        .filter_map(|entry| match entry.passthrough() {
            Ok(attrs) => Some((entry, attrs)),
            Err(err) => {
                logging::warn!("skipping `{}` toolbar entry: {err}", entry.activity);
                None
            }
        })
        .collect()
}

#[component]
/// Horizontal group of predefined activity buttons built from config entries.
pub fn ActivityToolbar(
    /// Buttons in display order.
    entries: Vec<ActivityButtonEntry>,
    /// Called with the activity whose button was clicked.
    #[prop(optional)]
    on_select: Option<Callback<ActivityKind>>,
    #[prop(optional, into)] aria_label: String,
) -> impl IntoView {
    let buttons = usable_entries(entries)
        .into_iter()
        .map(|(entry, attrs)| {
            let kind = entry.activity;
            let on_select = on_select.clone();
            let on_click = Callback::new(move |_: MouseEvent| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(kind);
                }
            });
            view! {
                <ActivityButton
                    activity=kind
                    large=entry.large
                    disabled=entry.disabled
                    class_name=entry.class_name
                    aria_label=entry.aria_label
                    attrs
                    on_click
                />
            }
        })
        .collect_view();

    view! {
        <div class="cui-activity-toolbar" role="toolbar" aria-label=aria_label>
            {buttons}
        </div>
    }
}
