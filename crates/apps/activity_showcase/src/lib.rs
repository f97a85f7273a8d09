//! Showcase app for the activity button family.
//!
//! Renders the default, large and custom activity button variants through
//! `collab_ui` only, so style changes to the controls can be reviewed on one
//! page without app-local markup contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use collab_ui::prelude::*;
use leptos::ev::MouseEvent;
use leptos::*;

/// Large variants, declared the way a host app would ship its toolbar config.
const LARGE_TOOLBAR: &str = r#"[
    { "type": "chat", "large": true, "aria_label": "Chat", "attrs": { "title": "Chat" } },
    { "type": "camera", "large": true, "aria_label": "Camera", "attrs": { "title": "Camera" } },
    { "type": "meetings", "large": true, "aria_label": "Meetings", "attrs": { "title": "Meetings" } },
    { "type": "whiteboard", "large": true, "aria_label": "Whiteboard", "attrs": { "title": "Whiteboard" } },
    { "type": "files", "large": true, "aria_label": "Files", "attrs": { "title": "Files" } },
    { "type": "share-screen", "large": true, "aria_label": "Share", "attrs": { "title": "Share" } },
    { "type": "tasks", "large": true, "aria_label": "Tasks", "attrs": { "title": "Tasks" } }
]"#;

fn large_entries() -> Vec<ActivityButtonEntry> {
    match ActivityButtonEntry::from_json_list(LARGE_TOOLBAR) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("activity showcase toolbar config failed: {err}");
            Vec::new()
        }
    }
}

/// Human label shown in the title tooltip of the default section.
fn display_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Chat => "Chat",
        ActivityKind::Camera => "Camera",
        ActivityKind::Meetings => "Meetings",
        ActivityKind::Whiteboard => "Whiteboard",
        ActivityKind::Files => "Files",
        ActivityKind::ShareScreen => "Share",
        ActivityKind::Tasks => "Tasks",
    }
}

#[component]
fn ShowcaseSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="activity-showcase__section" data-ui-kind="showcase-section">
            <h2 class="activity-showcase__title">{title}</h2>
            <div class="activity-showcase__row">{children()}</div>
        </section>
    }
}

#[component]
/// Activity button showcase contents.
pub fn ActivityShowcase() -> impl IntoView {
    let last_clicked = create_rw_signal::<Option<String>>(None);
    let record = move |label: String| last_clicked.set(Some(label));

    let default_buttons = ActivityKind::ALL
        .into_iter()
        .map(|kind| {
            let on_click = Callback::new(move |_: MouseEvent| record(kind.to_string()));
            let attrs =
                PassthroughAttrs::new().with(PassthroughAttr::Title, display_label(kind));
            // Chat demonstrates overriding the derived label.
            let aria_label = if kind == ActivityKind::Chat {
                "Open chat"
            } else {
                ""
            };
            view! { <ActivityButton activity=kind aria_label attrs on_click /> }
        })
        .collect_view();

    let on_select = Callback::new(move |kind: ActivityKind| record(format!("{kind} (large)")));

    let left_arrow =
        CustomActivity::new(|| view! { <Icon name="arrow-left_32" /> }).with_color("mint");
    let keyboard =
        CustomActivity::new(|| view! { <Icon name="keyboard_16" /> }).with_color("red");

    view! {
        <div class="activity-showcase" data-ui-kind="showcase">
            <ShowcaseSection title="Default">{default_buttons}</ShowcaseSection>
            <ShowcaseSection title="Large">
                <ActivityToolbar entries=large_entries() on_select aria_label="Large activities" />
            </ShowcaseSection>
            <ShowcaseSection title="Custom">
                <ActivityButton
                    activity=left_arrow
                    large=true
                    aria_label="Left Arrow"
                    on_click=Callback::new(move |_: MouseEvent| record("Left Arrow".to_string()))
                />
                <ActivityButton
                    activity=keyboard
                    aria_label="Keyboard"
                    on_click=Callback::new(move |_: MouseEvent| record("Keyboard".to_string()))
                />
                <ActivityButton
                    activity=ActivityKind::Files
                    disabled=true
                    class_name="activity-showcase__disabled"
                />
            </ShowcaseSection>
            <p class="activity-showcase__status" role="status">
                {move || match last_clicked.get() {
                    Some(label) => format!("Last activity: {label}"),
                    None => "No activity selected".to_string(),
                }}
            </p>
        </div>
    }
}
