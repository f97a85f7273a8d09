use std::fmt;

use leptos::ev::MouseEvent;
use leptos::*;

use super::ActivityType;
use crate::primitives::push_class;
use crate::{Button, GlyphSize, Icon, PassthroughAttrs};

/// Content placed inside an activity button.
#[derive(Clone)]
pub enum ActivityContent {
    /// Icon-font glyph looked up by name.
    Glyph(String),
    /// Caller-supplied icon, rendered as-is.
    Custom(ViewFn),
}

impl ActivityContent {
    /// Glyph name, when the content is a looked-up glyph.
    pub fn glyph(&self) -> Option<&str> {
        match self {
            Self::Glyph(name) => Some(name),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Debug for ActivityContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glyph(name) => f.debug_tuple("Glyph").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl IntoView for ActivityContent {
    fn into_view(self) -> View {
        match self {
            Self::Glyph(name) => view! { <Icon name /> }.into_view(),
            Self::Custom(icon) => icon.run(),
        }
    }
}

/// Everything [`ActivityButton`] hands to the button primitive, derived from
/// its props alone.
#[derive(Debug, Clone)]
pub struct ActivityButtonPlan {
    /// Full class list passed to the primitive.
    pub class: String,
    /// Accessible label; empty when nothing sensible can be derived.
    pub aria_label: String,
    /// Color token for custom activities.
    pub color: Option<String>,
    /// Whether the primitive should use its large container.
    pub container_large: bool,
    /// Child content.
    pub content: ActivityContent,
}

impl ActivityButtonPlan {
    /// Resolves the primitive configuration for an activity button.
    ///
    /// The class list is `cui-activity`, then `cui-activity__<token>` for
    /// predefined activities, `cui-activity--large` when `large`, then
    /// `class_name`, trimmed and skipped when blank. An explicit `aria_label`
    /// always wins; otherwise
    /// predefined activities are labelled with their token and custom ones
    /// stay unlabelled.
    pub fn resolve(
        activity: &ActivityType,
        large: bool,
        class_name: &str,
        aria_label: &str,
    ) -> Self {
        let mut class = String::from("cui-activity");
        if let ActivityType::Named(kind) = activity {
            push_class(&mut class, &format!("cui-activity__{}", kind.token()));
        }
        if large {
            push_class(&mut class, "cui-activity--large");
        }
        push_class(&mut class, class_name);

        let aria_label = match activity {
            _ if !aria_label.is_empty() => aria_label.to_string(),
            ActivityType::Named(kind) => kind.token().to_string(),
            ActivityType::Custom(_) => String::new(),
        };

        let content = match activity {
            ActivityType::Named(kind) => {
                ActivityContent::Glyph(kind.glyph(GlyphSize::for_large(large)))
            }
            ActivityType::Custom(custom) => ActivityContent::Custom(custom.icon.clone()),
        };

        Self {
            class,
            aria_label,
            color: activity.color().map(str::to_string),
            container_large: large,
            content,
        }
    }
}

#[component]
/// Circular button for a predefined or custom activity.
pub fn ActivityButton(
    /// Activity to show.
    #[prop(into)]
    activity: ActivityType,
    /// Large size variant.
    #[prop(optional)]
    large: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Extra classes appended to the derived class list.
    #[prop(optional, into)]
    class_name: String,
    /// Accessible label; defaults to the activity token for predefined activities.
    #[prop(optional, into)]
    aria_label: String,
    /// Allow-listed attributes forwarded to the button element.
    #[prop(optional)]
    attrs: PassthroughAttrs,
) -> impl IntoView {
    let ActivityButtonPlan {
        class,
        aria_label,
        color,
        container_large,
        content,
    } = ActivityButtonPlan::resolve(&activity, large, &class_name, &aria_label);

    view! {
        <Button
            class_name=class
            circle=true
            color
            container_large
            aria_label
            disabled
            on_click
            attrs
        >
            {content}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ActivityKind, CustomActivity};

    fn named(kind: ActivityKind) -> ActivityType {
        ActivityType::Named(kind)
    }

    #[cfg(feature = "ssr")]
    fn render<N: IntoView>(view: impl FnOnce() -> N + 'static) -> String {
        leptos::ssr::render_to_string(view).to_string()
    }

    #[test]
    fn named_activities_get_modifier_and_regular_glyph() {
        for kind in ActivityKind::ALL {
            let plan = ActivityButtonPlan::resolve(&named(kind), false, "", "");
            assert_eq!(plan.class, format!("cui-activity cui-activity__{}", kind.token()));
            assert_eq!(plan.content.glyph(), Some(format!("{}_28", kind.token()).as_str()));
            assert_eq!(plan.color, None);
            assert!(!plan.container_large);
        }
    }

    #[test]
    fn large_appends_modifier_and_switches_glyph() {
        for kind in ActivityKind::ALL {
            let plan = ActivityButtonPlan::resolve(&named(kind), true, "", "");
            assert_eq!(
                plan.class,
                format!("cui-activity cui-activity__{} cui-activity--large", kind.token())
            );
            assert_eq!(plan.content.glyph(), Some(format!("{}_36", kind.token()).as_str()));
            assert!(plan.container_large);
        }
    }

    #[test]
    fn custom_activity_passes_color_and_icon_through() {
        let _ = leptos::create_runtime();
        let renders = Rc::new(Cell::new(0_u32));
        let icon = {
            let renders = Rc::clone(&renders);
            move || renders.set(renders.get() + 1)
        };
        let activity = ActivityType::from(CustomActivity::new(icon).with_color("mint"));

        let plan = ActivityButtonPlan::resolve(&activity, true, "", "");

        assert_eq!(plan.class, "cui-activity cui-activity--large");
        assert_eq!(plan.color.as_deref(), Some("mint"));
        assert_eq!(plan.content.glyph(), None);
        assert!(matches!(plan.content, ActivityContent::Custom(_)));

        let _ = plan.content.into_view();
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn explicit_label_overrides_defaults() {
        let _ = leptos::create_runtime();
        let chat =
            ActivityButtonPlan::resolve(&named(ActivityKind::Chat), false, "", "Open chat");
        assert_eq!(chat.aria_label, "Open chat");

        let custom = ActivityType::from(CustomActivity::new(|| ()));
        let plan = ActivityButtonPlan::resolve(&custom, false, "", "Keyboard");
        assert_eq!(plan.aria_label, "Keyboard");
    }

    #[test]
    fn label_falls_back_to_token_or_empty() {
        let _ = leptos::create_runtime();
        let chat = ActivityButtonPlan::resolve(&named(ActivityKind::Chat), false, "", "");
        assert_eq!(chat.aria_label, "chat");

        let custom = ActivityType::from(CustomActivity::new(|| ()).with_color("red"));
        let plan = ActivityButtonPlan::resolve(&custom, false, "", "");
        assert_eq!(plan.aria_label, "");
    }

    #[test]
    fn caller_class_is_always_appended_last() {
        let _ = leptos::create_runtime();
        let regular =
            ActivityButtonPlan::resolve(&named(ActivityKind::Files), false, "foo", "");
        assert_eq!(regular.class, "cui-activity cui-activity__files foo");

        let large = ActivityButtonPlan::resolve(&named(ActivityKind::Files), true, "foo", "");
        assert_eq!(
            large.class,
            "cui-activity cui-activity__files cui-activity--large foo"
        );

        let custom = ActivityType::from(CustomActivity::new(|| ()));
        let plan = ActivityButtonPlan::resolve(&custom, false, "foo", "");
        assert_eq!(plan.class, "cui-activity foo");
    }

    #[test]
    fn blank_caller_class_is_dropped_and_padding_trimmed() {
        let blank = ActivityButtonPlan::resolve(&named(ActivityKind::Chat), false, "   ", "");
        assert_eq!(blank.class, "cui-activity cui-activity__chat");

        let padded = ActivityButtonPlan::resolve(&named(ActivityKind::Chat), false, " foo ", "");
        assert_eq!(padded.class, "cui-activity cui-activity__chat foo");
    }

    #[test]
    fn resolving_twice_is_deterministic() {
        let _ = leptos::create_runtime();
        let activities = [
            named(ActivityKind::Meetings),
            ActivityType::from(CustomActivity::new(|| ()).with_color("mint")),
        ];
        for activity in &activities {
            let first = ActivityButtonPlan::resolve(activity, true, "toolbar-item", "");
            let second = ActivityButtonPlan::resolve(activity, true, "toolbar-item", "");
            assert_eq!(first.class, second.class);
            assert_eq!(first.aria_label, second.aria_label);
            assert_eq!(first.color, second.color);
            assert_eq!(first.content.glyph(), second.content.glyph());
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn rendered_named_button_forwards_state_to_primitive() {
        let html = render(|| {
            let attrs = PassthroughAttrs::new()
                .with(crate::PassthroughAttr::Id, "chat-button")
                .with(crate::PassthroughAttr::Title, "Chat");
            view! {
                <ActivityButton activity=ActivityKind::Chat large=true disabled=true attrs />
            }
        });

        assert!(html.contains("cui-button__container--large"), "{html}");
        assert!(
            html.contains(
                "cui-button cui-button--circle cui-activity cui-activity__chat cui-activity--large"
            ),
            "{html}"
        );
        assert!(html.contains(r#"aria-label="chat""#), "{html}");
        assert!(html.contains(r#"disabled="""#), "{html}");
        assert!(html.contains(r#"data-ui-disabled="true""#), "{html}");
        assert!(html.contains(r#"data-icon="chat_36""#), "{html}");
        assert!(html.contains(r#"id="chat-button""#), "{html}");
        assert!(html.contains(r#"title="Chat""#), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn rendered_custom_button_uses_caller_icon_and_color() {
        let html = render(|| {
            let keyboard = CustomActivity::new(|| view! { <Icon name="keyboard_16" /> })
                .with_color("red");
            view! { <ActivityButton activity=keyboard aria_label="Keyboard" class_name="foo" /> }
        });

        assert!(
            html.contains("cui-button cui-button--circle cui-button--red cui-activity foo"),
            "{html}"
        );
        assert!(!html.contains(r#"disabled="""#), "{html}");
        assert!(html.contains(r#"data-ui-color="red""#), "{html}");
        assert!(html.contains(r#"aria-label="Keyboard""#), "{html}");
        assert!(html.contains(r#"data-icon="keyboard_16""#), "{html}");
        assert!(html.contains(r#"data-ui-disabled="false""#), "{html}");
        assert!(!html.contains("cui-button__container--large"), "{html}");
        assert!(!html.contains("cui-activity__"), "{html}");
    }
}
