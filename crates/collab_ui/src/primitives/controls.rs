use super::*;

/// Composes the root class list of [`Button`].
///
/// `class_name` is appended last so caller styles can override the shape and
/// color modifiers.
pub fn button_class(class_name: &str, circle: bool, color: Option<&str>) -> String {
    let mut classes = String::from("cui-button");
    if circle {
        push_class(&mut classes, "cui-button--circle");
    }
    if let Some(color) = color.filter(|color| !color.trim().is_empty()) {
        push_class(&mut classes, &format!("cui-button--{}", color.trim()));
    }
    push_class(&mut classes, class_name);
    classes
}

#[component]
/// Shared button primitive owning shape, color, disabled state, ARIA label and
/// click forwarding for the controls built on top of it.
pub fn Button(
    /// Extra classes appended after the primitive's own modifiers.
    #[prop(optional, into)]
    class_name: String,
    /// Renders the circular shape.
    #[prop(optional)]
    circle: bool,
    /// Color token applied as a `cui-button--<color>` modifier.
    #[prop(optional_no_strip)]
    color: Option<String>,
    /// Wraps the button in the large container.
    #[prop(optional)]
    container_large: bool,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional_no_strip)] on_click: Option<Callback<MouseEvent>>,
    /// Allow-listed attributes set verbatim on the `<button>` element.
    #[prop(optional)]
    attrs: PassthroughAttrs,
    children: Children,
) -> impl IntoView {
    let class = button_class(&class_name, circle, color.as_deref());
    let shape = ButtonShape::from_circle(circle);

    let attrs: Vec<(&'static str, Attribute)> = attrs
        .iter()
        .map(|(name, value)| (name, value.to_string().into_attribute()))
        .collect();

    let button = view! {
        <button
            {..attrs}
            type="button"
            class=class
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-shape=shape.token()
            data-ui-color=color
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| forward_event(on_click.as_ref(), ev)
        >
            {children()}
        </button>
    };

    if container_large {
        view! { <div class="cui-button__container--large">{button}</div> }.into_view()
    } else {
        button.into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_and_color_modifiers_precede_caller_class() {
        assert_eq!(
            button_class("cui-activity", true, Some("mint")),
            "cui-button cui-button--circle cui-button--mint cui-activity"
        );
    }

    #[test]
    fn missing_or_blank_color_adds_no_modifier() {
        assert_eq!(button_class("", false, None), "cui-button");
        assert_eq!(button_class("", true, Some(" ")), "cui-button cui-button--circle");
    }
}
