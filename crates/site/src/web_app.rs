use activity_showcase::ActivityShowcase;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Activity Buttons" />
        <Meta name="description" content="Circular activity buttons for collaboration toolbars." />

        <main class="site-root">
            <ActivityShowcase />
        </main>
    }
}
