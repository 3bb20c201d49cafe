use desktop_core::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Webtop" />
        <Meta name="description" content="A desktop operating-system shell simulated in the browser." />

        <main class="site-root">
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
