use super::*;

use shell_ui::MenuBar;

#[component]
pub(super) fn DesktopMenuBar() -> impl IntoView {
    let state = use_desktop_runtime().state;

    let active_title = create_memo(move |_| {
        state.with(|state| state.active_window().map(|win| win.title.clone()))
    });

    view! {
        <MenuBar layout_class="desktop-menubar" role="menubar" aria_label="Desktop menu bar">
            <span class="menubar-brand">
                <Icon icon=IconName::AppGrid size=IconSize::Sm />
                <span>"Webtop"</span>
            </span>
            <span class="menubar-active-app" aria-live="polite">
                {move || active_title.get().unwrap_or_else(|| "Desktop".to_string())}
            </span>
        </MenuBar>
    }
}
