//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::DesktopDock, menu_bar::DesktopMenuBar, window::DesktopWindow};

use crate::{
    apps,
    model::{AppId, OpenWindowRequest, PointerPosition},
    reducer::DesktopAction,
};
use shell_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconName, IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn app_icon_name(app_id: AppId) -> IconName {
    IconName::from_token(app_id.icon_token()).unwrap_or(IconName::AppGrid)
}

#[component]
/// Renders the full desktop shell UI and routes global pointer events to the
/// active drag or resize session.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Pointer tracking hangs off the browser window so a session keeps
    // updating when the pointer leaves the shell mid-drag, and pointercancel
    // reverts instead of committing.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateWindowDrag { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateWindowResize { pointer });
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        commit_active_pointer_interaction(runtime);
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        cancel_active_pointer_interaction(runtime);
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    view! {
        <DesktopRoot id="desktop-shell-root">
            <DesktopMenuBar />
            <DesktopBackdrop>
                <DesktopIconGrid>
                    <For
                        each=move || apps::desktop_icon_apps()
                        key=|app| app.app_id.slug()
                        let:app
                    >
                        {{
                            let app_id = app.app_id;
                            view! {
                                <DesktopIconButton
                                    title=app_id.title()
                                    aria_label=format!("Open {}", app_id.title())
                                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                        // Keyboard activation of the button fires a click with
                                        // detail 0; mouse clicks wait for dblclick.
                                        if ev.detail() == 0 {
                                            runtime
                                                .dispatch_action(
                                                    DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)),
                                                );
                                        }
                                    })
                                    on_dblclick=Callback::new(move |_| {
                                        runtime
                                            .dispatch_action(
                                                DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)),
                                            );
                                    })
                                >
                                    <span>
                                        <Icon icon=app_icon_name(app_id) size=IconSize::Lg />
                                    </span>
                                    <span>{app_id.title()}</span>
                                </DesktopIconButton>
                            }
                        }}
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.get().windows
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopDock />
        </DesktopRoot>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn commit_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndWindowDrag);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndWindowResize);
    }
}

fn cancel_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::CancelWindowDrag);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::CancelWindowResize);
    }
}
