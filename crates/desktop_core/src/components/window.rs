use super::*;

use app_contract::AppMountContext;
use shell_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    app_runtime::ensure_window_session,
    model::{InteractionState, Window, WindowId},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline style for a window frame. An active drag or resize session for this
/// window overrides the committed geometry; the registry itself is untouched
/// until the session commits.
fn window_style(window: &Window, interaction: &InteractionState) -> String {
    if window.maximized {
        return format!("inset:0;z-index:{};", window.z_index);
    }

    let mut geometry = window.geometry;
    if let Some(position) = interaction.drag_preview(window.id) {
        geometry.position = position;
    }
    if let Some(size) = interaction.resize_preview(window.id) {
        geometry.size = size;
    }

    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        geometry.position.x,
        geometry.position.y,
        geometry.size.width,
        geometry.size.height,
        window.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|state| state.window(window_id).cloned()));
    let rendered = create_memo(move |_| {
        window.with(|win| win.as_ref().map(|win| !win.minimized).unwrap_or(false))
    });
    let focused = Signal::derive(move || {
        state.with(|state| state.active_window_id == Some(window_id))
    });
    let maximized = Signal::derive(move || {
        window.with(|win| win.as_ref().map(|win| win.maximized).unwrap_or(false))
    });
    let title = Signal::derive(move || {
        window.with(|win| win.as_ref().map(|win| win.title.clone()).unwrap_or_default())
    });
    let style = Signal::derive(move || {
        window.with(|win| {
            let Some(win) = win.as_ref() else {
                return String::new();
            };
            runtime
                .interaction
                .with(|interaction| window_style(win, interaction))
        })
    });
    // Window icons are fixed at open, so a snapshot read is enough.
    let icon = state.with_untracked(|state| {
        state
            .window(window_id)
            .and_then(|win| IconName::from_token(&win.icon_id))
            .unwrap_or(IconName::AppGrid)
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        // A maximized titlebar cannot start a drag; the pointerdown falls
        // through to the frame's focus handler instead.
        if maximized.get() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowResize {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow { window_id });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };
    let maximize_label = Signal::derive(move || {
        if maximized.get() {
            "Restore window".to_string()
        } else {
            "Maximize window".to_string()
        }
    });

    view! {
        <Show when=move || rendered.get() fallback=|| ()>
            <WindowFrame
                style=style
                aria_label=title
                focused=focused
                maximized=maximized
                on_pointerdown=Callback::new(focus)
            >
                <WindowTitleBar
                    on_pointerdown=Callback::new(begin_drag)
                    on_dblclick=Callback::new(titlebar_double_click)
                >
                    <WindowTitle>
                        <span class="titlebar-app-icon" aria-hidden="true">
                            <Icon icon=icon size=IconSize::Sm />
                        </span>
                        <span>{move || title.get()}</span>
                    </WindowTitle>
                    <WindowControls>
                        <WindowControlButton
                            aria_label="Minimize window".to_string()
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                            })
                        >
                            <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </WindowControlButton>
                        <WindowControlButton
                            aria_label=maximize_label
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            })
                        >
                            {move || {
                                let icon = if maximized.get() {
                                    IconName::WindowRestore
                                } else {
                                    IconName::WindowMaximize
                                };
                                view! { <Icon icon=icon size=IconSize::Xs /> }
                            }}
                        </WindowControlButton>
                        <WindowControlButton
                            aria_label="Close window".to_string()
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                            })
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Xs />
                        </WindowControlButton>
                    </WindowControls>
                </WindowTitleBar>
                <AppWindowBody window_id=window_id />
                <Show when=move || !maximized.get() fallback=|| ()>
                    <ResizeHandle
                        edge="south-east"
                        on_pointerdown=Callback::new(begin_resize)
                    />
                </Show>
            </WindowFrame>
        </Show>
    }
}

#[component]
fn AppWindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = ensure_window_session(runtime, window_id);
    let lifecycle = session.lifecycle.read_only();
    let contents = runtime
        .state
        .get_untracked()
        .windows
        .into_iter()
        .find(|win| win.id == window_id)
        .map(|win| {
            let descriptor = apps::app_descriptor(win.app_id);
            descriptor.module.mount(AppMountContext {
                app_id: win.app_id.application_id(),
                window_id: win.id.runtime_id(),
                launch_params: win.launch_params.clone(),
                lifecycle,
            })
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <WindowBody>{contents}</WindowBody> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::{
        DragSession, ResizeSession, WindowGeometry, WindowPosition, WindowSize,
    };

    fn notes_window() -> Window {
        Window {
            id: WindowId(7),
            app_id: AppId::Notes,
            title: "Notes".to_string(),
            icon_id: "notes".to_string(),
            geometry: WindowGeometry {
                position: WindowPosition { x: 50, y: 70 },
                size: WindowSize {
                    width: 320,
                    height: 420,
                },
            },
            z_index: 104,
            minimized: false,
            maximized: false,
            launch_params: Value::Null,
        }
    }

    #[test]
    fn idle_style_uses_committed_geometry() {
        let style = window_style(&notes_window(), &InteractionState::default());
        assert_eq!(style, "left:50px;top:70px;width:320px;height:420px;z-index:104;");
    }

    #[test]
    fn drag_preview_overrides_position_only() {
        let window = notes_window();
        let interaction = InteractionState {
            dragging: Some(DragSession {
                window_id: window.id,
                pointer_start: PointerPosition { x: 60, y: 80 },
                position_start: window.geometry.position,
                preview: WindowPosition { x: 150, y: 90 },
            }),
            resizing: None,
        };
        assert_eq!(
            window_style(&window, &interaction),
            "left:150px;top:90px;width:320px;height:420px;z-index:104;"
        );
    }

    #[test]
    fn resize_preview_overrides_size_only() {
        let window = notes_window();
        let interaction = InteractionState {
            dragging: None,
            resizing: Some(ResizeSession {
                window_id: window.id,
                pointer_start: PointerPosition { x: 370, y: 490 },
                size_start: window.geometry.size,
                preview: WindowSize {
                    width: 360,
                    height: 240,
                },
            }),
        };
        assert_eq!(
            window_style(&window, &interaction),
            "left:50px;top:70px;width:360px;height:240px;z-index:104;"
        );
    }

    #[test]
    fn preview_for_another_window_is_ignored() {
        let window = notes_window();
        let interaction = InteractionState {
            dragging: Some(DragSession {
                window_id: WindowId(9),
                pointer_start: PointerPosition { x: 0, y: 0 },
                position_start: WindowPosition { x: 10, y: 10 },
                preview: WindowPosition { x: 999, y: 999 },
            }),
            resizing: None,
        };
        assert_eq!(
            window_style(&window, &interaction),
            "left:50px;top:70px;width:320px;height:420px;z-index:104;"
        );
    }

    #[test]
    fn maximized_style_fills_the_layer() {
        let mut window = notes_window();
        window.maximized = true;
        assert_eq!(
            window_style(&window, &InteractionState::default()),
            "inset:0;z-index:104;"
        );
    }
}
