use super::*;

use shell_ui::{Dock, DockItem};

const MAGNIFY_RADIUS_PX: f64 = 150.0;
const MAGNIFY_BOOST: f64 = 0.5;
const MAGNIFY_LIFT_PX: f64 = -10.0;

/// Scale for a dock item whose center sits `distance_px` from the pointer.
/// Peaks at `1.0 + MAGNIFY_BOOST` under the pointer and decays linearly to
/// `1.0` at `MAGNIFY_RADIUS_PX`.
fn magnify_scale(distance_px: f64) -> f64 {
    1.0 + MAGNIFY_BOOST * (1.0 - distance_px.abs() / MAGNIFY_RADIUS_PX).max(0.0)
}

fn dock_item_style(distance_px: Option<f64>) -> String {
    match distance_px {
        Some(distance_px) => {
            let scale = magnify_scale(distance_px);
            let lift = (scale - 1.0) / MAGNIFY_BOOST * MAGNIFY_LIFT_PX;
            format!("transform:translateY({lift:.2}px) scale({scale:.3});")
        }
        None => String::new(),
    }
}

fn dock_item_center_x(item_ref: NodeRef<html::Button>) -> Option<f64> {
    let rect = item_ref.get()?.get_bounding_client_rect();
    Some(rect.left() + rect.width() / 2.0)
}

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let pointer_x = create_rw_signal(None::<f64>);

    view! {
        <Dock
            role="toolbar"
            aria_label="App dock"
            on_pointermove=Callback::new(move |ev: web_sys::PointerEvent| {
                pointer_x.set(Some(f64::from(ev.client_x())));
            })
            on_pointerleave=Callback::new(move |_: web_sys::PointerEvent| {
                pointer_x.set(None);
            })
        >
            <For
                each=move || apps::app_catalog().to_vec()
                key=|app| app.app_id.slug()
                let:app
            >
                <DockAppItem app_id=app.app_id pointer_x=pointer_x.read_only() />
            </For>
        </Dock>
    }
}

#[component]
fn DockAppItem(app_id: AppId, pointer_x: ReadSignal<Option<f64>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let item_ref = create_node_ref::<html::Button>();

    let running = Signal::derive(move || state.with(|state| state.has_window_for_app(app_id)));
    let label = Signal::derive(move || {
        if running.get() {
            format!("Focus {}", app_id.title())
        } else {
            format!("Open {}", app_id.title())
        }
    });
    let style = Signal::derive(move || {
        let distance = pointer_x.get().and_then(|pointer_x| {
            dock_item_center_x(item_ref).map(|center_x| pointer_x - center_x)
        });
        dock_item_style(distance)
    });

    // Clicking an item focuses the app's frontmost window when one is open,
    // restoring it if minimized; otherwise it launches a fresh window.
    let activate = move |_: web_sys::MouseEvent| {
        let target =
            state.with_untracked(|state| state.frontmost_window_for_app(app_id).map(|win| win.id));
        match target {
            Some(window_id) => runtime.dispatch_action(DesktopAction::FocusWindow { window_id }),
            None => {
                runtime.dispatch_action(DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)))
            }
        }
    };

    view! {
        <DockItem
            node_ref=item_ref
            style=style
            aria_label=label
            title=app_id.title().to_string()
            data_app=app_id.slug().to_string()
            running=running
            on_click=Callback::new(activate)
        >
            <Icon icon=app_icon_name(app_id) size=IconSize::Lg />
        </DockItem>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn magnification_peaks_under_the_pointer() {
        assert_eq!(magnify_scale(0.0), 1.5);
    }

    #[test]
    fn magnification_decays_linearly_and_symmetrically() {
        assert_eq!(magnify_scale(75.0), 1.25);
        assert_eq!(magnify_scale(-75.0), 1.25);
        assert_eq!(magnify_scale(150.0), 1.0);
    }

    #[test]
    fn items_beyond_the_radius_stay_at_rest_scale() {
        assert_eq!(magnify_scale(400.0), 1.0);
        assert_eq!(magnify_scale(-1000.0), 1.0);
    }

    #[test]
    fn item_style_tracks_scale_and_lift() {
        assert_eq!(
            dock_item_style(Some(0.0)),
            "transform:translateY(-10.00px) scale(1.500);"
        );
        assert_eq!(dock_item_style(None), "");
    }
}
