//! Reducer actions, side-effect intents, and transition logic for the window registry.

use app_contract::AppLifecycleEvent;
use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition, ResizeSession,
    Window, WindowGeometry, WindowId, WindowPosition, WindowSize, CASCADE_ORIGIN_X,
    CASCADE_ORIGIN_Y, CASCADE_STEP, CASCADE_WRAP, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    Z_INDEX_BASE,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (raise and activate) a window by id, restoring it if minimized.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and normal presentation.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Commit a new position for a window.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left position.
        position: WindowPosition,
    },
    /// Commit a new size for a window.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New outer size.
        size: WindowSize,
    },
    /// Begin dragging a window by its title bar.
    BeginWindowDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the in-progress drag preview.
    UpdateWindowDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the active drag session's preview position.
    EndWindowDrag,
    /// Discard the active drag session without committing.
    CancelWindowDrag,
    /// Begin resizing a window from its corner handle.
    BeginWindowResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update the in-progress resize preview.
    UpdateWindowResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the active resize session's preview size.
    EndWindowResize,
    /// Discard the active resize session without committing.
    CancelWindowResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Deliver a lifecycle event to the hosted app in `window_id`.
    AppLifecycle {
        /// Target window.
        window_id: WindowId,
        /// Event to deliver.
        event: AppLifecycleEvent,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry invariant violations; reachable only through an implementation defect.
pub enum InvariantViolation {
    /// Two open windows share a stacking index.
    #[error("duplicate z-index {z_index} among open windows")]
    DuplicateZIndex {
        /// The shared stacking index.
        z_index: i32,
    },
    /// The active id references a window that is not open.
    #[error("active window {window_id} is not open")]
    ActiveWindowMissing {
        /// The dangling id.
        window_id: u64,
    },
    /// The active id references a minimized window.
    #[error("active window {window_id} is minimized")]
    ActiveWindowMinimized {
        /// The minimized window's id.
        window_id: u64,
    },
    /// The stacking counter fell behind the frontmost window.
    #[error("z-index counter {counter} behind frontmost z-index {z_index}")]
    CounterBehind {
        /// Current counter value.
        counter: i32,
        /// Highest z-index among open windows.
        z_index: i32,
    },
}

/// Applies a [`DesktopAction`] to the window registry and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window management.
/// Actions referencing a window id that is no longer open are silent no-ops: a delayed
/// drag commit can legitimately race a close issued from another control, so a stale
/// reference is expected input, not an error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = next_window_id(state);
            let cascade = ((window_id.0.saturating_sub(1)) % CASCADE_WRAP) as i32 * CASCADE_STEP;
            let position = req.position.unwrap_or(WindowPosition {
                x: CASCADE_ORIGIN_X + cascade,
                y: CASCADE_ORIGIN_Y + cascade,
            });
            let size = req
                .size
                .unwrap_or_default()
                .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            let window = Window {
                id: window_id,
                app_id: req.app_id,
                title: req.title.unwrap_or_else(|| req.app_id.title().to_string()),
                icon_id: req
                    .icon_id
                    .unwrap_or_else(|| req.app_id.icon_token().to_string()),
                geometry: WindowGeometry { position, size },
                z_index: 0,
                minimized: false,
                maximized: false,
                launch_params: req.launch_params,
            };
            state.windows.push(window);
            focus_window_internal(state, window_id, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return effects;
            }
            if state.active_window_id == Some(window_id) {
                state.active_window_id = None;
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.resizing = None;
            }
            effects.push(RuntimeEffect::AppLifecycle {
                window_id,
                event: AppLifecycleEvent::Closing,
            });
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, window_id, &mut effects);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            if window.minimized {
                return effects;
            }
            window.minimized = true;
            if state.active_window_id == Some(window_id) {
                state.active_window_id = None;
                effects.push(RuntimeEffect::AppLifecycle {
                    window_id,
                    event: AppLifecycleEvent::Blurred,
                });
            }
            effects.push(RuntimeEffect::AppLifecycle {
                window_id,
                event: AppLifecycleEvent::Minimized,
            });
        }
        DesktopAction::ToggleMaximizeWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            // Stored geometry stays untouched; the maximized rectangle is a
            // presentation-layer override, so toggling back restores exactly.
            window.maximized = !window.maximized;
            focus_window_internal(state, window_id, &mut effects);
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                if !window.maximized {
                    window.geometry.position = position;
                }
            }
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            if let Some(window) = find_window_mut(state, window_id) {
                if !window.maximized {
                    window.geometry.size = size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                }
            }
        }
        DesktopAction::BeginWindowDrag { window_id, pointer } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if window.maximized {
                return effects;
            }
            let position_start = window.geometry.position;
            focus_window_internal(state, window_id, &mut effects);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
                preview: position_start,
            });
        }
        DesktopAction::UpdateWindowDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview = session.position_start.offset(dx, dy);
            }
        }
        DesktopAction::EndWindowDrag => {
            // `take` guarantees the commit fires at most once per session.
            if let Some(session) = interaction.dragging.take() {
                if let Some(window) = find_window_mut(state, session.window_id) {
                    if !window.maximized {
                        window.geometry.position = session.preview;
                    }
                }
            }
        }
        DesktopAction::CancelWindowDrag => {
            interaction.dragging = None;
        }
        DesktopAction::BeginWindowResize { window_id, pointer } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if window.maximized {
                return effects;
            }
            let size_start = window.geometry.size;
            focus_window_internal(state, window_id, &mut effects);
            interaction.resizing = Some(ResizeSession {
                window_id,
                pointer_start: pointer,
                size_start,
                preview: size_start,
            });
        }
        DesktopAction::UpdateWindowResize { pointer } => {
            if let Some(session) = interaction.resizing.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview = session
                    .size_start
                    .offset(dx, dy)
                    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            }
        }
        DesktopAction::EndWindowResize => {
            if let Some(session) = interaction.resizing.take() {
                if let Some(window) = find_window_mut(state, session.window_id) {
                    if !window.maximized {
                        window.geometry.size = session
                            .preview
                            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                    }
                }
            }
        }
        DesktopAction::CancelWindowResize => {
            interaction.resizing = None;
        }
    }
    effects
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut Window> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

fn bump_z_index(state: &mut DesktopState) -> i32 {
    state.z_index_counter = state.z_index_counter.saturating_add(1);
    state.z_index_counter
}

/// Raises, restores, and activates `window_id`; a silent no-op when absent.
fn focus_window_internal(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
    let Some(window) = state.windows.iter().find(|w| w.id == window_id) else {
        return;
    };
    let already_front = state.active_window_id == Some(window_id)
        && !window.minimized
        && window.z_index == top_z;
    if already_front {
        return;
    }
    let previous_active = state.active_window_id;
    let next_z = bump_z_index(state);
    let was_minimized = {
        let Some(window) = find_window_mut(state, window_id) else {
            return;
        };
        let was_minimized = window.minimized;
        window.z_index = next_z;
        window.minimized = false;
        was_minimized
    };
    state.active_window_id = Some(window_id);

    if let Some(previous) = previous_active {
        if previous != window_id {
            effects.push(RuntimeEffect::AppLifecycle {
                window_id: previous,
                event: AppLifecycleEvent::Blurred,
            });
        }
    }
    if was_minimized {
        effects.push(RuntimeEffect::AppLifecycle {
            window_id,
            event: AppLifecycleEvent::Restored,
        });
    }
    if previous_active != Some(window_id) {
        effects.push(RuntimeEffect::AppLifecycle {
            window_id,
            event: AppLifecycleEvent::Focused,
        });
    }
}

/// Checks the registry invariants that every reachable state must satisfy.
///
/// A violation can only arise from a registry defect, never from user input;
/// callers treat it as an assertion failure in development and fall back to
/// [`heal_stacking`] in release builds.
pub fn check_invariants(state: &DesktopState) -> Result<(), InvariantViolation> {
    let mut seen = Vec::with_capacity(state.windows.len());
    for window in &state.windows {
        if seen.contains(&window.z_index) {
            return Err(InvariantViolation::DuplicateZIndex {
                z_index: window.z_index,
            });
        }
        seen.push(window.z_index);
        if window.z_index > state.z_index_counter {
            return Err(InvariantViolation::CounterBehind {
                counter: state.z_index_counter,
                z_index: window.z_index,
            });
        }
    }
    if let Some(active_id) = state.active_window_id {
        match state.window(active_id) {
            None => {
                return Err(InvariantViolation::ActiveWindowMissing {
                    window_id: active_id.0,
                })
            }
            Some(window) if window.minimized => {
                return Err(InvariantViolation::ActiveWindowMinimized {
                    window_id: active_id.0,
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Re-derives a consistent stacking order from the monotonic counter.
///
/// Windows keep their relative visual order (ties broken by id); each is
/// assigned a fresh counter value, and an active id that no longer references
/// an open, non-minimized window is cleared. Insertion order of the
/// collection is preserved.
pub fn heal_stacking(state: &mut DesktopState) {
    state.z_index_counter = state.z_index_counter.max(Z_INDEX_BASE);
    let mut stacking: Vec<(i32, WindowId)> =
        state.windows.iter().map(|w| (w.z_index, w.id)).collect();
    stacking.sort();
    for (_, window_id) in stacking {
        let next_z = bump_z_index(state);
        if let Some(window) = find_window_mut(state, window_id) {
            window.z_index = next_z;
        }
    }
    if let Some(active_id) = state.active_window_id {
        let valid = state
            .window(active_id)
            .is_some_and(|window| !window.minimized);
        if !valid {
            state.active_window_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{AppId, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_id: AppId,
    ) -> WindowId {
        let _ = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)),
        );
        state.windows.last().expect("window").id
    }

    fn window<'a>(state: &'a DesktopState, id: WindowId) -> &'a Window {
        state.window(id).expect("window present")
    }

    #[test]
    fn open_window_applies_cascade_defaults_and_activates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let first_window = window(&state, first);
        assert_eq!(first_window.geometry.position, WindowPosition { x: 50, y: 50 });
        assert_eq!(
            first_window.geometry.size,
            WindowSize {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            }
        );
        assert_eq!(first_window.z_index, Z_INDEX_BASE + 1);
        assert_eq!(first_window.title, "Calculator");

        let second_window = window(&state, second);
        assert_eq!(second_window.geometry.position, WindowPosition { x: 70, y: 70 });
        assert_eq!(second_window.z_index, Z_INDEX_BASE + 2);
        assert_eq!(state.active_window_id, Some(second));
    }

    #[test]
    fn open_window_honors_request_overrides() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let mut req = OpenWindowRequest::new(AppId::Notes);
        req.title = Some("Scratchpad".to_string());
        req.position = Some(WindowPosition { x: 300, y: 120 });
        req.size = Some(WindowSize {
            width: 640,
            height: 480,
        });
        req.launch_params = json!({ "slug": "scratch" });
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req));

        let opened = state.windows.last().expect("window");
        assert_eq!(opened.title, "Scratchpad");
        assert_eq!(opened.geometry.position, WindowPosition { x: 300, y: 120 });
        assert_eq!(
            opened.geometry.size,
            WindowSize {
                width: 640,
                height: 480,
            }
        );
        assert_eq!(opened.launch_params, json!({ "slug": "scratch" }));
    }

    #[test]
    fn open_window_clamps_undersized_requests() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let mut req = OpenWindowRequest::new(AppId::Calculator);
        req.size = Some(WindowSize {
            width: 10,
            height: 10,
        });
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req));

        let opened = state.windows.last().expect("window");
        assert_eq!(opened.geometry.size.width, MIN_WINDOW_WIDTH);
        assert_eq!(opened.geometry.size.height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn duplicate_opens_create_independent_instances() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Notes);
        let second = open(&mut state, &mut interaction, AppId::Notes);
        let third = open(&mut state, &mut interaction, AppId::Notes);

        assert_eq!(state.windows.len(), 3);
        let mut ids = vec![first, second, third];
        ids.dedup();
        assert_eq!(ids.len(), 3);
        let mut z_values: Vec<i32> = state.windows.iter().map(|w| w.z_index).collect();
        z_values.sort();
        z_values.dedup();
        assert_eq!(z_values.len(), 3);
    }

    #[test]
    fn focus_raises_window_and_activates_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: first },
        );

        assert_eq!(state.active_window_id, Some(first));
        let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap();
        assert_eq!(window(&state, first).z_index, top_z);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::AppLifecycle {
                    window_id: second,
                    event: AppLifecycleEvent::Blurred,
                },
                RuntimeEffect::AppLifecycle {
                    window_id: first,
                    event: AppLifecycleEvent::Focused,
                },
            ]
        );
    }

    #[test]
    fn focus_restores_minimized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Music);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );
        assert!(window(&state, win).minimized);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: win },
        );

        let restored = window(&state, win);
        assert!(!restored.minimized);
        assert_eq!(state.active_window_id, Some(win));
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::AppLifecycle {
                    window_id: win,
                    event: AppLifecycleEvent::Restored,
                },
                RuntimeEffect::AppLifecycle {
                    window_id: win,
                    event: AppLifecycleEvent::Focused,
                },
            ]
        );
    }

    #[test]
    fn focus_of_missing_window_is_silent_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let _ = open(&mut state, &mut interaction, AppId::Calculator);
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: WindowId(999),
            },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn focus_of_frontmost_active_window_short_circuits() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let _ = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: second },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn minimize_active_window_clears_active_without_promotion() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: second },
        );

        assert!(window(&state, second).minimized);
        assert_eq!(state.active_window_id, None);
        assert!(!window(&state, first).minimized);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::AppLifecycle {
                    window_id: second,
                    event: AppLifecycleEvent::Blurred,
                },
                RuntimeEffect::AppLifecycle {
                    window_id: second,
                    event: AppLifecycleEvent::Minimized,
                },
            ]
        );
    }

    #[test]
    fn minimize_background_window_keeps_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: first },
        );

        assert!(window(&state, first).minimized);
        assert_eq!(state.active_window_id, Some(second));
        assert_eq!(
            effects,
            vec![RuntimeEffect::AppLifecycle {
                window_id: first,
                event: AppLifecycleEvent::Minimized,
            }]
        );
    }

    #[test]
    fn minimize_is_idempotent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notes);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn maximize_toggle_preserves_stored_geometry_exactly() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Resume);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                position: WindowPosition { x: 123, y: 77 },
            },
        );
        let original = window(&state, win).geometry;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );
        assert!(window(&state, win).maximized);
        assert_eq!(window(&state, win).geometry, original);

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );
        assert!(!window(&state, win).maximized);
        assert_eq!(window(&state, win).geometry, original);
    }

    #[test]
    fn maximize_focuses_the_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let _ = open(&mut state, &mut interaction, AppId::Mail);

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: first },
        );

        assert_eq!(state.active_window_id, Some(first));
        let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap();
        assert_eq!(window(&state, first).z_index, top_z);
        assert!(window(&state, first).maximized);
    }

    #[test]
    fn maximize_of_minimized_window_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Music);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );

        let record = window(&state, win);
        assert!(record.maximized);
        assert!(!record.minimized);
        assert_eq!(state.active_window_id, Some(win));
    }

    #[test]
    fn move_commits_position_directly() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Calculator);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                position: WindowPosition { x: -30, y: 400 },
            },
        );

        assert_eq!(
            window(&state, win).geometry.position,
            WindowPosition { x: -30, y: 400 }
        );
    }

    #[test]
    fn move_of_maximized_window_is_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Calculator);
        let original = window(&state, win).geometry.position;
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                position: WindowPosition { x: 900, y: 900 },
            },
        );

        assert_eq!(window(&state, win).geometry.position, original);
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notes);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: win,
                size: WindowSize {
                    width: 1,
                    height: 5000,
                },
            },
        );

        assert_eq!(
            window(&state, win).geometry.size,
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: 5000,
            }
        );
    }

    #[test]
    fn resize_of_maximized_window_is_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notes);
        let original = window(&state, win).geometry.size;
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: win,
                size: WindowSize {
                    width: 800,
                    height: 600,
                },
            },
        );

        assert_eq!(window(&state, win).geometry.size, original);
    }

    #[test]
    fn close_removes_exactly_one_window_and_clears_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: second },
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, first);
        assert_eq!(state.active_window_id, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::AppLifecycle {
                window_id: second,
                event: AppLifecycleEvent::Closing,
            }]
        );
    }

    #[test]
    fn intents_after_close_are_silent_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Calculator);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );
        let before = state.clone();

        for action in [
            DesktopAction::FocusWindow { window_id: win },
            DesktopAction::MinimizeWindow { window_id: win },
            DesktopAction::ToggleMaximizeWindow { window_id: win },
            DesktopAction::MoveWindow {
                window_id: win,
                position: WindowPosition { x: 0, y: 0 },
            },
            DesktopAction::ResizeWindow {
                window_id: win,
                size: WindowSize {
                    width: 500,
                    height: 500,
                },
            },
            DesktopAction::CloseWindow { window_id: win },
        ] {
            let effects = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(state, before);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn window_ids_are_never_reused() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: first },
        );
        let second = open(&mut state, &mut interaction, AppId::Calculator);

        assert_ne!(first, second);
        assert!(second.0 > first.0);
    }

    #[test]
    fn drag_previews_without_touching_committed_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Calculator);
        let committed = window(&state, win).geometry.position;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowDrag {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );

        assert_eq!(window(&state, win).geometry.position, committed);
        assert_eq!(
            interaction.drag_preview(win),
            Some(committed.offset(25, 40))
        );
    }

    #[test]
    fn drag_end_commits_final_position_exactly_once() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Mail);
        let start = window(&state, win).geometry.position;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowDrag {
                window_id: win,
                pointer: PointerPosition { x: 100, y: 100 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 160, y: 80 },
            },
        );
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndWindowDrag);

        assert_eq!(
            window(&state, win).geometry.position,
            start.offset(60, -20)
        );
        assert_eq!(interaction.dragging, None);

        // A duplicate release event must not move the window again.
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndWindowDrag);
        assert_eq!(
            window(&state, win).geometry.position,
            start.offset(60, -20)
        );
    }

    #[test]
    fn drag_cancel_reverts_to_committed_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notes);
        let committed = window(&state, win).geometry.position;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowDrag {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::CancelWindowDrag);

        assert_eq!(window(&state, win).geometry.position, committed);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_does_not_start_on_maximized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Calculator);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximizeWindow { window_id: win },
        );

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowDrag {
                window_id: win,
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );

        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn closing_dragged_window_discards_the_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Music);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowDrag {
                window_id: win,
                pointer: PointerPosition { x: 1, y: 1 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );

        assert_eq!(interaction.dragging, None);

        // The release that races the close commits nothing.
        let before = state.clone();
        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndWindowDrag);
        assert_eq!(state, before);
    }

    #[test]
    fn resize_previews_clamp_to_minimum() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Mail);
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowResize {
                window_id: win,
                pointer: PointerPosition { x: 400, y: 400 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowResize {
                pointer: PointerPosition { x: -2000, y: -2000 },
            },
        );

        assert_eq!(
            interaction.resize_preview(win),
            Some(WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            })
        );
    }

    #[test]
    fn resize_end_commits_clamped_preview() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Resume);
        let start = window(&state, win).geometry.size;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowResize {
                window_id: win,
                pointer: PointerPosition { x: 350, y: 450 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowResize {
                pointer: PointerPosition { x: 470, y: 530 },
            },
        );
        assert_eq!(window(&state, win).geometry.size, start);

        let _ = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndWindowResize);
        assert_eq!(window(&state, win).geometry.size, start.offset(120, 80));
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn resize_cancel_reverts_to_committed_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notes);
        let committed = window(&state, win).geometry.size;

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWindowResize {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowResize {
                pointer: PointerPosition { x: 90, y: 60 },
            },
        );
        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CancelWindowResize,
        );

        assert_eq!(window(&state, win).geometry.size, committed);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn calculator_then_mail_focus_minimize_close_scenario() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let calc = open(&mut state, &mut interaction, AppId::Calculator);
        let mail = open(&mut state, &mut interaction, AppId::Mail);

        assert_eq!(state.windows.len(), 2);
        assert!(window(&state, mail).z_index > window(&state, calc).z_index);
        assert_eq!(state.active_window_id, Some(mail));

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: calc },
        );
        assert!(window(&state, calc).z_index > window(&state, mail).z_index);
        assert_eq!(state.active_window_id, Some(calc));

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: calc },
        );
        assert_eq!(state.active_window_id, None);
        assert!(!window(&state, mail).minimized);

        let _ = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: mail },
        );
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, calc);
        assert_eq!(state.active_window_id, None);
    }

    #[test]
    fn reducer_reachable_states_satisfy_invariants() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);
        let actions = [
            DesktopAction::FocusWindow { window_id: first },
            DesktopAction::MinimizeWindow { window_id: first },
            DesktopAction::FocusWindow { window_id: first },
            DesktopAction::ToggleMaximizeWindow { window_id: second },
            DesktopAction::ToggleMaximizeWindow { window_id: second },
            DesktopAction::BeginWindowDrag {
                window_id: second,
                pointer: PointerPosition { x: 4, y: 4 },
            },
            DesktopAction::UpdateWindowDrag {
                pointer: PointerPosition { x: 44, y: 24 },
            },
            DesktopAction::EndWindowDrag,
            DesktopAction::MinimizeWindow { window_id: second },
            DesktopAction::CloseWindow { window_id: first },
            DesktopAction::CloseWindow { window_id: second },
        ];

        for action in actions {
            let _ = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(check_invariants(&state), Ok(()));
        }
    }

    #[test]
    fn check_invariants_flags_corrupted_states() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);

        let mut duplicate_z = state.clone();
        let z = duplicate_z.window(first).unwrap().z_index;
        find_window_mut(&mut duplicate_z, second).unwrap().z_index = z;
        assert_eq!(
            check_invariants(&duplicate_z),
            Err(InvariantViolation::DuplicateZIndex { z_index: z })
        );

        let mut dangling_active = state.clone();
        dangling_active.active_window_id = Some(WindowId(42));
        assert_eq!(
            check_invariants(&dangling_active),
            Err(InvariantViolation::ActiveWindowMissing { window_id: 42 })
        );

        let mut minimized_active = state.clone();
        find_window_mut(&mut minimized_active, second)
            .unwrap()
            .minimized = true;
        assert_eq!(
            check_invariants(&minimized_active),
            Err(InvariantViolation::ActiveWindowMinimized {
                window_id: second.0
            })
        );

        let mut stale_counter = state.clone();
        stale_counter.z_index_counter = Z_INDEX_BASE;
        assert!(matches!(
            check_invariants(&stale_counter),
            Err(InvariantViolation::CounterBehind { .. })
        ));
    }

    #[test]
    fn heal_stacking_restores_a_valid_state() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction, AppId::Calculator);
        let second = open(&mut state, &mut interaction, AppId::Mail);
        let third = open(&mut state, &mut interaction, AppId::Notes);

        // Simulate a defect: duplicate z-indices and a minimized active window.
        find_window_mut(&mut state, first).unwrap().z_index = 7;
        find_window_mut(&mut state, second).unwrap().z_index = 7;
        find_window_mut(&mut state, third).unwrap().minimized = true;
        assert!(check_invariants(&state).is_err());

        let counter_before = state.z_index_counter;
        heal_stacking(&mut state);

        assert_eq!(check_invariants(&state), Ok(()));
        assert_eq!(state.active_window_id, None);
        assert!(state.z_index_counter > counter_before);
        // Ties resolve by id, so the earlier window stays behind.
        assert!(window(&state, first).z_index < window(&state, second).z_index);
        // Insertion order of the collection is untouched.
        let ids: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }
}
