//! Runtime app-session state owned by the desktop shell.

use std::collections::{BTreeSet, HashMap};

use app_contract::AppLifecycleEvent;
use leptos::*;

use crate::model::{Window, WindowId};
use crate::runtime_context::DesktopRuntimeContext;

#[derive(Clone, Copy)]
/// Reactive per-window app session signals.
pub struct WindowAppSession {
    /// Latest lifecycle signal value for the window.
    pub lifecycle: RwSignal<AppLifecycleEvent>,
}

#[derive(Default)]
/// Runtime-owned app session state.
pub struct AppRuntimeState {
    sessions: HashMap<WindowId, WindowAppSession>,
}

impl AppRuntimeState {
    fn ensure_session(&mut self, window_id: WindowId) -> WindowAppSession {
        if let Some(session) = self.sessions.get(&window_id).copied() {
            return session;
        }

        let session = WindowAppSession {
            lifecycle: create_rw_signal(AppLifecycleEvent::Mounted),
        };
        self.sessions.insert(window_id, session);
        session
    }

    fn set_lifecycle(&mut self, window_id: WindowId, event: AppLifecycleEvent) {
        let session = self.ensure_session(window_id);
        session.lifecycle.set(event);
    }

    fn sync_windows(&mut self, windows: &[Window]) {
        let open: BTreeSet<WindowId> = windows.iter().map(|window| window.id).collect();

        for window_id in &open {
            self.ensure_session(*window_id);
        }

        self.sessions.retain(|window_id, _| open.contains(window_id));
    }
}

/// Ensures and returns a per-window runtime app session.
///
/// Session signals are created under the provider's owner so they survive
/// window-body unmounts; a minimized window drops its view but keeps its
/// session until close.
pub fn ensure_window_session(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
) -> WindowAppSession {
    if let Some(session) = runtime
        .app_runtime
        .with_untracked(|state| state.sessions.get(&window_id).copied())
    {
        return session;
    }

    with_owner(runtime.owner, move || {
        let mut session = None;
        runtime.app_runtime.update(|state| {
            session = Some(state.ensure_session(window_id));
        });
        session.expect("window app session ensured")
    })
}

/// Applies an app lifecycle event to a window session.
pub fn set_window_lifecycle(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    event: AppLifecycleEvent,
) {
    with_owner(runtime.owner, move || {
        runtime
            .app_runtime
            .update(|state| state.set_lifecycle(window_id, event));
    });
}

/// Syncs app runtime session state with currently open windows.
///
/// Runs after queued lifecycle effects drain so a `Closing` event reaches the
/// session before the session is dropped.
pub fn sync_runtime_sessions(runtime: DesktopRuntimeContext, windows: &[Window]) {
    with_owner(runtime.owner, || {
        runtime
            .app_runtime
            .update(|state| state.sync_windows(windows));
    });
}
