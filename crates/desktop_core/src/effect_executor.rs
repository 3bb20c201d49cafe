//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::app_runtime::{set_window_lifecycle, sync_runtime_sessions};
use crate::reducer::RuntimeEffect;
use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            match effect {
                RuntimeEffect::AppLifecycle { window_id, event } => {
                    set_window_lifecycle(runtime, window_id, event);
                }
            }
        }

        // Sessions are pruned only after the drain so `Closing` still reaches
        // windows that were just removed from the registry.
        runtime.state.with_untracked(|state| {
            sync_runtime_sessions(runtime, &state.windows);
        });
    });
}
