//! Contract types between the desktop window manager and hosted applications.
//!
//! The window manager treats hosted content as opaque: it resolves an
//! [`ApplicationId`] to an [`AppModule`], mounts the module into a window
//! body with an [`AppMountContext`], and from then on only pushes
//! [`AppLifecycleEvent`]s through the context's lifecycle signal. Unmounting
//! is implicit in view teardown when the owning window closes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{ReadSignal, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window, as seen by hosted apps.
pub type WindowRuntimeId = u64;

/// Canonical string identifier for a hosted application.
///
/// Valid ids are two or more dot-separated lowercase segments
/// (`webtop.calculator`). The policy keeps ids usable as DOM data
/// attributes and log tokens without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an application id when `raw` conforms to the dotted-segment policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for trusted compile-time constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }
    let mut segments = 0usize;
    for segment in raw.split('.') {
        segments += 1;
        if segment.is_empty() || segment.len() > 32 || segment.ends_with('-') {
            return false;
        }
        if !segment.as_bytes()[0].is_ascii_lowercase() {
            return false;
        }
        if !segment
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return false;
        }
    }
    segments >= 2
}

/// Lifecycle events emitted by the window manager for a hosted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppLifecycleEvent {
    /// App view has been mounted into a managed window.
    Mounted,
    /// Window became the active window.
    Focused,
    /// Window stopped being the active window.
    Blurred,
    /// Window was minimized.
    Minimized,
    /// Window was restored from the minimized state.
    Restored,
    /// Window close sequence started; the view is about to be dropped.
    Closing,
}

impl AppLifecycleEvent {
    /// Stable string token for logging and debugging hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Focused => "focused",
            Self::Blurred => "blurred",
            Self::Minimized => "minimized",
            Self::Restored => "restored",
            Self::Closing => "closing",
        }
    }
}

/// Per-window context injected by the window manager at mount time.
#[derive(Clone)]
pub struct AppMountContext {
    /// Canonical id of the mounted application.
    pub app_id: ApplicationId,
    /// Stable id of the hosting window.
    pub window_id: WindowRuntimeId,
    /// Launch parameters supplied at window-open time; `Value::Null` when absent.
    pub launch_params: Value,
    /// Reactive lifecycle feed for this window.
    pub lifecycle: ReadSignal<AppLifecycleEvent>,
}

/// Static mount function used by the application catalog.
pub type AppMountFn = fn(AppMountContext) -> View;

/// Mountable application module, the single capability the manager invokes.
#[derive(Debug, Clone, Copy)]
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the application view with a manager-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
