pub mod apps;
pub mod components;
pub mod model;
pub mod reducer;

mod app_runtime;
mod effect_executor;
mod runtime_context;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
