//! Shared UI primitive library for the desktop shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Shell
//! components compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, Dock, DockItem, LayoutGap, LayoutPadding, MenuBar,
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
        DesktopRoot, DesktopWindowLayer, Dock, DockItem, Icon, IconName, IconSize, LayoutGap,
        LayoutPadding, MenuBar, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
        WindowFrame, WindowTitle, WindowTitleBar,
    };
}
