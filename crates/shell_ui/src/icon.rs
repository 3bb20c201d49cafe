//! Centralized icon catalog for the desktop shell.
//!
//! Icons are inlined Fluent-style 24px SVG path data rendered through the
//! [`Icon`] component so every consumer shares one markup shape and one
//! `data-icon`/`data-size` CSS hook contract.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used across the shell and application chrome.
pub enum IconName {
    /// Calculator app icon.
    Calculator,
    /// Mail app icon.
    Mail,
    /// Notes app icon.
    Notes,
    /// Music app icon.
    MusicNote,
    /// Generic document icon.
    Document,
    /// Application grid / shell brand icon.
    AppGrid,
    /// Minimize window control.
    WindowMinimize,
    /// Maximize window control.
    WindowMaximize,
    /// Restore window control.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable string token for the icon, used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Mail => "mail",
            Self::Notes => "notes",
            Self::MusicNote => "music-note",
            Self::Document => "document",
            Self::AppGrid => "app-grid",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Resolves a stored icon token back to its [`IconName`].
    ///
    /// Window records carry icon identity as a plain string so shell state
    /// stays serializable; unknown tokens resolve to `None` and callers pick
    /// their own fallback glyph.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "calculator" => Self::Calculator,
            "mail" => Self::Mail,
            "notes" => Self::Notes,
            "music-note" => Self::MusicNote,
            "document" => Self::Document,
            "app-grid" => Self::AppGrid,
            "window-minimize" => Self::WindowMinimize,
            "window-maximize" => Self::WindowMaximize,
            "window-restore" => Self::WindowRestore,
            "dismiss" => Self::Dismiss,
            _ => return None,
        })
    }

    /// Raw SVG body markup for the icon.
    ///
    /// Most paths are copied from `@fluentui/svg-icons` regular 24px SVG
    /// assets; the remainder are drawn on the same 24px grid and stroke
    /// weight so mixed rows read as one family.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Calculator => {
                r#"<path d="M7.75 5C6.78 5 6 5.78 6 6.75v1c0 .97.78 1.75 1.75 1.75h5.5c.97 0 1.75-.78 1.75-1.75v-1C15 5.78 14.22 5 13.25 5h-5.5ZM7.5 6.75c0-.14.11-.25.25-.25h5.5c.14 0 .25.11.25.25v1c0 .14-.11.25-.25.25h-5.5a.25.25 0 0 1-.25-.25v-1Zm3 4a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM9.25 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM7 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM5.75 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM14 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm-1.25 4.75a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM6.14 2A3.14 3.14 0 0 0 3 5.14v11.22c0 1.74 1.4 3.14 3.14 3.14h8.72c1.74 0 3.14-1.4 3.14-3.14V5.14C18 3.4 16.6 2 14.86 2H6.14ZM4.5 5.14c0-.9.73-1.64 1.64-1.64h8.72c.9 0 1.64.73 1.64 1.64v11.22c0 .9-.73 1.64-1.64 1.64H6.14c-.9 0-1.64-.73-1.64-1.64V5.14Zm1.3 15.35c.45.9 1.38 1.51 2.46 1.51h6.99c2.9 0 5.25-2.35 5.25-5.25v-9.5c0-1.07-.62-2-1.51-2.46l.01.35V16.75a3.75 3.75 0 0 1-3.75 3.75H6.14l-.34-.01Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4A3.25 3.25 0 0 0 2 7.25v9.5C2 18.55 3.46 20 5.25 20h13.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C22 5.45 20.55 4 18.75 4H5.25ZM3.5 7.25c0-.97.78-1.75 1.75-1.75h13.5c.97 0 1.75.78 1.75 1.75v.3l-8.5 4.47-8.5-4.47v-.3Zm0 2l8.15 4.28c.22.12.48.12.7 0l8.15-4.28v7.5c0 .97-.78 1.75-1.75 1.75H5.25c-.97 0-1.75-.78-1.75-1.75v-7.5Z"/>"#
            }
            Self::Notes => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h7.46c.86 0 1.69-.34 2.3-.95l4.04-4.04c.61-.61.95-1.44.95-2.3V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V13h-4.25A2.25 2.25 0 0 0 13 15.25v4.25H6.25c-.97 0-1.75-.78-1.75-1.75V6.25Zm14.44 8.25-4.44 4.44v-3.69c0-.41.34-.75.75-.75h3.69Z"/>"#
            }
            Self::MusicNote => {
                r#"<path d="M20 3.75a.75.75 0 0 0-.97-.72l-9.5 2.85a.75.75 0 0 0-.53.72v9.27a3.5 3.5 0 1 0 1.5 2.88V9.81l8-2.4v5.66a3.5 3.5 0 1 0 1.5 2.88V3.75ZM8.5 18.75a2 2 0 1 1-4 0 2 2 0 0 1 4 0Zm10-2.75a2 2 0 1 1-4 0 2 2 0 0 1 4 0Z"/>"#
            }
            Self::Document => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::AppGrid => {
                r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v3.5C3 9.99 4 11 5.25 11h3.5C9.99 11 11 10 11 8.75v-3.5C11 4 10 3 8.75 3h-3.5Zm0 1.5h3.5c.41 0 .75.34.75.75v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1-.75-.75v-3.5c0-.41.34-.75.75-.75ZM15.25 3A2.25 2.25 0 0 0 13 5.25v3.5c0 1.24 1 2.25 2.25 2.25h3.5C19.99 11 21 10 21 8.75v-3.5C21 4 20 3 18.75 3h-3.5Zm0 1.5h3.5c.41 0 .75.34.75.75v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1-.75-.75v-3.5c0-.41.34-.75.75-.75ZM5.25 13A2.25 2.25 0 0 0 3 15.25v3.5C3 19.99 4 21 5.25 21h3.5C9.99 21 11 20 11 18.75v-3.5C11 14 10 13 8.75 13h-3.5Zm0 1.5h3.5c.41 0 .75.34.75.75v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1-.75-.75v-3.5c0-.41.34-.75.75-.75ZM15.25 13A2.25 2.25 0 0 0 13 15.25v3.5c0 1.24 1 2.25 2.25 2.25h3.5c1.24 0 2.25-1 2.25-2.25v-3.5c0-1.24-1-2.25-2.25-2.25h-3.5Zm0 1.5h3.5c.41 0 .75.34.75.75v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1-.75-.75v-3.5c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (menu bar / dock indicators).
    #[default]
    Sm,
    /// 20px medium icon (window chrome / prominent controls).
    Md,
    /// 24px large icon (desktop launchers and dock tiles).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG icon from the centralized shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
