use app_contract::{ApplicationId, WindowRuntimeId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_WINDOW_WIDTH: i32 = 300;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
pub const MIN_WINDOW_WIDTH: i32 = 220;
pub const MIN_WINDOW_HEIGHT: i32 = 140;

pub const Z_INDEX_BASE: i32 = 100;

pub const CASCADE_ORIGIN_X: i32 = 50;
pub const CASCADE_ORIGIN_Y: i32 = 50;
pub const CASCADE_STEP: i32 = 20;
// Deep cascades wrap back to the origin so late windows stay on screen.
pub const CASCADE_WRAP: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl WindowId {
    pub fn runtime_id(self) -> WindowRuntimeId {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    Calculator,
    Mail,
    Notes,
    Music,
    Resume,
}

impl AppId {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Mail => "mail",
            Self::Notes => "notes",
            Self::Music => "music",
            Self::Resume => "resume",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Mail => "Mail",
            Self::Notes => "Notes",
            Self::Music => "Music",
            Self::Resume => "Resume",
        }
    }

    pub const fn icon_token(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Mail => "mail",
            Self::Notes => "notes",
            Self::Music => "music-note",
            Self::Resume => "document",
        }
    }

    pub fn application_id(self) -> ApplicationId {
        ApplicationId::trusted(format!("webtop.{}", self.slug()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn offset(self, dw: i32, dh: i32) -> Self {
        Self {
            width: self.width + dw,
            height: self.height + dh,
        }
    }

    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: WindowPosition,
    pub size: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    pub geometry: WindowGeometry,
    pub z_index: i32,
    pub minimized: bool,
    pub maximized: bool,
    pub launch_params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub z_index_counter: i32,
    pub windows: Vec<Window>,
    pub active_window_id: Option<WindowId>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            z_index_counter: Z_INDEX_BASE,
            windows: Vec::new(),
            active_window_id: None,
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active_window(&self) -> Option<&Window> {
        self.active_window_id.and_then(|id| self.window(id))
    }

    pub fn frontmost_window_for_app(&self, app_id: AppId) -> Option<&Window> {
        self.windows
            .iter()
            .filter(|w| w.app_id == app_id)
            .max_by_key(|w| w.z_index)
    }

    pub fn has_window_for_app(&self, app_id: AppId) -> bool {
        self.windows.iter().any(|w| w.app_id == app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: AppId,
    pub title: Option<String>,
    pub icon_id: Option<String>,
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
    pub launch_params: Value,
}

impl OpenWindowRequest {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            title: None,
            icon_id: None,
            position: None,
            size: None,
            launch_params: Value::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    pub preview: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
    pub preview: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn drag_preview(&self, id: WindowId) -> Option<WindowPosition> {
        self.dragging
            .as_ref()
            .filter(|session| session.window_id == id)
            .map(|session| session.preview)
    }

    pub fn resize_preview(&self, id: WindowId) -> Option<WindowSize> {
        self.resizing
            .as_ref()
            .filter(|session| session.window_id == id)
            .map(|session| session.preview)
    }
}
