use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    ReadMe,
    About,
    Terminal,
    MusicPlayer,
    Calculator,
    Trash,
    Pong,
}

impl AppId {
    /// Registry order; also the order windows are declared in [`DesktopState::default`].
    pub const ALL: [Self; 7] = [
        Self::ReadMe,
        Self::About,
        Self::Terminal,
        Self::MusicPlayer,
        Self::Calculator,
        Self::Trash,
        Self::Pong,
    ];

    /// Stable key used by deep links and app commands.
    pub fn key(self) -> &'static str {
        match self {
            Self::ReadMe => "readme",
            Self::About => "about",
            Self::Terminal => "terminal",
            Self::MusicPlayer => "music-player",
            Self::Calculator => "calculator",
            Self::Trash => "trash",
            Self::Pong => "pong",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|app| app.key().eq_ignore_ascii_case(key))
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ReadMe => "ReadMe",
            Self::About => "About This Computer",
            Self::Terminal => "Terminal",
            Self::MusicPlayer => "Music Player",
            Self::Calculator => "Calculator",
            Self::Trash => "Trash",
            Self::Pong => "Pong",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::ReadMe => "📄",
            Self::About => "🖥",
            Self::Terminal => "💻",
            Self::MusicPlayer => "🎵",
            Self::Calculator => "🧮",
            Self::Trash => "🗑",
            Self::Pong => "🏓",
        }
    }

    /// Whether the app has an icon on the desktop surface.
    pub fn has_desktop_icon(self) -> bool {
        !matches!(self, Self::About)
    }

    pub fn default_position(self) -> Point {
        match self {
            Self::ReadMe => Point::new(30.0, 30.0),
            Self::About => Point::new(140.0, 40.0),
            Self::Terminal => Point::new(60.0, 60.0),
            Self::MusicPlayer => Point::new(90.0, 90.0),
            Self::Calculator => Point::new(120.0, 50.0),
            Self::Trash => Point::new(150.0, 110.0),
            Self::Pong => Point::new(100.0, 40.0),
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::ReadMe => Size::new(560.0, 400.0),
            Self::About => Size::new(360.0, 320.0),
            Self::Terminal => Size::new(500.0, 350.0),
            Self::MusicPlayer => Size::new(400.0, 300.0),
            Self::Calculator => Size::new(300.0, 420.0),
            Self::Trash => Size::new(460.0, 320.0),
            Self::Pong => Size::new(420.0, 380.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Handle to a mounted content provider; a new generation means a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMount {
    pub app_id: AppId,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_order: u64,
    pub position: Point,
    pub size: Size,
    pub default_position: Point,
    pub default_size: Size,
    pub content: Option<ContentMount>,
}

impl WindowRecord {
    pub fn new(id: AppId, z_order: u64) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_order,
            position: id.default_position(),
            size: id.default_size(),
            default_position: id.default_position(),
            default_size: id.default_size(),
            content: None,
        }
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Desktop,
    /// Narrow viewport: every window renders full-screen and drag/resize are disabled.
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BootStage {
    /// Waiting for the boot sequence to start.
    #[default]
    Off,
    Happy,
    Loading,
    Desktop,
    ShutDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopConfig {
    pub min_window_size: Size,
    /// Portion of a dragged window that must stay inside the container.
    pub drag_keep_visible: Size,
    pub mobile_breakpoint_px: f64,
    pub first_z_order: u64,
    pub loading_stage_delay_ms: u64,
    pub desktop_stage_delay_ms: u64,
    pub readme_auto_open_delay_ms: u64,
    pub clock_interval_ms: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_window_size: Size::new(300.0, 200.0),
            drag_keep_visible: Size::new(100.0, 50.0),
            mobile_breakpoint_px: 768.0,
            first_z_order: 100,
            loading_stage_delay_ms: 1200,
            desktop_stage_delay_ms: 3000,
            readme_auto_open_delay_ms: 150,
            clock_interval_ms: 1000,
        }
    }
}

impl DesktopConfig {
    pub fn layout_for_width(&self, viewport_width: f64) -> LayoutMode {
        if viewport_width < self.mobile_breakpoint_px {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// Last z-order handed out; only ever increases.
    pub z_counter: u64,
    pub next_generation: u64,
    pub layout: LayoutMode,
    pub boot: BootStage,
    pub system_menu_open: bool,
    pub selected_icon: Option<AppId>,
    pub config: DesktopConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn with_config(config: DesktopConfig) -> Self {
        let first = config.first_z_order;
        Self {
            windows: AppId::ALL
                .into_iter()
                .map(|id| WindowRecord::new(id, first))
                .collect(),
            z_counter: first,
            next_generation: 1,
            layout: LayoutMode::Desktop,
            boot: BootStage::Off,
            system_menu_open: false,
            selected_icon: None,
            config,
        }
    }

    pub fn window(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Visible window holding the highest z-order, recomputed on every call.
    pub fn active_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    pub fn open_window_count(&self) -> usize {
        self.windows.iter().filter(|w| w.is_open).count()
    }

    pub fn is_desktop_ready(&self) -> bool {
        self.boot == BootStage::Desktop
    }
}

/// Input device behind a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps a DOM `PointerEvent.pointerType` string.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// Size of the desktop surface windows are clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether resizing from this edge shifts the window origin.
    pub fn moves_origin(self) -> bool {
        self.moves_north() || self.moves_west()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub window_id: AppId,
    pub pointer_origin: Point,
    pub window_origin: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_origin: Point,
    pub size_origin: Size,
    pub position_origin: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}
