use std::time::Duration;

use ratatui::style::Color;

use crate::game::GameSpeed;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 48;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest accepted board edge.
pub const MIN_GRID_EDGE: u16 = 2;

pub const MAX_GRID_WIDTH: u16 = 200;
pub const MAX_GRID_HEIGHT: u16 = 100;

/// Tick interval at normal speed.
pub const NORMAL_TICK_INTERVAL_MS: u64 = 120;

/// Tick interval after eating accelerate food.
pub const FASTER_TICK_INTERVAL_MS: u64 = 60;

/// Tick interval after eating decelerate food.
pub const SLOWER_TICK_INTERVAL_MS: u64 = 180;

/// Input poll timeout, also the redraw cadence.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Returns the wall-clock delay between ticks for a speed tier.
#[must_use]
pub fn tick_interval(speed: GameSpeed) -> Duration {
    let millis = match speed {
        GameSpeed::Normal => NORMAL_TICK_INTERVAL_MS,
        GameSpeed::Faster => FASTER_TICK_INTERVAL_MS,
        GameSpeed::Slower => SLOWER_TICK_INTERVAL_MS,
    };
    Duration::from_millis(millis)
}

/// Colors for every cell type and UI element.
#[derive(Debug)]
pub struct Palette {
    /// Checkerboard colors for empty cells.
    pub field_even: Color,
    pub field_odd: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food_normal: Color,
    pub food_accelerate: Color,
    pub food_decelerate: Color,
    pub food_reverse: Color,
    pub food_walls: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
}

pub const PALETTE: Palette = Palette {
    field_even: Color::Rgb(0x23, 0x9B, 0x56),
    field_odd: Color::Rgb(0x1D, 0x83, 0x48),
    snake_head: Color::Rgb(0x65, 0x3F, 0xD3),
    snake_body: Color::Rgb(0x03, 0x30, 0x92),
    food_normal: Color::Rgb(0x96, 0x1C, 0x1C),
    food_accelerate: Color::Rgb(0xAD, 0x23, 0xAB),
    food_decelerate: Color::Rgb(0xB9, 0xE3, 0xE3),
    food_reverse: Color::Rgb(0xCB, 0xCD, 0x40),
    food_walls: Color::Black,
    border_fg: Color::DarkGray,
    hud_text: Color::Gray,
    hud_accent: Color::White,
    menu_title: Color::Red,
};

/// One grid cell is drawn as this many terminal columns so cells look square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph drawn for one full cell.
pub const GLYPH_CELL: &str = "██";
