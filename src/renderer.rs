use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_COLUMNS, GLYPH_CELL, GridSize, PALETTE, Palette};
use crate::food::FoodKind;
use crate::game::{Cell, Snapshot};
use crate::grid::position_of;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from one snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, hud_info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);

    let board = board_area(play_area, snapshot.bounds);
    let block = Block::bordered().border_style(Style::new().fg(PALETTE.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_cells(frame.buffer_mut(), inner, snapshot, &PALETTE);

    if !snapshot.alive {
        render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.status,
            snapshot.death_reason,
        );
    }
}

/// Centers a bordered board of `bounds` cells inside `area`, clipped to fit.
#[must_use]
pub fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_cells(buffer: &mut Buffer, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    for (index, cell) in snapshot.cells.iter().enumerate() {
        let Ok(index) = i32::try_from(index) else {
            return;
        };
        let position = position_of(index, snapshot.bounds.width);
        let Some((x, y)) = logical_to_terminal(inner, position.x, position.y) else {
            continue;
        };

        let color = cell_color(*cell, position.x + position.y, palette);
        buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color));
    }
}

/// Color for one cell; `parity` picks the checkerboard shade of empty cells.
#[must_use]
pub fn cell_color(cell: Cell, parity: i32, palette: &Palette) -> Color {
    match cell {
        Cell::Empty if parity % 2 == 0 => palette.field_even,
        Cell::Empty => palette.field_odd,
        Cell::SnakeHead => palette.snake_head,
        Cell::SnakeBody => palette.snake_body,
        Cell::Food(kind) => food_color(kind, palette),
    }
}

#[must_use]
pub fn food_color(kind: FoodKind, palette: &Palette) -> Color {
    match kind {
        FoodKind::Normal => palette.food_normal,
        FoodKind::Accelerate => palette.food_accelerate,
        FoodKind::Decelerate => palette.food_decelerate,
        FoodKind::Reverse => palette.food_reverse,
        FoodKind::GoThroughWalls => palette.food_walls,
    }
}

fn logical_to_terminal(inner: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
