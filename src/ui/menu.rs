use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::PALETTE;
use crate::game::{DeathReason, GameStatus};

const POPUP_WIDTH: u16 = 32;
const POPUP_HEIGHT: u16 = 7;

/// Draws the end-of-run screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            title(status),
            Style::new()
                .fg(PALETTE.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {score}")),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::from("[Space] Play again  [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn title(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Victory => "BOARD FILLED",
        GameStatus::Running | GameStatus::Dead => "GAME OVER",
    }
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

/// Fixed-size rectangle centered in `area`, shrunk to fit.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
