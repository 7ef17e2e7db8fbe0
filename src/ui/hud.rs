use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::Snapshot;

/// Values shown in the HUD that are not part of the game snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    /// Seed of the food generator, when the session was started with one.
    pub seed: Option<u64>,
}

/// Renders the one-line HUD and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, info: &HudInfo) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(snapshot, info)).alignment(Alignment::Center),
        status_area,
    );

    play_area
}

fn status_line(snapshot: &Snapshot, info: &HudInfo) -> Line<'static> {
    let label = Style::new().fg(PALETTE.hud_text);
    let value = Style::new()
        .fg(PALETTE.hud_accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(snapshot.speed.label(), value),
        Span::styled("  Walls ", label),
        Span::styled(if snapshot.wall_pass { "pass" } else { "solid" }, value),
    ];

    if let Some(seed) = info.seed {
        spans.push(Span::styled("  Seed ", label));
        spans.push(Span::styled(seed.to_string(), value));
    }

    Line::from(spans)
}
