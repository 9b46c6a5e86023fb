use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::stats::GameStats;

/// Score, high score, level and remaining ships along the top edge.
pub fn render_scoreboard(frame: &mut Frame, stats: &GameStats, area: Rect) {
    let ships = "\u{25b2} ".repeat(stats.ships_left as usize);
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let line = Line::from(vec![
        Span::styled(" \u{1f47e} ", Style::default()),
        Span::styled(
            format!("Score: {} ", stats.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("High: {} ", stats.high_score),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(
            format!("Level: {} ", stats.level),
            Style::default().fg(Color::Green),
        ),
        sep(),
        Span::styled(
            format!("Ships: {}", ships),
            Style::default().fg(Color::Rgb(80, 255, 80)).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
