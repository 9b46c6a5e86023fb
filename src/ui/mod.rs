pub mod button;
pub mod field;
pub mod scoreboard;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use button::Button;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let session = &app.session;
    scoreboard::render_scoreboard(frame, &session.stats, chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let lines = field::render_field(session, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_help(frame, session.is_active(), session.stats.score, chunks[2]);

    app.play_button = if app.session.is_active() {
        None
    } else {
        Some(Button::new("Play").render(frame, chunks[1]))
    };
}

fn render_help(frame: &mut Frame, active: bool, score: u32, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));

    let line = if active {
        Line::from(vec![
            key(" \u{2190}\u{2192}"), text(" Move  "),
            key("Space"), text(" Shoot  "),
            key("P"), text(" Restart  "),
            key("Q"), text(" Quit"),
        ])
    } else if score > 0 {
        Line::from(vec![
            Span::styled(
                format!(" GAME OVER! Final score {score}. "),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            key("P"), text(" or click Play to start again, "),
            key("Q"), text(" to quit"),
        ])
    } else {
        Line::from(vec![
            key(" P"), text(" or click Play to start, "),
            key("Q"), text(" to quit"),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
