use ratatui::prelude::*;
use ratatui::widgets::*;

/// A bordered label centred in its parent area.
pub struct Button<'a> {
    label: &'a str,
    fg: Color,
    bg: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            fg: Color::White,
            bg: Color::Rgb(0, 160, 0),
        }
    }

    /// The area the button occupies when centred in `parent`.
    pub fn area(&self, parent: Rect) -> Rect {
        let w = (self.label.chars().count() as u16 + 8).min(parent.width);
        let h = 3u16.min(parent.height);
        let x = parent.x + (parent.width.saturating_sub(w)) / 2;
        let y = parent.y + (parent.height.saturating_sub(h)) / 2;
        Rect::new(x, y, w, h)
    }

    /// Draws the button and returns where it landed.
    pub fn render(&self, frame: &mut Frame, parent: Rect) -> Rect {
        let area = self.area(parent);
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.fg))
            .style(Style::default().bg(self.bg));
        let label = Paragraph::new(Span::styled(
            self.label,
            Style::default().fg(self.fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(label, area);
        area
    }
}
