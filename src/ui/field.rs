//! Draws the playfield with braille characters: each terminal cell holds a
//! 2x4 grid of dots, so the pixel playfield is scaled onto
//! `(width * 2) x (height * 4)` dots.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::game::Session;
use crate::geometry::Bounds;

type DotMap = HashMap<(usize, usize), u8>;

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Dot-space scale and bounds for one frame.
#[derive(Clone, Copy)]
struct Scale {
    sx: f32,
    sy: f32,
    dots_w: i32,
    dots_h: i32,
}

impl Scale {
    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.dots_w || by >= self.dots_h { return; }
        let cx = bx as usize / 2;
        let cy = by as usize / 4;
        *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
    }

    /// Fill every dot the box covers; anything on screen gets at least one dot.
    fn fill(&self, map: &mut DotMap, b: &Bounds) {
        let x0 = (b.left() * self.sx).floor() as i32;
        let y0 = (b.top() * self.sy).floor() as i32;
        let x1 = ((b.right() * self.sx).ceil() as i32).max(x0 + 1);
        let y1 = ((b.bottom() * self.sy).ceil() as i32).max(y0 + 1);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(map, bx, by);
            }
        }
    }
}

fn write_layer(
    grid: &mut [Vec<(char, Style)>],
    map: &DotMap,
    color: Color,
    bg: Color,
) {
    for (&(cx, cy), &bits) in map {
        if bits == 0 { continue; }
        let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) else { continue };
        let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
        *cell = (ch, Style::default().fg(color).bg(bg));
    }
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub fn render_field(session: &Session, width: usize, height: usize) -> Vec<Line<'static>> {
    let settings = &session.settings;
    let scale = Scale {
        sx: (width * 2) as f32 / settings.screen_width,
        sy: (height * 4) as f32 / settings.screen_height,
        dots_w: (width * 2) as i32,
        dots_h: (height * 4) as i32,
    };

    let bg = rgb(settings.bg_color);
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(bg)); width]; height];

    // Back to front: stars, bullets, ship, aliens.
    let mut stars = DotMap::new();
    for star in &session.stars {
        scale.fill(&mut stars, &star.bounds);
    }
    write_layer(&mut grid, &stars, rgb(settings.star_color), bg);

    let mut bullets = DotMap::new();
    for bullet in &session.bullets {
        scale.fill(&mut bullets, &bullet.bounds);
    }
    write_layer(&mut grid, &bullets, rgb(settings.bullet_color), bg);

    let mut ship = DotMap::new();
    scale.fill(&mut ship, &session.ship.bounds);
    write_layer(&mut grid, &ship, rgb(settings.ship_color), bg);

    let mut aliens = DotMap::new();
    for alien in &session.aliens {
        scale.fill(&mut aliens, &alien.bounds);
    }
    write_layer(&mut grid, &aliens, rgb(settings.alien_color), bg);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn field_has_requested_size() {
        let session = Session::with_rng(Settings::default(), 0, StdRng::seed_from_u64(0));
        let lines = render_field(&session, 60, 20);
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| l.spans.len() == 60));
    }

    #[test]
    fn ship_is_drawn_on_bottom_row() {
        let mut session = Session::with_rng(Settings::default(), 0, StdRng::seed_from_u64(0));
        session.aliens.clear();
        let lines = render_field(&session, 60, 20);
        let bottom = line_text(&lines[19]);
        assert!(bottom.chars().any(|c| c != ' '));
        assert!(line_text(&lines[0]).chars().all(|c| c == ' '));
    }

    #[test]
    fn small_entities_still_get_a_dot() {
        let scale = Scale { sx: 0.01, sy: 0.01, dots_w: 10, dots_h: 10 };
        let mut map = DotMap::new();
        scale.fill(&mut map, &Bounds::new(100.0, 100.0, 3.0, 3.0));
        assert_eq!(map.get(&(0, 0)), Some(&braille_bit(1, 1)));
    }
}
