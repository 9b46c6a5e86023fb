use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

use crate::game::Session;
use crate::scores::HighScoreFile;
use crate::settings::Settings;

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    score_file: HighScoreFile,
    /// Where the Play button was last drawn, for click hit-testing.
    pub play_button: Option<Rect>,
    /// Whether the terminal sends key release events.
    reports_releases: bool,
    // Frames left before a held arrow counts as released, when releases
    // are not reported.
    hold_left: u32,
    hold_right: u32,
}

impl App {
    pub fn new(settings: Settings, score_file: HighScoreFile, reports_releases: bool) -> Self {
        let high_score = match score_file.load() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("starting with a high score of 0: {e}");
                0
            }
        };
        Self::with_session(Session::new(settings, high_score), score_file, reports_releases)
    }

    pub fn with_session(session: Session, score_file: HighScoreFile, reports_releases: bool) -> Self {
        Self {
            should_quit: false,
            session,
            score_file,
            play_button: None,
            reports_releases,
            hold_left: 0,
            hold_right: 0,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.reports_releases {
            self.expire_held_keys();
        }

        self.session.update(now);

        if let Some(high_score) = self.session.take_pending_high_score() {
            if let Err(e) = self.score_file.save(high_score) {
                tracing::warn!("high score {high_score} not saved: {e}");
            } else {
                tracing::debug!("high score {high_score} saved to {}", self.score_file.path().display());
            }
        }
    }

    fn expire_held_keys(&mut self) {
        let ship = &mut self.session.ship;
        if self.hold_left > 0 {
            self.hold_left -= 1;
            if self.hold_left == 0 {
                ship.moving_left = false;
            }
        }
        if self.hold_right > 0 {
            self.hold_right -= 1;
            if self.hold_right == 0 {
                ship.moving_right = false;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left => self.session.ship.moving_left = false,
                KeyCode::Right => self.session.ship.moving_right = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if key.kind == KeyEventKind::Press {
                    self.session.start_game();
                }
                return;
            }
            _ => {}
        }

        if !self.session.is_active() {
            return;
        }

        let hold = self.session.settings.key_release_frames.max(1);
        match key.code {
            KeyCode::Left => {
                self.session.ship.moving_left = true;
                self.hold_left = hold;
            }
            KeyCode::Right => {
                self.session.ship.moving_right = true;
                self.hold_right = hold;
            }
            KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
                self.session.fire_bullet();
            }
            _ => {}
        }
    }

    /// A left click at a terminal cell.
    pub fn on_click(&mut self, column: u16, row: u16) {
        if self.session.is_active() {
            return;
        }
        let Some(button) = self.play_button else { return };
        let inside = column >= button.x
            && column < button.x.saturating_add(button.width)
            && row >= button.y
            && row < button.y.saturating_add(button.height);
        if inside {
            self.session.start_game();
        }
    }
}
