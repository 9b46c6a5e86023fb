use crate::settings::Settings;

/// Score, lives and level for the running session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    /// Survives resets; only ever increases.
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Starts inactive, waiting for the first start command.
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = Self {
            score: 0,
            high_score,
            level: 1,
            ships_left: 0,
            game_active: false,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }

    pub fn add_points(&mut self, points: u32, kills: usize) {
        self.score = self.score.saturating_add(points.saturating_mul(kills as u32));
    }

    /// Raise the high score to the current score if it beats it.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
