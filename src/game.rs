//! One play session: every entity, the stats, and the rules that tie them
//! together each frame.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, Hit};
use crate::entities::{Alien, Bullet, Ship, Star};
use crate::fleet;
use crate::settings::{DynamicSettings, Settings};
use crate::stats::GameStats;

pub struct Session {
    pub settings: Settings,
    pub dynamic: DynamicSettings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub stars: Vec<Star>,
    /// Gameplay is frozen until this instant after the ship is hit.
    resume_at: Option<Instant>,
    /// A new high score waiting to be written to disk.
    pending_high_score: Option<u32>,
    rng: StdRng,
}

impl Session {
    pub fn new(settings: Settings, high_score: u32) -> Self {
        Self::with_rng(settings, high_score, StdRng::from_entropy())
    }

    pub fn with_rng(settings: Settings, high_score: u32, rng: StdRng) -> Self {
        let dynamic = DynamicSettings::new(&settings);
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        let aliens = fleet::create_fleet(&settings);
        Self {
            settings,
            dynamic,
            stats,
            ship,
            bullets: Vec::new(),
            aliens,
            stars: Vec::new(),
            resume_at: None,
            pending_high_score: None,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stats.game_active
    }

    pub fn is_paused(&self, now: Instant) -> bool {
        self.resume_at.is_some_and(|t| now < t)
    }

    pub fn start_game(&mut self) {
        self.dynamic.initialize(&self.settings);
        self.stats.reset(&self.settings);
        self.stats.game_active = true;
        self.resume_at = None;

        self.bullets.clear();
        self.aliens = fleet::create_fleet(&self.settings);
        self.ship.center_ship(&self.settings);
        self.ship.moving_left = false;
        self.ship.moving_right = false;
        tracing::info!(
            "game started: fleet={} ships={} high_score={}",
            self.aliens.len(),
            self.stats.ships_left,
            self.stats.high_score
        );
    }

    /// Returns false when the live bullet cap is reached.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    /// Advance one frame.
    pub fn update(&mut self, now: Instant) {
        if self.stats.game_active && !self.is_paused(now) {
            self.resume_at = None;
            self.ship.update(&self.settings, &self.dynamic);
            self.update_bullets();
            self.update_aliens(now);
        }
        self.gen_stars();
        self.update_stars();
    }

    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.dynamic);
        }
        self.bullets.retain(|b| !b.is_off_screen());
        self.check_bullet_alien_collisions();
    }

    pub fn check_bullet_alien_collisions(&mut self) {
        let hits = collision::bullet_alien_hits(&self.bullets, &self.aliens);
        if !hits.is_empty() {
            let (spent, destroyed): (Vec<usize>, Vec<usize>) =
                hits.iter().map(|&Hit { bullet, alien }| (bullet, alien)).unzip();
            collision::remove_indices(&mut self.bullets, spent);
            collision::remove_indices(&mut self.aliens, destroyed);

            self.stats.add_points(self.dynamic.alien_points, hits.len());
            if self.stats.check_high_score() {
                self.pending_high_score = Some(self.stats.high_score);
            }
        }

        if self.aliens.is_empty() {
            self.start_new_level();
        }
    }

    pub fn start_new_level(&mut self) {
        self.bullets.clear();
        self.dynamic.increase_speed(&self.settings);
        self.stats.level += 1;
        self.aliens = fleet::create_fleet(&self.settings);
        tracing::info!(
            "level {} reached: alien_speed={:.2} alien_points={}",
            self.stats.level,
            self.dynamic.alien_speed,
            self.dynamic.alien_points
        );
    }

    pub fn update_aliens(&mut self, now: Instant) {
        fleet::update_fleet(&self.settings, &mut self.dynamic, &mut self.aliens);

        if collision::ship_collides_any(&self.ship, &self.aliens) {
            self.ship_hit(now);
            return;
        }
        if collision::alien_reached_bottom(&self.aliens, self.settings.screen_height) {
            self.ship_hit(now);
        }
    }

    /// Lose a ship. Losing the last one ends the round; otherwise the board
    /// is rebuilt and play pauses briefly.
    pub fn ship_hit(&mut self, now: Instant) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left == 0 {
            self.stats.game_active = false;
            self.resume_at = None;
            tracing::info!(
                "game over: score={} level={} high_score={}",
                self.stats.score,
                self.stats.level,
                self.stats.high_score
            );
            return;
        }

        self.bullets.clear();
        self.aliens = fleet::create_fleet(&self.settings);
        self.ship.center_ship(&self.settings);
        self.resume_at = Some(now + self.settings.hit_pause());
        tracing::info!("ship hit: ships_left={}", self.stats.ships_left);
    }

    pub fn gen_stars(&mut self) {
        if self.stars.len() < self.settings.stars_allowed * 2 {
            self.stars.push(Star::new(&self.settings, &mut self.rng));
        }
    }

    pub fn update_stars(&mut self) {
        for star in &mut self.stars {
            star.update(&self.dynamic);
        }
        let height = self.settings.screen_height;
        self.stars.retain(|s| !s.is_off_screen(height));
    }

    pub fn take_pending_high_score(&mut self) -> Option<u32> {
        self.pending_high_score.take()
    }
}
