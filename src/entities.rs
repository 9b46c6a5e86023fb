use rand::Rng;

use crate::geometry::Bounds;
use crate::settings::{DynamicSettings, Settings};

/// The player's ship. Sits on the bottom edge and only moves sideways.
#[derive(Clone, Debug)]
pub struct Ship {
    /// Horizontal centre, kept as a float for sub-pixel movement.
    pub center: f32,
    pub bounds: Bounds,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            center: 0.0,
            bounds: Bounds::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn update(&mut self, settings: &Settings, dynamic: &DynamicSettings) {
        if self.moving_right && self.bounds.right() < settings.screen_width {
            self.center += dynamic.ship_speed;
        }
        if self.moving_left && self.bounds.left() > 0.0 {
            self.center -= dynamic.ship_speed;
        }
        let half = self.bounds.width / 2.0;
        self.center = self.center.clamp(half, (settings.screen_width - half).max(half));
        self.bounds.set_center_x(self.center);
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.center = settings.screen_width / 2.0;
        self.bounds.set_center_x(self.center);
        self.bounds.set_bottom(settings.screen_height);
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub y: f32,
    pub bounds: Bounds,
}

impl Bullet {
    /// A bullet leaving the top-centre of the ship.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut bounds = Bounds::new(0.0, 0.0, settings.bullet_width, settings.bullet_height);
        bounds.set_center_x(ship.bounds.center_x());
        bounds.y = ship.bounds.top();
        Self { y: bounds.y, bounds }
    }

    pub fn update(&mut self, dynamic: &DynamicSettings) {
        self.y -= dynamic.bullet_speed;
        self.bounds.y = self.y;
    }

    pub fn is_off_screen(&self) -> bool {
        self.bounds.bottom() <= 0.0
    }
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub bounds: Bounds,
}

impl Alien {
    pub fn new(settings: &Settings, x: f32, y: f32) -> Self {
        Self {
            x,
            bounds: Bounds::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    pub fn update(&mut self, dynamic: &DynamicSettings) {
        self.x += dynamic.alien_speed * dynamic.fleet_direction;
        self.bounds.x = self.x;
    }

    pub fn at_edge(&self, screen_width: f32) -> bool {
        self.bounds.right() >= screen_width || self.bounds.left() <= 0.0
    }
}

/// Background star falling down the screen. Never collides with anything.
#[derive(Clone, Debug)]
pub struct Star {
    pub y: f32,
    pub bounds: Bounds,
}

impl Star {
    /// Spawns centred on the top edge at a random column.
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        let mut bounds = Bounds::new(0.0, 0.0, settings.star_width, settings.star_height);
        bounds.set_center_x(rng.gen_range(0.0..settings.screen_width));
        bounds.set_center_y(0.0);
        Self { y: bounds.y, bounds }
    }

    pub fn update(&mut self, dynamic: &DynamicSettings) {
        self.y += dynamic.star_speed;
        self.bounds.y = self.y;
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.bounds.bottom() >= screen_height
    }
}
