use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "invasion.ron";

/// Static configuration, fixed for the lifetime of the process.
///
/// Every length is in playfield pixels and every speed in pixels per frame.
/// The speeds here are the base values a new game starts from; the values
/// that change during play live in [`DynamicSettings`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: (u8, u8, u8),

    // Ship
    pub ship_speed: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_limit: u32,
    pub ship_color: (u8, u8, u8),

    // Bullets
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: (u8, u8, u8),
    pub bullets_allowed: usize,

    // Aliens
    pub alien_speed: f32,
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_color: (u8, u8, u8),
    pub alien_points: u32,
    pub fleet_drop_speed: f32,

    // Stars
    pub star_speed: f32,
    pub star_width: f32,
    pub star_height: f32,
    pub star_color: (u8, u8, u8),
    pub stars_allowed: usize,

    // Level scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Loop timing
    pub frame_ms: u64,
    pub hit_pause_ms: u64,
    /// Frames a held arrow key stays down on terminals that never report releases.
    pub key_release_frames: u32,

    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            bg_color: (0, 0, 5),

            ship_speed: 1.5,
            ship_width: 60.0,
            ship_height: 40.0,
            ship_limit: 3,
            ship_color: (80, 255, 80),

            bullet_speed: 3.0,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: (255, 255, 200),
            bullets_allowed: 3,

            alien_speed: 1.0,
            alien_width: 40.0,
            alien_height: 40.0,
            alien_color: (200, 180, 255),
            alien_points: 50,
            fleet_drop_speed: 10.0,

            star_speed: 2.0,
            star_width: 3.0,
            star_height: 3.0,
            star_color: (180, 180, 220),
            stars_allowed: 10,

            speedup_scale: 1.1,
            score_scale: 1.5,

            frame_ms: 16,
            hit_pause_ms: 500,
            key_release_frames: 8,

            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let settings: Settings = ron::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn default_path() -> PathBuf {
        beside_executable(SETTINGS_FILE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_speed", self.ship_speed),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_speed", self.bullet_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_speed", self.alien_speed),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("fleet_drop_speed", self.fleet_drop_speed),
            ("star_speed", self.star_speed),
            ("star_width", self.star_width),
            ("star_height", self.star_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        for (field, value) in [("speedup_scale", self.speedup_scale), ("score_scale", self.score_scale)] {
            if !(value >= 1.0 && value.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be at least 1.0, got {value}"),
                });
            }
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn hit_pause(&self) -> Duration {
        Duration::from_millis(self.hit_pause_ms)
    }
}

/// Values that reset on a new game and scale up with each level.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub star_speed: f32,
    /// +1 moves the fleet right, -1 left.
    pub fleet_direction: f32,
    pub alien_points: u32,
}

impl DynamicSettings {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.ship_speed,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            star_speed: settings.star_speed,
            fleet_direction: 1.0,
            alien_points: settings.alien_points,
        }
    }

    pub fn initialize(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    pub fn increase_speed(&mut self, settings: &Settings) {
        self.ship_speed *= settings.speedup_scale;
        self.bullet_speed *= settings.speedup_scale;
        self.alien_speed *= settings.speedup_scale;
        self.star_speed *= settings.speedup_scale;
        self.alien_points = (self.alien_points as f32 * settings.score_scale) as u32;
    }
}

/// Resolve a file name next to the running executable, falling back to the
/// working directory.
pub fn beside_executable(name: &str) -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(name);
        }
    }
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let settings = Settings {
            alien_speed: 0.0,
            ..Settings::default()
        };
        match settings.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "alien_speed"),
            other => panic!("expected invalid alien_speed, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.ron")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "(bullets_allowed: 5, screen_width: 800.0)").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.bullets_allowed, 5);
        assert_eq!(settings.screen_width, 800.0);
        assert_eq!(settings.screen_height, 800.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "(bullets_allowed: \"many\")").unwrap();
        assert!(matches!(Settings::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn level_up_scales_every_speed_and_points() {
        let settings = Settings::default();
        let mut dynamic = DynamicSettings::new(&settings);
        dynamic.increase_speed(&settings);

        assert!((dynamic.ship_speed - 1.5 * 1.1).abs() < 1e-5);
        assert!((dynamic.bullet_speed - 3.0 * 1.1).abs() < 1e-5);
        assert!((dynamic.alien_speed - 1.1).abs() < 1e-5);
        assert!((dynamic.star_speed - 2.2).abs() < 1e-5);
        assert_eq!(dynamic.alien_points, 75);

        dynamic.fleet_direction = -1.0;
        dynamic.initialize(&settings);
        assert_eq!(dynamic, DynamicSettings::new(&settings));
    }
}
