//! Building the alien grid and moving it as one body.

use crate::entities::Alien;
use crate::settings::{DynamicSettings, Settings};

/// How many aliens fit in a row, leaving one alien width of space between
/// neighbours and at each edge.
pub fn number_aliens_x(screen_width: f32, alien_width: f32) -> usize {
    let available_space_x = screen_width - 2.0 * alien_width;
    let n = (available_space_x / (2.0 * alien_width)).floor();
    if n > 0.0 { n as usize } else { 0 }
}

/// How many rows fit above the ship with three alien heights of clearance.
pub fn number_rows(screen_height: f32, ship_height: f32, alien_height: f32) -> usize {
    let available_space_y = screen_height - 3.0 * alien_height - ship_height;
    let n = (available_space_y / (2.0 * alien_height)).floor();
    if n > 0.0 { n as usize } else { 0 }
}

pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let w = settings.alien_width;
    let h = settings.alien_height;
    let cols = number_aliens_x(settings.screen_width, w);
    let rows = number_rows(settings.screen_height, settings.ship_height, h);

    let mut aliens = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = w + 2.0 * w * col as f32;
            let y = h + 2.0 * h * row as f32;
            aliens.push(Alien::new(settings, x, y));
        }
    }
    aliens
}

/// Drop the whole fleet and reverse it if any alien touches a side.
/// Returns true when the fleet changed direction.
pub fn check_fleet_edges(settings: &Settings, dynamic: &mut DynamicSettings, aliens: &mut [Alien]) -> bool {
    if aliens.iter().any(|a| a.at_edge(settings.screen_width)) {
        change_fleet_direction(settings, dynamic, aliens);
        true
    } else {
        false
    }
}

fn change_fleet_direction(settings: &Settings, dynamic: &mut DynamicSettings, aliens: &mut [Alien]) {
    for alien in aliens.iter_mut() {
        alien.bounds.y += settings.fleet_drop_speed;
    }
    dynamic.fleet_direction = -dynamic.fleet_direction;
}

pub fn update_fleet(settings: &Settings, dynamic: &mut DynamicSettings, aliens: &mut [Alien]) {
    check_fleet_edges(settings, dynamic, aliens);
    for alien in aliens.iter_mut() {
        alien.update(dynamic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_screen_fits_112_aliens() {
        let settings = Settings {
            screen_width: 1200.0,
            screen_height: 800.0,
            alien_width: 40.0,
            alien_height: 40.0,
            ship_height: 40.0,
            ..Settings::default()
        };
        assert_eq!(number_aliens_x(1200.0, 40.0), 14);
        assert_eq!(number_rows(800.0, 40.0, 40.0), 8);
        assert_eq!(create_fleet(&settings).len(), 112);
    }

    #[test]
    fn fleet_size_matches_formulas() {
        for (w, h, aw, ah, sh) in [
            (800.0, 600.0, 30.0, 20.0, 25.0),
            (300.0, 300.0, 50.0, 50.0, 10.0),
            (1000.0, 900.0, 17.0, 23.0, 48.0),
        ] {
            let settings = Settings {
                screen_width: w,
                screen_height: h,
                alien_width: aw,
                alien_height: ah,
                ship_height: sh,
                ..Settings::default()
            };
            let expected = number_aliens_x(w, aw) * number_rows(h, sh, ah);
            assert_eq!(create_fleet(&settings).len(), expected);
        }
    }

    #[test]
    fn degenerate_screen_gives_empty_fleet() {
        let narrow = Settings {
            screen_width: 100.0,
            alien_width: 40.0,
            ..Settings::default()
        };
        assert_eq!(number_aliens_x(100.0, 40.0), 0);
        assert!(create_fleet(&narrow).is_empty());

        let short = Settings {
            screen_height: 150.0,
            ..Settings::default()
        };
        assert_eq!(number_rows(150.0, 40.0, 40.0), 0);
        assert!(create_fleet(&short).is_empty());
    }

    #[test]
    fn grid_is_offset_and_spaced_by_one_alien() {
        let settings = Settings::default();
        let fleet = create_fleet(&settings);
        assert_eq!(fleet[0].bounds.left(), 40.0);
        assert_eq!(fleet[0].bounds.top(), 40.0);
        assert_eq!(fleet[1].bounds.left(), 120.0);
        assert_eq!(fleet[14].bounds.top(), 120.0);
    }

    #[test]
    fn direction_flips_once_per_edge_contact() {
        let settings = Settings {
            screen_width: 400.0,
            alien_speed: 7.0,
            ..Settings::default()
        };
        let mut dynamic = DynamicSettings::new(&settings);
        let mut aliens = create_fleet(&settings);
        let start_top = aliens[0].bounds.top();

        let mut flips = 0;
        for _ in 0..500 {
            if check_fleet_edges(&settings, &mut dynamic, &mut aliens) {
                flips += 1;
            }
            for alien in aliens.iter_mut() {
                alien.update(&dynamic);
            }
        }

        assert!(flips > 0);
        let expected = if flips % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(dynamic.fleet_direction, expected);
        assert_eq!(
            aliens[0].bounds.top(),
            start_top + flips as f32 * settings.fleet_drop_speed
        );
    }

    #[test]
    fn fleet_moves_in_lockstep() {
        let settings = Settings::default();
        let mut dynamic = DynamicSettings::new(&settings);
        let mut aliens = create_fleet(&settings);
        let before: Vec<f32> = aliens.iter().map(|a| a.bounds.left()).collect();

        update_fleet(&settings, &mut dynamic, &mut aliens);

        for (alien, x) in aliens.iter().zip(before) {
            assert_eq!(alien.bounds.left() - x, dynamic.alien_speed);
        }
    }
}
