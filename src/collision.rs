//! Geometry-only collision queries. Nothing here mutates entity state; the
//! caller removes whatever the query reports.

use crate::entities::{Alien, Bullet, Ship};

/// A bullet and the alien it destroyed, by index into their collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub bullet: usize,
    pub alien: usize,
}

/// Each bullet destroys at most one alien and each alien is destroyed by
/// at most one bullet.
pub fn bullet_alien_hits(bullets: &[Bullet], aliens: &[Alien]) -> Vec<Hit> {
    let mut claimed = vec![false; aliens.len()];
    let mut hits = Vec::new();
    for (bi, bullet) in bullets.iter().enumerate() {
        for (ai, alien) in aliens.iter().enumerate() {
            if claimed[ai] { continue; }
            if bullet.bounds.overlaps(&alien.bounds) {
                claimed[ai] = true;
                hits.push(Hit { bullet: bi, alien: ai });
                break;
            }
        }
    }
    hits
}

pub fn ship_collides_any(ship: &Ship, aliens: &[Alien]) -> bool {
    aliens.iter().any(|a| a.bounds.overlaps(&ship.bounds))
}

pub fn alien_reached_bottom(aliens: &[Alien], screen_height: f32) -> bool {
    aliens.iter().any(|a| a.bounds.bottom() >= screen_height)
}

/// Remove the given indices from `items`. Duplicates and out-of-range
/// indices are ignored.
pub fn remove_indices<T>(items: &mut Vec<T>, mut indices: Vec<usize>) {
    indices.sort_unstable();
    indices.dedup();
    for &i in indices.iter().rev() {
        if i < items.len() {
            items.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn bullet_at(settings: &Settings, x: f32, y: f32) -> Bullet {
        let mut ship = Ship::new(settings);
        ship.bounds.set_center_x(x);
        let mut bullet = Bullet::new(settings, &ship);
        bullet.y = y;
        bullet.bounds.y = y;
        bullet
    }

    #[test]
    fn one_bullet_destroys_one_alien() {
        let settings = Settings::default();
        // Two aliens stacked so a single bullet overlaps both.
        let aliens = vec![
            Alien::new(&settings, 100.0, 100.0),
            Alien::new(&settings, 100.0, 110.0),
        ];
        let bullets = vec![bullet_at(&settings, 120.0, 115.0)];

        let hits = bullet_alien_hits(&bullets, &aliens);
        assert_eq!(hits, vec![Hit { bullet: 0, alien: 0 }]);
    }

    #[test]
    fn two_bullets_cannot_share_an_alien() {
        let settings = Settings::default();
        let aliens = vec![
            Alien::new(&settings, 100.0, 100.0),
            Alien::new(&settings, 100.0, 110.0),
        ];
        let bullets = vec![
            bullet_at(&settings, 120.0, 115.0),
            bullet_at(&settings, 121.0, 116.0),
        ];

        let hits = bullet_alien_hits(&bullets, &aliens);
        assert_eq!(
            hits,
            vec![Hit { bullet: 0, alien: 0 }, Hit { bullet: 1, alien: 1 }]
        );
    }

    #[test]
    fn misses_report_nothing() {
        let settings = Settings::default();
        let aliens = vec![Alien::new(&settings, 100.0, 100.0)];
        let bullets = vec![bullet_at(&settings, 500.0, 100.0)];
        assert!(bullet_alien_hits(&bullets, &aliens).is_empty());
    }

    #[test]
    fn ship_and_bottom_queries() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let far = Alien::new(&settings, 0.0, 0.0);
        let touching = Alien::new(&settings, ship.bounds.left(), ship.bounds.top() - 10.0);

        assert!(!ship_collides_any(&ship, &[far.clone()]));
        assert!(ship_collides_any(&ship, &[far.clone(), touching]));

        assert!(!alien_reached_bottom(&[far], settings.screen_height));
        let low = Alien::new(&settings, 0.0, settings.screen_height - settings.alien_height);
        assert!(alien_reached_bottom(&[low], settings.screen_height));
    }

    #[test]
    fn remove_indices_handles_duplicates() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        remove_indices(&mut items, vec![3, 1, 3, 9]);
        assert_eq!(items, vec!['a', 'c']);
    }
}
