//! Collision detection between the spaceship and the asteroid belt.
//!
//! The result is re-derived from scratch every tick: the ship is colliding
//! exactly while it overlaps at least one asteroid. Nothing is removed or
//! damaged.

use bevy::math::DVec3;

use crate::asteroid::{Asteroid, AsteroidBelt};

/// Whether two spheres overlap (strictly closer than the sum of radii).
pub fn spheres_overlap(a: DVec3, radius_a: f64, b: DVec3, radius_b: f64) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Whether a body at `position` with `radius` touches any asteroid.
///
/// Stops at the first hit.
pub fn hits_belt(position: DVec3, radius: f64, belt: &AsteroidBelt) -> bool {
    belt.iter()
        .any(|rock| spheres_overlap(position, radius, rock.position(), rock.radius()))
}

/// First asteroid the body touches, if any.
pub fn first_hit(position: DVec3, radius: f64, belt: &AsteroidBelt) -> Option<&Asteroid> {
    belt.iter()
        .find(|rock| spheres_overlap(position, radius, rock.position(), rock.radius()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_rock_belt(at: DVec3) -> AsteroidBelt {
        AsteroidBelt::from_asteroids(vec![Asteroid::new(at, 0.02)])
    }

    #[test]
    fn test_same_position_collides() {
        let belt = single_rock_belt(DVec3::new(3.3, 0.0, 0.0));
        assert!(hits_belt(DVec3::new(3.3, 0.0, 0.0), 0.15, &belt));
    }

    #[test]
    fn test_touching_is_not_collision() {
        // Exactly at the radius sum: strict inequality means no hit
        let belt = AsteroidBelt::from_asteroids(vec![Asteroid::new(DVec3::ZERO, 0.25)]);
        assert!(!hits_belt(DVec3::new(0.5, 0.0, 0.0), 0.25, &belt));
        assert!(hits_belt(DVec3::new(0.499, 0.0, 0.0), 0.25, &belt));
    }

    #[test]
    fn test_just_inside_radius_sum() {
        let belt = single_rock_belt(DVec3::ZERO);
        assert!(hits_belt(DVec3::new(0.169, 0.0, 0.0), 0.15, &belt));
        assert!(!hits_belt(DVec3::new(0.171, 0.0, 0.0), 0.15, &belt));
    }

    #[test]
    fn test_empty_belt_never_hits() {
        let belt = AsteroidBelt::default();
        assert!(!hits_belt(DVec3::ZERO, 10.0, &belt));
    }

    #[test]
    fn test_first_hit_picks_belt_order() {
        let belt = AsteroidBelt::from_asteroids(vec![
            Asteroid::new(DVec3::new(5.0, 0.0, 0.0), 0.02),
            Asteroid::new(DVec3::new(0.1, 0.0, 0.0), 0.02),
            Asteroid::new(DVec3::new(-0.1, 0.0, 0.0), 0.02),
        ]);
        let hit = first_hit(DVec3::ZERO, 0.15, &belt);
        assert_eq!(hit.map(|r| r.position()), Some(DVec3::new(0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_full_belt_clear_at_origin() {
        let belt = AsteroidBelt::ring(100, 3.3, 0.02);
        assert!(!hits_belt(DVec3::ZERO, 0.15, &belt));
        assert!(!hits_belt(DVec3::new(-8.0, 0.0, 0.0), 0.15, &belt));
        assert!(hits_belt(DVec3::new(0.0, 0.0, 3.3), 0.15, &belt));
    }
}
