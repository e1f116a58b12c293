use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Vec2;

use super::{Container, Particle};

/// Highest temperature factor applied to initial speeds.
pub const MAX_TEMPERATURE: f64 = 10.0;

/// Gap kept between a seeded particle's edge and the walls.
const WALL_GAP: f64 = 2.0;

/// Seeded random placement of identical particles.
///
/// Particle `i` draws its values from a `ChaCha8Rng` seeded with `seed` on
/// stream `i`, so each particle depends only on the seed and its own index.
/// Changing the particle count never changes the particles that remain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SeededLayout {
    pub count: usize,
    pub radius: f64,
    pub mass: f64,
    pub temperature: f64,
    pub seed: u64,
}

impl SeededLayout {
    /// Generates the particles inside `container`.
    ///
    /// Positions are uniform within a margin of `radius + 2` from the walls.
    /// Directions are uniform, speeds are `(4 + 6u)` scaled by the temperature
    /// clamped to `[0, MAX_TEMPERATURE]`, and hues are whole degrees.
    pub fn generate(&self, container: &Container) -> Vec<Particle> {
        let margin = self.radius + WALL_GAP;
        let span = Vec2::new(
            (container.width() - 2.0 * margin).max(0.0),
            (container.height() - 2.0 * margin).max(0.0),
        );
        let temperature = self.temperature.clamp(0.0, MAX_TEMPERATURE);

        (0..self.count)
            .map(|id| {
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                rng.set_stream(id as u64);

                let x = margin + rng.random::<f64>() * span.x;
                let y = margin + rng.random::<f64>() * span.y;
                let direction = rng.random::<f64>() * TAU;
                let speed = (4.0 + rng.random::<f64>() * 6.0) * temperature;
                let hue = (rng.random::<f64>() * 360.0).floor();

                let position = container.clamp(Vec2::new(x, y), self.radius);
                let velocity = Vec2::new(direction.cos(), direction.sin()) * speed;
                Particle::new(id, position, velocity, self.radius, self.mass, hue)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: usize) -> SeededLayout {
        SeededLayout {
            count,
            radius: 8.0,
            mass: 1.0,
            temperature: 1.0,
            seed: 42,
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let container = Container::new(800.0, 600.0).unwrap();

        assert_eq!(layout(20).generate(&container), layout(20).generate(&container));
    }

    #[test]
    fn particles_depend_only_on_their_index() {
        let container = Container::new(800.0, 600.0).unwrap();

        let small = layout(5).generate(&container);
        let large = layout(30).generate(&container);

        assert_eq!(small[..], large[..5]);
    }

    #[test]
    fn different_seeds_differ() {
        let container = Container::new(800.0, 600.0).unwrap();
        let other = SeededLayout {
            seed: 7,
            ..layout(5)
        };

        assert_ne!(layout(5).generate(&container), other.generate(&container));
    }

    #[test]
    fn particles_start_inside_with_bounded_speed() {
        let container = Container::new(800.0, 600.0).unwrap();

        for particle in layout(100).generate(&container) {
            let p = particle.position();
            assert!(p.x >= 10.0 && p.x <= 790.0);
            assert!(p.y >= 10.0 && p.y <= 590.0);

            let speed = particle.velocity().norm();
            assert!((4.0 - 1e-9..=10.0 + 1e-9).contains(&speed));
            assert!((0.0..360.0).contains(&particle.hue()));
        }
    }

    #[test]
    fn temperature_is_clamped() {
        let container = Container::new(800.0, 600.0).unwrap();

        let frozen = SeededLayout {
            temperature: -3.0,
            ..layout(10)
        };
        assert!(
            frozen
                .generate(&container)
                .iter()
                .all(|p| p.velocity() == Vec2::zeros())
        );

        let hot = SeededLayout {
            temperature: 1e6,
            ..layout(10)
        };
        for particle in hot.generate(&container) {
            assert!(particle.velocity().norm() <= 10.0 * MAX_TEMPERATURE + 1e-9);
        }
    }
}
