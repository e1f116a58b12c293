use framesim_core::StepIntegrable;

use crate::Vec2;

/// A circular particle.
///
/// Radius, mass, and hue are fixed when the particle is created. Position and
/// velocity change only through the world's integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Particle {
    id: usize,
    position: Vec2,
    velocity: Vec2,
    radius: f64,
    mass: f64,
    hue: f64,
}

impl Particle {
    pub(super) fn new(
        id: usize,
        position: Vec2,
        velocity: Vec2,
        radius: f64,
        mass: f64,
        hue: f64,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            mass,
            hue,
        }
    }

    /// Index of the particle in the initial layout.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Color seed in degrees, `[0, 360)`.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[must_use]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub(super) fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    pub(super) fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.velocity
    }
}

/// The particles of a world, in initial index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particles(Vec<Particle>);

/// Time derivative of [`Particles`] positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Velocities(Vec<Vec2>);

impl Particles {
    pub(super) fn new(particles: Vec<Particle>) -> Self {
        Self(particles)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Particle] {
        &self.0
    }

    pub(super) fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Particle> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.0.iter()
    }

    /// Sum of the particles' kinetic energies.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        self.0.iter().map(Particle::kinetic_energy).sum()
    }

    /// Average kinetic energy per particle, or zero without particles.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn temperature(&self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.kinetic_energy() / self.0.len() as f64
        }
    }

    /// Total linear momentum.
    #[must_use]
    pub fn momentum(&self) -> Vec2 {
        self.0.iter().map(Particle::momentum).sum()
    }

    pub(super) fn velocities(&self) -> Velocities {
        Velocities(self.0.iter().map(Particle::velocity).collect())
    }
}

impl AsRef<[Particle]> for Particles {
    fn as_ref(&self) -> &[Particle] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Particles {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl StepIntegrable<f64> for Particles {
    type Derivative = Velocities;

    fn step(&self, derivative: Velocities, delta: f64) -> Self {
        let moved = self
            .0
            .iter()
            .zip(derivative.0)
            .map(|(particle, velocity)| Particle {
                position: particle.position + velocity * delta,
                ..*particle
            })
            .collect();
        Self(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn particle(id: usize, velocity: Vec2, mass: f64) -> Particle {
        Particle::new(id, Vec2::new(50.0, 50.0), velocity, 5.0, mass, 0.0)
    }

    #[test]
    fn step_moves_positions_only() {
        let particles = Particles::new(vec![particle(0, Vec2::new(2.0, -1.0), 1.0)]);

        let next = particles.step(particles.velocities(), 0.5);

        let moved = next.as_slice()[0];
        assert_relative_eq!(moved.position(), Vec2::new(51.0, 49.5));
        assert_eq!(moved.velocity(), Vec2::new(2.0, -1.0));
        assert_eq!(moved.radius(), 5.0);
    }

    #[test]
    fn derived_quantities() {
        let particles = Particles::new(vec![
            particle(0, Vec2::new(3.0, 4.0), 2.0),
            particle(1, Vec2::new(-1.0, 0.0), 1.0),
        ]);

        assert_relative_eq!(particles.kinetic_energy(), 25.0 + 0.5);
        assert_relative_eq!(particles.temperature(), 12.75);
        assert_relative_eq!(particles.momentum(), Vec2::new(5.0, 8.0));
    }

    #[test]
    fn empty_world_has_zero_temperature() {
        let particles = Particles::default();

        assert_eq!(particles.temperature(), 0.0);
        assert_eq!(particles.momentum(), Vec2::zeros());
    }
}
