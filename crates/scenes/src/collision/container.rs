use framesim_core::constraint::{Constrained, StrictlyPositive};

use crate::{ConfigError, Vec2};

use super::Particle;

/// Axis-aligned box with its top-left corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    width: Constrained<f64, StrictlyPositive>,
    height: Constrained<f64, StrictlyPositive>,
}

impl Container {
    /// Creates a container.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            width: ConfigError::check("width", width)?,
            height: ConfigError::check("height", height)?,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Checks that a particle of `radius` fits inside.
    pub(super) fn check_fits(&self, radius: f64) -> Result<(), ConfigError> {
        if 2.0 * radius > self.width() || 2.0 * radius > self.height() {
            return Err(ConfigError::ContainerTooSmall {
                width: self.width(),
                height: self.height(),
                radius,
            });
        }
        Ok(())
    }

    /// Returns `true` if the whole particle is inside the container.
    #[must_use]
    pub fn contains(&self, particle: &Particle) -> bool {
        let p = particle.position();
        let r = particle.radius();
        p.x - r >= 0.0 && p.x + r <= self.width() && p.y - r >= 0.0 && p.y + r <= self.height()
    }

    /// Returns the nearest center position that keeps a particle of `radius`
    /// inside the container.
    pub(super) fn clamp(&self, position: Vec2, radius: f64) -> Vec2 {
        Vec2::new(
            position.x.clamp(radius, self.width() - radius),
            position.y.clamp(radius, self.height() - radius),
        )
    }

    /// Moves a particle back inside and turns its velocity inward on every
    /// axis where it touched a wall.
    pub(super) fn reflect(&self, particle: &mut Particle) {
        let r = particle.radius();
        let limits = [self.width(), self.height()];

        for axis in 0..2 {
            let position = particle.position()[axis];
            let speed = particle.velocity()[axis].abs();
            if position - r < 0.0 {
                particle.position_mut()[axis] = r;
                particle.velocity_mut()[axis] = speed;
            } else if position + r > limits[axis] {
                particle.position_mut()[axis] = limits[axis] - r;
                particle.velocity_mut()[axis] = -speed;
            }
        }
    }
}
