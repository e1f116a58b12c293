use std::ops::{Add, Mul};

use framesim_core::StepIntegrable;

/// Angles and angular velocities of both arms.
///
/// Angles are measured from the downward vertical and are not wrapped, so a
/// full revolution shows up as a change of `2π`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

/// Time derivative of a [`PendulumState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendulumRate {
    pub dtheta1: f64,
    pub dtheta2: f64,
    pub domega1: f64,
    pub domega2: f64,
}

impl Add for PendulumRate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            dtheta1: self.dtheta1 + rhs.dtheta1,
            dtheta2: self.dtheta2 + rhs.dtheta2,
            domega1: self.domega1 + rhs.domega1,
            domega2: self.domega2 + rhs.domega2,
        }
    }
}

impl Mul<f64> for PendulumRate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            dtheta1: self.dtheta1 * rhs,
            dtheta2: self.dtheta2 * rhs,
            domega1: self.domega1 * rhs,
            domega2: self.domega2 * rhs,
        }
    }
}

impl StepIntegrable<f64> for PendulumState {
    type Derivative = PendulumRate;

    fn step(&self, derivative: PendulumRate, delta: f64) -> Self {
        Self {
            theta1: self.theta1 + derivative.dtheta1 * delta,
            theta2: self.theta2 + derivative.dtheta2 * delta,
            omega1: self.omega1 + derivative.domega1 * delta,
            omega2: self.omega2 + derivative.domega2 * delta,
        }
    }
}
