//! Equations of motion and energy of the planar double pendulum.
//!
//! Both arms are massless rigid rods with point bobs. With `δ = θ2 − θ1`:
//!
//! ```text
//! den1 = (m1 + m2) l1 − m2 l1 cos²δ
//! den2 = (l2 / l1) den1
//!
//! ω1' = ( m2 l1 ω1² sinδ cosδ + m2 g sinθ2 cosδ
//!       + m2 l2 ω2² sinδ − (m1 + m2) g sinθ1 ) / den1
//!
//! ω2' = ( −m2 l2 ω2² sinδ cosδ + (m1 + m2) g sinθ1 cosδ
//!       − (m1 + m2) l1 ω1² sinδ − (m1 + m2) g sinθ2 ) / den2
//! ```
//!
//! Since `den1 = l1 (m1 + m2 sin²δ) ≥ m1 l1`, the denominators stay positive
//! for any valid configuration. They are still clamped away from zero so that
//! extreme mass ratios cannot produce infinities.

use crate::Vec2;

use super::{Energy, PendulumConfig, PendulumRate, PendulumState};

/// Smallest denominator magnitude used when computing angular accelerations.
pub const MIN_DENOMINATOR: f64 = 1e-9;

/// Computes the time derivative of `state`.
pub(super) fn rate(config: &PendulumConfig, state: &PendulumState) -> PendulumRate {
    let [m1, m2] = config.masses();
    let [l1, l2] = config.lengths();
    let g = config.gravity();
    let PendulumState {
        theta1,
        theta2,
        omega1,
        omega2,
    } = *state;

    let total_mass = m1 + m2;
    let (sin_d, cos_d) = (theta2 - theta1).sin_cos();

    let den1 = guard(total_mass * l1 - m2 * l1 * cos_d * cos_d);
    let den2 = guard((l2 / l1) * den1);

    let domega1 = (m2 * l1 * omega1 * omega1 * sin_d * cos_d
        + m2 * g * theta2.sin() * cos_d
        + m2 * l2 * omega2 * omega2 * sin_d
        - total_mass * g * theta1.sin())
        / den1;

    let domega2 = (-m2 * l2 * omega2 * omega2 * sin_d * cos_d
        + total_mass * g * theta1.sin() * cos_d
        - total_mass * l1 * omega1 * omega1 * sin_d
        - total_mass * g * theta2.sin())
        / den2;

    PendulumRate {
        dtheta1: omega1,
        dtheta2: omega2,
        domega1,
        domega2,
    }
}

/// Kinetic and potential energy, with zero potential at the pivot height.
pub(super) fn energy(config: &PendulumConfig, state: &PendulumState) -> Energy {
    let [m1, m2] = config.masses();
    let [l1, l2] = config.lengths();
    let g = config.gravity();
    let PendulumState {
        theta1,
        theta2,
        omega1,
        omega2,
    } = *state;

    let kinetic = 0.5 * (m1 + m2) * l1 * l1 * omega1 * omega1
        + 0.5 * m2 * l2 * l2 * omega2 * omega2
        + m2 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();
    let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();

    Energy::new(kinetic, potential)
}

/// Bob positions relative to the pivot, with y pointing down.
pub(super) fn bob_positions(config: &PendulumConfig, state: &PendulumState) -> [Vec2; 2] {
    let [l1, l2] = config.lengths();
    let (sin1, cos1) = state.theta1.sin_cos();
    let (sin2, cos2) = state.theta2.sin_cos();

    let inner = Vec2::new(l1 * sin1, l1 * cos1);
    let outer = inner + Vec2::new(l2 * sin2, l2 * cos2);
    [inner, outer]
}

/// Keeps `value` at least [`MIN_DENOMINATOR`] away from zero, preserving sign.
fn guard(value: f64) -> f64 {
    if value.abs() < MIN_DENOMINATOR {
        MIN_DENOMINATOR.copysign(value)
    } else {
        value
    }
}
