//! Closed-form solutions of `m·x'' + c·x' + k·x = 0`.
//!
//! With `ω0 = √(k/m)` and `γ = c/(2m)` the motion falls into one of three
//! regimes, each with its own exact solution for the initial displacement
//! `x0` and velocity `v0`.

use super::SpringConfig;

/// Relative distance between `γ` and `ω0` treated as critical damping.
pub const CRITICAL_TOLERANCE: f64 = 1e-9;

/// Damping regime of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Regime {
    /// `γ < ω0`: oscillates inside a decaying envelope.
    Underdamped,

    /// `γ = ω0`: the fastest return to rest without oscillating.
    CriticallyDamped,

    /// `γ > ω0`: creeps back to rest without oscillating.
    Overdamped,
}

/// Displacement and velocity of the mass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpringState {
    pub displacement: f64,
    pub velocity: f64,
}

/// Coefficients of the exact solution for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Motion {
    /// `x = e^(−γt)·(a·cos ωd t + b·sin ωd t)`
    Underdamped {
        gamma: f64,
        omega_d: f64,
        a: f64,
        b: f64,
    },

    /// `x = e^(−γt)·(a + b·t)`
    Critical { gamma: f64, a: f64, b: f64 },

    /// `x = c1·e^(r1 t) + c2·e^(r2 t)`
    Overdamped { r1: f64, r2: f64, c1: f64, c2: f64 },
}

impl Motion {
    pub(super) fn new(config: &SpringConfig) -> Self {
        let omega0 = natural_frequency(config);
        let gamma = damping_rate(config);
        let x0 = config.initial_displacement();
        let v0 = config.initial_velocity();

        match regime(omega0, gamma) {
            Regime::Underdamped => {
                let omega_d = (omega0 * omega0 - gamma * gamma).sqrt();
                Self::Underdamped {
                    gamma,
                    omega_d,
                    a: x0,
                    b: (v0 + gamma * x0) / omega_d,
                }
            }
            Regime::CriticallyDamped => Self::Critical {
                gamma,
                a: x0,
                b: v0 + gamma * x0,
            },
            Regime::Overdamped => {
                let spread = (gamma * gamma - omega0 * omega0).sqrt();
                let r1 = -gamma + spread;
                let r2 = -gamma - spread;
                let c1 = (v0 - r2 * x0) / (r1 - r2);
                Self::Overdamped {
                    r1,
                    r2,
                    c1,
                    c2: x0 - c1,
                }
            }
        }
    }

    pub(super) fn regime(&self) -> Regime {
        match self {
            Self::Underdamped { .. } => Regime::Underdamped,
            Self::Critical { .. } => Regime::CriticallyDamped,
            Self::Overdamped { .. } => Regime::Overdamped,
        }
    }

    /// Evaluates the solution `t` simulated seconds after release.
    pub(super) fn state_at(&self, t: f64) -> SpringState {
        match *self {
            Self::Underdamped {
                gamma,
                omega_d,
                a,
                b,
            } => {
                let decay = (-gamma * t).exp();
                let (sin, cos) = (omega_d * t).sin_cos();
                SpringState {
                    displacement: decay * (a * cos + b * sin),
                    velocity: decay
                        * ((omega_d * b - gamma * a) * cos - (omega_d * a + gamma * b) * sin),
                }
            }
            Self::Critical { gamma, a, b } => {
                let decay = (-gamma * t).exp();
                SpringState {
                    displacement: decay * (a + b * t),
                    velocity: decay * (b - gamma * (a + b * t)),
                }
            }
            Self::Overdamped { r1, r2, c1, c2 } => {
                let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
                SpringState {
                    displacement: c1 * e1 + c2 * e2,
                    velocity: r1 * c1 * e1 + r2 * c2 * e2,
                }
            }
        }
    }
}

/// `ω0 = √(k/m)`
pub(super) fn natural_frequency(config: &SpringConfig) -> f64 {
    (config.spring_constant() / config.mass()).sqrt()
}

/// `γ = c/(2m)`
pub(super) fn damping_rate(config: &SpringConfig) -> f64 {
    config.damping() / (2.0 * config.mass())
}

fn regime(omega0: f64, gamma: f64) -> Regime {
    if (gamma - omega0).abs() <= CRITICAL_TOLERANCE * omega0 {
        Regime::CriticallyDamped
    } else if gamma < omega0 {
        Regime::Underdamped
    } else {
        Regime::Overdamped
    }
}
