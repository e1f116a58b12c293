use std::f64::consts::{PI, TAU};

/// Convergence threshold of the Newton iteration, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-14;

/// Iteration limit of the Newton iteration.
pub const MAX_ITERATIONS: usize = 64;

/// Solves Kepler's equation `M = E − e·sin E` for the eccentric anomaly `E`.
///
/// The mean anomaly is first reduced to `[−π, π)`, so the result lies in
/// that range too. `eccentricity` must be in `[0, 1)`.
#[must_use]
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = (mean_anomaly + PI).rem_euclid(TAU) - PI;

    // Elongated orbits start from ±π, where Newton's method cannot overshoot.
    let mut anomaly = if eccentricity < 0.8 {
        m
    } else {
        PI.copysign(m)
    };
    for _ in 0..MAX_ITERATIONS {
        let (sin, cos) = anomaly.sin_cos();
        let delta = (anomaly - eccentricity * sin - m) / (1.0 - eccentricity * cos);
        anomaly -= delta;
        if delta.abs() <= KEPLER_TOLERANCE {
            break;
        }
    }
    anomaly
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn reduce(angle: f64) -> f64 {
        (angle + PI).rem_euclid(TAU) - PI
    }

    #[test]
    fn circular_orbits_need_no_correction() {
        for m in [0.0, 0.4, -2.0, 3.0] {
            assert_eq!(eccentric_anomaly(m, 0.0), reduce(m));
        }
    }

    #[test]
    fn solutions_satisfy_keplers_equation() {
        for eccentricity in [0.017, 0.2, 0.5, 0.85, 0.99] {
            for step in 0..48 {
                let m = -PI + f64::from(step) * TAU / 48.0;
                let e_anomaly = eccentric_anomaly(m, eccentricity);
                assert_relative_eq!(
                    e_anomaly - eccentricity * e_anomaly.sin(),
                    m,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn whole_turns_are_reduced() {
        let e_anomaly = eccentric_anomaly(1.2, 0.3);

        assert_relative_eq!(eccentric_anomaly(1.2 + 5.0 * TAU, 0.3), e_anomaly, epsilon = 1e-9);
        assert_relative_eq!(eccentric_anomaly(1.2 - TAU, 0.3), e_anomaly, epsilon = 1e-9);
    }
}
