use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use framesim_scenes::{
    Scene, TimeBase,
    pendulum::{DoublePendulum, PendulumConfig, PendulumParams},
};

/// Energy scale of the default pendulum: `(m1 + m2) g l1 + m2 g l2`.
const ENERGY_SCALE: f64 = 3.0 * 9.8 * 150.0;

#[test]
fn frame_zero_is_released_from_horizontal() {
    let snapshot = DoublePendulum::new(PendulumConfig::default())
        .snapshot(0)
        .unwrap();

    assert_eq!(snapshot.state.theta1, FRAC_PI_2);
    assert_eq!(snapshot.state.theta2, FRAC_PI_2);
    assert_eq!(snapshot.state.omega1, 0.0);
    assert_eq!(snapshot.state.omega2, 0.0);
    assert_relative_eq!(snapshot.energy.total, 0.0, epsilon = 1e-9);
}

#[test]
fn energy_stays_bounded_over_ten_seconds_of_video() {
    let pendulum = DoublePendulum::new(PendulumConfig::default());
    let initial = pendulum.snapshot(0).unwrap().energy.total;

    let late = pendulum.snapshot(300).unwrap();

    assert!(late.state.omega1.is_finite() && late.state.omega2.is_finite());
    assert!((late.energy.total - initial).abs() < 1e-3 * ENERGY_SCALE);
}

#[test]
fn substeps_refine_the_same_motion() {
    let coarse = DoublePendulum::new(PendulumConfig::default());
    let fine_time_base = TimeBase::new(30.0, 1.5)
        .unwrap()
        .with_substeps(std::num::NonZeroU32::new(4).unwrap());
    let fine = DoublePendulum::new(
        PendulumConfig::new(PendulumParams::default(), fine_time_base).unwrap(),
    );

    // Early on, before chaos amplifies the step-size difference.
    let a = coarse.snapshot(20).unwrap();
    let b = fine.snapshot(20).unwrap();

    assert_relative_eq!(a.elapsed, 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.elapsed, 1.0, epsilon = 1e-12);
    assert_relative_eq!(a.state.theta1, b.state.theta1, epsilon = 1e-6);
    assert_relative_eq!(a.state.theta2, b.state.theta2, epsilon = 1e-6);
}

#[test]
fn small_swings_stay_small() {
    let params = PendulumParams {
        theta1: 0.05,
        theta2: 0.05,
        ..PendulumParams::default()
    };
    let time_base = *PendulumConfig::default().time_base();
    let pendulum = DoublePendulum::new(PendulumConfig::new(params, time_base).unwrap());

    for frame in (0..600).step_by(50) {
        let state = pendulum.snapshot(frame).unwrap().state;
        assert!(state.theta1.abs() < 0.2, "theta1 at frame {frame}");
        assert!(state.theta2.abs() < 0.2, "theta2 at frame {frame}");
    }
}
