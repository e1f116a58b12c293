//! The closed-form spring and orbit scenes agree with numerically integrated
//! equations of motion.

use std::convert::Infallible;

use approx::assert_relative_eq;
use framesim_core::{DerivativeOf, OdeProblem, StepIntegrable, TimeBase};
use framesim_scenes::{
    Vec2,
    orbit::{BodySpec, OrbitBody},
    spring::{self, DampedSpring, SpringConfig, SpringParams},
};
use framesim_solvers::transient::rk4;
use nalgebra::Vector4;

/// Position and velocity packed as `(x, y, vx, vy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Phase(Vector4<f64>);

impl StepIntegrable<f64> for Phase {
    type Derivative = Vector4<f64>;

    fn step(&self, derivative: Vector4<f64>, delta: f64) -> Self {
        Self(self.0 + derivative * delta)
    }
}

/// `m·x'' = −c·x' − k·x` along the x axis.
struct SpringForce {
    mass: f64,
    damping: f64,
    spring_constant: f64,
}

impl OdeProblem for SpringForce {
    type Delta = f64;
    type State = Phase;
    type Error = Infallible;

    fn derivative(&self, state: &Phase) -> Result<DerivativeOf<Phase, f64>, Infallible> {
        let [x, _, v, _]: [f64; 4] = state.0.into();
        let acceleration = -(self.damping * v + self.spring_constant * x) / self.mass;
        Ok(Vector4::new(v, 0.0, acceleration, 0.0))
    }
}

/// Inverse-square attraction towards the origin.
struct Gravity {
    mu: f64,
}

impl OdeProblem for Gravity {
    type Delta = f64;
    type State = Phase;
    type Error = Infallible;

    fn derivative(&self, state: &Phase) -> Result<DerivativeOf<Phase, f64>, Infallible> {
        let [x, y, vx, vy]: [f64; 4] = state.0.into();
        let r = x.hypot(y);
        let pull = -self.mu / (r * r * r);
        Ok(Vector4::new(vx, vy, pull * x, pull * y))
    }
}

fn integrate<P: OdeProblem<Delta = f64, State = Phase>>(
    problem: &P,
    initial: Phase,
    duration: f64,
    steps: u64,
) -> Phase {
    rk4::solve_unobserved(problem, initial, duration / steps as f64, steps)
        .unwrap()
        .state
}

#[test]
fn spring_matches_integrated_motion_in_every_regime() {
    // ω0 = 2 for m = 2, k = 8; c = 8 is critical.
    for (damping, initial_velocity) in [(0.0, 0.0), (0.6, 15.0), (8.0, -4.0), (25.0, 30.0)] {
        let params = SpringParams {
            mass: 2.0,
            spring_constant: 8.0,
            damping,
            initial_displacement: 50.0,
            initial_velocity,
            ..SpringParams::default()
        };
        let time_base = TimeBase::new(spring::DEFAULT_FPS, spring::DEFAULT_SPEED_SCALE).unwrap();
        let spring = DampedSpring::new(SpringConfig::new(params, time_base).unwrap());
        let force = SpringForce {
            mass: 2.0,
            damping,
            spring_constant: 8.0,
        };

        let initial = Phase(Vector4::new(50.0, 0.0, initial_velocity, 0.0));
        let integrated = integrate(&force, initial, 4.0, 4_000);
        let exact = spring.state_at_time(4.0);

        assert_relative_eq!(integrated.0.x, exact.displacement, epsilon = 1e-6);
        assert_relative_eq!(integrated.0.z, exact.velocity, epsilon = 1e-6);
    }
}

#[test]
fn orbit_matches_integrated_gravity() {
    let body = OrbitBody::new(BodySpec {
        name: "eccentric".to_owned(),
        semi_major_axis: 160.0,
        eccentricity: 0.5,
        period: 365.0,
        ..BodySpec::default()
    })
    .unwrap();
    let n = body.mean_motion();
    let gravity = Gravity {
        mu: n * n * body.semi_major_axis().powi(3),
    };

    let start = body.state_at(0.0);
    let initial = Phase(Vector4::new(
        start.position.x,
        start.position.y,
        start.velocity.x,
        start.velocity.y,
    ));

    for days in [40.0, 182.5, 300.0] {
        let integrated = integrate(&gravity, initial, days, 20_000);
        let exact = body.state_at(days);

        let position = Vec2::new(integrated.0.x, integrated.0.y);
        assert_relative_eq!(position, exact.position, epsilon = 1e-5);
        let velocity = Vec2::new(integrated.0.z, integrated.0.w);
        assert_relative_eq!(velocity, exact.velocity, epsilon = 1e-6);
    }
}

#[test]
fn orbit_closes_after_one_period() {
    for spec in BodySpec::inner_planets() {
        let body = OrbitBody::new(spec).unwrap();

        let start = body.state_at(0.0);
        let end = body.state_at(body.period());

        assert_relative_eq!(end.position, start.position, epsilon = 1e-9);
        assert_relative_eq!(end.velocity, start.velocity, epsilon = 1e-9);
    }
}
