use std::{fmt::Debug, thread};

use framesim_scenes::{
    Scene,
    collision::{CollisionConfig, CollisionWorld},
    orbit::{OrbitConfig, OrbitSystem},
    pendulum::{DoublePendulum, PendulumConfig},
    render_frames,
    spring::{DampedSpring, SpringConfig},
    wave::{WaveConfig, WaveField},
};

/// Checks that a scene gives the same snapshots regardless of thread, request
/// order, or repetition.
fn assert_deterministic<S>(scene: &S, frames: &[i64])
where
    S: Scene,
    S::Snapshot: PartialEq + Debug,
{
    let sequential: Vec<_> = frames
        .iter()
        .map(|&frame| scene.snapshot(frame).unwrap())
        .collect();

    let reversed: Vec<_> = frames
        .iter()
        .rev()
        .map(|&frame| scene.snapshot(frame).unwrap())
        .collect();
    let mut unreversed = reversed;
    unreversed.reverse();
    assert_eq!(unreversed, sequential);

    let threaded: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = frames
            .iter()
            .map(|&frame| s.spawn(move || scene.snapshot(frame).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(threaded, sequential);

    let parallel: Vec<_> = render_frames(scene, frames)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn pendulum_is_deterministic() {
    let pendulum = DoublePendulum::new(PendulumConfig::default());
    assert_deterministic(&pendulum, &[300, 0, 47, 300, 1, 150]);
}

#[test]
fn collision_world_is_deterministic() {
    let world = CollisionWorld::new(CollisionConfig::default());
    assert_deterministic(&world, &[120, 0, 33, 120, 7]);
}

#[test]
fn wave_field_is_deterministic() {
    let field = WaveField::new(WaveConfig::default());
    assert_deterministic(&field, &[90, 0, 12, 90]);
}

#[test]
fn spring_is_deterministic() {
    let spring = DampedSpring::new(SpringConfig::default());
    assert_deterministic(&spring, &[450, 0, 151, 450, 9]);
}

#[test]
fn orbit_system_is_deterministic() {
    let system = OrbitSystem::new(OrbitConfig::default());
    assert_deterministic(&system, &[730, 0, 365, 730, 2]);
}

#[test]
fn render_frames_reports_invalid_frames_in_place() {
    let pendulum = DoublePendulum::new(PendulumConfig::default());

    let results = render_frames(&pendulum, &[2, -5, 4]);

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().frame, 4);
}
