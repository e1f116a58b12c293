//! Pairwise elastic contact resolution.
//!
//! Pairs are visited as `(i, j)` with `i < j` in initial index order. The
//! order is part of the result: resolving one contact can move a particle into
//! or out of its next contact within the same step.

use crate::Vec2;

use super::{Container, Particle};

/// Overlap below which two particles count as separated.
pub const CONTACT_TOLERANCE: f64 = 1e-9;

/// Resolves every contact in `particles` for one step.
///
/// Approaching pairs exchange an elastic impulse along their center line and
/// are pushed apart. Then position-only passes run until no pair overlaps by
/// more than [`CONTACT_TOLERANCE`], up to `max_passes` of them.
///
/// Returns `false` if the pass limit was reached with overlaps remaining.
pub(super) fn resolve(particles: &mut [Particle], container: &Container, max_passes: usize) -> bool {
    for_each_pair(particles, |a, b| {
        collide(a, b, container);
    });

    for _ in 0..max_passes {
        let mut separated_any = false;
        for_each_pair(particles, |a, b| {
            separated_any |= separate(a, b, container);
        });
        if !separated_any {
            return true;
        }
    }
    max_overlap(particles) <= CONTACT_TOLERANCE
}

/// Returns the deepest overlap between any two particles, or zero.
pub(super) fn max_overlap(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .enumerate()
        .flat_map(|(i, a)| particles[i + 1..].iter().map(move |b| (a, b)))
        .filter_map(|(a, b)| overlap(a, b).map(|(_, depth)| depth))
        .fold(0.0, f64::max)
}

/// Applies an elastic impulse to an approaching, overlapping pair.
///
/// With `n` the unit normal from `a` to `b` and `v_rel = (v_b − v_a)·n`, the
/// pair is skipped when `v_rel ≥ 0`. Otherwise `J = 2 v_rel / (m_a + m_b)`,
/// `v_a += J m_b n` and `v_b −= J m_a n`, which conserves momentum and kinetic
/// energy. The overlap is then split evenly between the two.
pub(super) fn collide(a: &mut Particle, b: &mut Particle, container: &Container) {
    let Some((normal, overlap)) = overlap(a, b) else {
        return;
    };

    let relative = (b.velocity() - a.velocity()).dot(&normal);
    if relative >= 0.0 {
        return;
    }

    let impulse = 2.0 * relative / (a.mass() + b.mass());
    *a.velocity_mut() += normal * (impulse * b.mass());
    *b.velocity_mut() -= normal * (impulse * a.mass());

    push_apart(a, b, normal, overlap, container);
}

/// Pushes an overlapping pair apart without touching velocities.
///
/// Returns `true` if the overlap exceeded [`CONTACT_TOLERANCE`].
pub(super) fn separate(a: &mut Particle, b: &mut Particle, container: &Container) -> bool {
    match overlap(a, b) {
        Some((normal, overlap)) if overlap > CONTACT_TOLERANCE => {
            push_apart(a, b, normal, overlap, container);
            true
        }
        _ => false,
    }
}

/// Returns the unit normal from `a` to `b` and the overlap depth, if any.
///
/// Coincident centers use the `+x` axis.
fn overlap(a: &Particle, b: &Particle) -> Option<(Vec2, f64)> {
    let offset = b.position() - a.position();
    let distance = offset.norm();
    let overlap = a.radius() + b.radius() - distance;
    if overlap <= 0.0 {
        return None;
    }

    let normal = if distance > 0.0 {
        offset / distance
    } else {
        Vec2::x()
    };
    Some((normal, overlap))
}

/// Moves `a` back and `b` forward along `normal` by half of `overlap` each.
///
/// A wall can stop either particle short. The part a wall absorbs is handed
/// to the partner, once in each direction.
fn push_apart(a: &mut Particle, b: &mut Particle, normal: Vec2, overlap: f64, container: &Container) {
    let half = overlap / 2.0;

    let a_short = shift(a, normal * -half, container).dot(&-normal).max(0.0);
    let b_short = shift(b, normal * (half + a_short), container).dot(&normal).max(0.0);
    if b_short > 0.0 {
        shift(a, normal * -b_short, container);
    }
}

/// Moves a particle by `offset`, clamped inside the container.
///
/// Returns the part of `offset` that could not be applied.
fn shift(particle: &mut Particle, offset: Vec2, container: &Container) -> Vec2 {
    let target = particle.position() + offset;
    let clamped = container.clamp(target, particle.radius());
    *particle.position_mut() = clamped;
    target - clamped
}

/// Calls `f` for every pair `(i, j)` with `i < j`, in nested index order.
fn for_each_pair(particles: &mut [Particle], mut f: impl FnMut(&mut Particle, &mut Particle)) {
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        for b in tail {
            f(&mut head[i], b);
        }
    }
}
