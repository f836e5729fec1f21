//! Pairwise attraction between dynamic windows.

use rapier2d::prelude::*;

use crate::body::{BodyKind, WindowBody};
use crate::world::PhysicsWorld;

/// Force on a body at `from` toward a body at `to`.
///
/// Magnitude is `g * va * vb / d²` along the unit direction. Coincident
/// centers exert nothing.
pub fn attraction(
    g: Real,
    from: &Vector<Real>,
    va: Real,
    to: &Vector<Real>,
    vb: Real,
) -> Vector<Real> {
    let delta = to - from;
    let distance_sq = delta.norm_squared();
    if distance_sq <= Real::EPSILON {
        return Vector::zeros();
    }
    delta / distance_sq.sqrt() * (g * va * vb / distance_sq)
}

/// Replace every dynamic body's accumulated force with the pairwise
/// attraction of the current tick. With `g == 0` nothing is touched.
pub fn apply<'a>(world: &mut PhysicsWorld, g: Real, windows: impl Iterator<Item = &'a WindowBody>) {
    if g == 0.0 {
        return;
    }
    let masses: Vec<_> = windows
        .filter(|w| w.kind == BodyKind::Dynamic)
        .filter_map(|w| {
            world
                .body(w.handle)
                .map(|body| (w.handle, *body.translation(), w.volume))
        })
        .collect();

    let mut forces = vec![Vector::<Real>::zeros(); masses.len()];
    for (i, (_, pa, va)) in masses.iter().enumerate() {
        for (j, (_, pb, vb)) in masses.iter().enumerate().skip(i + 1) {
            let force = attraction(g, pa, *va, pb, *vb);
            forces[i] += force;
            forces[j] -= force;
        }
    }

    for ((handle, _, _), force) in masses.iter().zip(forces) {
        if let Some(body) = world.body_mut(*handle) {
            body.reset_forces(false);
            body.add_force(force, true);
        }
    }
}
