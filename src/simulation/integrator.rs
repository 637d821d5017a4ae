//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! The velocity is kicked with the current force first, then the position
//! drifts with the *new* velocity. Unlike forward Euler this keeps circular
//! orbits closed instead of slowly spiralling outward.

use super::states::{Body, NVec2};

/// Advance one body by `dt` seconds under a constant `net_force`.
pub fn integrate(body: &mut Body, net_force: NVec2, dt: f64) {
    // Kick: v_n+1 = v_n + (F / m) * dt
    body.v += (net_force / body.m) * dt;
    // Drift: x_n+1 = x_n + v_n+1 * dt
    body.x += body.v * dt;
}

/// Advance every body with its precomputed net force.
///
/// `forces[i]` must already hold the force on `bodies[i]` evaluated at the
/// pre-step positions of the whole roster.
pub fn integrate_all(bodies: &mut [Body], forces: &[NVec2], dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());
    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        integrate(b, *f, dt);
    }
}
