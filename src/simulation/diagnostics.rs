//! Conserved-quantity diagnostics used to measure integrator drift.

use crate::simulation::engine::Simulation;
use crate::simulation::forces::GravityModel;
use crate::simulation::states::NVec2;

/// Sum of 1/2 m |v|^2 over the roster.
pub fn kinetic_energy(sim: &Simulation) -> f64 {
    sim.bodies().iter().map(|b| b.kinetic_energy()).sum()
}

/// Gravitational potential energy, -G m_i m_j / r over interacting pairs.
///
/// Pairs the force model ignores (closer than `min_separation`, too close
/// to represent, or two planets under the star-dominated policy) contribute
/// nothing.
pub fn potential_energy(sim: &Simulation) -> f64 {
    let p = sim.parameters();
    let bodies = sim.bodies();
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if p.gravity_model == GravityModel::StarDominated && !a.is_star() && !b.is_star() {
                continue;
            }
            let r = (b.position() - a.position()).norm();
            let term = p.G * (a.mass() * b.mass()) / r;
            // same cut-off as the force: no pull, no potential
            if r < p.min_separation || !(term / r).is_finite() {
                continue;
            }
            total -= term;
        }
    }
    total
}

pub fn total_energy(sim: &Simulation) -> f64 {
    kinetic_energy(sim) + potential_energy(sim)
}

/// Sum of m v over the roster.
pub fn total_momentum(sim: &Simulation) -> NVec2 {
    sim.bodies()
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.velocity() * b.mass())
}
