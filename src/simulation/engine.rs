//! The simulation orchestrator
//!
//! [`Simulation`] exclusively owns the roster, the clock and the force model.
//! One call to [`Simulation::step`] runs the whole tick:
//!
//! 1. net force on every body from the pre-step roster
//! 2. semi-implicit Euler for every body
//! 3. distance-to-star bookkeeping
//! 4. clock advance
//! 5. trail append
//!
//! Phases 1 and 2 never interleave: the force buffer is complete before any
//! body moves.

use std::collections::HashSet;

use log::debug;

use crate::error::{ConfigurationError, Result};
use crate::simulation::clock::SimulationClock;
use crate::simulation::forces::{ForceModel, NewtonianGravity};
use crate::simulation::integrator::integrate_all;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodySnapshot, NVec2};

/// Lifecycle of a simulation. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no step taken yet.
    Ready,
    /// At least one step taken.
    Running,
}

pub struct Simulation {
    bodies: Vec<Body>,
    star: usize, // index of the star in `bodies`
    clock: SimulationClock,
    parameters: Parameters,
    forces: Box<dyn ForceModel>,
    scratch: Vec<NVec2>, // per-step net forces, reused
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("bodies", &self.bodies)
            .field("star", &self.star)
            .field("clock", &self.clock)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build a simulation using Newtonian gravity configured from `parameters`.
    ///
    /// Errors:
    /// - `InvalidParameter` if a parameter is out of range
    /// - `TooFewBodies` for fewer than 2 bodies
    /// - `NoStar` / `MultipleStars` unless exactly one body is the star
    /// - `DuplicateName` if two bodies share a name
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        let gravity = NewtonianGravity::new(
            parameters.G,
            parameters.min_separation,
            parameters.gravity_model,
        );
        Self::with_force_model(bodies, parameters, Box::new(gravity))
    }

    /// Build a simulation with a custom force model.
    pub fn with_force_model(
        mut bodies: Vec<Body>,
        parameters: Parameters,
        forces: Box<dyn ForceModel>,
    ) -> Result<Self> {
        parameters.validate()?;
        let clock = SimulationClock::new(parameters.step_seconds)?;

        if bodies.len() < 2 {
            return Err(ConfigurationError::TooFewBodies(bodies.len()));
        }

        let stars: Vec<usize> = bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_star)
            .map(|(i, _)| i)
            .collect();
        let star = match stars.as_slice() {
            [] => return Err(ConfigurationError::NoStar),
            [i] => *i,
            many => return Err(ConfigurationError::MultipleStars(many.len())),
        };

        let mut seen = HashSet::with_capacity(bodies.len());
        for b in &bodies {
            if !seen.insert(b.name.as_str()) {
                return Err(ConfigurationError::DuplicateName(b.name.clone()));
            }
        }

        update_distances(&mut bodies, star);
        for b in bodies.iter_mut() {
            b.trail.clear();
            b.record_trail(parameters.trail_capacity);
        }

        debug!(
            "simulation ready: {} bodies, star `{}`, dt = {} s, gravity = {:?}",
            bodies.len(),
            bodies[star].name,
            parameters.step_seconds,
            parameters.gravity_model
        );

        let n = bodies.len();
        Ok(Self {
            bodies,
            star,
            clock,
            parameters,
            forces,
            scratch: vec![NVec2::zeros(); n],
        })
    }

    /// Advance by exactly one fixed tick.
    pub fn step(&mut self) {
        let dt = self.clock.step_seconds();

        // Phase 1: forces from the pre-step roster only
        self.forces.net_forces(&self.bodies, &mut self.scratch);

        // Phase 2: integrate every body with its finished force
        integrate_all(&mut self.bodies, &self.scratch, dt);

        update_distances(&mut self.bodies, self.star);
        self.clock.advance();

        let capacity = self.parameters.trail_capacity;
        for b in self.bodies.iter_mut() {
            b.record_trail(capacity);
        }
    }

    /// Advance by `steps` ticks.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Owned copy of every body's observable state, in roster order.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn phase(&self) -> Phase {
        if self.clock.steps() == 0 {
            Phase::Ready
        } else {
            Phase::Running
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn star(&self) -> &Body {
        &self.bodies[self.star]
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Initial position of body `index` followed by its post-step positions, oldest first.
    pub fn trail(&self, index: usize) -> Option<Vec<NVec2>> {
        self.bodies.get(index).map(|b| b.trail.iter().copied().collect())
    }
}

fn update_distances(bodies: &mut [Body], star: usize) {
    let star_x = bodies[star].x;
    for (i, b) in bodies.iter_mut().enumerate() {
        b.distance_to_star = if i == star { 0.0 } else { (b.x - star_x).norm() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::forces::GravityModel;

    fn body(name: &str, x: f64, vy: f64, m: f64, star: bool) -> Body {
        Body::builder(name)
            .mass(m)
            .position(x, 0.0)
            .velocity(0.0, vy)
            .radius(1.0)
            .star(star)
            .build()
            .unwrap()
    }

    fn unit_params() -> Parameters {
        Parameters {
            G: 1.0,
            step_seconds: 0.001,
            min_separation: 1e-9,
            trail_capacity: 4,
            ..Parameters::default()
        }
    }

    #[test]
    fn rejects_single_body() {
        let err = Simulation::new(vec![body("s", 0.0, 0.0, 1.0, true)], unit_params()).unwrap_err();
        assert_eq!(err, ConfigurationError::TooFewBodies(1));
    }

    #[test]
    fn rejects_missing_star() {
        let bodies = vec![body("a", 0.0, 0.0, 1.0, false), body("b", 1.0, 0.0, 1.0, false)];
        let err = Simulation::new(bodies, unit_params()).unwrap_err();
        assert_eq!(err, ConfigurationError::NoStar);
    }

    #[test]
    fn rejects_two_stars() {
        let bodies = vec![body("a", 0.0, 0.0, 1.0, true), body("b", 1.0, 0.0, 1.0, true)];
        let err = Simulation::new(bodies, unit_params()).unwrap_err();
        assert_eq!(err, ConfigurationError::MultipleStars(2));
    }

    #[test]
    fn rejects_duplicate_names() {
        let bodies = vec![body("a", 0.0, 0.0, 1.0, true), body("a", 1.0, 0.0, 1.0, false)];
        let err = Simulation::new(bodies, unit_params()).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateName("a".into()));
    }

    #[test]
    fn star_need_not_be_first() -> Result<()> {
        let bodies = vec![body("p", 2.0, 0.0, 1.0, false), body("s", 0.0, 0.0, 100.0, true)];
        let sim = Simulation::new(bodies, unit_params())?;
        assert_eq!(sim.star().name(), "s");
        assert_eq!(sim.bodies()[0].distance_to_star(), 2.0);
        assert_eq!(sim.bodies()[1].distance_to_star(), 0.0);
        Ok(())
    }

    #[test]
    fn phase_moves_from_ready_to_running() -> Result<()> {
        let bodies = vec![body("s", 0.0, 0.0, 100.0, true), body("p", 1.0, 10.0, 1.0, false)];
        let mut sim = Simulation::new(bodies, unit_params())?;
        assert_eq!(sim.phase(), Phase::Ready);
        sim.step();
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.clock().steps(), 1);
        Ok(())
    }

    #[test]
    fn forces_use_pre_step_positions() -> Result<()> {
        // Two equal masses at rest: if the second body read the first body's
        // already-advanced position, their velocities would differ.
        let bodies = vec![body("a", -1.0, 0.0, 1.0, true), body("b", 1.0, 0.0, 1.0, false)];
        let mut sim = Simulation::new(bodies, Parameters { step_seconds: 0.5, ..unit_params() })?;
        sim.step();
        let va = sim.bodies()[0].velocity();
        let vb = sim.bodies()[1].velocity();
        assert_eq!(va, -vb);
        // F = 1 / 4, a = 1 / 4, dv = 1 / 8
        assert!((va.x - 0.125).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn trail_keeps_latest_positions() -> Result<()> {
        let bodies = vec![body("s", 0.0, 0.0, 100.0, true), body("p", 1.0, 10.0, 1.0, false)];
        let mut sim = Simulation::new(bodies, unit_params())?;
        assert_eq!(sim.trail(1).map(|t| t.len()), Some(1));
        sim.run(10);
        let trail = sim.trail(1).unwrap();
        assert_eq!(trail.len(), 4);
        assert_eq!(*trail.last().unwrap(), sim.bodies()[1].position());
        assert!(sim.trail(2).is_none());
        Ok(())
    }

    #[test]
    fn star_dominated_policy_is_configurable() -> Result<()> {
        let bodies = || {
            vec![
                body("s", 0.0, 0.0, 100.0, true),
                body("p1", 1.0, 10.0, 1.0, false),
                body("p2", 2.0, 7.0, 1.0, false),
            ]
        };
        let mut mutual = Simulation::new(bodies(), unit_params())?;
        let mut dominated = Simulation::new(
            bodies(),
            Parameters { gravity_model: GravityModel::StarDominated, ..unit_params() },
        )?;
        mutual.step();
        dominated.step();
        assert_ne!(mutual.bodies()[2].velocity(), dominated.bodies()[2].velocity());
        Ok(())
    }
}
