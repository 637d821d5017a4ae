//! Force contributors for the star/planet engine
//!
//! Defines the [`ForceModel`] trait and direct Newtonian gravity.
//! Forces (not accelerations) are produced here; the integrator divides by
//! each body's mass.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::simulation::states::{direction, Body, NVec2};

/// Which body pairs attract each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityModel {
    /// Every body attracts every other body, the star included.
    #[default]
    #[serde(rename = "mutual")]
    Mutual,
    /// Only pairs involving the star interact; planets ignore each other.
    #[serde(rename = "star_dominated")]
    StarDominated,
}

/// Trait for force sources operating on a roster of bodies.
///
/// Implementations must only read `bodies`: the slice is the pre-step
/// state and nothing in it may be advanced before every force is known.
pub trait ForceModel: Send + Sync {
    /// Force exerted by `b` on `a`.
    fn pair_force(&self, a: &Body, b: &Body) -> NVec2;

    /// Net force on every body, written into `out[i]`.
    ///
    /// Each sum runs over the other bodies in roster order, so the result
    /// does not depend on whether the pass runs in parallel.
    fn net_forces(&self, bodies: &[Body], out: &mut [NVec2]) {
        debug_assert_eq!(bodies.len(), out.len());

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_iter_mut().enumerate().for_each(|(i, f)| {
                *f = net_force_on(self, bodies, i);
            });
        }

        #[cfg(not(feature = "parallel"))]
        for (i, f) in out.iter_mut().enumerate() {
            *f = net_force_on(self, bodies, i);
        }
    }
}

fn net_force_on<M: ForceModel + ?Sized>(model: &M, bodies: &[Body], i: usize) -> NVec2 {
    let a = &bodies[i];
    bodies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(NVec2::zeros(), |acc, (_, b)| acc + model.pair_force(a, b))
}

/// 2D Newtonian gravity, F = G m_a m_b / r^2 along the line between centres.
///
/// Pairs closer than `min_separation`, or close enough that the force is no
/// longer representable, contribute nothing instead of blowing up; the first
/// time that happens a warning is logged.
#[allow(non_snake_case)]
#[derive(Debug)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_separation: f64, // coincident-position guard
    pub model: GravityModel,
    warned: AtomicBool,
}

#[allow(non_snake_case)]
impl NewtonianGravity {
    pub fn new(G: f64, min_separation: f64, model: GravityModel) -> Self {
        Self {
            G,
            min_separation,
            model,
            warned: AtomicBool::new(false),
        }
    }

    fn interacts(&self, a: &Body, b: &Body) -> bool {
        match self.model {
            GravityModel::Mutual => true,
            GravityModel::StarDominated => a.is_star || b.is_star,
        }
    }
}

impl ForceModel for NewtonianGravity {
    fn pair_force(&self, a: &Body, b: &Body) -> NVec2 {
        if !self.interacts(a, b) {
            return NVec2::zeros();
        }

        let dist = (b.x - a.x).norm();
        // m_a * m_b is symmetric, which keeps pair_force(a, b) == -pair_force(b, a) exact
        let magnitude = self.G * (a.m * b.m) / (dist * dist);

        // a is pulled toward b
        match direction(&a.x, &b.x) {
            Some(unit) if dist >= self.min_separation && magnitude.is_finite() => unit * magnitude,
            _ => {
                self.warn_degenerate(a, b, dist);
                NVec2::zeros()
            }
        }
    }
}

impl NewtonianGravity {
    fn warn_degenerate(&self, a: &Body, b: &Body, dist: f64) {
        if !self.warned.swap(true, Ordering::Relaxed) {
            warn!(
                "`{}` and `{}` are {dist} apart; treating their attraction as zero",
                a.name, b.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, x: f64, y: f64, m: f64, star: bool) -> Body {
        Body::builder(name)
            .mass(m)
            .position(x, y)
            .velocity(0.0, 0.0)
            .radius(1.0)
            .star(star)
            .build()
            .unwrap()
    }

    #[test]
    fn points_toward_other_body() {
        let g = NewtonianGravity::new(1.0, 1e-9, GravityModel::Mutual);
        let a = body("a", 0.0, 0.0, 1.0, true);
        let b = body("b", 3.0, 4.0, 2.0, false);
        let f = g.pair_force(&a, &b);
        // |F| = 1 * 1 * 2 / 25
        assert!((f.norm() - 0.08).abs() < 1e-15);
        assert!(f.dot(&(b.x - a.x)) > 0.0);
    }

    #[test]
    fn star_dominated_ignores_planet_pairs() {
        let g = NewtonianGravity::new(1.0, 1e-9, GravityModel::StarDominated);
        let p1 = body("p1", 1.0, 0.0, 1.0, false);
        let p2 = body("p2", 2.0, 0.0, 1.0, false);
        let s = body("s", 0.0, 0.0, 10.0, true);
        assert_eq!(g.pair_force(&p1, &p2), NVec2::zeros());
        assert!(g.pair_force(&p1, &s).norm() > 0.0);
        assert!(g.pair_force(&s, &p1).norm() > 0.0);
    }

    #[test]
    fn coincident_bodies_give_zero() {
        let g = NewtonianGravity::new(1.0, f64::EPSILON, GravityModel::Mutual);
        let a = body("a", 5.0, 5.0, 1.0, true);
        let b = body("b", 5.0, 5.0, 1.0, false);
        assert_eq!(g.pair_force(&a, &b), NVec2::zeros());
    }

    #[test]
    fn overflowing_force_is_zero_not_nan() {
        // r^2 underflows to a subnormal, so G m m / r^2 would be inf
        let g = NewtonianGravity::new(1.0, 1e-300, GravityModel::Mutual);
        let a = body("a", 0.0, 0.0, 1.0, true);
        let b = body("b", 1e-160, 0.0, 1.0, false);
        assert_eq!(g.pair_force(&a, &b), NVec2::zeros());
        assert_eq!(g.pair_force(&b, &a), NVec2::zeros());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_pass_matches_sequential_sums() {
        use crate::configuration::config::ScenarioConfig;

        let g = NewtonianGravity::new(crate::units::G_SI, 1.0, GravityModel::Mutual);
        let bodies: Vec<Body> = ScenarioConfig::inner_solar_system()
            .bodies
            .iter()
            .map(|b| b.to_body().unwrap())
            .collect();

        let mut out = vec![NVec2::zeros(); bodies.len()];
        g.net_forces(&bodies, &mut out);

        for i in 0..bodies.len() {
            assert_eq!(out[i], net_force_on(&g, &bodies, i), "body {}", bodies[i].name);
        }
    }

    #[test]
    fn net_force_sums_in_roster_order() {
        let g = NewtonianGravity::new(1.0, 1e-9, GravityModel::Mutual);
        let bodies = vec![
            body("s", 0.0, 0.0, 4.0, true),
            body("l", -1.0, 0.0, 1.0, false),
            body("r", 1.0, 0.0, 1.0, false),
        ];
        let mut out = vec![NVec2::zeros(); 3];
        g.net_forces(&bodies, &mut out);
        // symmetric pulls on the star cancel
        assert!(out[0].norm() < 1e-15);
        // left planet: star pulls +x with 4, right planet pulls +x with 1/4
        assert!((out[1].x - 4.25).abs() < 1e-12);
        assert!((out[2].x + 4.25).abs() < 1e-12);
    }
}
