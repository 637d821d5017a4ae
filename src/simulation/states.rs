//! Core state types for the star/planet simulation.
//!
//! - `NVec2`: 2d position/velocity vector (meters, meters/second)
//! - `Body`: one point mass plus its display metadata
//! - `BodySnapshot`: read-only copy of a body handed to renderers
//!
//! Bodies are only created through [`BodyBuilder`], which rejects anything
//! that would make the physics ill-defined.

use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

pub type NVec2 = Vector2<f64>;

/// Unit vector pointing from `from` to `to`, `None` if the points coincide.
pub fn direction(from: &NVec2, to: &NVec2) -> Option<NVec2> {
    (to - from).try_normalize(0.0)
}

/// Angle of the displacement `to - from`, measured from +x (radians).
pub fn angle_between(from: &NVec2, to: &NVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Display colour. Has no effect on the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const BLUE: Rgb = Rgb(100, 149, 237);
    pub const RED: Rgb = Rgb(188, 39, 50);
    pub const DARK_GREY: Rgb = Rgb(80, 78, 81);
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.0, c.1, c.2]
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass
    pub(crate) radius: f64, // display radius
    pub(crate) is_star: bool,
    pub(crate) color: Rgb,
    pub(crate) distance_to_star: f64, // refreshed once per step
    pub(crate) trail: VecDeque<NVec2>, // initial then post-step positions, oldest first
}

impl Body {
    pub fn builder(name: impl Into<String>) -> BodyBuilder {
        BodyBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_star(&self) -> bool {
        self.is_star
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Distance to the star as of the last completed step (0 for the star).
    pub fn distance_to_star(&self) -> f64 {
        self.distance_to_star
    }

    /// Kinetic energy 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub(crate) fn record_trail(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        while self.trail.len() >= capacity {
            self.trail.pop_front();
        }
        self.trail.push_back(self.x);
    }

    pub(crate) fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            name: self.name.clone(),
            position: self.x,
            velocity: self.v,
            radius: self.radius,
            is_star: self.is_star,
            distance_to_star: self.distance_to_star,
            color: self.color,
        }
    }
}

/// Owned, read-only view of a body for rendering and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub name: String,
    pub position: NVec2,
    pub velocity: NVec2,
    pub radius: f64,
    pub is_star: bool,
    pub distance_to_star: f64,
    pub color: Rgb,
}

/// Builder that requires mass, position, velocity and radius up front.
///
/// `is_star` defaults to `false` and `color` to white.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    name: String,
    mass: Option<f64>,
    position: Option<NVec2>,
    velocity: Option<NVec2>,
    radius: Option<f64>,
    is_star: bool,
    color: Rgb,
}

impl BodyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mass: None,
            position: None,
            velocity: None,
            radius: None,
            is_star: false,
            color: Rgb::WHITE,
        }
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(NVec2::new(x, y));
        self
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Some(NVec2::new(vx, vy));
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn star(mut self, is_star: bool) -> Self {
        self.is_star = is_star;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Validate and build the body.
    ///
    /// Errors:
    /// - `MissingField` if mass, position, velocity or radius was never set
    /// - `NonPositiveMass` / `NonPositiveRadius` for values that are not finite and > 0
    /// - `NonFinite` for NaN/inf position or velocity components
    pub fn build(self) -> Result<Body> {
        let name = self.name;
        let missing = |field| ConfigurationError::MissingField {
            body: name.clone(),
            field,
        };
        let m = self.mass.ok_or_else(|| missing("mass"))?;
        let x = self.position.ok_or_else(|| missing("position"))?;
        let v = self.velocity.ok_or_else(|| missing("velocity"))?;
        let radius = self.radius.ok_or_else(|| missing("radius"))?;

        if !m.is_finite() || m <= 0.0 {
            return Err(ConfigurationError::NonPositiveMass { body: name, mass: m });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigurationError::NonPositiveRadius { body: name, radius });
        }
        if !x.iter().all(|c| c.is_finite()) {
            return Err(ConfigurationError::NonFinite { body: name, field: "position" });
        }
        if !v.iter().all(|c| c.is_finite()) {
            return Err(ConfigurationError::NonFinite { body: name, field: "velocity" });
        }

        Ok(Body {
            name,
            x,
            v,
            m,
            radius,
            is_star: self.is_star,
            color: self.color,
            distance_to_star: 0.0,
            trail: VecDeque::new(),
        })
    }
}
