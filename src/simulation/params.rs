//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` (in simulation units) and the gravity policy,
//! - the fixed step size in simulated seconds,
//! - the render scale (meters per pixel), never read by the physics,
//! - the coincident-position guard distance (tiny, so unit-scale systems keep their gravity),
//! - how many trail points each body keeps.

use crate::error::{ConfigurationError, Result};
use crate::simulation::forces::GravityModel;
use crate::units::{AU, G_SI, SECONDS_PER_DAY};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub step_seconds: f64, // fixed tick size
    pub scale_meters_per_pixel: f64, // render scale
    pub min_separation: f64, // below this distance a pair exerts no force
    pub gravity_model: GravityModel,
    pub trail_capacity: usize, // 0 disables trails
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            step_seconds: SECONDS_PER_DAY,
            scale_meters_per_pixel: AU / 250.0,
            min_separation: f64::EPSILON,
            gravity_model: GravityModel::Mutual,
            trail_capacity: 0,
        }
    }
}

impl Parameters {
    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        positive("G", self.G)?;
        positive("step_seconds", self.step_seconds)?;
        positive("scale_meters_per_pixel", self.scale_meters_per_pixel)?;
        positive("min_separation", self.min_separation)
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidParameter {
            name,
            reason: format!("must be finite and > 0 (got {value})"),
        })
    }
}
