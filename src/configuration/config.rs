//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants, tick size and render scale
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A star with one planet on a circular orbit:
//!
//! ```yaml
//! parameters:
//!   G: 6.67428e-11               # gravitational constant (default: SI value)
//!   step_seconds: 86400.0        # one simulated day per tick
//!   scale_meters_per_pixel: 5.984e8
//!   min_separation: 1.0          # closer pairs exert no force (default: f64::EPSILON)
//!   gravity_model: mutual        # or star_dominated
//!   trail_capacity: 400          # orbit points kept per body, 0 = none
//!
//! bodies:
//!   - name: sun
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     star: true
//!   - name: earth
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [100, 149, 237]
//! ```
//!
//! Every parameter is optional; missing ones fall back to
//! [`Parameters::default`](crate::Parameters).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::simulation::forces::GravityModel;
use crate::simulation::states::Rgb;
use crate::units::au_to_meters;

/// Global physical and numerical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub G: Option<f64>, // gravitational constant
    pub step_seconds: Option<f64>, // simulated seconds per tick
    pub scale_meters_per_pixel: Option<f64>, // only read by renderers
    pub min_separation: Option<f64>, // coincident-position guard
    pub gravity_model: Option<GravityModel>, // mutual or star_dominated
    pub trail_capacity: Option<usize>, // orbit history length
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String, // unique name
    pub x: [f64; 2], // initial position in meters
    pub v: [f64; 2], // initial velocity in meters/second
    pub m: f64, // mass in kilograms
    pub radius: f64, // display radius
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub star: bool, // exactly one body must set this
}

fn default_color() -> Rgb {
    Rgb::WHITE
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// The Sun with Mercury, Venus, Earth and Mars starting on the x axis.
    pub fn inner_solar_system() -> Self {
        let body = |name: &str, x_au: f64, vy: f64, m: f64, radius: f64, color: Rgb, star: bool| {
            BodyConfig {
                name: name.to_string(),
                x: [au_to_meters(x_au), 0.0],
                v: [0.0, vy],
                m,
                radius,
                color,
                star,
            }
        };

        Self {
            parameters: ParametersConfig::default(),
            bodies: vec![
                body("sun", 0.0, 0.0, 1.98892e30, 30.0, Rgb::YELLOW, true),
                body("earth", -1.0, 29.783e3, 5.9742e24, 16.0, Rgb::BLUE, false),
                body("mars", -1.524, 24.077e3, 6.39e23, 12.0, Rgb::RED, false),
                body("mercury", 0.387, -47.4e3, 3.30e23, 8.0, Rgb::DARK_GREY, false),
                body("venus", 0.723, -35.02e3, 4.8685e24, 14.0, Rgb::WHITE, false),
            ],
        }
    }
}
