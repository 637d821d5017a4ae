//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime pieces:
//! - numerical parameters (`Parameters`), defaults filled in
//! - validated bodies (`Body`) through the builder
//! - the `Simulation` that owns them

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

impl ParametersConfig {
    /// Runtime parameters, with defaults for anything left unset.
    pub fn to_parameters(&self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            G: self.G.unwrap_or(d.G),
            step_seconds: self.step_seconds.unwrap_or(d.step_seconds),
            scale_meters_per_pixel: self.scale_meters_per_pixel.unwrap_or(d.scale_meters_per_pixel),
            min_separation: self.min_separation.unwrap_or(d.min_separation),
            gravity_model: self.gravity_model.unwrap_or(d.gravity_model),
            trail_capacity: self.trail_capacity.unwrap_or(d.trail_capacity),
        }
    }
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<Body> {
        Body::builder(self.name.as_str())
            .mass(self.m)
            .position(self.x[0], self.x[1])
            .velocity(self.v[0], self.v[1])
            .radius(self.radius)
            .color(self.color)
            .star(self.star)
            .build()
    }
}

impl Simulation {
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self> {
        let bodies = cfg
            .bodies
            .iter()
            .map(BodyConfig::to_body)
            .collect::<Result<Vec<_>>>()?;
        Simulation::new(bodies, cfg.parameters.to_parameters())
    }
}
