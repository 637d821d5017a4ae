//! Fixed-step gravity engine for a star and a handful of planets.
//!
//! The crate owns the physics only: forces, semi-implicit Euler integration,
//! distance-to-star bookkeeping and unit conversion. Renderers drive it with
//! [`Simulation::step`] and read [`Simulation::snapshot`].

pub mod simulation;
pub mod configuration;
pub mod error;
pub mod units;

pub use simulation::states::{Body, BodyBuilder, BodySnapshot, NVec2, Rgb, direction, angle_between};
pub use simulation::forces::{ForceModel, GravityModel, NewtonianGravity};
pub use simulation::integrator::{integrate, integrate_all};
pub use simulation::clock::SimulationClock;
pub use simulation::params::Parameters;
pub use simulation::engine::{Phase, Simulation};
pub use simulation::diagnostics::{kinetic_energy, potential_energy, total_energy, total_momentum};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use error::{ConfigurationError, ScenarioError};
pub use units::ScreenProjection;
