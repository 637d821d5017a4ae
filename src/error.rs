//! Error types for building a simulation.
//!
//! Every invalid configuration is rejected when the roster is assembled, so a
//! constructed [`Simulation`](crate::Simulation) is always valid and stepping
//! it cannot fail.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Fatal configuration problems raised while building bodies or a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Mass is zero, negative or not a number.
    #[error("body `{body}`: mass must be finite and > 0 (got {mass})")]
    NonPositiveMass { body: String, mass: f64 },

    /// Display radius is zero, negative or not a number.
    #[error("body `{body}`: radius must be finite and > 0 (got {radius})")]
    NonPositiveRadius { body: String, radius: f64 },

    /// Position or velocity has a NaN/inf component.
    #[error("body `{body}`: {field} must be finite")]
    NonFinite { body: String, field: &'static str },

    /// A required builder field was never set.
    #[error("body `{body}`: missing required field `{field}`")]
    MissingField { body: String, field: &'static str },

    /// The roster needs a star and at least one planet.
    #[error("a simulation needs at least 2 bodies (got {0})")]
    TooFewBodies(usize),

    /// No body is flagged as the star.
    #[error("no body is flagged as the star")]
    NoStar,

    /// More than one body is flagged as the star.
    #[error("only one star is allowed, found {0}")]
    MultipleStars(usize),

    /// Two bodies share a name.
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// A global simulation parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
