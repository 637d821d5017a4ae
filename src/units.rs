//! Physical constants and unit conversions.
//!
//! Simulation space is SI: meters, seconds, kilograms, with the star's initial
//! position at the origin. Pixels only appear in [`ScreenProjection`], which
//! renderers use and the physics never touches.

use crate::simulation::states::NVec2;

/// Astronomical unit in meters.
pub const AU: f64 = 149.6e6 * 1000.0;

/// Gravitational constant in SI units (m^3 kg^-1 s^-2).
pub const G_SI: f64 = 6.67428e-11;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU
}

pub fn au_to_meters(au: f64) -> f64 {
    au * AU
}

pub fn seconds_to_days(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY
}

/// Speed of a circular orbit of radius `r` around a central mass `m`.
pub fn circular_orbit_speed(g: f64, m: f64, r: f64) -> f64 {
    (g * m / r).sqrt()
}

/// Period of a circular orbit of radius `r` around a central mass `m`.
pub fn orbital_period(g: f64, m: f64, r: f64) -> f64 {
    2.0 * std::f64::consts::PI * (r * r * r / (g * m)).sqrt()
}

/// Maps simulation meters onto a pixel viewport centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjection {
    pub meters_per_pixel: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenProjection {
    pub fn new(meters_per_pixel: f64, width: f64, height: f64) -> Self {
        Self { meters_per_pixel, width, height }
    }

    pub fn to_screen(&self, p: &NVec2) -> (f64, f64) {
        (
            p.x / self.meters_per_pixel + self.width / 2.0,
            p.y / self.meters_per_pixel + self.height / 2.0,
        )
    }

    pub fn to_world(&self, sx: f64, sy: f64) -> NVec2 {
        NVec2::new(
            (sx - self.width / 2.0) * self.meters_per_pixel,
            (sy - self.height / 2.0) * self.meters_per_pixel,
        )
    }
}
