//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the process-wide settings:
//! - gravitational constant `G` in AU^3 / (day^2 * solar mass),
//! - the largest stable sub-step `h_max` in days,
//! - the cap on sub-steps per advance (bounds work per request)
//!
//! Fixed at startup; tests build their own to probe convergence.

use crate::error::{SimError, SimResult};

/// Gaussian gravitational constant squared, k^2, for AU / day / solar mass
pub const GRAVITATIONAL_CONSTANT: f64 = 0.000_295_912_208_285_591_04;

/// Largest sub-step the leapfrog is allowed to take, in days
pub const MAX_SUBSTEP_DAYS: f64 = 0.2;

/// Upper bound on sub-steps executed by a single advance
pub const MAX_SUBSTEPS: usize = 1000;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub h_max: f64, // max sub-step length (days)
    pub max_substeps: usize, // sub-step clamp per advance
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            h_max: MAX_SUBSTEP_DAYS,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::configuration(format!(
                "gravitational constant must be positive, got {}",
                self.G
            )));
        }
        if !(self.h_max.is_finite() && self.h_max > 0.0) {
            return Err(SimError::configuration(format!(
                "h_max must be positive, got {}",
                self.h_max
            )));
        }
        if self.max_substeps == 0 {
            return Err(SimError::configuration("max_substeps must be at least 1"));
        }
        Ok(())
    }
}
