//! Build the initial planetary system from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime `System`:
//! - the central body at the origin, at rest
//! - every planet on the +Z axis at its orbital radius, moving along +X
//!   at the two-body circular speed `sqrt(G * M_central / r)`
//!
//! The other planets perturb these orbits slightly; that is expected.
//! No randomness is involved, so repeated builds are bit-identical.

use std::collections::HashSet;

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec3, System};

/// Speed of a circular orbit of radius `r` around mass `m_central`
#[allow(non_snake_case)]
pub fn circular_speed(G: f64, m_central: f64, r: f64) -> f64 {
    (G * m_central / r).sqrt()
}

pub fn build_initial_state(cfg: &ScenarioConfig) -> SimResult<System> {
    let params = cfg.parameters();
    params.validate()?;

    let central = &cfg.central;
    let mut bodies = Vec::with_capacity(cfg.planets.len() + 1);
    bodies.push(Body::new(
        central.name.clone(),
        central.mass,
        central.radius,
        NVec3::zeros(),
        NVec3::zeros(),
    )?);

    for pc in &cfg.planets {
        if !(pc.orbit.is_finite() && pc.orbit > 0.0) {
            return Err(SimError::configuration(format!(
                "planet '{}' has non-positive orbital radius {}",
                pc.name, pc.orbit
            )));
        }
        let speed = circular_speed(params.G, central.mass, pc.orbit);
        bodies.push(Body::new(
            pc.name.clone(),
            pc.mass,
            pc.radius,
            NVec3::new(0.0, 0.0, pc.orbit),
            NVec3::new(speed, 0.0, 0.0),
        )?);
    }

    let mut seen = HashSet::new();
    for b in &bodies {
        if !seen.insert(b.name()) {
            return Err(SimError::configuration(format!(
                "duplicate body name '{}'",
                b.name()
            )));
        }
    }

    Ok(System::new(bodies))
}
