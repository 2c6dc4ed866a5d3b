//! Configuration types for loading planetary scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constant and sub-stepping limits
//! - [`CentralConfig`]    – the body parked at the origin
//! - [`PlanetConfig`]     – one entry per orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 0.00029591220828559104   # AU^3 / (day^2 * solar mass)
//!   h_max: 0.2                  # largest sub-step, days
//!   max_substeps: 1000          # sub-step cap per advance
//!
//! central:
//!   name: "Sun"
//!   mass: 1.0                   # solar masses
//!   radius: 0.1                 # cosmetic
//!
//! planets:
//!   - name: "Mercury"
//!     orbit: 2.0                # orbital radius, AU
//!     mass: 1.651e-7
//!   - name: "Venus"
//!     orbit: 4.0
//!     mass: 2.447e-6
//! ```
//!
//! Every section may be omitted; missing sections fall back to the built-in
//! solar system. The configuration is read once at startup and mapped into
//! runtime [`Parameters`] and [`System`](crate::simulation::states::System)
//! by [`build_initial_state`](crate::simulation::scenario::build_initial_state).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, MAX_SUBSTEPS, MAX_SUBSTEP_DAYS};

/// Radius given to planets whose entry does not set one
pub const DEFAULT_PLANET_RADIUS: f64 = 0.01;

/// Global physical constant and sub-stepping limits
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub h_max: f64,          // max sub-step length in days
    pub max_substeps: usize, // sub-step clamp per advance
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            h_max: MAX_SUBSTEP_DAYS,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            h_max: cfg.h_max,
            max_substeps: cfg.max_substeps,
        }
    }
}

/// The body placed at the origin with zero velocity
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CentralConfig {
    pub name: String,
    pub mass: f64,   // solar masses
    pub radius: f64, // cosmetic
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self {
            name: "Sun".to_string(),
            mass: 1.0,
            radius: 0.1,
        }
    }
}

/// One orbiting body, started on a circular orbit
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PlanetConfig {
    pub name: String,
    pub orbit: f64, // orbital radius in AU
    pub mass: f64,  // solar masses
    #[serde(default = "default_planet_radius")]
    pub radius: f64, // cosmetic
}

fn default_planet_radius() -> f64 {
    DEFAULT_PLANET_RADIUS
}

impl PlanetConfig {
    pub fn new(name: &str, orbit: f64, mass: f64) -> Self {
        Self {
            name: name.to_string(),
            orbit,
            mass,
            radius: DEFAULT_PLANET_RADIUS,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub central: CentralConfig,
    pub planets: Vec<PlanetConfig>,
}

impl Default for ScenarioConfig {
    /// The eight planets, spread out to 2..50 AU
    fn default() -> Self {
        Self {
            parameters: ParametersConfig::default(),
            central: CentralConfig::default(),
            planets: vec![
                PlanetConfig::new("Mercury", 2.0, 1.651e-7),
                PlanetConfig::new("Venus", 4.0, 2.447e-6),
                PlanetConfig::new("Earth", 6.0, 3.003e-6),
                PlanetConfig::new("Mars", 8.0, 3.227e-7),
                PlanetConfig::new("Jupiter", 20.0, 0.0009543),
                PlanetConfig::new("Saturn", 30.0, 0.0002857),
                PlanetConfig::new("Uranus", 40.0, 4.366e-5),
                PlanetConfig::new("Neptune", 50.0, 5.151e-5),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("failed to parse scenario YAML")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario file {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::from(&self.parameters)
    }
}
