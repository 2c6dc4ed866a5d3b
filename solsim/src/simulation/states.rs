//! Core state types for the planetary simulation.
//!
//! Units are fixed across the crate: time in days, distance in AU,
//! mass in solar masses.
//!
//! - `Body`   one point mass with an immutable identity (name, mass, radius)
//! - `System` the ordered list of bodies plus the simulated time `t`

use nalgebra::Vector3;
use serde::Serialize;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    m: f64, // mass
    radius: f64, // cosmetic only
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite mass and radius
    pub fn new(name: impl Into<String>, m: f64, radius: f64, x: NVec3, v: NVec3) -> SimResult<Self> {
        let name = name.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::configuration(format!(
                "body '{name}' has non-positive mass {m}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::configuration(format!(
                "body '{name}' has non-positive radius {radius}"
            )));
        }
        Ok(Self { name, m, radius, x, v })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // index-stable between resets
    pub t: f64, // days simulated since the last reset
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Read-only projection of every body, in index order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::from).collect()
    }
}

/// Externally visible state of one body
///
/// Field names match the wire format served by the HTTP binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub name: String,
    pub pos: [f64; 3],
    pub vel: [f64; 3],
}

impl From<&Body> for BodySnapshot {
    fn from(b: &Body) -> Self {
        Self {
            name: b.name.clone(),
            pos: [b.x.x, b.x.y, b.x.z],
            vel: [b.v.x, b.v.y, b.v.z],
        }
    }
}
