//! Conserved quantities of a `System`
//!
//! Used to judge integrator quality: a symplectic step keeps these bounded,
//! forward Euler lets the energy wander.

use super::states::{NVec3, System};

/// Kinetic plus pairwise potential energy, solar mass * AU^2 / day^2
#[allow(non_snake_case)]
pub fn total_energy(sys: &System, G: f64) -> f64 {
    let kinetic: f64 = sys
        .bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.v.norm_squared())
        .sum();

    let mut potential = 0.0;
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (bi, bj) = (&sys.bodies[i], &sys.bodies[j]);
            let dist = (bj.x - bi.x).norm();
            if dist == 0.0 {
                continue;
            }
            potential -= G * bi.mass() * bj.mass() / dist;
        }
    }

    kinetic + potential
}

/// Sum of m * (x cross v) about the origin
pub fn angular_momentum(sys: &System) -> NVec3 {
    sys.bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + b.mass() * b.x.cross(&b.v))
}

/// Sum of m * v
pub fn linear_momentum(sys: &System) -> NVec3 {
    sys.bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + b.mass() * b.v)
}
