//! Gravitational accelerations for the planetary system
//!
//! Direct O(n^2) Newtonian sum over every pair, no softening and no tree
//! approximation.

use crate::simulation::states::{NVec3, System};

/// Unsoftened Newtonian gravity between point masses
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G }
    }

    /// Accelerations for every body in `sys`, same length and order as `sys.bodies`
    pub fn compute_accelerations(&self, sys: &System) -> Vec<NVec3> {
        let mut out = vec![NVec3::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys, &mut out);
        out
    }

    /// Overwrite `out[i]` with the total acceleration on body i
    ///
    /// Reads positions and masses only. A pair at exactly zero separation
    /// contributes nothing, so coincident bodies never produce NaN.
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.mass();

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;
                let dist = r.norm();
                if dist == 0.0 {
                    continue;
                }

                // coef = G / |r|^3
                let coef = self.G / (dist * dist * dist);

                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                out[i] += coef * bj.mass() * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
