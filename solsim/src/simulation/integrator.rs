//! Fixed-step time integrators for the planetary system
//!
//! `leapfrog_step` is the kick-drift-kick velocity-Verlet scheme the step
//! controller runs. `euler_step` is plain forward Euler, kept only as a
//! baseline to measure the leapfrog's energy behaviour against.

use super::forces::NewtonianGravity;
use super::states::System;

/// Advance the system by one step `h` using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in place. Every body follows the same rule, the central
/// body included.
pub fn leapfrog_step(sys: &mut System, gravity: &NewtonianGravity, h: f64) {
    let half_h = 0.5 * h;

    // a_n from x_n
    let a_old = gravity.compute_accelerations(sys);

    // Kick: v_n+1/2 = v_n + (h/2) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_h * *a;
    }

    // Drift: x_n+1 = x_n + h * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += h * b.v;
    }

    sys.t += h;

    // a_n+1 from x_n+1
    let a_new = gravity.compute_accelerations(sys);

    // Second kick: v_n+1 = v_n+1/2 + (h/2) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_h * *a;
    }
}

/// Advance the system by one step `h` using forward Euler
/// Positions move with the old velocities, velocities with the old
/// accelerations. Not symplectic: energy drifts steadily.
pub fn euler_step(sys: &mut System, gravity: &NewtonianGravity, h: f64) {
    let a = gravity.compute_accelerations(sys);

    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.x += h * b.v;
        b.v += h * *a;
    }

    sys.t += h;
}
