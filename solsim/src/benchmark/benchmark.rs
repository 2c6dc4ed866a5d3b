use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::controller::StepController;
use crate::simulation::diagnostics::total_energy;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::{euler_step, leapfrog_step};
use crate::simulation::params::GRAVITATIONAL_CONSTANT;
use crate::simulation::scenario::build_initial_state;
use crate::simulation::states::{Body, NVec3, System};
use crate::error::SimResult;

/// Time one direct-sum force evaluation for growing body counts
pub fn bench_gravity() -> SimResult<()> {
    let ns = [9, 50, 100, 200, 400, 800];
    let gravity = NewtonianGravity::new(GRAVITATIONAL_CONSTANT);

    for n in ns {
        let sys = make_system(n)?;
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.accumulate_accels(&sys, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt:8.6} s");
    }
    Ok(())
}

/// Time worst-case advances (clamped at the sub-step cap) on the solar system
pub fn bench_advance() -> SimResult<()> {
    let controller = StepController::new(&ScenarioConfig::default())?;
    let requests = [1.0, 10.0, 100.0, 200.0, 1000.0];

    for days in requests {
        let t0 = Instant::now();
        let report = controller.advance(days)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "dt = {days:7.1} d, sub-steps = {:4}, simulated = {:7.2} d, {ms:8.3} ms",
            report.substeps, report.elapsed
        );
    }
    Ok(())
}

/// Relative energy drift of leapfrog vs forward Euler on the solar system
/// CSV output, one row per simulated year
pub fn bench_drift() -> SimResult<()> {
    let cfg = ScenarioConfig::default();
    let params = cfg.parameters();
    let gravity = NewtonianGravity::new(params.G);

    let mut leap = build_initial_state(&cfg)?;
    let mut euler = leap.clone();
    let e0 = total_energy(&leap, params.G);
    let steps_per_year = (365.25 / params.h_max).ceil() as usize;
    let h = 365.25 / steps_per_year as f64;

    println!("year,leapfrog_drift,euler_drift");
    for year in 1..=20 {
        for _ in 0..steps_per_year {
            leapfrog_step(&mut leap, &gravity, h);
            euler_step(&mut euler, &gravity, h);
        }
        let d_leap = ((total_energy(&leap, params.G) - e0) / e0).abs();
        let d_euler = ((total_energy(&euler, params.G) - e0) / e0).abs();
        println!("{year},{d_leap:.3e},{d_euler:.3e}");
    }
    Ok(())
}

/// Helper to build a manual System of size `n`: a unit star plus light
/// bodies on deterministic, distinct positions
fn make_system(n: usize) -> SimResult<System> {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new("star", 1.0, 0.1, NVec3::zeros(), NVec3::zeros())?);

    for i in 1..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        bodies.push(Body::new(format!("body-{i}"), 1.0e-6, 0.01, x, NVec3::zeros())?);
    }

    Ok(System::new(bodies))
}
