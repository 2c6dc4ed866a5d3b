use std::sync::Arc;
use std::thread;

use solsim::{
    angular_momentum, build_initial_state, circular_speed, euler_step, leapfrog_step,
    plan_substeps, total_energy, Body, NVec3, NewtonianGravity, Parameters, PlanetConfig,
    ScenarioConfig, SimError, StepController, System, GRAVITATIONAL_CONSTANT,
};

/// Sun plus a single Earth-mass planet at 1 AU
pub fn sun_earth() -> ScenarioConfig {
    ScenarioConfig {
        planets: vec![PlanetConfig::new("Earth", 1.0, 3.003e-6)],
        ..ScenarioConfig::default()
    }
}

/// Build a simple 2-body System separated along x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new("left", m1, 0.01, [-dist / 2.0, 0.0, 0.0].into(), NVec3::zeros()).unwrap();
    let b2 = Body::new("right", m2, 0.01, [dist / 2.0, 0.0, 0.0].into(), NVec3::zeros()).unwrap();
    System::new(vec![b1, b2])
}

fn relative_drift(now: f64, start: f64) -> f64 {
    ((now - start) / start).abs()
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let acc = NewtonianGravity::new(0.1).compute_accelerations(&sys);

    let net = acc[0] * sys.bodies[0].mass() + acc[1] * sys.bodies[1].mass();

    assert!(net.norm() < 1e-15, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let acc = NewtonianGravity::new(0.1).compute_accelerations(&sys);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let gravity = NewtonianGravity::new(0.1);
    let acc_r = gravity.compute_accelerations(&two_body_system(1.0, 1.0, 1.0));
    let acc_2r = gravity.compute_accelerations(&two_body_system(2.0, 1.0, 1.0));

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-12, "Expected 4x, got {}", ratio);
}

#[test]
fn coincident_bodies_stay_finite() {
    let mut sys = two_body_system(0.0, 1.0, 1.0);
    sys.bodies.push(Body::new("far", 1.0e-3, 0.01, [0.0, 4.0, 0.0].into(), NVec3::zeros()).unwrap());
    let gravity = NewtonianGravity::new(GRAVITATIONAL_CONSTANT);

    let acc = gravity.compute_accelerations(&sys);
    assert_eq!(acc.len(), 3);
    assert!(acc.iter().all(|a| a.iter().all(|c| c.is_finite())));

    leapfrog_step(&mut sys, &gravity, 0.2);
    for b in &sys.bodies {
        assert!(b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()), "{} went non-finite", b.name());
    }
}

// ==================================================================================
// Initial condition tests
// ==================================================================================

#[test]
fn initial_speeds_are_circular() {
    let cfg = ScenarioConfig::default();
    let sys = build_initial_state(&cfg).unwrap();

    for (b, pc) in sys.bodies.iter().skip(1).zip(cfg.planets.iter()) {
        let expected = circular_speed(GRAVITATIONAL_CONSTANT, cfg.central.mass, pc.orbit);
        let got = b.v.norm();
        assert!((got - expected).abs() <= 1e-14 * expected, "{}: {got} vs {expected}", b.name());
        // velocity perpendicular to the radius vector
        assert_eq!(b.v.dot(&b.x), 0.0);
        assert_eq!(b.x.norm(), pc.orbit);
    }
}

#[test]
fn builds_are_bit_identical() {
    let a = build_initial_state(&ScenarioConfig::default()).unwrap();
    let b = build_initial_state(&ScenarioConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn bad_table_fails_controller_construction() {
    let mut cfg = ScenarioConfig::default();
    cfg.planets.push(PlanetConfig::new("Vulcan", -1.0, 1.0e-7));
    assert!(matches!(StepController::new(&cfg), Err(SimError::Configuration(_))));
}

// ==================================================================================
// Step controller tests
// ==================================================================================

#[test]
fn reset_is_deterministic() {
    let first = StepController::new(&ScenarioConfig::default()).unwrap();
    let second = StepController::new(&ScenarioConfig::default()).unwrap();
    first.advance(37.0).unwrap();
    second.advance(5.0).unwrap();

    assert_eq!(first.reset(), second.reset());
    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.inspect(|s| s.t), 0.0);
}

#[test]
fn degenerate_requests_leave_state_untouched() {
    let controller = StepController::new(&ScenarioConfig::default()).unwrap();
    controller.advance(3.0).unwrap();
    let before = controller.snapshot();

    for t in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(controller.advance(t), Err(SimError::InvalidRequest(_))));
        assert_eq!(controller.snapshot(), before);
    }
}

#[test]
fn substeps_sum_to_request() {
    let params = Parameters::default();
    for t in [1e-6, 0.05, 0.2, 1.0, 3.7, 17.3, 123.456, 199.9] {
        let plan = plan_substeps(t, &params).unwrap();
        assert!(!plan.truncated, "t = {t}");
        assert!(plan.sub_dt <= params.h_max * (1.0 + 1e-12), "t = {t}");
        assert!(relative_drift(plan.elapsed(), t) < 1e-12, "t = {t}");

        let controller = StepController::new(&sun_earth()).unwrap();
        let report = controller.advance(t).unwrap();
        assert_eq!(report.substeps, plan.steps);
        assert!(relative_drift(report.t, t) < 1e-12, "t = {t}");
    }
}

#[test]
fn clamp_runs_cap_steps_of_unclamped_length() {
    let cfg = ScenarioConfig::default();
    let controller = StepController::new(&cfg).unwrap();

    // ceil(1000 / 0.2) = 5000 > 1000
    let report = controller.advance(1000.0).unwrap();
    assert_eq!(report.substeps, 1000);
    assert!(report.truncated);
    assert!((report.elapsed - 200.0).abs() < 1e-9);

    let gravity = NewtonianGravity::new(GRAVITATIONAL_CONSTANT);
    let mut expected = build_initial_state(&cfg).unwrap();
    for _ in 0..1000 {
        leapfrog_step(&mut expected, &gravity, 1000.0 / 5000.0);
    }
    assert_eq!(controller.snapshot(), expected.snapshot());
}

#[test]
fn overridden_parameters_change_the_plan() {
    let mut cfg = sun_earth();
    cfg.parameters.h_max = 0.01;
    cfg.parameters.max_substeps = 50;
    let controller = StepController::new(&cfg).unwrap();

    let report = controller.advance(1.0).unwrap();
    assert_eq!(report.substeps, 50);
    assert!((report.elapsed - 0.5).abs() < 1e-12);
}

#[test]
fn concurrent_advances_are_serialized() {
    let controller = Arc::new(StepController::new(&ScenarioConfig::default()).unwrap());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&controller);
            thread::spawn(move || {
                for _ in 0..10 {
                    c.advance(1.0).unwrap();
                    let snap = c.snapshot();
                    assert_eq!(snap.len(), 9);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    let sequential = StepController::new(&ScenarioConfig::default()).unwrap();
    for _ in 0..40 {
        sequential.advance(1.0).unwrap();
    }
    assert_eq!(controller.snapshot(), sequential.snapshot());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn leapfrog_energy_stays_bounded() {
    let controller = StepController::new(&sun_earth()).unwrap();
    let g = controller.parameters().G;
    let e0 = controller.inspect(|s| total_energy(s, g));
    let l0 = controller.inspect(angular_momentum);

    for _ in 0..10 {
        controller.advance(100.0).unwrap();
        let e = controller.inspect(|s| total_energy(s, g));
        let l = controller.inspect(angular_momentum);
        assert!(relative_drift(e, e0) < 1e-5, "energy drift {}", relative_drift(e, e0));
        assert!((l - l0).norm() / l0.norm() < 1e-10, "angular momentum drift");
    }
}

#[test]
fn euler_drifts_visibly_more_than_leapfrog() {
    let cfg = sun_earth();
    let gravity = NewtonianGravity::new(GRAVITATIONAL_CONSTANT);
    let mut leap = build_initial_state(&cfg).unwrap();
    let mut euler = leap.clone();
    let e0 = total_energy(&leap, GRAVITATIONAL_CONSTANT);

    // 1000 days in 0.2 day steps
    for _ in 0..5000 {
        leapfrog_step(&mut leap, &gravity, 0.2);
        euler_step(&mut euler, &gravity, 0.2);
    }

    let d_leap = relative_drift(total_energy(&leap, GRAVITATIONAL_CONSTANT), e0);
    let d_euler = relative_drift(total_energy(&euler, GRAVITATIONAL_CONSTANT), e0);
    assert!(d_euler > 1e-3, "euler drift {d_euler}");
    assert!(d_euler > 100.0 * d_leap, "euler {d_euler} vs leapfrog {d_leap}");
}
