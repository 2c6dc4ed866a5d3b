//! Step controller: turns a requested elapsed time into leapfrog sub-steps
//!
//! The controller exclusively owns the live `System` behind a single lock.
//! `snapshot`, `advance` and `reset` each hold that lock for their whole
//! duration, so readers never observe a half-advanced state. The sub-step
//! clamp bounds how long `advance` can hold it.

use parking_lot::Mutex;
use serde::Serialize;

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::leapfrog_step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::build_initial_state;
use crate::simulation::states::{BodySnapshot, System};

/// How one advance is split into sub-steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstepPlan {
    pub steps: usize, // sub-steps actually executed (after the clamp)
    pub sub_dt: f64,  // length of each sub-step, from the unclamped count
    pub truncated: bool, // the clamp cut the requested time short
}

impl SubstepPlan {
    /// Time the plan really covers: `steps * sub_dt`
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.sub_dt
    }
}

/// Split `t` into sub-steps no longer than `params.h_max`
///
/// `sub_dt` is derived from the unclamped step count, so a clamped plan
/// covers less than `t`. Rejects non-finite or non-positive `t`.
pub fn plan_substeps(t: f64, params: &Parameters) -> SimResult<SubstepPlan> {
    if !t.is_finite() {
        return Err(SimError::invalid_request(format!("dt must be finite, got {t}")));
    }
    if t <= 0.0 {
        return Err(SimError::invalid_request("dt must be positive"));
    }

    let wanted = (t / params.h_max).ceil().max(1.0);
    let sub_dt = t / wanted;
    let cap = params.max_substeps as f64;
    let steps = wanted.min(cap) as usize;

    Ok(SubstepPlan {
        steps,
        sub_dt,
        truncated: wanted > cap,
    })
}

/// Outcome of one `advance` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvanceReport {
    pub bodies: Vec<BodySnapshot>,
    pub requested: f64, // days asked for
    pub elapsed: f64,   // days actually simulated
    pub substeps: usize,
    pub truncated: bool, // the sub-step clamp kicked in
    pub t: f64, // simulation clock after the advance
}

pub struct StepController {
    initial: System, // pristine output of the initial-condition builder
    params: Parameters,
    gravity: NewtonianGravity,
    state: Mutex<System>,
}

impl StepController {
    /// Build the initial state from `scenario` and take ownership of it
    pub fn new(scenario: &ScenarioConfig) -> SimResult<Self> {
        let state = build_initial_state(scenario)?;
        let params = scenario.parameters();
        log::info!(
            "initialized {} bodies (G = {}, h_max = {} d, max {} sub-steps)",
            state.bodies.len(),
            params.G,
            params.h_max,
            params.max_substeps
        );

        Ok(Self {
            gravity: NewtonianGravity::new(params.G),
            params,
            initial: state.clone(),
            state: Mutex::new(state),
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.state.lock().snapshot()
    }

    /// Advance the simulation by `t` days
    ///
    /// Validation happens before the lock is taken; a rejected request
    /// leaves the state untouched.
    pub fn advance(&self, t: f64) -> SimResult<AdvanceReport> {
        let plan = plan_substeps(t, &self.params)?;
        if plan.truncated {
            log::warn!(
                "advance of {t} d needs more than {} sub-steps; simulating {} d",
                self.params.max_substeps,
                plan.elapsed()
            );
        }

        let mut sys = self.state.lock();
        for _ in 0..plan.steps {
            leapfrog_step(&mut sys, &self.gravity, plan.sub_dt);
        }
        log::debug!("advanced {} sub-steps of {} d, t = {}", plan.steps, plan.sub_dt, sys.t);

        Ok(AdvanceReport {
            bodies: sys.snapshot(),
            requested: t,
            elapsed: plan.elapsed(),
            substeps: plan.steps,
            truncated: plan.truncated,
            t: sys.t,
        })
    }

    /// Discard the current state and replace it with the initial one
    pub fn reset(&self) -> Vec<BodySnapshot> {
        let mut sys = self.state.lock();
        *sys = self.initial.clone();
        log::info!("simulation reset");
        sys.snapshot()
    }

    /// Run `f` against the locked state without mutating it
    pub fn inspect<R>(&self, f: impl FnOnce(&System) -> R) -> R {
        f(&*self.state.lock())
    }
}
