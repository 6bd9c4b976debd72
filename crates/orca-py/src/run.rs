//! Batch scenario bindings.

use orca::api::{circle, AgentDefaults};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::common::ensure_positive;

/// Run the circle scenario and return one position trajectory per agent.
#[pyfunction]
pub fn run_circle(
    agents: usize,
    steps: usize,
    dt: f64,
) -> PyResult<Vec<Vec<(f64, f64)>>> {
    if agents < 2 {
        return Err(PyValueError::new_err("need at least 2 agents"));
    }
    ensure_positive("dt", dt)?;

    let defaults = AgentDefaults {
        time_horizon: 5.0,
        time_horizon_obst: 5.0,
        ..AgentDefaults::default()
    };
    let mut sim = circle(agents, 10.0, defaults);
    let mut trajectories: Vec<Vec<(f64, f64)>> = vec![Vec::with_capacity(steps); agents];

    for _ in 0..steps {
        sim.aim_at_goals(0.05);
        sim.step(dt);
        for (trace, agent) in trajectories.iter_mut().zip(sim.agents()) {
            trace.push((agent.position.x, agent.position.y));
        }
    }
    Ok(trajectories)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_circle, m)?)?;
    Ok(())
}
