//! Bindings for the velocity planner (kept separate so `lib.rs` stays tiny).

use orca::api::{agent_orca_line, compute_new_velocity, AgentSnapshot, NeighborView, PlanCfg};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::common::{ensure_positive, pair, vec2};

/// Compute one agent-agent ORCA half-plane.
///
/// Returns `(point, direction)` as coordinate tuples; the feasible side is
/// to the left of the directed line.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn orca_line(
    position_a: (f64, f64),
    velocity_a: (f64, f64),
    radius_a: f64,
    position_b: (f64, f64),
    velocity_b: (f64, f64),
    radius_b: f64,
    tau: f64,
    dt: f64,
) -> PyResult<((f64, f64), (f64, f64))> {
    ensure_positive("tau", tau)?;
    ensure_positive("dt", dt)?;
    ensure_positive("radius_a", radius_a)?;
    ensure_positive("radius_b", radius_b)?;
    if (vec2(position_a) - vec2(position_b)).norm() == 0.0 {
        return Err(PyValueError::new_err("agents must not be co-located"));
    }

    let agent = AgentSnapshot {
        position: vec2(position_a),
        velocity: vec2(velocity_a),
        pref_velocity: vec2(velocity_a),
        radius: radius_a,
        max_speed: f64::INFINITY,
        time_horizon: tau,
        time_horizon_obst: tau,
        neighbors: &[],
        obstacle_lines: &[],
    };
    let neighbor = NeighborView {
        position: vec2(position_b),
        velocity: vec2(velocity_b),
        radius: radius_b,
    };
    let line = agent_orca_line(&agent, &neighbor, tau, dt);
    Ok((pair(line.point), pair(line.direction)))
}

/// Plan one agent's next velocity against a list of neighbors.
///
/// `neighbors` is a list of `(position, velocity, radius)` tuples.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn new_velocity(
    position: (f64, f64),
    velocity: (f64, f64),
    pref_velocity: (f64, f64),
    radius: f64,
    max_speed: f64,
    time_horizon: f64,
    neighbors: Vec<((f64, f64), (f64, f64), f64)>,
    dt: f64,
) -> PyResult<(f64, f64)> {
    ensure_positive("time_horizon", time_horizon)?;
    ensure_positive("dt", dt)?;
    ensure_positive("radius", radius)?;
    ensure_positive("max_speed", max_speed)?;

    let own = vec2(position);
    let views: Vec<NeighborView> = neighbors
        .into_iter()
        .map(|(p, v, r)| NeighborView {
            position: vec2(p),
            velocity: vec2(v),
            radius: r,
        })
        .collect();
    if views.iter().any(|n| (n.position - own).norm() == 0.0) {
        return Err(PyValueError::new_err("neighbors must not be co-located"));
    }

    let agent = AgentSnapshot {
        position: own,
        velocity: vec2(velocity),
        pref_velocity: vec2(pref_velocity),
        radius,
        max_speed,
        time_horizon,
        time_horizon_obst: time_horizon,
        neighbors: &views,
        obstacle_lines: &[],
    };
    Ok(pair(compute_new_velocity(&agent, dt, PlanCfg::default())))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(orca_line, m)?)?;
    m.add_function(wrap_pyfunction!(new_velocity, m)?)?;
    Ok(())
}
