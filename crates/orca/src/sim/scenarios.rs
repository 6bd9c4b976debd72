//! Canned simulation setups shared by tests, benches, demos, and the CLI.

use nalgebra::Vector2;

use crate::plan::PlanCfg;

use super::{AgentDefaults, Simulator};

/// Two agents facing each other on the x axis, goals swapped.
///
/// Parameters follow the classic head-on benchmark: unit radius, 2 m/s cap,
/// 2 s horizon, spawn 10 m apart.
pub fn head_on() -> Simulator {
    let defaults = AgentDefaults {
        neighbor_range: 15.0,
        max_neighbors: 10,
        time_horizon: 2.0,
        time_horizon_obst: 2.0,
        radius: 1.0,
        max_speed: 2.0,
    };
    let mut sim = Simulator::new(defaults, PlanCfg::default());

    let a = sim.add_agent(Vector2::new(-5.0, 0.0));
    sim.agent_mut(a).velocity = Vector2::new(1.0, 0.0);
    sim.agent_mut(a).pref_velocity = Vector2::new(1.0, 0.0);
    sim.agent_mut(a).goal = Some(Vector2::new(5.0, 0.0));

    let b = sim.add_agent(Vector2::new(5.0, 0.0));
    sim.agent_mut(b).velocity = Vector2::new(-1.0, 0.0);
    sim.agent_mut(b).pref_velocity = Vector2::new(-1.0, 0.0);
    sim.agent_mut(b).goal = Some(Vector2::new(-5.0, 0.0));

    sim
}

/// `n` agents evenly spaced on a circle of the given radius, each aiming at
/// its antipode. The standard all-through-the-middle stress setup.
pub fn circle(n: usize, circle_radius: f64, defaults: AgentDefaults) -> Simulator {
    let mut sim = Simulator::new(defaults, PlanCfg::default());
    for k in 0..n {
        let theta = std::f64::consts::TAU * (k as f64) / (n as f64);
        let spawn = Vector2::new(theta.cos(), theta.sin()) * circle_radius;
        let i = sim.add_agent(spawn);
        sim.agent_mut(i).goal = Some(-spawn);
    }
    sim
}

/// Two perpendicular streams of `per_stream` agents each, crossing at the
/// origin: one stream walks east, the other walks north.
pub fn crossing(per_stream: usize, spacing: f64, defaults: AgentDefaults) -> Simulator {
    let mut sim = Simulator::new(defaults, PlanCfg::default());
    let reach = spacing * (per_stream as f64) + 10.0;
    for k in 0..per_stream {
        let offset = spacing * (k as f64);
        let i = sim.add_agent(Vector2::new(-5.0 - offset, 0.0));
        sim.agent_mut(i).goal = Some(Vector2::new(reach, 0.0));
        let j = sim.add_agent(Vector2::new(0.0, -5.0 - offset));
        sim.agent_mut(j).goal = Some(Vector2::new(0.0, reach));
    }
    sim
}
