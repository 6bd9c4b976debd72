//! Agents on a circle crossing to their antipodes.
//!
//! Usage:
//!   cargo run -p orca --example circle -- [agents] [steps]
//!
//! Prints clearance and goal progress every 50 steps.

use orca::sim::scenarios::circle;
use orca::sim::AgentDefaults;

fn main() {
    let mut args = std::env::args().skip(1);
    let agents: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let steps: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(400);

    let defaults = AgentDefaults {
        time_horizon: 5.0,
        time_horizon_obst: 5.0,
        ..AgentDefaults::default()
    };
    let mut sim = circle(agents, 10.0, defaults);
    let mut min_dist = sim.min_pair_distance();

    for step in 1..=steps {
        sim.aim_at_goals(0.05);
        sim.step(0.1);
        min_dist = min_dist.min(sim.min_pair_distance());
        if step % 50 == 0 {
            let worst_goal = sim
                .agents()
                .iter()
                .map(|a| a.goal_distance())
                .fold(0.0, f64::max);
            println!(
                "step {step}: min pair distance {min_dist:.3}, worst goal distance {worst_goal:.3}"
            );
        }
    }

    let arrived = sim
        .agents()
        .iter()
        .filter(|a| a.goal_distance() <= 0.5)
        .count();
    println!("{arrived}/{agents} agents within 0.5 of their goals; min clearance {min_dist:.3}");
}
