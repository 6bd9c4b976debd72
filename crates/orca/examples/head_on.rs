//! Two agents meeting head-on, goals swapped.
//!
//! Usage:
//!   cargo run -p orca --example head_on -- [steps]

use orca::sim::scenarios::head_on;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);

    let mut sim = head_on();
    let mut min_dist = sim.min_pair_distance();
    for _ in 0..steps {
        sim.aim_at_goals(0.05);
        sim.step(0.1);
        min_dist = min_dist.min(sim.min_pair_distance());
    }

    for (i, agent) in sim.agents().iter().enumerate() {
        println!(
            "agent {i}: position ({:.3}, {:.3}), goal distance {:.3}",
            agent.position.x,
            agent.position.y,
            agent.goal_distance()
        );
    }
    println!("min clearance over the run: {min_dist:.3}");
}
