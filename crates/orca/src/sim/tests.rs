use super::scenarios;
use super::*;
use nalgebra::vector;

#[test]
fn head_on_agents_clear_and_arrive() {
    let mut sim = scenarios::head_on();
    let combined_r = sim.agent(0).radius + sim.agent(1).radius;

    let mut min_dist = sim.min_pair_distance();
    for _ in 0..100 {
        sim.aim_at_goals(0.05);
        sim.step(0.1);
        min_dist = min_dist.min(sim.min_pair_distance());
    }

    assert!(
        min_dist >= combined_r - 1e-2,
        "agents penetrated: min distance {min_dist}"
    );
    assert!(sim.agent(0).goal_distance() <= 0.5);
    assert!(sim.agent(1).goal_distance() <= 0.5);
}

#[test]
fn head_on_replay_is_bit_identical() {
    let run = || {
        let mut sim = scenarios::head_on();
        let mut trace = Vec::new();
        for _ in 0..100 {
            sim.aim_at_goals(0.05);
            sim.step(0.1);
            for agent in sim.agents() {
                trace.push((agent.position.x, agent.position.y));
            }
        }
        trace
    };
    assert_eq!(run(), run());
}

#[test]
fn plan_phase_leaves_step_inputs_untouched() {
    let mut sim = scenarios::head_on();
    let before: Vec<_> = sim
        .agents()
        .iter()
        .map(|a| (a.position, a.velocity))
        .collect();

    sim.plan_all(0.1);
    for (agent, (position, velocity)) in sim.agents().iter().zip(&before) {
        assert_eq!(agent.position, *position);
        assert_eq!(agent.velocity, *velocity);
    }

    sim.commit(0.1);
    for agent in sim.agents() {
        assert_eq!(agent.velocity, agent.planned_velocity());
        assert!(agent.velocity.norm() <= agent.max_speed + 1e-9);
    }
    assert!((sim.time() - 0.1).abs() < 1e-12);
}

#[test]
fn neighbor_enumeration_sorts_and_truncates() {
    let mut sim = Simulator::new(AgentDefaults::default(), crate::plan::PlanCfg::default());
    sim.add_agent(vector![0.0, 0.0]);
    sim.add_agent(vector![3.0, 0.0]);
    sim.add_agent(vector![1.0, 0.0]);
    sim.add_agent(vector![2.0, 0.0]);
    sim.add_agent(vector![40.0, 0.0]); // out of range

    sim.agent_mut(0).max_neighbors = 2;
    let views = sim.neighbors_of(0);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].position, vector![1.0, 0.0]);
    assert_eq!(views[1].position, vector![2.0, 0.0]);
}

#[test]
fn obstacle_lines_reach_the_planner() {
    let mut sim = Simulator::new(AgentDefaults::default(), crate::plan::PlanCfg::default());
    // Forbid upward motion entirely.
    sim.obstacle_lines
        .push(Line::new(vector![0.0, 0.0], vector![-1.0, 0.0]));
    let i = sim.add_agent(vector![0.0, 0.0]);
    sim.agent_mut(i).pref_velocity = vector![0.0, 1.5];

    sim.step(0.1);
    assert!(sim.agent(i).velocity.y <= 1e-9);
    assert!(sim.agent(i).position.y <= 1e-9);
}

#[test]
fn circle_crossing_resolves_without_contact() {
    let defaults = AgentDefaults {
        time_horizon: 5.0,
        time_horizon_obst: 5.0,
        ..AgentDefaults::default()
    };
    let mut sim = scenarios::circle(8, 10.0, defaults);
    let combined_r = 2.0 * defaults.radius;

    let mut min_dist = sim.min_pair_distance();
    for _ in 0..600 {
        sim.aim_at_goals(0.05);
        sim.step(0.1);
        min_dist = min_dist.min(sim.min_pair_distance());
    }

    assert!(
        min_dist >= combined_r - 5e-2,
        "agents penetrated: min distance {min_dist}"
    );
    for agent in sim.agents() {
        assert!(agent.goal_distance() <= 0.5);
    }
}

#[test]
fn idle_agent_holds_preferred_velocity() {
    let mut sim = Simulator::new(AgentDefaults::default(), crate::plan::PlanCfg::default());
    let i = sim.add_agent(vector![0.0, 0.0]);
    sim.agent_mut(i).pref_velocity = vector![1.0, 0.5];

    sim.step(0.1);
    assert_eq!(sim.agent(i).velocity, vector![1.0, 0.5]);
    assert!((sim.agent(i).position - vector![0.1, 0.05]).norm() < 1e-12);
}
