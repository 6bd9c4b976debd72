//! Double-buffered step host around the velocity planner.
//!
//! Purpose
//! - Own an arena of agents (plain indices, no shared handles), select each
//!   agent's nearest neighbors deterministically, and drive the planner in
//!   a strict two-phase step: plan everything from the step-entry snapshot,
//!   then commit all velocities and positions at once.
//!
//! Why this design
//! - The planner requires that no agent observes another agent's
//!   already-updated velocity within a step; splitting `step` into
//!   `plan_all` + `commit` makes that discipline explicit and testable.
//! - Neighbor selection sorts by squared distance with the agent index as
//!   tie-breaker, so truncation to the neighbor cap is reproducible
//!   run-to-run.
//!
//! Code cross-refs: `crate::plan::{compute_new_velocity, AgentSnapshot}`,
//! `scenarios` (canned setups), `rand` (seeded crowd sampler).

pub mod rand;
pub mod scenarios;

use nalgebra::Vector2;

use crate::plan::{compute_new_velocity, AgentSnapshot, Line, NeighborView, PlanCfg};

/// Parameters applied to agents created by [`Simulator::add_agent`].
///
/// Defaults match the crowd-experiment setup this host was built for:
/// 15 m sensing range, 10 neighbors, 10 s horizons, 0.5 m radius, 2 m/s.
#[derive(Clone, Copy, Debug)]
pub struct AgentDefaults {
    pub neighbor_range: f64,
    pub max_neighbors: usize,
    pub time_horizon: f64,
    pub time_horizon_obst: f64,
    pub radius: f64,
    pub max_speed: f64,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            neighbor_range: 15.0,
            max_neighbors: 10,
            time_horizon: 10.0,
            time_horizon_obst: 10.0,
            radius: 0.5,
            max_speed: 2.0,
        }
    }
}

/// One simulated agent.
///
/// `position` and `velocity` are step inputs: read-only while a step is
/// being planned. The planned velocity lands in the private output buffer
/// and reaches `velocity` only at commit time.
#[derive(Clone, Debug)]
pub struct Agent {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub pref_velocity: Vector2<f64>,
    /// Navigation target used by [`Simulator::aim_at_goals`].
    pub goal: Option<Vector2<f64>>,
    pub radius: f64,
    pub max_speed: f64,
    pub time_horizon: f64,
    pub time_horizon_obst: f64,
    pub neighbor_range: f64,
    pub max_neighbors: usize,
    new_velocity: Vector2<f64>,
}

impl Agent {
    fn new(position: Vector2<f64>, d: AgentDefaults) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
            pref_velocity: Vector2::zeros(),
            goal: None,
            radius: d.radius,
            max_speed: d.max_speed,
            time_horizon: d.time_horizon,
            time_horizon_obst: d.time_horizon_obst,
            neighbor_range: d.neighbor_range,
            max_neighbors: d.max_neighbors,
            new_velocity: Vector2::zeros(),
        }
    }

    /// The velocity planned for this agent in the current step (equal to
    /// `velocity` once the step has been committed).
    #[inline]
    pub fn planned_velocity(&self) -> Vector2<f64> {
        self.new_velocity
    }

    /// Distance to `goal`, or zero when no goal is set.
    pub fn goal_distance(&self) -> f64 {
        self.goal
            .map(|g| (g - self.position).norm())
            .unwrap_or(0.0)
    }
}

/// Arena of agents plus the shared, host-built obstacle constraints.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    agents: Vec<Agent>,
    /// Velocity-space constraints every snapshot carries ahead of the
    /// agent-derived lines (responsibility factor 1, hard in recovery).
    pub obstacle_lines: Vec<Line>,
    defaults: AgentDefaults,
    cfg: PlanCfg,
    time: f64,
}

impl Simulator {
    pub fn new(defaults: AgentDefaults, cfg: PlanCfg) -> Self {
        Self {
            agents: Vec::new(),
            obstacle_lines: Vec::new(),
            defaults,
            cfg,
            time: 0.0,
        }
    }

    /// Add an agent at `position` with the simulator defaults; returns its
    /// index. Fields can be adjusted afterwards via [`Simulator::agent_mut`].
    pub fn add_agent(&mut self, position: Vector2<f64>) -> usize {
        self.agents.push(Agent::new(position, self.defaults));
        self.agents.len() - 1
    }

    #[inline]
    pub fn agent(&self, i: usize) -> &Agent {
        &self.agents[i]
    }

    #[inline]
    pub fn agent_mut(&mut self, i: usize) -> &mut Agent {
        &mut self.agents[i]
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Simulation clock (sum of committed step lengths).
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Re-aim every agent's preferred velocity at its goal, at that agent's
    /// maximum speed, slowing linearly inside the last `max_speed` meters.
    ///
    /// `bias` is a small fixed rotation (radians, counterclockwise) applied
    /// to the aimed direction. Perfectly mirrored configurations are a
    /// deadlock of the reciprocal planner (all constraints stay collinear);
    /// a deterministic keep-to-one-side bias breaks them without giving up
    /// replayability. Pass `0.0` to aim straight.
    pub fn aim_at_goals(&mut self, bias: f64) {
        let (sin_b, cos_b) = bias.sin_cos();
        for agent in &mut self.agents {
            let Some(goal) = agent.goal else { continue };
            let to_goal = goal - agent.position;
            let dist = to_goal.norm();
            let aimed = if dist <= agent.max_speed {
                to_goal
            } else {
                to_goal * (agent.max_speed / dist)
            };
            agent.pref_velocity = Vector2::new(
                cos_b * aimed.x - sin_b * aimed.y,
                sin_b * aimed.x + cos_b * aimed.y,
            );
        }
    }

    /// Phase 1: plan every agent's next velocity from the step-entry
    /// snapshot. `position` and `velocity` are left untouched.
    pub fn plan_all(&mut self, dt: f64) {
        debug_assert!(dt > 0.0, "step length must be positive");
        let planned: Vec<Vector2<f64>> =
            (0..self.agents.len()).map(|i| self.plan(i, dt)).collect();
        for (agent, v) in self.agents.iter_mut().zip(planned) {
            agent.new_velocity = v;
        }
    }

    /// Phase 2: commit the planned velocities and advance positions.
    pub fn commit(&mut self, dt: f64) {
        for agent in &mut self.agents {
            agent.velocity = agent.new_velocity;
            agent.position += agent.velocity * dt;
        }
        self.time += dt;
    }

    /// One full simulation step: plan all, then commit.
    pub fn step(&mut self, dt: f64) {
        self.plan_all(dt);
        self.commit(dt);
    }

    /// Smallest center distance over all agent pairs (∞ with fewer than two
    /// agents).
    pub fn min_pair_distance(&self) -> f64 {
        let mut min = f64::INFINITY;
        for i in 0..self.agents.len() {
            for j in (i + 1)..self.agents.len() {
                let d = (self.agents[j].position - self.agents[i].position).norm();
                if d < min {
                    min = d;
                }
            }
        }
        min
    }

    fn plan(&self, i: usize, dt: f64) -> Vector2<f64> {
        let agent = &self.agents[i];
        let neighbors = self.neighbors_of(i);
        let snapshot = AgentSnapshot {
            position: agent.position,
            velocity: agent.velocity,
            pref_velocity: agent.pref_velocity,
            radius: agent.radius,
            max_speed: agent.max_speed,
            time_horizon: agent.time_horizon,
            time_horizon_obst: agent.time_horizon_obst,
            neighbors: &neighbors,
            obstacle_lines: &self.obstacle_lines,
        };
        compute_new_velocity(&snapshot, dt, self.cfg)
    }

    /// The nearest neighbors of agent `i` within its sensing range, sorted
    /// by squared distance (index as tie-breaker) and truncated to the
    /// agent's neighbor cap. This is the neighbor enumeration the planner
    /// consumes; it is public so hosts can inspect or reuse it.
    pub fn neighbors_of(&self, i: usize) -> Vec<NeighborView> {
        let agent = &self.agents[i];
        let range_sq = agent.neighbor_range * agent.neighbor_range;
        let mut ranked: Vec<(f64, usize)> = self
            .agents
            .iter()
            .enumerate()
            .filter(|&(j, other)| {
                j != i && (other.position - agent.position).norm_squared() <= range_sq
            })
            .map(|(j, other)| ((other.position - agent.position).norm_squared(), j))
            .collect();
        ranked.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        ranked.truncate(agent.max_neighbors);
        ranked
            .into_iter()
            .map(|(_, j)| {
                let other = &self.agents[j];
                NeighborView {
                    position: other.position,
                    velocity: other.velocity,
                    radius: other.radius,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
