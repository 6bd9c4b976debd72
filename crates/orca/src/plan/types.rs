//! Value types and tolerances for the velocity planner.
//!
//! - `PlanCfg`: numeric tolerance for parallelism and feasibility tests.
//! - `Line`: directed half-plane in velocity space (feasible side LEFT).
//! - `NeighborView`, `AgentSnapshot`: read-only per-step inputs.

use nalgebra::Vector2;

use crate::det;

/// Planner configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct PlanCfg {
    /// Guard for parallel-line and feasibility tests.
    pub eps: f64,
}

impl Default for PlanCfg {
    fn default() -> Self {
        Self { eps: 1e-6 }
    }
}

/// Directed line bounding a half-plane in velocity space.
///
/// Invariants:
/// - `direction` is unit length for every line the planner produces.
/// - The feasible side is to the LEFT of the directed line: a candidate
///   `v` satisfies the constraint iff `det(direction, point − v) ≤ 0`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    /// A point on the boundary line.
    pub point: Vector2<f64>,
    /// Unit direction of the boundary line.
    pub direction: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(point: Vector2<f64>, direction: Vector2<f64>) -> Self {
        Self { point, direction }
    }

    /// Signed violation of `v`: zero on the boundary, positive outside the
    /// feasible half-plane.
    #[inline]
    pub fn violation(&self, v: Vector2<f64>) -> f64 {
        det(self.direction, self.point - v)
    }
}

/// A neighbor as observed by the subject agent, frozen for one step.
#[derive(Clone, Copy, Debug)]
pub struct NeighborView {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub radius: f64,
}

/// Read-only per-step view of one agent and its surroundings.
///
/// Neighbors are assumed pre-filtered to the nearest K within sensing
/// range by the host; the planner imposes no ordering requirement on them.
/// `obstacle_lines` are host-built constraints (responsibility factor 1);
/// they precede all agent-derived lines in the assembled constraint list
/// and are treated as hard by the recovery solver.
#[derive(Clone, Copy, Debug)]
pub struct AgentSnapshot<'a> {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub pref_velocity: Vector2<f64>,
    pub radius: f64,
    pub max_speed: f64,
    /// Look-ahead window for agent-agent avoidance, > 0.
    pub time_horizon: f64,
    /// Look-ahead window the host used when deriving `obstacle_lines`, > 0.
    pub time_horizon_obst: f64,
    pub neighbors: &'a [NeighborView],
    pub obstacle_lines: &'a [Line],
}
