//! Optimal reciprocal collision avoidance (ORCA) in the plane.
//!
//! Purpose
//! - Per-agent velocity selection: build one half-plane constraint per
//!   neighbor from the truncated velocity obstacle, then solve a 2-D linear
//!   program inside the speed disk (`plan`).
//! - A reference step host with double-buffered commit and deterministic
//!   neighbor selection (`sim`), for experiments, benches, and demos.
//!
//! The planner is a pure function of its per-step inputs: no I/O, no locks,
//! no hidden globals. Tolerances travel in `PlanCfg`.

pub mod api;
pub mod plan;
pub mod sim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export to align code with the planar-geometry notation.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plan::{
        agent_orca_line, compute_new_velocity, linear_program_2, linear_program_3, AgentSnapshot,
        Line, NeighborView, PlanCfg,
    };
    pub use crate::sim::{AgentDefaults, Simulator};
    pub use crate::{det, Vec2};
}

/// 2-D determinant (perp-dot) of `a` and `b`: `a.x·b.y − a.y·b.x`.
/// Positive for a→b counterclockwise. This is the single sidedness
/// primitive behind the half-plane convention in `plan`.
#[inline]
pub fn det(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
