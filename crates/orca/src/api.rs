//! Curated re-export surface for downstream crates.
//!
//! Prefer these re-exports in the CLI and bindings for clarity and
//! consistency; the module paths behind them may shift as the crate
//! evolves.

// Velocity planner
pub use crate::plan::{
    agent_orca_line, compute_new_velocity, linear_program_1, linear_program_2, linear_program_3,
    AgentSnapshot, Line, NeighborView, PlanCfg,
};
// Step host
pub use crate::sim::rand::{draw_crowd, CrowdCfg, ReplayToken};
pub use crate::sim::scenarios::{circle, crossing, head_on};
pub use crate::sim::{Agent, AgentDefaults, Simulator};
// Geometry primitives
pub use crate::{det, Vec2};
