//! ORCA velocity planning: half-plane construction and incremental LPs.
//!
//! Purpose
//! - Provide the per-agent velocity selector: one directed half-plane per
//!   neighbor (`lines`), then a 2-D linear program over the ordered
//!   constraint list inside the speed disk, with a projection-based
//!   recovery pass when the constraints are mutually infeasible
//!   (`solvers`).
//!
//! Why this design
//! - The deterministic incremental LP (no randomized constraint order)
//!   keeps whole-run replays bit-identical, which the test and experiment
//!   tooling relies on. Worst case is O(m²) over m constraints; m is the
//!   neighbor cap plus a handful of obstacle lines, so the quadratic term
//!   is immaterial.
//! - Tolerances are carried by value in `PlanCfg`, never as a mutable
//!   global, so the planner stays a pure function of its inputs.
//!
//! References
//! - van den Berg, Guy, Lin, Manocha, "Reciprocal n-Body Collision
//!   Avoidance" (2011).
//! - Code cross-refs: `types::{Line, AgentSnapshot, PlanCfg}`,
//!   `solvers::{linear_program_1, linear_program_2, linear_program_3}`.

mod lines;
mod solvers;
mod types;

pub use lines::agent_orca_line;
pub use solvers::{
    compute_new_velocity, linear_program_1, linear_program_2, linear_program_3,
};
pub use types::{AgentSnapshot, Line, NeighborView, PlanCfg};
