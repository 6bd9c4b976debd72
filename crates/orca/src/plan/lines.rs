//! Construction of agent-agent ORCA half-planes.
//!
//! One call produces the constraint agent A must respect to stay clear of
//! neighbor B for the next `tau` seconds, assuming B runs the same planner
//! and takes its half of the required velocity change.

use nalgebra::Vector2;

use crate::det;

use super::types::{AgentSnapshot, Line, NeighborView};

/// Build the ORCA half-plane constraining `agent` against `neighbor`.
///
/// Geometry happens in relative-velocity space. The truncated velocity
/// obstacle is the cone of relative velocities colliding within `tau`,
/// capped by the cut-off disk of radius `(r_A + r_B)/tau` centered at
/// `Δp/tau`. `u` is the smallest change to the current relative velocity
/// that exits the obstacle; each agent takes half of it, so the line is
/// anchored at `v_A + u/2` with the feasible half-plane on its left.
///
/// Already-overlapping agents (center distance ≤ combined radius) are
/// resolved within a single step by substituting `1/dt` for `1/tau`.
///
/// Caller contract: `tau > 0`, `dt > 0`, and the two agents are not
/// co-located (`Δp ≠ 0`); co-location breaks the relative-space geometry
/// and must be resolved out of band.
pub fn agent_orca_line(
    agent: &AgentSnapshot<'_>,
    neighbor: &NeighborView,
    tau: f64,
    dt: f64,
) -> Line {
    let rel_pos = neighbor.position - agent.position;
    let rel_vel = agent.velocity - neighbor.velocity;
    let dist_sq = rel_pos.norm_squared();
    let combined_r = agent.radius + neighbor.radius;
    let combined_r_sq = combined_r * combined_r;

    let direction: Vector2<f64>;
    let u: Vector2<f64>;

    if dist_sq > combined_r_sq {
        // Not yet overlapping: project onto the tau-truncated obstacle.
        let w = rel_vel - rel_pos / tau;
        let w_len_sq = w.norm_squared();
        let dot = w.dot(&rel_pos);

        if dot < 0.0 && dot * dot > combined_r_sq * w_len_sq {
            // Closest boundary point lies on the cut-off arc.
            let w_len = w_len_sq.sqrt();
            let unit_w = w / w_len;
            direction = Vector2::new(unit_w.y, -unit_w.x);
            u = (combined_r / tau - w_len) * unit_w;
        } else {
            // Closest boundary point lies on one of the tangent legs.
            let leg = (dist_sq - combined_r_sq).sqrt();
            if det(rel_pos, w) > 0.0 {
                direction = Vector2::new(
                    rel_pos.x * leg - rel_pos.y * combined_r,
                    rel_pos.x * combined_r + rel_pos.y * leg,
                ) / dist_sq;
            } else {
                direction = -Vector2::new(
                    rel_pos.x * leg + rel_pos.y * combined_r,
                    -rel_pos.x * combined_r + rel_pos.y * leg,
                ) / dist_sq;
            }
            u = rel_vel.dot(&direction) * direction - rel_vel;
        }
    } else {
        // Overlapping: push apart within one step.
        let inv_dt = 1.0 / dt;
        let w = rel_vel - rel_pos * inv_dt;
        let w_len = w.norm();
        let unit_w = w / w_len;
        direction = Vector2::new(unit_w.y, -unit_w.x);
        u = (combined_r * inv_dt - w_len) * unit_w;
    }

    let line = Line::new(agent.velocity + 0.5 * u, direction);
    debug_assert!(
        (line.direction.norm() - 1.0).abs() <= 1e-9,
        "ORCA line direction must be unit length"
    );
    line
}
