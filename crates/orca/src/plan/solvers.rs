//! Incremental linear programs over half-plane constraints in a speed disk.
//!
//! The solver stack follows the classic three levels:
//! - `linear_program_1`: optimize along one constraint boundary, clipped by
//!   all earlier constraints and the disk.
//! - `linear_program_2`: incremental 2-D pass over the ordered constraint
//!   list; reports the first infeasible index on failure.
//! - `linear_program_3`: recovery for mutually infeasible sets; minimizes
//!   the worst signed violation among agent-derived constraints while
//!   keeping the obstacle prefix hard.
//!
//! Invariant of the incremental pass: after index k is processed, the
//! candidate satisfies constraints 0..=k and the disk, and is optimal
//! subject to those alone. Hence a full pass yields the global optimum.

use nalgebra::Vector2;

use crate::det;

use super::lines::agent_orca_line;
use super::types::{AgentSnapshot, Line, PlanCfg};

/// Optimum on the boundary of `lines[index]`, subject to `lines[..index]`
/// and the disk of radius `radius`.
///
/// With `directional` set, `opt_v` is a unit direction and the objective is
/// to maximize `v · opt_v`; otherwise the objective is to minimize
/// `|v − opt_v|`. Returns `None` when the disk misses the line, a parallel
/// earlier constraint excludes it entirely, or the feasible interval is
/// empty.
pub fn linear_program_1(
    lines: &[Line],
    index: usize,
    radius: f64,
    opt_v: Vector2<f64>,
    directional: bool,
    cfg: PlanCfg,
) -> Option<Vector2<f64>> {
    let line = &lines[index];
    let along = line.point.dot(&line.direction);
    let discriminant = along * along + radius * radius - line.point.norm_squared();
    if discriminant < 0.0 {
        // The speed disk and this boundary line do not intersect.
        return None;
    }
    let root = discriminant.sqrt();
    let mut t_left = -along - root;
    let mut t_right = -along + root;

    for prev in &lines[..index] {
        let den = det(line.direction, prev.direction);
        let num = det(prev.direction, line.point - prev.point);

        if den.abs() <= cfg.eps {
            // Boundaries are parallel: either `prev` subsumes this line or
            // excludes it entirely.
            if num < 0.0 {
                return None;
            }
            continue;
        }

        let t = num / den;
        if den > 0.0 {
            t_right = t_right.min(t);
        } else {
            t_left = t_left.max(t);
        }
        if t_left > t_right {
            return None;
        }
    }

    let t = if directional {
        if opt_v.dot(&line.direction) > 0.0 {
            t_right
        } else {
            t_left
        }
    } else {
        (opt_v - line.point).dot(&line.direction).clamp(t_left, t_right)
    };
    Some(line.point + t * line.direction)
}

/// Incremental 2-D program over the ordered constraint list.
///
/// Returns `(lines.len(), v)` with the optimal `v` on success, or
/// `(k, last_feasible)` where `lines[k]` is the first constraint the
/// incremental pass could not satisfy; the caller hands both to
/// [`linear_program_3`] for recovery.
pub fn linear_program_2(
    lines: &[Line],
    radius: f64,
    opt_v: Vector2<f64>,
    directional: bool,
    cfg: PlanCfg,
) -> (usize, Vector2<f64>) {
    let mut v = if directional {
        // Caller guarantees `opt_v` is a unit direction.
        opt_v * radius
    } else if opt_v.norm_squared() > radius * radius {
        opt_v.normalize() * radius
    } else {
        opt_v
    };

    for (k, line) in lines.iter().enumerate() {
        if det(line.direction, line.point - v) > 0.0 {
            // Current candidate violates this constraint; re-optimize on
            // its boundary under all earlier constraints.
            let fallback = v;
            match linear_program_1(lines, k, radius, opt_v, directional, cfg) {
                Some(next) => v = next,
                None => return (k, fallback),
            }
        }
    }
    (lines.len(), v)
}

/// Recovery for mutually infeasible constraint sets.
///
/// Starting from the first failed index, each agent-derived line that is
/// violated deeper than the running tolerance is re-solved against a
/// projected set: the obstacle prefix `lines[..n_obst]` verbatim (hard),
/// plus the pairwise bisector half-plane of the violated line with every
/// earlier agent line. The objective direction is the violated line's
/// inward normal, so the candidate moves perpendicularly toward its
/// feasible side, which is what shrinks the maximum signed violation.
pub fn linear_program_3(
    lines: &[Line],
    n_obst: usize,
    begin: usize,
    radius: f64,
    current: Vector2<f64>,
    cfg: PlanCfg,
) -> Vector2<f64> {
    let mut v = current;
    let mut dist = 0.0;

    for i in begin..lines.len() {
        if det(lines[i].direction, lines[i].point - v) > dist {
            let mut proj: Vec<Line> = lines[..n_obst].to_vec();
            for j in n_obst..i {
                let den = det(lines[i].direction, lines[j].direction);
                let point = if den.abs() <= cfg.eps {
                    if lines[i].direction.dot(&lines[j].direction) > 0.0 {
                        // Same direction: line i is at least as restrictive.
                        continue;
                    }
                    // Opposite direction: anchor on the midpoint.
                    0.5 * (lines[i].point + lines[j].point)
                } else {
                    let t = det(lines[j].direction, lines[i].point - lines[j].point) / den;
                    lines[i].point + t * lines[i].direction
                };
                let dir = (lines[j].direction - lines[i].direction).normalize();
                proj.push(Line::new(point, dir));
            }

            let inward = Vector2::new(-lines[i].direction.y, lines[i].direction.x);
            let (fail, relaxed) = linear_program_2(&proj, radius, inward, true, cfg);
            // The projected set is feasible by construction; anything else
            // is a numerical fluke, and the previous candidate stays.
            debug_assert!(
                fail == proj.len(),
                "projected constraint set reported infeasible"
            );
            if fail == proj.len() {
                v = relaxed;
            }
            dist = det(lines[i].direction, lines[i].point - v);
        }
    }
    v
}

/// Compute the agent's next velocity: assemble the constraint list
/// (obstacle lines first, then one ORCA line per neighbor), run the 2-D
/// program toward the preferred velocity, and fall back to the recovery
/// pass if the set is infeasible.
///
/// Never fails; the result always has magnitude ≤ `max_speed`. The
/// snapshot is read-only: committing the returned velocity is the
/// caller's job, after every agent of the step has been planned.
pub fn compute_new_velocity(agent: &AgentSnapshot<'_>, dt: f64, cfg: PlanCfg) -> Vector2<f64> {
    let n_obst = agent.obstacle_lines.len();
    let mut lines = Vec::with_capacity(n_obst + agent.neighbors.len());
    lines.extend_from_slice(agent.obstacle_lines);
    for neighbor in agent.neighbors {
        lines.push(agent_orca_line(agent, neighbor, agent.time_horizon, dt));
    }

    let (fail, v) = linear_program_2(&lines, agent.max_speed, agent.pref_velocity, false, cfg);
    if fail < lines.len() {
        linear_program_3(&lines, n_obst, fail, agent.max_speed, v, cfg)
    } else {
        v
    }
}
