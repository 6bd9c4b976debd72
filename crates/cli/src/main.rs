use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use orca::api::{
    circle, crossing, draw_crowd, head_on, AgentDefaults, CrowdCfg, ReplayToken, Simulator,
};

mod provenance;

/// Fixed keep-to-one-side bias applied while re-aiming preferred
/// velocities; breaks mirror-symmetric deadlocks deterministically.
const AIM_BIAS: f64 = 0.05;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scenario runner for the ORCA velocity planner")]
struct Cmd {
    /// Optional experiment tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run a scenario and write the trajectory CSV
    Run {
        /// One of: circle, crossing, head-on, crowd
        #[arg(long, default_value = "circle")]
        scenario: String,
        /// Agent count (circle/crowd) or per-stream count (crossing)
        #[arg(long, default_value_t = 12)]
        agents: usize,
        #[arg(long, default_value_t = 400)]
        steps: usize,
        #[arg(long, default_value_t = 0.1)]
        dt: f64,
        /// Replay seed (crowd scenario only)
        #[arg(long, default_value_t = 7)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a provenance JSON block
    Report,
    /// Clean old trajectory outputs by age (stub)
    Clean {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            scenario,
            agents,
            steps,
            dt,
            seed,
            out,
        } => run(scenario, agents, steps, dt, seed, out, cmd.tag),
        Action::Report => report(cmd.tag),
        Action::Clean { days } => clean(days),
    }
}

fn build_scenario(name: &str, agents: usize, seed: u64) -> Result<Simulator> {
    let defaults = AgentDefaults {
        time_horizon: 5.0,
        time_horizon_obst: 5.0,
        ..AgentDefaults::default()
    };
    let sim = match name {
        "circle" => circle(agents, 10.0, defaults),
        "crossing" => crossing(agents, 2.5, defaults),
        "head-on" => head_on(),
        "crowd" => {
            let cfg = CrowdCfg {
                agents,
                defaults,
                ..CrowdCfg::default()
            };
            match draw_crowd(cfg, ReplayToken { seed, index: 0 }) {
                Some(sim) => sim,
                None => bail!("crowd of {agents} agents does not fit the spawn disk"),
            }
        }
        other => bail!("unknown scenario {other:?}"),
    };
    Ok(sim)
}

fn run(
    scenario: String,
    agents: usize,
    steps: usize,
    dt: f64,
    seed: u64,
    out: String,
    tag: Option<String>,
) -> Result<()> {
    if dt <= 0.0 {
        bail!("--dt must be positive");
    }
    tracing::info!(scenario, agents, steps, dt, seed, out, tag = ?tag, "run");

    let mut sim = build_scenario(&scenario, agents, seed)?;
    let mut csv = String::from("step,time,agent,x,y,vx,vy\n");
    let mut min_clearance = sim.min_pair_distance();

    for step in 1..=steps {
        sim.aim_at_goals(AIM_BIAS);
        sim.step(dt);
        min_clearance = min_clearance.min(sim.min_pair_distance());
        for (id, agent) in sim.agents().iter().enumerate() {
            writeln!(
                csv,
                "{step},{:.4},{id},{:.6},{:.6},{:.6},{:.6}",
                sim.time(),
                agent.position.x,
                agent.position.y,
                agent.velocity.x,
                agent.velocity.y
            )?;
        }
    }

    let arrived = sim
        .agents()
        .iter()
        .filter(|a| a.goal_distance() <= 0.5)
        .count();
    tracing::info!(min_clearance, arrived, total = sim.len(), "run finished");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, csv)?;

    let params = serde_json::json!({
        "scenario": scenario,
        "agents": agents,
        "steps": steps,
        "dt": dt,
        "seed": seed,
        "min_clearance": min_clearance,
        "arrived": arrived
    });
    provenance::write_sidecar(out_path, params, tag.as_deref())?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn clean(days: u32) -> Result<()> {
    tracing::info!(days, "clean");
    Ok(())
}
