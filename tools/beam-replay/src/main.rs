//! beam-replay: run a beam against a scenario headlessly and report the result.
//!
//! Usage:
//!   beam-replay --ticks 600
//!   beam-replay --scenario mirrors.json --origin 0,1,0 --aim 0,0,1 --sweep 30
//!   beam-replay --ticks 120 --json > snapshot.json

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Quat, Vec3};
use log::info;

use beamline_core::commands::BeamCommand;
use beamline_core::events::BeamEvent;
use beamline_core::types::{OwnerId, TargetId};
use beamline_sim::scenario::Scenario;
use beamline_sim::{SimConfig, SimulationEngine};

const OWNER: OwnerId = OwnerId(0);

#[derive(Parser)]
#[command(name = "beam-replay")]
#[command(about = "Fire a beam through a scenario and report damage and kills")]
struct Cli {
    /// Scenario JSON file (default: walled arena with wandering targets)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Emitter position as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,1,0")]
    origin: Vec3,

    /// Initial aim direction as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,1")]
    aim: Vec3,

    /// Yaw sweep around the vertical axis, in degrees per second
    #[arg(long, default_value_t = 0.0)]
    sweep: f32,

    /// RNG seed for target placement and wander
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Totals gathered from the event stream.
#[derive(Default)]
struct Summary {
    damage: BTreeMap<TargetId, f32>,
    hits: usize,
    kills: Vec<(u64, TargetId)>,
    cleared_at: Option<u64>,
    truncated: usize,
}

impl Summary {
    fn record(&mut self, tick: u64, events: &[BeamEvent]) {
        for event in events {
            match event {
                BeamEvent::DamageApplied { target, amount, .. } => {
                    *self.damage.entry(*target).or_default() += amount;
                    self.hits += 1;
                }
                BeamEvent::TargetDestroyed { target, .. } => self.kills.push((tick, *target)),
                BeamEvent::TargetsCleared => {
                    self.cleared_at.get_or_insert(tick);
                }
                BeamEvent::TraceTruncated { .. } => self.truncated += 1,
                BeamEvent::BeamStarted { .. } | BeamEvent::BeamStopped { .. } => {}
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read scenario {}", path.display()))?;
            Scenario::from_json(&json)
                .with_context(|| format!("Failed to parse scenario {}", path.display()))?
        }
        None => Scenario::default_arena(),
    };

    let aim = cli
        .aim
        .try_normalize()
        .context("Aim direction must be a non-zero vector")?;

    let mut engine = SimulationEngine::new(SimConfig {
        seed: cli.seed,
        ..Default::default()
    });
    let targets = engine.load_scenario(&scenario);
    engine.queue_command(BeamCommand::StartFiring {
        owner: OWNER,
        origin: cli.origin,
        direction: aim,
        config: None,
    });

    let sweep = cli.sweep.to_radians();
    let mut summary = Summary::default();
    let mut last = None;

    for _ in 0..cli.ticks {
        let snapshot = engine.tick();
        summary.record(snapshot.time.tick, &snapshot.events);

        if sweep != 0.0 {
            let yaw = sweep * snapshot.time.elapsed_secs as f32;
            engine.queue_command(BeamCommand::Aim {
                owner: OWNER,
                origin: cli.origin,
                direction: Quat::from_rotation_y(yaw) * aim,
            });
        }
        last = Some(snapshot);
    }

    if cli.json {
        let snapshot = last.unwrap_or_default();
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
        return Ok(());
    }

    info!("replay of '{}' finished after {} ticks", scenario.name, cli.ticks);
    print_summary(&summary, targets.len(), engine.time().elapsed_secs);
    Ok(())
}

fn print_summary(summary: &Summary, target_count: usize, elapsed: f64) {
    println!("Simulated {elapsed:.2}s");
    println!(
        "  {} damage ticks across {} of {} targets",
        summary.hits,
        summary.damage.len(),
        target_count
    );
    for (id, total) in &summary.damage {
        println!("    target {:>3}: {total:.1} damage", id.0);
    }
    for (tick, id) in &summary.kills {
        println!("  target {} destroyed at tick {tick}", id.0);
    }
    if let Some(tick) = summary.cleared_at {
        println!("  all targets destroyed at tick {tick}");
    }
    if summary.truncated > 0 {
        println!("  {} traces truncated at the iteration cap", summary.truncated);
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{s}'"));
    };
    let parse = |v: &str| v.parse::<f32>().map_err(|e| format!("'{v}': {e}"));
    Ok(Vec3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1,2.5,-3").unwrap(), Vec3::new(1.0, 2.5, -3.0));
        assert_eq!(parse_vec3(" 0, 1 ,0").unwrap(), Vec3::Y);
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn test_summary_counts_events() {
        let mut summary = Summary::default();
        summary.record(
            0,
            &[
                BeamEvent::DamageApplied {
                    owner: OWNER,
                    target: TargetId(1),
                    amount: 50.0,
                    position: Vec3::ZERO,
                    remaining_health: 50.0,
                },
                BeamEvent::DamageApplied {
                    owner: OWNER,
                    target: TargetId(1),
                    amount: 50.0,
                    position: Vec3::ZERO,
                    remaining_health: 0.0,
                },
                BeamEvent::TargetDestroyed {
                    target: TargetId(1),
                    position: Vec3::ZERO,
                },
                BeamEvent::TargetsCleared,
            ],
        );
        assert_eq!(summary.hits, 2);
        assert_eq!(summary.damage[&TargetId(1)], 100.0);
        assert_eq!(summary.kills, vec![(0, TargetId(1))]);
        assert_eq!(summary.cleared_at, Some(0));
    }
}
