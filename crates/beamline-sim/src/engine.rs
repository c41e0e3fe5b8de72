//! Simulation engine.
//!
//! `SimulationEngine` owns the arena, the clock and every active beam,
//! processes beam commands at tick boundaries, runs the systems and produces
//! `BeamSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use glam::Vec3;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use beamline_core::commands::BeamCommand;
use beamline_core::config::BeamConfig;
use beamline_core::error::BeamError;
use beamline_core::events::BeamEvent;
use beamline_core::state::BeamSnapshot;
use beamline_core::types::{Clock, OwnerId, SimTime, TargetId};

use crate::arena::Arena;
use crate::controller::BeamController;
use crate::scenario::Scenario;
use crate::systems;
use crate::systems::beams::ActiveBeam;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Beam used by `StartFiring` commands that carry no config of their own.
    pub beam: BeamConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            beam: BeamConfig::default(),
        }
    }
}

/// The simulation engine. Owns the arena and all sim state.
pub struct SimulationEngine {
    arena: Arena,
    time: SimTime,
    rng: ChaCha8Rng,
    default_beam: BeamConfig,
    beams: BTreeMap<OwnerId, ActiveBeam>,
    command_queue: VecDeque<BeamCommand>,
    despawn_buffer: Vec<(TargetId, Vec3)>,
    events: Vec<BeamEvent>,
}

impl SimulationEngine {
    /// Create an engine with an empty arena.
    pub fn new(config: SimConfig) -> Self {
        Self {
            arena: Arena::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            default_beam: config.beam,
            beams: BTreeMap::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Spawn a scenario into the arena. A scenario beam override replaces the
    /// default beam config for subsequent `StartFiring` commands.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Vec<TargetId> {
        if let Some(beam) = scenario.beam {
            self.default_beam = beam;
        }
        let ids = scenario.populate(&mut self.arena, &mut self.rng);
        info!(
            "loaded scenario '{}' with {} targets",
            scenario.name,
            ids.len()
        );
        ids
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: BeamCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BeamCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> BeamSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.arena, &self.time, &self.beams, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn beam(&self, owner: OwnerId) -> Option<&ActiveBeam> {
        self.beams.get(&owner)
    }

    pub fn is_firing(&self, owner: OwnerId) -> bool {
        self.beams.contains_key(&owner)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                warn!("rejected beam command: {err}");
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: BeamCommand) -> Result<(), BeamError> {
        match command {
            BeamCommand::StartFiring {
                owner,
                origin,
                direction,
                config,
            } => {
                validate_emitter(origin, direction)?;
                let config = config.unwrap_or(self.default_beam).with_owner(owner);
                let controller = BeamController::new(config)?;
                // Replacing drops the previous instance and its cooldowns
                if self.beams.remove(&owner).is_some() {
                    self.events.push(BeamEvent::BeamStopped { owner });
                }
                self.beams
                    .insert(owner, ActiveBeam::new(controller, origin, direction));
                info!("owner {} started firing", owner.0);
                self.events.push(BeamEvent::BeamStarted { owner });
            }
            BeamCommand::Aim {
                owner,
                origin,
                direction,
            } => {
                validate_emitter(origin, direction)?;
                if let Some(beam) = self.beams.get_mut(&owner) {
                    beam.origin = origin;
                    beam.direction = direction;
                }
            }
            BeamCommand::StopFiring { owner } => {
                if self.beams.remove(&owner).is_some() {
                    info!("owner {} stopped firing", owner.0);
                    self.events.push(BeamEvent::BeamStopped { owner });
                }
            }
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.now();
        // 1. Target movement
        systems::movement::run(self.arena.world_mut(), &mut self.rng, now);
        // 2. Beams: trace, occupancy, damage
        systems::beams::run(&mut self.arena, &mut self.beams, now, &mut self.events);
        // 3. Cleanup (destroyed targets)
        systems::cleanup::run(&mut self.arena, &mut self.despawn_buffer, &mut self.events);
    }
}

/// Reject emitter poses the tracer cannot trace from.
fn validate_emitter(origin: Vec3, direction: Vec3) -> Result<(), BeamError> {
    if !origin.is_finite() {
        return Err(BeamError::InvalidOrigin);
    }
    if direction.try_normalize().is_none() {
        return Err(BeamError::InvalidDirection);
    }
    Ok(())
}
