//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Tracing ---

/// Longest single raycast issued by the tracer. Bounds per-step query cost;
/// longer beams are probed in several steps.
pub const PROBE_CAP: f32 = 100.0;

/// Offset applied past a penetrated target or off a reflective surface so the
/// next probe does not re-hit the same surface.
pub const SURFACE_EPSILON: f32 = 0.01;

/// Extra surface-hit iterations allowed on top of the bounce and penetration budgets.
pub const TRACE_ITERATION_SLACK: u32 = 2;

/// Absolute ceiling on surface hits per trace, whatever the budgets say.
pub const MAX_TRACE_STEPS: u32 = 128;

/// Tolerance on the total traced length versus the configured range.
pub const LENGTH_TOLERANCE: f32 = 1e-3;

/// Occupancy raycasts extend this far past each segment end so the target that
/// terminated (or was penetrated at) the segment end is still reported.
pub const OCCUPANCY_SLACK: f32 = 1e-3;

/// Segments shorter than this are skipped by occupancy queries.
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;

// --- Default weapon ---

pub const DEFAULT_BEAM_DAMAGE: f32 = 50.0;

/// Minimum seconds between two damage applications from one beam to one target.
pub const DEFAULT_DAMAGE_INTERVAL: f64 = 0.5;

pub const DEFAULT_BOUNCE_MAX: u32 = 3;

pub const DEFAULT_PENETRATION_MAX: u32 = 2;

pub const DEFAULT_MAX_RANGE: f32 = 50.0;

// --- Targets ---

pub const TARGET_MAX_HEALTH: f32 = 100.0;

/// Collision radius of a default target.
pub const TARGET_RADIUS: f32 = 0.5;

/// Wander speed (units per second).
pub const TARGET_MOVE_SPEED: f32 = 2.0;

/// Seconds between wander direction changes.
pub const TARGET_CHANGE_DIRECTION_SECS: f64 = 2.0;

/// Targets re-roll their heading once |x| or |z| exceeds this.
pub const TARGET_WANDER_BOUND: f32 = 18.0;

/// Random targets are scattered within +/- this on x and z.
pub const TARGET_SPAWN_EXTENT: f32 = 10.0;

/// Spawn height of scattered targets.
pub const TARGET_SPAWN_HEIGHT: f32 = 1.0;

// --- Default arena ---

/// Number of targets scattered by the default arena.
pub const DEFAULT_TARGET_COUNT: u32 = 5;

/// Distance from the arena center to the inner face of each wall.
pub const ARENA_HALF_EXTENT: f32 = 20.0;

pub const ARENA_WALL_THICKNESS: f32 = 1.0;

pub const ARENA_WALL_HEIGHT: f32 = 4.0;
