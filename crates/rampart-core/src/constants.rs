//! Simulation constants and tuning parameters.

// --- Timing ---

/// Duration of one nominal tick in milliseconds. Mover speeds are
/// expressed in field units per nominal tick; movement integration
/// scales by measured elapsed time so display refresh rate never
/// changes effective speed.
pub const NOMINAL_TICK_MS: f64 = 1000.0;

/// Fixed wall-clock interval between combat ticks (milliseconds).
pub const COMBAT_INTERVAL_MS: f64 = 750.0;

/// Maximum combat ticks resolved in a single frame when the loop has
/// fallen behind. Excess backlog is discarded to avoid a catch-up spiral.
pub const MAX_CATCHUP_TICKS: u32 = 4;

// --- Field ---

/// Play field width in field units. Movers escape past the right edge.
pub const FIELD_WIDTH: f64 = 1920.0;

/// Play field height in field units.
pub const FIELD_HEIGHT: f64 = 1080.0;

/// Side length of a mover's bounding box.
pub const MOVER_SIZE: f64 = 50.0;

/// Side length of an emplacement's bounding box.
pub const EMPLACEMENT_SIZE: f64 = 75.0;

// --- Ledger ---

/// Player health at session start.
pub const INITIAL_PLAYER_HEALTH: u32 = 100;

/// Player currency at session start.
pub const INITIAL_CURRENCY: u32 = 0;

/// Health lost per escaped mover. Fixed; never scales with the
/// escaping mover's remaining strength.
pub const ESCAPE_PENALTY: u32 = 1;

// --- Mover classes ---

/// Dart: fast, fragile.
pub const DART_SPEED: f64 = 50.0;
pub const DART_HP: f64 = 40.0;
pub const DART_BOUNTY: u32 = 5;

/// Glider: moderate speed and hp.
pub const GLIDER_SPEED: f64 = 40.0;
pub const GLIDER_HP: f64 = 50.0;
pub const GLIDER_BOUNTY: u32 = 10;

/// Freighter: slow, heavily armored.
pub const FREIGHTER_SPEED: f64 = 25.0;
pub const FREIGHTER_HP: f64 = 100.0;
pub const FREIGHTER_BOUNTY: u32 = 10;

// --- Emplacements ---

/// Damage applied per combat tick by a default emplacement.
pub const EMPLACEMENT_DAMAGE_PER_TICK: f64 = 15.0;

// --- Scenario ---

/// Movers spawned at session start.
pub const SCENARIO_MOVER_COUNT: usize = 50;

/// Horizontal spacing between staggered mover spawn positions.
pub const SCENARIO_MOVER_SPACING: f64 = 125.0;

/// Vertical jitter applied to each spawn row (plus or minus).
pub const SCENARIO_LANE_JITTER: f64 = 40.0;

/// Emplacements placed at session start.
pub const SCENARIO_EMPLACEMENT_COUNT: usize = 2;

/// Horizontal spacing between emplacement positions.
pub const SCENARIO_EMPLACEMENT_SPACING: f64 = 1000.0;

/// X coordinate of the first emplacement.
pub const SCENARIO_EMPLACEMENT_START_X: f64 = 500.0;
