//! Session engine — the core of the game.
//!
//! `Session` owns the hecs ECS world, the resource ledger, and the
//! phase machine. The host drives it through two entry points:
//! `advance_frame` (once per display refresh, with measured elapsed
//! time) and `advance_combat_tick` (on the fixed combat cadence). Both
//! run on one logical thread and never overlap; the session is
//! exclusively owned by whichever tick is executing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::SessionCommand;
use rampart_core::components::PointerState;
use rampart_core::enums::Phase;
use rampart_core::error::InvariantViolation;
use rampart_core::events::SessionEvent;
use rampart_core::state::SessionSnapshot;
use rampart_core::types::{FrameInput, SimTime};

use crate::ledger::ResourceLedger;
use crate::systems;
use crate::systems::reconcile::ReconcileBuffers;
use crate::world_setup;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for spawn jitter. Same seed = same playthrough.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// One playthrough's worth of state. Created in `Menu`; a restart
/// discards the world and ledger entirely, so nothing leaks between
/// playthroughs.
pub struct Session {
    config: SessionConfig,
    world: World,
    phase: Phase,
    time: SimTime,
    ledger: ResourceLedger,
    pointer: PointerState,
    rng: ChaCha8Rng,
    next_spawn_order: u64,
    command_queue: VecDeque<SessionCommand>,
    reconcile_buffers: ReconcileBuffers,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create a fresh session in `Menu`.
    pub fn new(config: SessionConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            world: World::new(),
            phase: Phase::default(),
            time: SimTime::default(),
            ledger: ResourceLedger::default(),
            pointer: PointerState::default(),
            rng,
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            reconcile_buffers: ReconcileBuffers::default(),
            events: Vec::new(),
        }
    }

    /// Queue a trigger signal for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Run one render/update tick: drain commands, sample input,
    /// advance movers by measured elapsed time, reconcile lifecycles
    /// against the ledger, and check the terminal condition. A no-op
    /// outside `Playing` (commands are still drained so Start and
    /// Restart work from any frame).
    pub fn advance_frame(&mut self, input: FrameInput) {
        self.process_commands();

        self.pointer = PointerState {
            x: input.pointer_x,
            y: input.pointer_y,
            down: input.pointer_down,
            released: input.pointer_released,
        };

        if self.phase != Phase::Playing {
            return;
        }

        systems::movement::run(&mut self.world, input.dt());

        match systems::reconcile::run(
            &mut self.world,
            &mut self.ledger,
            &mut self.reconcile_buffers,
            &mut self.events,
        ) {
            Ok(()) => {
                self.time.advance_frame(input.elapsed_ms);
                if self.ledger.is_depleted() {
                    self.phase = Phase::Defeated;
                    self.events.push(SessionEvent::Defeated);
                }
            }
            Err(violation) => self.abort(violation),
        }
    }

    /// Run one combat tick: the resolver sweep. A no-op outside
    /// `Playing`.
    pub fn advance_combat_tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        systems::combat::run(&mut self.world);
        self.time.advance_combat();
    }

    /// Build the read-only view for the renderer, draining events
    /// accumulated since the previous snapshot.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.phase,
            self.time,
            &self.ledger,
            self.pointer,
            events,
        )
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_defeated(&self) -> bool {
        self.phase == Phase::Defeated
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the entity world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the ledger.
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Mutable world access for tests that need hand-built scenarios.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// The full transition table. Commands in the wrong phase are
    /// no-ops, not errors.
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Start => {
                if self.phase == Phase::Menu {
                    self.start_playthrough();
                }
            }
            SessionCommand::Restart => {
                if self.phase == Phase::Defeated {
                    self.discard_playthrough();
                }
            }
        }
    }

    /// `Menu -> Playing`: build a fresh world with the scenario layout.
    fn start_playthrough(&mut self) {
        self.world.clear();
        self.ledger = ResourceLedger::default();
        self.time = SimTime::default();
        self.next_spawn_order = 0;
        // Reseeding makes every playthrough of one config identical.
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        match world_setup::setup_session(&mut self.world, &mut self.rng, &mut self.next_spawn_order)
        {
            Ok(()) => self.phase = Phase::Playing,
            Err(error) => {
                // Malformed scenario: the session is not created.
                self.world.clear();
                self.events.push(SessionEvent::SessionAborted {
                    reason: error.to_string(),
                });
            }
        }
    }

    /// `Defeated -> Menu`: drop everything; nothing carries over.
    fn discard_playthrough(&mut self) {
        self.world.clear();
        self.ledger = ResourceLedger::default();
        self.time = SimTime::default();
        self.next_spawn_order = 0;
        self.phase = Phase::Menu;
    }

    /// `Playing -> Menu` on internal inconsistency: discard the session
    /// rather than continue with corrupted state.
    fn abort(&mut self, violation: InvariantViolation) {
        self.world.clear();
        self.ledger = ResourceLedger::default();
        self.time = SimTime::default();
        self.next_spawn_order = 0;
        self.phase = Phase::Menu;
        self.events.push(SessionEvent::SessionAborted {
            reason: violation.to_string(),
        });
    }
}
