//! Game loop thread — drives both cadences of the simulation.
//!
//! One iteration per display-rate frame: drain commands, sample the
//! coalesced pointer state, run a render tick with the measured elapsed
//! time, then fire however many fixed-interval combat ticks fell due.
//! Both cadences execute here sequentially, so ticks never overlap and
//! the session needs no locking.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use rampart_core::components::PointerState;
use rampart_core::types::FrameInput;
use rampart_sim::engine::{Session, SessionConfig};
use rampart_sim::scheduler::FixedCadence;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal frame duration (~60 Hz pacing).
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: SessionConfig,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The loop body. Runs until Shutdown or channel disconnect; each tick
/// runs to completion once started.
fn run_game_loop(
    config: SessionConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut session = Session::new(config);
    let mut combat_cadence = FixedCadence::combat();
    let mut pointer = PointerState::default();

    let mut last_frame = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain pending commands, coalescing pointer events.
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !apply_command(command, &mut session, &mut combat_cadence, &mut pointer) {
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Render tick with measured elapsed time.
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        session.advance_frame(FrameInput {
            pointer_x: pointer.x,
            pointer_y: pointer.y,
            pointer_down: pointer.down,
            pointer_released: pointer.released,
            elapsed_ms,
        });
        // The release edge is a one-frame signal.
        pointer.released = false;

        // 3. Combat ticks due on the fixed wall-clock cadence.
        for _ in 0..combat_cadence.advance(elapsed_ms) {
            session.advance_combat_tick();
        }

        // 4. Publish the snapshot for host polling.
        let snapshot = session.snapshot();
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 5. Sleep until the next frame slot.
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
    }
}

/// Apply one host command between frames. Returns `false` when the
/// loop should stop.
fn apply_command(
    command: GameLoopCommand,
    session: &mut Session,
    combat_cadence: &mut FixedCadence,
    pointer: &mut PointerState,
) -> bool {
    match command {
        GameLoopCommand::Session(cmd) => {
            // A playthrough boundary: stale combat carry must not leak
            // into the new run.
            combat_cadence.reset();
            session.queue_command(cmd);
        }
        GameLoopCommand::PointerMoved { x, y } => {
            pointer.x = x;
            pointer.y = y;
        }
        GameLoopCommand::PointerDown => pointer.down = true,
        GameLoopCommand::PointerUp => {
            pointer.down = false;
            pointer.released = true;
        }
        GameLoopCommand::Shutdown => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::commands::SessionCommand;
    use rampart_core::constants::COMBAT_INTERVAL_MS;
    use rampart_core::enums::Phase;
    use std::sync::{Arc, Mutex};

    #[test]
    fn session_command_clears_stale_combat_carry() {
        let mut session = Session::new(SessionConfig::default());
        let mut cadence = FixedCadence::combat();
        let mut pointer = PointerState::default();

        // Accumulate carry just short of one combat interval.
        assert_eq!(cadence.advance(COMBAT_INTERVAL_MS - 50.0), 0);

        let keep_running = apply_command(
            GameLoopCommand::Session(SessionCommand::Start),
            &mut session,
            &mut cadence,
            &mut pointer,
        );
        assert!(keep_running);

        // Without the reset this frame would cross the interval and
        // fire a combat tick into the brand-new playthrough.
        assert_eq!(cadence.advance(100.0), 0);
    }

    #[test]
    fn shutdown_command_stops_the_loop() {
        let mut session = Session::new(SessionConfig::default());
        let mut cadence = FixedCadence::combat();
        let mut pointer = PointerState::default();

        assert!(apply_command(
            GameLoopCommand::PointerDown,
            &mut session,
            &mut cadence,
            &mut pointer,
        ));
        assert!(pointer.down);

        assert!(!apply_command(
            GameLoopCommand::Shutdown,
            &mut session,
            &mut cadence,
            &mut pointer,
        ));
    }

    #[test]
    fn command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Session(SessionCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::PointerMoved { x: 10.0, y: 20.0 })
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Session(SessionCommand::Start),
                GameLoopCommand::PointerMoved { x: 10.0, y: 20.0 },
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn loop_publishes_snapshots_and_shuts_down() {
        let slot: SharedSnapshot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SessionConfig::default(), Arc::clone(&slot));

        tx.send(GameLoopCommand::Session(SessionCommand::Start))
            .unwrap();

        // Wait for the loop to publish a Playing snapshot.
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut saw_playing = false;
        while Instant::now() < deadline {
            if let Some(snapshot) = slot.lock().unwrap().clone() {
                if snapshot.phase == Phase::Playing {
                    saw_playing = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(saw_playing, "loop never published a Playing snapshot");

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn frame_duration_is_sixty_hertz() {
        assert_eq!(FRAME_DURATION.as_nanos(), (1_000_000_000u64 / 60) as u128);
    }
}
