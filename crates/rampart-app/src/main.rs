//! Headless demo driver: starts a session, lets it run, and prints the
//! event stream as JSON lines. A renderer would poll the same snapshot
//! slot instead of printing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rampart_app::game_loop::spawn_game_loop;
use rampart_app::state::{GameLoopCommand, SharedSnapshot};
use rampart_core::commands::SessionCommand;
use rampart_sim::engine::SessionConfig;

fn main() {
    let slot: SharedSnapshot = Arc::new(Mutex::new(None));
    let tx = spawn_game_loop(SessionConfig::default(), Arc::clone(&slot));

    tx.send(GameLoopCommand::Session(SessionCommand::Start))
        .expect("game loop exited before start");

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut defeated = false;
    while Instant::now() < deadline && !defeated {
        // Poll faster than the loop publishes so no events are missed.
        std::thread::sleep(Duration::from_millis(5));

        let polled = match slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => break,
        };
        let Some(snapshot) = polled else {
            continue;
        };
        for event in &snapshot.events {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
        }
        defeated = snapshot.phase == rampart_core::enums::Phase::Defeated;
        if defeated {
            println!(
                "defeated after {} frames, {} combat ticks",
                snapshot.time.frame, snapshot.time.combat_tick
            );
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
}
