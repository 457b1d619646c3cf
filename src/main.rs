//! Grid Runner entry point
//!
//! Headless driver standing in for a host engine's frame loop: runs the
//! continuous-runner autoplay (no keys held, head marches +x), prints the
//! effects a frontend would display, then acknowledges the restart prompt
//! like a player would.

use std::time::{SystemTime, UNIX_EPOCH};

use grid_runner::consts::SIM_DT;
use grid_runner::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Grid Runner starting with seed {seed}");

    let mut state = GameState::new(seed);
    let idle = TickInput::default();

    // Drive until the restart prompt is up (obstacles or the right border end
    // the round well before the cap).
    let mut ticks: u32 = 0;
    while !state.prompt_shown() && ticks < 120 * 60 {
        tick(&mut state, &idle, SIM_DT);
        for event in state.take_events() {
            display(&event);
        }
        ticks += 1;
    }

    if !state.prompt_shown() {
        log::warn!("round still running after {ticks} ticks, giving up");
        return;
    }

    if log::log_enabled!(log::Level::Debug) {
        let snapshot = serde_json::to_string(&state).unwrap_or_default();
        log::debug!("terminal snapshot: {snapshot}");
    }

    // Push any key.
    let ack = TickInput {
        any_key: true,
        ..TickInput::default()
    };
    tick(&mut state, &ack, SIM_DT);
    for event in state.take_events() {
        display(&event);
    }

    debug_assert!(matches!(state.phase, GamePhase::Running));
    log::info!("fresh round ready after {ticks} ticks, score reset to {}", state.score);
}

/// Stand-in for the host engine's text display
fn display(event: &GameEvent) {
    match event {
        GameEvent::StepCompleted { score } => println!("Score {score}"),
        GameEvent::Collided { score } => println!("Game Over (score {score})"),
        GameEvent::PromptShown => println!("  Game Over  \n\nPush any key."),
        GameEvent::RoundReset => println!("-- new round --"),
        GameEvent::TrailPlaced { pos } => log::debug!("trail cell at {pos:?}"),
        GameEvent::ObstacleSpawned { pos } => log::debug!("obstacle at {pos:?}"),
    }
}
