//! Fixed timestep simulation tick
//!
//! Drives the whole round state machine: obstacle spawning, input sampling,
//! the one-cell walk animation, collision, and the game-over/restart sequence.

use glam::IVec2;

use super::collision::first_hit;
use super::state::{GameEvent, GamePhase, GameState, GridWalk};

/// Input state for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional keys currently held
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// One-shot: some key (any key) went down this tick
    pub any_key: bool,
}

impl TickInput {
    fn any_direction_held(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    match state.phase {
        GamePhase::Running => running_tick(state, input, dt),
        GamePhase::AwaitingAck { .. } => awaiting_tick(state, input, dt),
    }
}

fn running_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Obstacle spawn timer
    state.obstacle_acc += dt;
    while state.obstacle_acc >= state.config.obstacle_interval {
        state.obstacle_acc -= state.config.obstacle_interval;
        state.spawn_obstacle();
    }

    // Sample held keys every tick, including mid-walk; the new direction only
    // takes effect when the next walk starts. Opposite keys cancel an axis to
    // 0 and diagonals are not clamped. With nothing held the previous
    // direction persists (continuous-runner).
    if input.any_direction_held() {
        state.player.dir = IVec2::new(
            input.right as i32 - input.left as i32,
            input.down as i32 - input.up as i32,
        );
    }

    // A tick either advances the in-flight walk or begins the next one,
    // never both: a walk that completes here releases the head for the
    // following tick.
    match state.player.walk.take() {
        Some(mut walk) => {
            walk.elapsed += dt;
            if walk.done() {
                state.player.pos = walk.to;
                state.score += 1;
                let score = state.score;
                state.push_event(GameEvent::StepCompleted { score });
            } else {
                state.player.pos = walk.sample();
                state.player.walk = Some(walk);
            }
        }
        None => {
            // Commit the trail one step behind the head. On the very first
            // step after spawn the marker still equals the head position, so
            // nothing is committed yet.
            if state.trail_marker != state.player.pos {
                let pos = state.trail_marker;
                state.cells.push(super::cell::Cell::new(pos));
                state.push_event(GameEvent::TrailPlaced { pos });
            }
            state.trail_marker = state.player.pos;

            let delta = state.player.dir.as_vec2() * state.config.scale;
            state.player.walk = Some(GridWalk::new(
                state.player.pos,
                state.player.pos + delta,
                state.config.step_duration,
            ));
        }
    }

    // Collision check after spawning and movement. Any hit latches the round
    // terminal: a frozen in-flight walk is abandoned and never scores.
    if first_hit(state.player.pos, &state.cells, state.config.scale).is_some() {
        let score = state.score;
        state.phase = GamePhase::AwaitingAck {
            delay_left: state.config.prompt_delay,
            prompt_shown: false,
        };
        state.push_event(GameEvent::Collided { score });
        log::info!("collision at {:?}, final score {score}", state.player.pos);
    }
}

fn awaiting_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let GamePhase::AwaitingAck {
        mut delay_left,
        prompt_shown,
    } = state.phase
    else {
        return;
    };

    if !prompt_shown {
        // Keypresses during the delay are ignored; the prompt is not up yet
        delay_left -= dt;
        let now_shown = delay_left <= 0.0;
        state.phase = GamePhase::AwaitingAck {
            delay_left,
            prompt_shown: now_shown,
        };
        if now_shown {
            state.push_event(GameEvent::PromptShown);
        }
    } else if input.any_key {
        state.reset_round();
    }
}
