//! Game state and core simulation types
//!
//! One `GameState` is one round. A round is created at start, mutated by
//! `tick`, and rebuilt in place when the player acknowledges game over.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, border_cells};
use crate::GameConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay: stepping, spawning, and collisions all happen here
    Running,
    /// Collision happened. "Game Over" is up; after `delay_left` runs out the
    /// restart prompt appears, and the next any-key press rebuilds the round.
    AwaitingAck { delay_left: f32, prompt_shown: bool },
}

/// An in-flight single-cell walk animation.
///
/// Linear interpolation from one grid position to the adjacent one. At most
/// one walk exists at a time; its presence is the "walking" flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridWalk {
    pub from: Vec2,
    pub to: Vec2,
    pub elapsed: f32,
    pub duration: f32,
}

impl GridWalk {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Interpolated position at the current elapsed time
    pub fn sample(&self) -> Vec2 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, t)
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The moving head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Pixel position; grid-aligned whenever no walk is in flight
    pub pos: Vec2,
    /// Direction vector, components in {-1, 0, 1}. Not normalized: diagonal
    /// movement steps a full scale on each axis, and opposite held keys
    /// cancel an axis to 0.
    pub dir: IVec2,
    /// In-flight walk, if any
    pub walk: Option<GridWalk>,
}

impl Player {
    pub fn is_walking(&self) -> bool {
        self.walk.is_some()
    }
}

/// Effects emitted for the embedding frontend (score text, cell placement,
/// game over display). Drained once per frame via [`GameState::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A trail segment was committed one step behind the head
    TrailPlaced { pos: Vec2 },
    /// The spawn timer placed a random obstacle
    ObstacleSpawned { pos: Vec2 },
    /// A walk finished and the score advanced
    StepCompleted { score: u64 },
    /// The head hit an occupied cell; the round is over
    Collided { score: u64 },
    /// The restart prompt is now accepting any key
    PromptShown,
    /// A fresh round replaced the finished one
    RoundReset,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena and timing configuration
    pub config: GameConfig,
    /// Seed this run started from, for reproducibility
    pub seed: u64,
    /// RNG stream; carries across round resets so successive rounds differ
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score: +1 per completed walk while running
    pub score: u64,
    /// Every occupied cell this round (border + obstacles + trail)
    pub cells: Vec<Cell>,
    /// The moving head
    pub player: Player,
    /// Position the head occupied one step ago; committed as a cell when the
    /// head has moved since the last commit
    pub trail_marker: Vec2,
    /// Time accumulated toward the next obstacle spawn
    pub obstacle_acc: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending frontend effects
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a round with the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create a round with a custom arena
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            cells: Vec::new(),
            player: Player {
                pos: config.start,
                dir: IVec2::new(1, 0),
                walk: None,
            },
            trail_marker: config.start,
            obstacle_acc: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            config,
        };
        state.build_round();
        state
    }

    /// Lay out a fresh round: border cells, head at center facing +x,
    /// score 0, timers cleared. Leaves the RNG stream alone.
    fn build_round(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.cells = border_cells(&self.config);
        self.player = Player {
            pos: self.config.start,
            dir: IVec2::new(1, 0),
            walk: None,
        };
        self.trail_marker = self.config.start;
        self.obstacle_acc = 0.0;
    }

    /// Discard all round state and start over (any-key after the prompt)
    pub fn reset_round(&mut self) {
        self.build_round();
        self.push_event(GameEvent::RoundReset);
        log::info!("round reset");
    }

    /// Place a uniformly random obstacle strictly inside the border
    pub fn spawn_obstacle(&mut self) {
        let col = self.rng.random_range(1..=self.config.interior_cols());
        let row = self.rng.random_range(1..=self.config.interior_rows());
        let pos = Vec2::new(
            self.config.x1 + col as f32 * self.config.scale,
            self.config.y1 + row as f32 * self.config.scale,
        );
        // No duplicate check: overlapping obstacles stack
        self.cells.push(Cell::new(pos));
        self.push_event(GameEvent::ObstacleSpawned { pos });
    }

    /// One-way latch: true once the round has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GamePhase::AwaitingAck { .. })
    }

    /// True once the restart prompt is accepting input
    pub fn prompt_shown(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::AwaitingAck {
                prompt_shown: true,
                ..
            }
        )
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the pending frontend effects
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
