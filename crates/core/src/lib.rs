//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the tile-pairing game: board generation,
//! the two-pick turn state machine, pair counting, the win latch and the
//! countup clock. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Time only moves when the caller ticks it
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Tiles, immutable board snapshots and the board generator
//! - [`game_state`]: Turn controller, counters, clock and reset lifecycle
//! - [`rng`]: Seeded LCG with Fisher-Yates shuffling
//! - [`scheduler`]: Virtual-clock task queue with generation tagging
//! - [`snapshot`]: Render-ready copy of the game state
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameState, Resolution, SelectOutcome};
//! use tui_memory_types::EVAL_DELAY_MS;
//!
//! let mut game = GameState::new(2, 12345).unwrap();
//!
//! // Find two tiles that do not pair up.
//! let faces: Vec<_> = game.board().iter().map(|t| t.face).collect();
//! let other = (1..4).find(|&i| faces[i] != faces[0]).unwrap();
//!
//! assert_eq!(game.select(0), SelectOutcome::First);
//! assert_eq!(game.select(other), SelectOutcome::Second);
//! assert_eq!(game.moves(), 1);
//!
//! // The comparison fires once the delay has elapsed.
//! assert_eq!(game.tick(EVAL_DELAY_MS), Some(Resolution::Mismatched));
//! assert!(!game.board().get(0).unwrap().revealed);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Comparisons fire `EVAL_DELAY_MS` after the second
//! pick; the clock advances once per `CLOCK_TICK_MS` while running.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scheduler;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Tile};
pub use game_state::{GameConfig, GameState, Phase, Resolution, SelectOutcome};
pub use rng::SimpleRng;
pub use scheduler::{Generation, Scheduler, Task, TaskKind};
pub use snapshot::GameSnapshot;
