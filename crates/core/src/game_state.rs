//! Game state module - the turn controller
//!
//! Owns the board, the turn phase, the move/pair counters and the countup
//! clock. All time-based behavior goes through the [`Scheduler`]: the
//! comparison after a second pick and the once-per-second clock tick are both
//! scheduled tasks tagged with the current [`Generation`].
//!
//! Replacing the board (restart or resize) bumps the generation and cancels
//! every pending task. Tasks that still surface from an older generation are
//! discarded when they fire.

use tracing::{debug, info, warn};

use crate::board::{Board, BoardError};
use crate::rng::SimpleRng;
use crate::scheduler::{Generation, Scheduler, TaskKind};
use crate::snapshot::GameSnapshot;
use crate::types::{next_size, GameAction, CLOCK_TICK_MS, DEFAULT_SIZE, EVAL_DELAY_MS};

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No pending pick.
    Idle,
    /// First tile of the turn is face-up.
    OneSelected { first: usize },
    /// Both tiles are face-up and the comparison is scheduled. Input is locked.
    Evaluating { first: usize, second: usize },
    /// Every pair is found. Terminal until the board is replaced.
    Won,
}

impl Phase {
    /// The pending (first, second) pick indices.
    pub fn pending(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Phase::OneSelected { first } => (Some(first), None),
            Phase::Evaluating { first, second } => (Some(first), Some(second)),
            Phase::Idle | Phase::Won => (None, None),
        }
    }
}

/// Result of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The pick had no effect.
    Ignored,
    /// The pick opened a turn.
    First,
    /// The pick completed a turn; a comparison is now scheduled.
    Second,
}

/// Result of a comparison that fired during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched,
    Mismatched,
}

/// Construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: u8,
    pub seed: u32,
    pub eval_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: 1,
            eval_delay_ms: EVAL_DELAY_MS,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    phase: Phase,
    /// Completed turns, counted at the second pick.
    moves: u32,
    pairs_found: u32,
    elapsed_secs: u32,
    /// Clock is running. Set by the first pick, cleared for good by the win.
    running: bool,
    generation: Generation,
    scheduler: Scheduler,
    rng: SimpleRng,
    eval_delay_ms: u32,
}

impl GameState {
    /// Create a new game of `size × size` tiles with the given RNG seed.
    pub fn new(size: u8, seed: u32) -> Result<Self, BoardError> {
        Self::with_config(GameConfig {
            size,
            seed,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> Result<Self, BoardError> {
        let mut rng = SimpleRng::new(config.seed);
        let board = Board::generate(config.size, &mut rng)?;
        info!(size = config.size, seed = config.seed, "new board");

        Ok(Self {
            board,
            phase: Phase::Idle,
            moves: 0,
            pairs_found: 0,
            elapsed_secs: 0,
            running: false,
            generation: Generation::default(),
            scheduler: Scheduler::new(),
            rng,
            eval_delay_ms: config.eval_delay_ms,
        })
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> u32 {
        self.board.total_pairs() as u32
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn is_won(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// Picks are refused while a comparison is pending and after the win.
    pub fn input_locked(&self) -> bool {
        matches!(self.phase, Phase::Evaluating { .. } | Phase::Won)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a comparison is scheduled and has not fired yet.
    pub fn evaluation_pending(&self) -> bool {
        self.scheduler
            .is_pending(|k| matches!(k, TaskKind::Evaluate { .. }))
    }

    /// Apply one input action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Select(index) => {
                self.select(index);
            }
            GameAction::Restart => self.restart(),
            GameAction::PlayAgain => {
                if self.phase == Phase::Won {
                    self.restart();
                }
            }
            GameAction::SetSize(size) => {
                if let Err(err) = self.set_size(size) {
                    warn!(%err, "size change rejected");
                }
            }
            GameAction::CycleSize => self.cycle_size(),
        }
    }

    /// Pick the tile at `index`.
    ///
    /// Picks on matched or face-up tiles, repeated picks of the first tile,
    /// out-of-range indices, and any pick while input is locked are ignored.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.input_locked() {
            return SelectOutcome::Ignored;
        }
        let Some(tile) = self.board.get(index) else {
            return SelectOutcome::Ignored;
        };
        if !tile.is_selectable() {
            return SelectOutcome::Ignored;
        }
        if let Phase::OneSelected { first } = self.phase {
            if first == index {
                return SelectOutcome::Ignored;
            }
        }

        if !self.running {
            self.running = true;
            self.scheduler
                .schedule(TaskKind::ClockTick, CLOCK_TICK_MS, self.generation);
        }

        self.board = self.board.with_revealed(index);

        match self.phase {
            Phase::OneSelected { first } => {
                self.phase = Phase::Evaluating {
                    first,
                    second: index,
                };
                self.moves += 1;
                let scheduled = self.scheduler.schedule(
                    TaskKind::Evaluate {
                        first,
                        second: index,
                    },
                    self.eval_delay_ms,
                    self.generation,
                );
                debug_assert!(scheduled, "evaluation queue overflow");
                debug!(first, second = index, moves = self.moves, "second pick");
                SelectOutcome::Second
            }
            _ => {
                self.phase = Phase::OneSelected { first: index };
                debug!(first = index, "first pick");
                SelectOutcome::First
            }
        }
    }

    /// Advance game time by `elapsed_ms` and run everything that became due.
    ///
    /// Returns the outcome of the comparison that fired during this tick, if
    /// one did.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Resolution> {
        self.scheduler.advance(elapsed_ms);

        let mut resolution = None;
        while let Some(task) = self.scheduler.pop_due() {
            if task.generation != self.generation {
                debug!(
                    task_generation = task.generation.get(),
                    current = self.generation.get(),
                    "dropping stale task"
                );
                continue;
            }
            match task.kind {
                TaskKind::Evaluate { first, second } => {
                    if let Some(r) = self.resolve(first, second) {
                        resolution = Some(r);
                    }
                }
                TaskKind::ClockTick => {
                    if self.running {
                        self.elapsed_secs += 1;
                        self.scheduler.schedule_at(
                            TaskKind::ClockTick,
                            task.due_ms + CLOCK_TICK_MS as u64,
                            self.generation,
                        );
                    }
                }
            }
        }
        resolution
    }

    fn resolve(&mut self, first: usize, second: usize) -> Option<Resolution> {
        if self.phase != (Phase::Evaluating { first, second }) {
            return None;
        }

        let (Some(a), Some(b)) = (self.board.get(first), self.board.get(second)) else {
            self.phase = Phase::Idle;
            return None;
        };

        let resolution = if a.face == b.face {
            self.board = self.board.with_matched(first, second);
            self.pairs_found += 1;
            Resolution::Matched
        } else {
            self.board = self.board.with_hidden(first, second);
            Resolution::Mismatched
        };
        self.phase = Phase::Idle;
        debug!(first, second, ?resolution, pairs = self.pairs_found, "turn resolved");

        if self.is_won() {
            self.finish();
        }
        Some(resolution)
    }

    fn finish(&mut self) {
        self.phase = Phase::Won;
        self.running = false;
        self.scheduler
            .cancel_where(|k| matches!(k, TaskKind::ClockTick));
        info!(
            moves = self.moves,
            elapsed_secs = self.elapsed_secs,
            "all pairs found"
        );
    }

    /// Deal a new board at the current size and zero the counters.
    pub fn restart(&mut self) {
        if let Err(err) = self.replace_board(self.size()) {
            warn!(%err, "restart failed");
        }
    }

    /// Deal a new `size × size` board and zero the counters.
    ///
    /// On error the current game is left untouched.
    pub fn set_size(&mut self, size: u8) -> Result<(), BoardError> {
        self.replace_board(size)
    }

    /// Switch to the next supported size.
    pub fn cycle_size(&mut self) {
        if let Err(err) = self.replace_board(next_size(self.size())) {
            warn!(%err, "size change rejected");
        }
    }

    fn replace_board(&mut self, size: u8) -> Result<(), BoardError> {
        let board = Board::generate(size, &mut self.rng)?;

        self.scheduler.cancel_all();
        self.generation = self.generation.next();
        self.board = board;
        self.phase = Phase::Idle;
        self.moves = 0;
        self.pairs_found = 0;
        self.elapsed_secs = 0;
        self.running = false;

        info!(size, generation = self.generation.get(), "new board");
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.size(),
            board: self.board.clone(),
            phase: self.phase,
            moves: self.moves,
            pairs_found: self.pairs_found,
            total_pairs: self.total_pairs(),
            elapsed_secs: self.elapsed_secs,
            running: self.running,
            won: self.is_won(),
            input_locked: self.input_locked(),
            generation: self.generation.get(),
        }
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }
}
