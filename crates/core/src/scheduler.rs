//! Deferred task scheduling on a virtual clock.
//!
//! The game never sleeps or spawns timers. Instead the loop advances a virtual
//! clock with [`Scheduler::advance`] and drains whatever became due. Each task
//! is stamped with the [`Generation`] of the board it was scheduled for, so the
//! consumer can refuse work that belongs to a board that has since been
//! replaced.
//!
//! Storage is a fixed-capacity `ArrayVec`; a game only ever has one pending
//! evaluation and one pending clock tick.

use arrayvec::ArrayVec;

/// Maximum number of tasks pending at once.
pub const MAX_TASKS: usize = 4;

/// Identifier of one board lifetime. Bumped on every restart or resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Compare the two picked tiles.
    Evaluate { first: usize, second: usize },
    /// Advance the elapsed-time counter by one second.
    ClockTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub generation: Generation,
    pub due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    tasks: ArrayVec<Task, MAX_TASKS>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms as u64);
    }

    /// Schedule `kind` to fire `delay_ms` from now.
    ///
    /// Returns `false` (and drops the task) when the queue is full.
    pub fn schedule(&mut self, kind: TaskKind, delay_ms: u32, generation: Generation) -> bool {
        let due_ms = self.now_ms.saturating_add(delay_ms as u64);
        self.schedule_at(kind, due_ms, generation)
    }

    /// Schedule `kind` at an absolute virtual time.
    pub fn schedule_at(&mut self, kind: TaskKind, due_ms: u64, generation: Generation) -> bool {
        self.tasks
            .try_push(Task {
                kind,
                generation,
                due_ms,
            })
            .is_ok()
    }

    /// Remove the earliest task that is due, if any.
    ///
    /// Tasks due at the same time come out in scheduling order.
    pub fn pop_due(&mut self) -> Option<Task> {
        let mut best: Option<usize> = None;
        for (i, t) in self.tasks.iter().enumerate() {
            if t.due_ms > self.now_ms {
                continue;
            }
            match best {
                Some(b) if self.tasks[b].due_ms <= t.due_ms => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| self.tasks.remove(i))
    }

    /// Drop every pending task whose kind matches.
    pub fn cancel_where(&mut self, pred: impl Fn(&TaskKind) -> bool) {
        self.tasks.retain(|t| !pred(&t.kind));
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, pred: impl Fn(&TaskKind) -> bool) -> bool {
        self.tasks.iter().any(|t| pred(&t.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G0: Generation = Generation(0);

    #[test]
    fn nothing_is_due_before_its_time() {
        let mut s = Scheduler::new();
        assert!(s.schedule(TaskKind::ClockTick, 1000, G0));
        s.advance(999);
        assert_eq!(s.pop_due(), None);
        s.advance(1);
        let t = s.pop_due().unwrap();
        assert_eq!(t.kind, TaskKind::ClockTick);
        assert_eq!(t.due_ms, 1000);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn due_tasks_come_out_earliest_first() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::ClockTick, 1000, G0);
        s.schedule(TaskKind::Evaluate { first: 0, second: 1 }, 500, G0);
        s.advance(2000);
        assert!(matches!(s.pop_due().unwrap().kind, TaskKind::Evaluate { .. }));
        assert_eq!(s.pop_due().unwrap().kind, TaskKind::ClockTick);
        assert_eq!(s.pop_due(), None);
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::Evaluate { first: 0, second: 1 }, 500, G0);
        s.schedule(TaskKind::ClockTick, 500, G0);
        s.advance(500);
        assert!(matches!(s.pop_due().unwrap().kind, TaskKind::Evaluate { .. }));
        assert_eq!(s.pop_due().unwrap().kind, TaskKind::ClockTick);
    }

    #[test]
    fn cancel_where_only_drops_matching_kind() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::ClockTick, 1000, G0);
        s.schedule(TaskKind::Evaluate { first: 2, second: 3 }, 500, G0);
        s.cancel_where(|k| matches!(k, TaskKind::ClockTick));
        assert_eq!(s.pending(), 1);
        assert!(s.is_pending(|k| matches!(k, TaskKind::Evaluate { .. })));
        assert!(!s.is_pending(|k| matches!(k, TaskKind::ClockTick)));
    }

    #[test]
    fn cancel_all_empties_queue() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::ClockTick, 10, G0);
        s.schedule(TaskKind::ClockTick, 20, G0);
        s.cancel_all();
        s.advance(100);
        assert_eq!(s.pop_due(), None);
    }

    #[test]
    fn full_queue_rejects_new_tasks() {
        let mut s = Scheduler::new();
        for _ in 0..MAX_TASKS {
            assert!(s.schedule(TaskKind::ClockTick, 1, G0));
        }
        assert!(!s.schedule(TaskKind::ClockTick, 1, G0));
        assert_eq!(s.pending(), MAX_TASKS);
    }

    #[test]
    fn tasks_keep_their_generation() {
        let mut s = Scheduler::new();
        let g1 = G0.next();
        s.schedule(TaskKind::ClockTick, 0, g1);
        assert_eq!(s.pop_due().unwrap().generation, g1);
        assert_eq!(g1.get(), 1);
    }
}
