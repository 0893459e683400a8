use std::collections::{HashMap, VecDeque};

use metrohash::MetroBuildHasher;
use tracing::{debug, info};

use crate::Board;

/// default number of past generations remembered by a [`History`].
pub const HISTORY_WINDOW: usize = 64;

/// What a generation looks like compared to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evolution {
    /// no repetition seen yet.
    Running,
    /// every cell is dead.
    Extinct,
    /// identical to the previous generation.
    StillLife,
    /// identical to the generation `period` steps back.
    Oscillator { period: u64 },
}

impl Evolution {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Evolution::Running)
    }
}

/// Bounded memory of generation fingerprints.
#[derive(Debug)]
pub struct History {
    window: usize,
    order: VecDeque<u64>,
    seen: HashMap<u64, u64, MetroBuildHasher>,
}

impl History {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            order: VecDeque::new(),
            seen: HashMap::default(),
        }
    }

    /// Records `fingerprint` for `generation`, returning the generation that
    /// last had the same fingerprint if it is still remembered.
    pub fn record(&mut self, fingerprint: u64, generation: u64) -> Option<u64> {
        let previous = self.seen.insert(fingerprint, generation);
        if previous.is_some() {
            self.order.retain(|f| *f != fingerprint);
        }
        self.order.push_back(fingerprint);

        while self.order.len() > self.window {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        previous
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_WINDOW)
    }
}

/// Drives a board generation after generation and tells when it settles.
#[derive(Debug)]
pub struct Sim {
    board: Board,
    generation: u64,
    history: History,
}

impl Sim {
    pub fn new(board: Board) -> Self {
        Self::with_history(board, History::default())
    }

    /// Starts a sim with `history`'s window; anything it remembers is dropped.
    pub fn with_history(board: Board, mut history: History) -> Self {
        history.clear();
        history.record(board.fingerprint(), 0);
        Self {
            board,
            generation: 0,
            history,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cycles the board once and classifies the new generation.
    pub fn step(&mut self) -> Evolution {
        self.board.cycle();
        self.generation += 1;

        let live = self.board.live_count();
        debug!(generation = self.generation, live, "cycled");

        let previous = self
            .history
            .record(self.board.fingerprint(), self.generation);
        let period = previous.and_then(|previous| self.generation.checked_sub(previous));
        let evolution = match period {
            _ if live == 0 => Evolution::Extinct,
            Some(1) => Evolution::StillLife,
            Some(period) if period > 1 => Evolution::Oscillator { period },
            _ => Evolution::Running,
        };

        if evolution.is_settled() {
            info!(generation = self.generation, ?evolution, "board settled");
        }
        evolution
    }

    /// Steps until the board settles or `max` generations have been computed.
    pub fn run(&mut self, max: u64) -> Evolution {
        let mut evolution = Evolution::Running;
        for _ in 0..max {
            evolution = self.step();
            if evolution.is_settled() {
                break;
            }
        }
        evolution
    }
}
