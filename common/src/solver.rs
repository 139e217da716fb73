//! Exhaustive depth-first search for single-peg finishes.
//!
//! Two variants share the same state transitions: [`Solver::solve_all`]
//! explores the full game tree, [`Solver::solve_all_memoized`] additionally
//! remembers positions that were proven dead and skips them when they are
//! reached again through a different move order.

use std::fmt;

use serde::Serialize;

use crate::{
    game_state::{GameState, Solvability},
    jumps::Move,
    memo::UnsolvableMemo,
    position::Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    /// Stop the whole search as soon as one solution has been found.
    pub stop_at_first_solution: bool,
    /// Hand every solution path to the [`SolutionSink`]. Counts are not
    /// affected.
    pub emit_solutions: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stop_at_first_solution: false,
            emit_solutions: true,
        }
    }
}

/// Receives the results of a search while it runs.
pub trait SolutionSink {
    /// Called for every solution when emission is enabled. `number` counts
    /// from 1 within the current run.
    fn on_solution(&mut self, number: u64, path: &[Move]);

    /// Called after a position was added to the unsolvable memo.
    fn on_memo_insert(&mut self, _memo_size: usize) {}
}

impl SolutionSink for () {
    fn on_solution(&mut self, _number: u64, _path: &[Move]) {}
}

/// Collects the solution paths in the order they are found.
impl SolutionSink for Vec<Vec<Move>> {
    fn on_solution(&mut self, _number: u64, path: &[Move]) {
        self.push(path.to_vec());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemoStats {
    /// States that were cut off because their position was already known to
    /// be unsolvable.
    pub hits: u64,
    /// Number of positions in the memo at the end of the run.
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SolveStats {
    pub solutions: u64,
    /// Non-goal states without a continuation, including memo hits.
    pub dead_ends: u64,
    /// Every state the search entered.
    pub visited: u64,
    /// Only present for the memoized variant.
    pub memo: Option<MemoStats>,
}

impl SolveStats {
    /// Finished games: solutions plus dead ends.
    pub fn games(&self) -> u64 {
        self.solutions + self.dead_ends
    }
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Solutions: {}", self.solutions)?;
        writeln!(f, "Number of No Solutions: {}", self.dead_ends)?;
        if let Some(memo) = self.memo {
            writeln!(f, "Number of Seen Before as No Solutions: {}", memo.hits)?;
            writeln!(f, "Size of Unsolvable List: {}", memo.size)?;
        }
        writeln!(f, "Number of Games: {}", self.games())?;
        write!(f, "Visited States: {}", self.visited)
    }
}

/// Depth-first solver. Counters, the stop signal and the memo belong to the
/// solver instance and are reset at the start of every top-level solve.
pub struct Solver {
    config: SolverConfig,
    goal: fn(&Position) -> bool,
    stats: SolveStats,
    memo_hits: u64,
    memo: UnsolvableMemo,
    stop: bool,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self::with_goal(config, Position::is_single_peg)
    }

    /// Use a different goal predicate than "one peg left".
    ///
    /// The goal sees the board only, since the memo of the memoized search
    /// is keyed by position and must not depend on how a position was reached.
    pub fn with_goal(config: SolverConfig, goal: fn(&Position) -> bool) -> Self {
        Self {
            config,
            goal,
            stats: SolveStats::default(),
            memo_hits: 0,
            memo: UnsolvableMemo::new(),
            stop: false,
        }
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// The unsolvable positions collected by the last memoized run.
    pub fn memo(&self) -> &UnsolvableMemo {
        &self.memo
    }

    fn reset(&mut self) {
        self.stats = SolveStats::default();
        self.memo_hits = 0;
        self.memo.clear();
        self.stop = false;
    }

    /// Enumerate every solution reachable from `state` without any caching.
    pub fn solve_all<S: SolutionSink>(&mut self, state: &GameState, sink: &mut S) -> SolveStats {
        self.reset();
        log::info!(
            "solving {} pegs without memo (stop at first: {})",
            state.remaining_pegs(),
            self.config.stop_at_first_solution
        );

        self.search(state, sink);

        log::info!(
            "found {} solutions, {} dead ends, visited {} states",
            self.stats.solutions,
            self.stats.dead_ends,
            self.stats.visited
        );
        self.stats
    }

    /// Enumerate every solution reachable from `state`, pruning positions
    /// that were already proven unsolvable. On return, the solvability
    /// marker of `state` holds the result for the root, unless the search
    /// was stopped early.
    pub fn solve_all_memoized<S: SolutionSink>(
        &mut self,
        state: &mut GameState,
        sink: &mut S,
    ) -> SolveStats {
        self.reset();
        log::info!(
            "solving {} pegs with memo (stop at first: {})",
            state.remaining_pegs(),
            self.config.stop_at_first_solution
        );

        self.search_memoized(state, sink);

        self.stats.memo = Some(MemoStats {
            hits: self.memo_hits,
            size: self.memo.len(),
        });
        log::info!(
            "found {} solutions, {} dead ends ({} from memo), {} unsolvable positions",
            self.stats.solutions,
            self.stats.dead_ends,
            self.memo_hits,
            self.memo.len()
        );
        self.stats
    }

    fn record_solution<S: SolutionSink>(&mut self, state: &GameState, sink: &mut S) {
        self.stats.solutions += 1;
        log::debug!("solution {} found", self.stats.solutions);

        if self.config.emit_solutions {
            sink.on_solution(self.stats.solutions, state.path());
        }
        if self.config.stop_at_first_solution {
            self.stop = true;
        }
    }

    fn search<S: SolutionSink>(&mut self, state: &GameState, sink: &mut S) {
        self.stats.visited += 1;

        if (self.goal)(state.position()) {
            self.record_solution(state, sink);
            return;
        }

        let moves = state.available_moves();
        if moves.is_empty() {
            self.stats.dead_ends += 1;
            return;
        }

        for mv in moves {
            let child = state.successor(mv);
            self.search(&child, sink);
            if self.stop {
                return;
            }
        }
    }

    fn search_memoized<S: SolutionSink>(&mut self, state: &mut GameState, sink: &mut S) {
        self.stats.visited += 1;

        if (self.goal)(state.position()) {
            state.set_solvable(true);
            self.record_solution(state, sink);
            return;
        }

        if self.memo.contains(state.position()) {
            log::trace!("memo hit at {} pegs", state.remaining_pegs());
            state.set_solvable(false);
            self.memo_hits += 1;
            self.stats.dead_ends += 1;
            return;
        }

        let moves = state.available_moves();
        if moves.is_empty() {
            self.stats.dead_ends += 1;
        }

        for mv in moves {
            let mut child = state.successor(mv);
            self.search_memoized(&mut child, sink);
            if child.is_solvable() {
                state.set_solvable(true);
            }
            // The marker of an interrupted state stays whatever the children
            // reported so far.
            if self.stop {
                return;
            }
        }

        if !state.is_solvable() {
            state.set_solvability(Solvability::Unsolvable);
            if self.memo.insert(state.position()) {
                sink.on_memo_insert(self.memo.len());
            }
        }
    }
}
