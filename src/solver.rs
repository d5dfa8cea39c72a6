//! Greedy best-first search toward [`GOAL`].
//!
//! The ranking key is the heuristic score alone; path cost is ignored, so a
//! returned path is not necessarily the shortest one.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::frontier::{Candidate, FrontierStrategy, RankedWorklist, Trail};
use crate::graph::StateGraph;
use crate::heuristic::score;
use crate::puzzle::{Configuration, Move, GOAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub frontier: FrontierStrategy,
    /// Record every generated transition in the [`StateGraph`].
    pub record_graph: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierStrategy::default(),
            record_graph: true,
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Start to goal, both included.
    Solved(Vec<Configuration>),
    /// The worklist ran dry without reaching the goal.
    Exhausted,
    /// The cancel flag was raised.
    Cancelled,
}

impl SearchOutcome {
    /// The solution path, or empty when the run did not solve.
    pub fn into_path(self) -> Vec<Configuration> {
        match self {
            SearchOutcome::Solved(path) => path,
            SearchOutcome::Exhausted | SearchOutcome::Cancelled => Vec::new(),
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations popped and expanded.
    pub expanded: usize,
    /// Candidates inserted into the worklist, the start included.
    pub generated: usize,
    /// Popped entries skipped because they were already expanded.
    pub stale: usize,
    pub frontier_high_water: usize,
}

pub struct Solver {
    config: SolverConfig,
    graph: StateGraph,
    stats: SearchStats,
    cancel: Option<Arc<AtomicBool>>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            graph: StateGraph::new(),
            stats: SearchStats::default(),
            cancel: None,
        }
    }

    /// Checks `flag` before every expansion and stops with
    /// [`SearchOutcome::Cancelled`] once it is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Graph recorded by the most recent run.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Counters from the most recent run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Searches from `start`. Each run starts from an empty graph.
    #[instrument(skip(self, start), fields(frontier = ?self.config.frontier))]
    pub fn run(&mut self, start: Configuration) -> SearchOutcome {
        self.graph = StateGraph::new();
        self.stats = SearchStats::default();

        let mut worklist = RankedWorklist::new(self.config.frontier);
        let mut visited: HashSet<Configuration> = HashSet::new();

        let start_score = score(&start);
        debug!(score = start_score, "starting search");
        worklist.insert(Candidate::new(start_score, start, Trail::empty()));
        self.stats.generated += 1;
        if self.config.record_graph {
            self.graph.register(start);
        }

        let outcome = loop {
            if self.is_cancelled() {
                break SearchOutcome::Cancelled;
            }

            // EmptyFrontier is the normal exhaustion signal.
            let Ok(candidate) = worklist.pop_best() else {
                break SearchOutcome::Exhausted;
            };
            let Candidate {
                score: current_score,
                configuration: current,
                trail,
            } = candidate;

            if current == GOAL {
                let mut path = trail.to_vec();
                path.push(current);
                break SearchOutcome::Solved(path);
            }

            // The same configuration can be queued by several parents before
            // its first expansion.
            if !visited.insert(current) {
                self.stats.stale += 1;
                continue;
            }
            self.stats.expanded += 1;
            trace!(score = current_score, depth = trail.len(), "expanding");

            let next_trail = trail.extended(current);
            for (_, neighbor) in current.neighbors() {
                if self.config.record_graph {
                    self.graph.connect(current, neighbor);
                }
                if !visited.contains(&neighbor) {
                    worklist.insert(Candidate::new(
                        score(&neighbor),
                        neighbor,
                        next_trail.clone(),
                    ));
                    self.stats.generated += 1;
                }
            }
        };

        self.stats.frontier_high_water = worklist.high_water();
        debug!(
            solved = outcome.is_solved(),
            expanded = self.stats.expanded,
            generated = self.stats.generated,
            stale = self.stats.stale,
            states = self.graph.len(),
            "search finished"
        );
        outcome
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Solves `start` with the default frontier. Empty when no path was found.
///
/// The graph would be dropped on return, so it is not recorded.
pub fn solve(start: Configuration) -> Vec<Configuration> {
    Solver::new(SolverConfig {
        record_graph: false,
        ..SolverConfig::default()
    })
    .run(start)
    .into_path()
}

/// The blank moves that replay `path`. Stops at the first pair that is not
/// one blank-swap apart.
pub fn moves_for_path(path: &[Configuration]) -> Vec<Move> {
    path.windows(2)
        .map_while(|pair| pair[0].move_between(&pair[1]))
        .collect()
}
