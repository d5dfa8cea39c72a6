//! Command-line interface for eight-puzzle.

use clap::{Parser, ValueEnum};
use eight_puzzle::{Configuration, FrontierStrategy, SolverConfig};

/// Greedy best-first solver for the 3×3 sliding-tile puzzle
#[derive(Parser, Debug)]
#[command(name = "eight-puzzle")]
#[command(about = "Solve the 8-puzzle with greedy best-first search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting board as nine digits in row-major order, 0 for the blank (e.g. "123/456/708")
    #[arg(long)]
    pub board: Option<Configuration>,

    /// Random blank moves applied to the goal when no board is given
    #[arg(long, default_value_t = 150)]
    pub shuffle: usize,

    /// Draw a uniformly random solvable board instead of a random walk
    #[arg(long, conflicts_with = "board")]
    pub uniform: bool,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frontier implementation
    #[arg(long, value_enum, default_value_t = FrontierArg::Heap)]
    pub frontier: FrontierArg,

    /// Skip recording the explored state graph
    #[arg(long)]
    pub no_graph: bool,

    /// Print only the move list
    #[arg(long)]
    pub moves_only: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierArg {
    Heap,
    MergeSort,
}

impl From<FrontierArg> for FrontierStrategy {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Heap => FrontierStrategy::Heap,
            FrontierArg::MergeSort => FrontierStrategy::MergeSort,
        }
    }
}

impl Cli {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            frontier: self.frontier.into(),
            record_graph: !self.no_graph,
        }
    }
}
