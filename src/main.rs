mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use eight_puzzle::render::{styled_board, styled_path};
use eight_puzzle::{moves_for_path, Configuration, SearchOutcome, Solver};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = match cli.board {
        Some(board) => board,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if cli.uniform {
                Configuration::random_solvable(&mut rng)
            } else {
                Configuration::shuffled(cli.shuffle, &mut rng)
            }
        }
    };
    let mut config = cli.solver_config();
    if !start.is_solvable() {
        // Exhaustion reaches 181 440 states; a dense matrix over them does
        // not fit in memory.
        info!("start board has odd parity, the search will exhaust without a graph");
        config.record_graph = false;
    }

    let mut solver = Solver::new(config);
    let outcome = solver.run(start);
    let stats = solver.stats();
    info!(
        expanded = stats.expanded,
        generated = stats.generated,
        states = solver.graph().len(),
        edges = solver.graph().edge_count(),
        "search complete"
    );

    let path = match outcome {
        SearchOutcome::Solved(path) => path,
        SearchOutcome::Exhausted | SearchOutcome::Cancelled => {
            println!("Start:\n{}", styled_board(&start));
            println!("No solution found");
            return Ok(());
        }
    };

    let moves = moves_for_path(&path);
    if cli.moves_only {
        let line: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        println!("{}", line.join(" "));
        return Ok(());
    }

    print!("{}", styled_path(&path));
    println!(
        "\nSolved in {} moves ({} states expanded)",
        moves.len(),
        stats.expanded
    );
    Ok(())
}
