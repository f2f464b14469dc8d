//! Search Binary
//!
//! Generates a seeded random game and runs every search procedure on it.
//!
//! Options: --depth, --width, --seed, --cutoff, --json, --tree, -v

use adversarial::*;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Compare adversarial search procedures on a random game", long_about = None)]
struct Args {
    #[arg(long, default_value_t = RANDOM_TREE_DEPTH, help = "Plies from the root to every leaf")]
    depth: Ply,
    #[arg(long, default_value_t = RANDOM_TREE_WIDTH, help = "Actions at every decision node")]
    width: usize,
    #[arg(long, default_value_t = 0, help = "Seed for the game generator")]
    seed: u64,
    #[arg(long, help = "Ply budget for alpha-beta with cutoff (defaults to half the depth)")]
    cutoff: Option<Ply>,
    #[arg(long, help = "Print results as JSON")]
    json: bool,
    #[arg(long, help = "Draw the game tree before searching")]
    tree: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// One line of the comparison.
#[derive(serde::Serialize)]
struct Row {
    name: &'static str,
    action: DagAction,
    value: serde_json::Value,
    nodes: usize,
    visits: usize,
}

impl Row {
    fn new<V>(name: &'static str, game: &DagGame, decision: Decision<DagAction, V>) -> anyhow::Result<Self>
    where
        V: serde::Serialize,
    {
        Ok(Self {
            name,
            action: decision.action,
            value: serde_json::to_value(&decision.value)?,
            nodes: decision.nodes,
            visits: game.reset(),
        })
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24}{:>8}{:>10}{:>10}  {}",
            self.name,
            self.action.to_string(),
            self.nodes,
            self.visits,
            self.value
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level());
    let ref game = DagGame::generate(args.depth, args.width, &mut SmallRng::seed_from_u64(args.seed));
    let cutoff = args.cutoff.unwrap_or(args.depth / 2);
    log::info!(
        "generated game with {} nodes, depth {}, seed {}",
        game.n(),
        game.depth(),
        args.seed
    );
    if args.tree {
        println!("{}", game);
    }
    let estimate = |s: &DagState| game.estimate(s);
    let rows = vec![
        Row::new("minimax", game, Minimax.decide(game)?)?,
        Row::new("alpha-beta", game, AlphaBeta.decide(game)?)?,
        Row::new("alpha-beta cutoff", game, AlphaBetaCutoff::new(cutoff, estimate).decide(game)?)?,
        Row::new("general minimax", game, GeneralMinimax.decide(game)?)?,
    ];
    for row in rows.iter() {
        log::info!("{} chose {} over {} nodes", row.name, row.action, row.nodes);
    }
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&rows)?),
        false => {
            println!("{:<24}{:>8}{:>10}{:>10}  {}", "procedure", "action", "nodes", "visits", "value");
            for row in rows.iter() {
                println!("{}", row);
            }
        }
    }
    Ok(())
}
