//! Adversarial search over abstract game trees.
//!
//! The algorithms in this crate consume any game that implements [`Problem`]
//! and pick an action for the player to move at the start state.
//!
//! # Module Structure
//!
//! - `state`: Game primitives (Player, Action, State, Problem, Payoff, Heuristic)
//! - `search`: Search procedures (Minimax, AlphaBeta, AlphaBetaCutoff, GeneralMinimax)
//! - `dag`: Explicit game DAG reference implementation with visit counting
//! - `error`: Faults surfaced from malformed problems
//!
//! # Example
//!
//! ```
//! use adversarial::*;
//!
//! let mut game = DagGame::new(Seat::from(0));
//! let l = game.terminal(Payoff::zero_sum(3.));
//! let r = game.terminal(Payoff::zero_sum(-1.));
//! let root = game.root();
//! game.connect(root, l);
//! game.connect(root, r);
//!
//! assert_eq!(alpha_beta(&game).unwrap(), DagAction::from(0));
//! ```

mod dag;
mod error;
mod search;
mod state;

pub use dag::*;
pub use error::*;
pub use search::*;
pub use state::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, heuristic estimates, and alpha-beta bounds.
pub type Utility = f32;
/// Remaining search depth in half-moves.
pub type Ply = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RANDOM GAME PARAMETERS
// Shape of the trees produced by `DagGame::random()`.
// ============================================================================
/// Plies from the root to every leaf.
pub const RANDOM_TREE_DEPTH: Ply = 6;
/// Actions available at every decision node.
pub const RANDOM_TREE_WIDTH: usize = 3;
/// Terminal payoffs are drawn from `-RANDOM_PAYOFF_RANGE..=RANDOM_PAYOFF_RANGE`.
pub const RANDOM_PAYOFF_RANGE: i32 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
