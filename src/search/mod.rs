//! Adversarial search procedures.
//!
//! Four independent algorithms share the [`Search`] interface:
//!
//! - [`Minimax`]: full payoff vectors, each mover maximizes its own entry
//! - [`AlphaBeta`]: scalar minimax for the root player with window pruning
//! - [`AlphaBetaCutoff`]: alpha-beta with a ply budget and a [`Heuristic`] frontier
//! - [`GeneralMinimax`]: scalar minimax for the root player, no pruning
//!
//! Each has a public root procedure returning a [`Decision`] and a private
//! recursive evaluator returning values only. Free functions named after the
//! algorithms return just the chosen action.

mod alphabeta;
mod cutoff;
mod decision;
mod general;
mod minimax;
mod window;

pub use alphabeta::*;
pub use cutoff::*;
pub use decision::*;
pub use general::*;
pub use minimax::*;
pub use window::*;

use crate::*;

/// A procedure that picks an action for the player to move at the start state.
pub trait Search<G: Problem> {
    /// Root value reported alongside the chosen action.
    type V;

    /// Searches from `game.start()` and reports the decision.
    fn decide(&self, game: &G) -> Result<Decision<G::A, Self::V>, SearchError>;

    /// Searches from `game.start()` and returns only the chosen action.
    fn search(&self, game: &G) -> Result<G::A, SearchError> {
        self.decide(game).map(Decision::into_action)
    }
}

/// Action maximizing the root mover's own payoff, comparing full payoff vectors.
pub fn minimax<G: Problem>(game: &G) -> Result<G::A, SearchError> {
    Minimax.search(game)
}

/// Action maximizing the root player's payoff, pruned by an alpha-beta window.
pub fn alpha_beta<G: Problem>(game: &G) -> Result<G::A, SearchError> {
    AlphaBeta.search(game)
}

/// Alpha-beta that substitutes `eval_func` for exact values past `cutoff_ply` plies.
pub fn alpha_beta_cutoff<G, H>(game: &G, cutoff_ply: Ply, eval_func: H) -> Result<G::A, SearchError>
where
    G: Problem,
    H: Heuristic<G::S>,
{
    AlphaBetaCutoff::new(cutoff_ply, eval_func).search(game)
}

/// Action maximizing the root player's payoff against all other movers.
pub fn general_minimax<G: Problem>(game: &G) -> Result<G::A, SearchError> {
    GeneralMinimax.search(game)
}
