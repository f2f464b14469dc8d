//! Game primitives consumed by the search procedures.
//!
//! - Player tokens (whose payoff, whose move)
//! - Actions (opaque choices at a state)
//! - States (who moves next)
//! - Problems (start, terminal test, actions, transitions, payoffs)
//! - Payoff vectors at terminal states
//! - Heuristic estimates for depth-limited search

mod action;
mod heuristic;
mod payoff;
mod player;
mod problem;
mod state;

pub use action::*;
pub use heuristic::*;
pub use payoff::*;
pub use player::*;
pub use problem::*;
pub use state::*;
