//! An explicit game DAG as a reference [`Problem`](crate::Problem).
//!
//! Games are built node by node: decision nodes name the seat to move,
//! terminal nodes carry a payoff vector, and connecting two nodes adds an
//! action numbered in insertion order at its source. The same structure
//! serves as the test fixture for every search procedure and as the input
//! to the benchmarks.
//!
//! # Instrumentation
//!
//! [`DagGame`] counts successor states produced by `transition`, so tests
//! can compare how much of the tree each procedure generates.
//!
//! # File Structure
//!
//! - [`Seat`] (`Player`): seat index at the table
//! - [`DagAction`] (`Action`): outgoing edge label
//! - [`DagState`] (`State`): node index plus seat to move
//! - [`DagGame`] (`Problem`): graph, builder, and random generation

mod action;
mod game;
mod random;
mod seat;
mod state;

pub use action::*;
pub use game::*;
pub use seat::*;
pub use state::*;
