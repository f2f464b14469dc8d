use crate::*;

/// A position in the game tree.
///
/// Opaque to the search apart from reporting who moves next. Terminal
/// states may report any player; the engine never asks them.
pub trait State: Clone + PartialEq + std::fmt::Debug {
    type P: Player;
    fn player_to_move(&self) -> Self::P;
}
