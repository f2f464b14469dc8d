use crate::*;
use petgraph::graph::NodeIndex;

/// A node of a [`DagGame`] together with the seat to move there.
///
/// At terminal nodes the seat is the one that moved into the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DagState {
    index: NodeIndex,
    seat: Seat,
}

impl DagState {
    pub fn new(index: NodeIndex, seat: Seat) -> Self {
        Self { index, seat }
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}

impl State for DagState {
    type P = Seat;
    fn player_to_move(&self) -> Self::P {
        self.seat
    }
}
