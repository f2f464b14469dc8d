use crate::*;
use petgraph::graph::NodeIndex;
use rand::Rng;

impl DagGame {
    /// A random two-seat zero-sum tree.
    ///
    /// Seats alternate from seat 0 at the root, every decision node has
    /// `width` actions, and every leaf sits exactly `depth` plies down
    /// (at least one). Leaf payoffs and decision-node estimates are whole
    /// numbers within [`RANDOM_PAYOFF_RANGE`], so ties are common.
    pub fn generate<R: Rng + ?Sized>(depth: Ply, width: usize, rng: &mut R) -> Self {
        let mut game = Self::new(Seat::from(0));
        let root = game.root();
        game.grow(root, Seat::from(0), depth.max(1), width, rng);
        game
    }

    fn grow<R: Rng + ?Sized>(
        &mut self,
        node: NodeIndex,
        seat: Seat,
        depth: Ply,
        width: usize,
        rng: &mut R,
    ) {
        for _ in 0..width {
            let child = match depth {
                0 | 1 => self.terminal(Payoff::zero_sum(Self::draw(rng))),
                _ => {
                    let next = seat.next(2);
                    let child = self.decision(next);
                    self.estimate_at(child, Self::draw(rng));
                    self.grow(child, next, depth - 1, width, rng);
                    child
                }
            };
            self.connect(node, child);
        }
    }

    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Utility {
        rng.random_range(-RANDOM_PAYOFF_RANGE..=RANDOM_PAYOFF_RANGE) as Utility
    }
}

impl Arbitrary for DagGame {
    fn random() -> Self {
        Self::generate(RANDOM_TREE_DEPTH, RANDOM_TREE_WIDTH, &mut rand::rng())
    }
}
