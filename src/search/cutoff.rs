use crate::*;

/// Alpha-beta with a ply budget.
///
/// Identical to [`AlphaBeta`] until `ply` half-moves below the root, where
/// any state that is not terminal is scored by the [`Heuristic`] instead of
/// being expanded. The heuristic estimates the root player's payoff.
///
/// The root is always expanded, and its children receive `ply - 1`
/// (saturating), so budgets of 0 and 1 both amount to a one-ply lookahead
/// over heuristic scores. A budget at least the depth of the game never
/// consults the heuristic and agrees with plain alpha-beta.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaCutoff<H> {
    ply: Ply,
    heuristic: H,
}

impl<H> AlphaBetaCutoff<H> {
    pub fn new(ply: Ply, heuristic: H) -> Self {
        Self { ply, heuristic }
    }
    pub fn ply(&self) -> Ply {
        self.ply
    }
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<G, H> Search<G> for AlphaBetaCutoff<H>
where
    G: Problem,
    H: Heuristic<G::S>,
{
    type V = Utility;

    fn decide(&self, game: &G) -> Result<Decision<G::A, Self::V>, SearchError> {
        let frontier: &dyn Heuristic<G::S> = &self.heuristic;
        let decision = Pruner::new(game, Some(frontier)).decide(Some(self.ply))?;
        log::debug!(
            "alpha-beta (cutoff {}) chose {:?} worth {:+.2} over {} nodes",
            self.ply,
            decision.action,
            decision.value,
            decision.nodes
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact play favors the first root action (3 vs 1), but annotated
    /// estimates on the intermediate nodes favor the second (0 vs 8).
    fn misleading() -> DagGame {
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        for (estimate, leaves) in [(0., [3., 6.]), (8., [1., 9.])] {
            let reply = game.decision(Seat::from(1));
            game.estimate_at(reply, estimate);
            game.connect(root, reply);
            for x in leaves {
                let leaf = game.terminal(Payoff::zero_sum(x));
                game.connect(reply, leaf);
            }
        }
        game
    }

    #[test]
    fn shallow_budget_trusts_heuristic() {
        let ref game = misleading();
        let estimate = |s: &DagState| game.estimate(s);
        for ply in [0, 1] {
            let decision = AlphaBetaCutoff::new(ply, estimate).decide(game).unwrap();
            assert_eq!(decision.action, DagAction::from(1));
            assert_eq!(decision.value, 8.);
            assert_eq!(decision.nodes, 3);
        }
    }

    #[test]
    fn full_budget_matches_alpha_beta() {
        let ref game = misleading();
        let estimate = |s: &DagState| game.estimate(s);
        let exact = AlphaBeta.decide(game).unwrap();
        for ply in [2, 3, 10] {
            let decision = AlphaBetaCutoff::new(ply, estimate).decide(game).unwrap();
            assert_eq!(decision, exact);
        }
        assert_eq!(exact.action, DagAction::from(0));
    }

    #[test]
    fn terminal_children_ignore_heuristic() {
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        let leaf = game.terminal(Payoff::zero_sum(-5.));
        let reply = game.decision(Seat::from(1));
        let deep = game.terminal(Payoff::zero_sum(-9.));
        game.connect(root, leaf);
        game.connect(root, reply);
        game.connect(reply, deep);
        game.estimate_at(leaf, 100.);
        game.estimate_at(reply, -7.);
        let ref game = game;
        let estimate = |s: &DagState| game.estimate(s);
        // leaf scores its true -5 and beats the reply's estimated -7
        assert_eq!(alpha_beta_cutoff(game, 0, estimate), Ok(DagAction::from(0)));
        // with exact values the reply is worth -9, still worse
        assert_eq!(alpha_beta_cutoff(game, 2, estimate), Ok(DagAction::from(0)));
    }

    #[test]
    fn heuristic_only_sees_frontier_states() {
        let ref game = misleading();
        let seen = std::cell::RefCell::new(Vec::new());
        let record = |s: &DagState| -> Utility {
            seen.borrow_mut().push(s.index());
            0.
        };
        alpha_beta_cutoff(game, 1, &record).unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert!(!seen.borrow().contains(&game.root()));
        seen.borrow_mut().clear();
        alpha_beta_cutoff(game, 2, &record).unwrap();
        assert!(seen.borrow().is_empty());
    }
}
