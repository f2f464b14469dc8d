use crate::*;

/// Alpha-beta pruning for the root player.
///
/// Values are the root player's scalar payoff. Nodes where the root player
/// moves maximize, every other node minimizes, and siblings are skipped once
/// the [`Window`] closes. Returns the same action as [`Minimax`] on
/// two-player constant-sum games; on other games the result is silently
/// unreliable, since the opponent is assumed to minimize the root player.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl<G: Problem> Search<G> for AlphaBeta {
    type V = Utility;

    fn decide(&self, game: &G) -> Result<Decision<G::A, Self::V>, SearchError> {
        let decision = Pruner::new(game, None).decide(None)?;
        log::debug!(
            "alpha-beta chose {:?} worth {:+.2} over {} nodes",
            decision.action,
            decision.value,
            decision.nodes
        );
        Ok(decision)
    }
}

/// Recursive alpha-beta shared by [`AlphaBeta`] and [`AlphaBetaCutoff`].
///
/// With a frontier heuristic, a remaining ply budget of `Some(0)` at a
/// non-terminal state ends the descent with the heuristic's estimate.
/// A budget of `None` never runs out.
pub(crate) struct Pruner<'a, G: Problem> {
    game: &'a G,
    hero: G::P,
    frontier: Option<&'a dyn Heuristic<G::S>>,
    nodes: usize,
}

impl<'a, G: Problem> Pruner<'a, G> {
    pub fn new(game: &'a G, frontier: Option<&'a dyn Heuristic<G::S>>) -> Self {
        Self {
            game,
            hero: game.start().player_to_move(),
            frontier,
            nodes: 0,
        }
    }

    /// Root procedure. The root player always maximizes here, and the root
    /// itself is expanded regardless of the ply budget.
    pub fn decide(mut self, ply: Option<Ply>) -> Result<Decision<G::A, Utility>, SearchError> {
        let ref root = self.game.start();
        if self.game.is_terminal(root) {
            return Err(SearchError::Terminal(format!("{:?}", root)));
        }
        self.nodes += 1;
        let ply = ply.map(|p| p.saturating_sub(1));
        let mut window = Window::default();
        let mut choice = None;
        for action in self.game.choices(root)? {
            let ref child = self.game.transition(root, &action);
            let value = self.value(child, window, ply)?;
            log::trace!("alpha-beta {:?} -> {:+.2} in {}", action, value, window);
            if choice.is_none() || value > window.alpha {
                window = window.raise(value);
                choice = Some(action);
            }
            if window.is_closed() {
                break;
            }
        }
        choice
            .map(|action| Decision::new(action, window.alpha, self.nodes))
            .ok_or_else(|| SearchError::NoActions(format!("{:?}", root)))
    }

    fn value(
        &mut self,
        state: &G::S,
        window: Window,
        ply: Option<Ply>,
    ) -> Result<Utility, SearchError> {
        self.nodes += 1;
        if self.game.is_terminal(state) {
            return self.game.evaluate(state).utility(&self.hero);
        }
        if let (Some(0), Some(heuristic)) = (ply, self.frontier) {
            return Ok(heuristic.estimate(state));
        }
        let ply = ply.map(|p| p.saturating_sub(1));
        match state.player_to_move() == self.hero {
            true => self.max(state, window, ply),
            false => self.min(state, window, ply),
        }
    }

    fn max(
        &mut self,
        state: &G::S,
        mut window: Window,
        ply: Option<Ply>,
    ) -> Result<Utility, SearchError> {
        for ref action in self.game.choices(state)? {
            let ref child = self.game.transition(state, action);
            window = window.raise(self.value(child, window, ply)?);
            if window.is_closed() {
                break;
            }
        }
        Ok(window.alpha)
    }

    fn min(
        &mut self,
        state: &G::S,
        mut window: Window,
        ply: Option<Ply>,
    ) -> Result<Utility, SearchError> {
        for ref action in self.game.choices(state)? {
            let ref child = self.game.transition(state, action);
            window = window.lower(self.value(child, window, ply)?);
            if window.is_closed() {
                break;
            }
        }
        Ok(window.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root (seat 0) -> two seat-1 replies -> two seat-0 choices -> leaves.
    fn four_ply(leaves: [Utility; 8]) -> DagGame {
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        let mut leaves = leaves.into_iter();
        for _ in 0..2 {
            let reply = game.decision(Seat::from(1));
            game.connect(root, reply);
            for _ in 0..2 {
                let choice = game.decision(Seat::from(0));
                game.connect(reply, choice);
                for x in leaves.by_ref().take(2) {
                    let leaf = game.terminal(Payoff::zero_sum(x));
                    game.connect(choice, leaf);
                }
            }
        }
        game
    }

    #[test]
    fn deep_cutoff_skips_whole_subtree() {
        // left reply is worth 5 to the root. under the right reply the first
        // choice is worth only 4, so seat 1 already holds the root below 5
        // and the second choice is never generated
        let ref game = four_ply([5., 1., 2., 6., 4., 3., 9., 9.]);
        let decision = AlphaBeta.decide(game).unwrap();
        assert_eq!(decision.action, DagAction::from(0));
        assert_eq!(decision.value, 5.);
        let pruned = game.reset();
        Minimax.decide(game).unwrap();
        let exhaustive = game.reset();
        assert!(pruned < exhaustive, "{} >= {}", pruned, exhaustive);
        assert_eq!(exhaustive, 14);
    }

    #[test]
    fn value_matches_minimax_entry() {
        let ref game = four_ply([1., 8., 3., 3., 7., 2., 6., 4.]);
        let pruned = AlphaBeta.decide(game).unwrap();
        let full = Minimax.decide(game).unwrap();
        assert_eq!(pruned.action, full.action);
        assert_eq!(Some(pruned.value), full.value.get(&Seat::from(0)));
    }

    #[test]
    fn first_of_equal_actions_is_kept() {
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        for x in [-2., 4., 4., 1.] {
            let leaf = game.terminal(Payoff::zero_sum(x));
            game.connect(root, leaf);
        }
        assert_eq!(alpha_beta(&game), Ok(DagAction::from(1)));
    }

    #[test]
    fn unbeatable_first_action_ends_root_loop() {
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        for x in [Utility::INFINITY, 1., 2., 3.] {
            let leaf = game.terminal(Payoff::zero_sum(x));
            game.connect(root, leaf);
        }
        let decision = AlphaBeta.decide(&game).unwrap();
        assert_eq!(decision.action, DagAction::from(0));
        assert_eq!(decision.value, Utility::INFINITY);
        assert_eq!(decision.nodes, 2);
        assert_eq!(game.visits(), 1);
    }

    #[test]
    fn only_root_player_entry_is_read() {
        // seat 1 has no entries at all; alpha-beta never asks for them
        let mut game = DagGame::new(Seat::from(0));
        let root = game.root();
        for x in [0., 2.] {
            let leaf = game.terminal(Payoff::from([(Seat::from(0), x)]));
            game.connect(root, leaf);
        }
        assert_eq!(alpha_beta(&game), Ok(DagAction::from(1)));
    }
}
