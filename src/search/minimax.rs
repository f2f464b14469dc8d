use crate::*;

/// Vector minimax.
///
/// Every node backs up the whole payoff vector of the child that is best
/// for the player moving there, judged by that player's own entry. This
/// equals classic minimax when the game is two-player constant-sum, since
/// maximizing the opponent's entry then minimizes the root player's.
///
/// Ties go to the earliest enumerated action; a later action replaces it
/// only with a strictly greater entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl<G: Problem> Search<G> for Minimax {
    type V = Payoff<G::P>;

    fn decide(&self, game: &G) -> Result<Decision<G::A, Self::V>, SearchError> {
        let ref root = game.start();
        if game.is_terminal(root) {
            return Err(SearchError::Terminal(format!("{:?}", root)));
        }
        let ref mut nodes = 1;
        let mover = root.player_to_move();
        let mut best = None::<(G::A, Utility, Payoff<G::P>)>;
        for action in game.choices(root)? {
            let ref child = game.transition(root, &action);
            let payoff = Self::backup(game, child, nodes)?;
            let value = payoff.utility(&mover)?;
            log::trace!("minimax {:?} -> {}", action, payoff);
            if best.as_ref().is_none_or(|(_, top, _)| value > *top) {
                best = Some((action, value, payoff));
            }
        }
        let (action, _, payoff) =
            best.ok_or_else(|| SearchError::NoActions(format!("{:?}", root)))?;
        log::debug!("minimax chose {:?} worth {} over {} nodes", action, payoff, nodes);
        Ok(Decision::new(action, payoff, *nodes))
    }
}

impl Minimax {
    /// Payoff vector reached under optimal play from `state`.
    fn backup<G: Problem>(
        game: &G,
        state: &G::S,
        nodes: &mut usize,
    ) -> Result<Payoff<G::P>, SearchError> {
        *nodes += 1;
        if game.is_terminal(state) {
            return Ok(game.evaluate(state));
        }
        let mover = state.player_to_move();
        let mut best = None::<(Utility, Payoff<G::P>)>;
        for ref action in game.choices(state)? {
            let ref child = game.transition(state, action);
            let payoff = Self::backup(game, child, nodes)?;
            let value = payoff.utility(&mover)?;
            if best.as_ref().is_none_or(|(top, _)| value > *top) {
                best = Some((value, payoff));
            }
        }
        best.map(|(_, payoff)| payoff)
            .ok_or_else(|| SearchError::NoActions(format!("{:?}", state)))
    }
}
