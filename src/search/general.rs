use crate::*;

/// Scalar minimax for the root player.
///
/// The root player maximizes its own payoff and every other mover is
/// treated as an adversary minimizing it, however many players there are.
/// That is exact for two-player zero-sum games; with more players it is
/// the paranoid assumption that everyone else is in coalition against the
/// root player, which is what this procedure computes.
///
/// Ties go to the earliest enumerated action at every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralMinimax;

impl<G: Problem> Search<G> for GeneralMinimax {
    type V = Utility;

    fn decide(&self, game: &G) -> Result<Decision<G::A, Self::V>, SearchError> {
        let ref root = game.start();
        if game.is_terminal(root) {
            return Err(SearchError::Terminal(format!("{:?}", root)));
        }
        let ref mut nodes = 1;
        let ref hero = root.player_to_move();
        let mut best = None::<(G::A, Utility)>;
        for action in game.choices(root)? {
            let ref child = game.transition(root, &action);
            let value = Self::value(game, child, hero, nodes)?;
            log::trace!("general minimax {:?} -> {:+.2}", action, value);
            if best.as_ref().is_none_or(|(_, top)| value > *top) {
                best = Some((action, value));
            }
        }
        let (action, value) =
            best.ok_or_else(|| SearchError::NoActions(format!("{:?}", root)))?;
        log::debug!(
            "general minimax chose {:?} worth {:+.2} over {} nodes",
            action,
            value,
            nodes
        );
        Ok(Decision::new(action, value, *nodes))
    }
}

impl GeneralMinimax {
    fn value<G: Problem>(
        game: &G,
        state: &G::S,
        hero: &G::P,
        nodes: &mut usize,
    ) -> Result<Utility, SearchError> {
        *nodes += 1;
        if game.is_terminal(state) {
            return game.evaluate(state).utility(hero);
        }
        let maximizing = state.player_to_move() == *hero;
        let mut value = match maximizing {
            true => Utility::NEG_INFINITY,
            false => Utility::INFINITY,
        };
        for ref action in game.choices(state)? {
            let ref child = game.transition(state, action);
            let v = Self::value(game, child, hero, nodes)?;
            value = match maximizing {
                true => value.max(v),
                false => value.min(v),
            };
        }
        Ok(value)
    }
}
