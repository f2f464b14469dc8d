use crate::*;

/// Static estimate of the root player's payoff at any state.
///
/// Consulted by [`AlphaBetaCutoff`] once the ply budget runs out before a
/// terminal state is reached. Any `Fn(&S) -> Utility` closure qualifies.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> Utility;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> Utility,
{
    fn estimate(&self, state: &S) -> Utility {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_heuristics() {
        let offset = 0.5;
        let h = |s: &i32| *s as Utility + offset;
        assert_eq!(Heuristic::estimate(&h, &2), 2.5);
    }
}
