/// Outcome of a search from the start state.
///
/// `value` is what the chosen action is worth under the algorithm's own
/// model: a full payoff vector for [`Minimax`](crate::Minimax), the root
/// player's utility otherwise. Under pruning or a cutoff it is a bound or
/// an estimate, not necessarily the exact game value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Decision<A, V> {
    pub action: A,
    pub value: V,
    /// States evaluated, the start state included.
    pub nodes: usize,
}

impl<A, V> Decision<A, V> {
    pub fn new(action: A, value: V, nodes: usize) -> Self {
        Self {
            action,
            value,
            nodes,
        }
    }
    pub fn into_action(self) -> A {
        self.action
    }
}
