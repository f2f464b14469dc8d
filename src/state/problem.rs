use crate::*;

/// A finite two-player (or more) game as seen by the search procedures.
///
/// Implementors own every game rule; the engine holds no state of its own
/// and only calls these methods while a search is running.
///
/// # Required Methods
///
/// - `start()`: The state the search decides for
/// - `is_terminal(state)`: Whether play has ended
/// - `actions(state)`: Legal actions; enumeration order is tie-break priority
/// - `transition(state, action)`: Successor state
/// - `evaluate(state)`: Payoff vector, terminal states only
///
/// # Contract
///
/// Every path from `start()` must reach a terminal state in a bounded
/// number of plies, and every non-terminal state must offer at least one
/// action. Violations of the second surface as [`SearchError::NoActions`];
/// violations of the first exhaust the stack.
pub trait Problem {
    type P: Player;
    type A: Action;
    type S: State<P = Self::P>;
    fn start(&self) -> Self::S;
    fn is_terminal(&self, state: &Self::S) -> bool;
    fn actions(&self, state: &Self::S) -> Vec<Self::A>;
    fn transition(&self, state: &Self::S, action: &Self::A) -> Self::S;
    fn evaluate(&self, state: &Self::S) -> Payoff<Self::P>;

    /// Actions at a non-terminal state, failing if there are none.
    fn choices(&self, state: &Self::S) -> Result<Vec<Self::A>, SearchError> {
        let actions = self.actions(state);
        match actions.is_empty() {
            true => Err(SearchError::NoActions(format!("{:?}", state))),
            false => Ok(actions),
        }
    }
}
