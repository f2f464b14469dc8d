/// Faults in a supplied [`Problem`](crate::Problem) that abort a search.
///
/// The engine never recovers from these; the first one encountered is
/// returned to the caller and no partial result is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The start state is already terminal, so there is nothing to choose.
    Terminal(String),
    /// A non-terminal state enumerated zero actions.
    NoActions(String),
    /// A terminal payoff has no entry for the player being optimized.
    MissingPayoff(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminal(s) => write!(f, "start state is terminal: {}", s),
            Self::NoActions(s) => write!(f, "no available actions at non-terminal state: {}", s),
            Self::MissingPayoff(s) => write!(f, "payoff has no entry for player: {}", s),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let e = SearchError::MissingPayoff("P2".to_string());
        assert_eq!(e.to_string(), "payoff has no entry for player: P2");
        let e = SearchError::NoActions("DagState".to_string());
        assert!(e.to_string().ends_with("DagState"));
    }
}
