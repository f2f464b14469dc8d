use crate::*;
use std::collections::BTreeMap;

/// Per-player utilities at a terminal state.
///
/// Ordered by player so that iteration, display, and serialization are
/// deterministic. Lookups for players without an entry fail with
/// [`SearchError::MissingPayoff`] rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound(
    serialize = "P: serde::Serialize",
    deserialize = "P: serde::Deserialize<'de>"
))]
pub struct Payoff<P: Player>(BTreeMap<P, Utility>);

impl<P: Player> Payoff<P> {
    /// Utility for a player, if present.
    pub fn get(&self, player: &P) -> Option<Utility> {
        self.0.get(player).copied()
    }
    /// Utility for a player the search depends on.
    pub fn utility(&self, player: &P) -> Result<Utility, SearchError> {
        self.get(player)
            .ok_or_else(|| SearchError::MissingPayoff(format!("{:?}", player)))
    }
    /// Players with an entry, in order.
    pub fn players(&self) -> impl Iterator<Item = &P> {
        self.0.keys()
    }
    /// Sum over all players. Constant across terminals of a constant-sum game.
    pub fn total(&self) -> Utility {
        self.0.values().sum()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Player> Default for Payoff<P> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<P: Player> FromIterator<(P, Utility)> for Payoff<P> {
    fn from_iter<I: IntoIterator<Item = (P, Utility)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<P: Player, const N: usize> From<[(P, Utility); N]> for Payoff<P> {
    fn from(entries: [(P, Utility); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<P: Player> std::fmt::Display for Payoff<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, (player, utility)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:+.2}", player, utility)?;
        }
        write!(f, ")")
    }
}
