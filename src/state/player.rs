/// Identity of a participant, used to index payoff vectors and to
/// compare against the player to move.
///
/// Tokens are opaque to the engine beyond equality and ordering, so a
/// small integer or a fieldless enum both work.
pub trait Player: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug {}

impl Player for u8 {}
impl Player for usize {}
