/// A choice available at a state.
///
/// The engine only enumerates actions, hands them back to the problem,
/// and returns one of them from the root. Equality is required so that
/// callers can compare decisions.
pub trait Action: Clone + PartialEq + std::fmt::Debug {}

impl Action for u8 {}
impl Action for usize {}
impl Action for char {}
