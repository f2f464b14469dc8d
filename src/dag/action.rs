use crate::*;

/// An outgoing edge of a [`DagGame`] node.
///
/// Numbered from zero at each source node in the order edges were added,
/// which is also the order actions are enumerated in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct DagAction(usize);

impl From<usize> for DagAction {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<DagAction> for usize {
    fn from(action: DagAction) -> Self {
        action.0
    }
}

impl Action for DagAction {}

impl std::fmt::Display for DagAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
