use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[derive(Debug, Clone)]
enum Kind {
    Decision(Seat),
    Terminal(Payoff<Seat>),
}

#[derive(Debug, Clone)]
struct Vertex {
    kind: Kind,
    estimate: Utility,
}

impl From<Kind> for Vertex {
    fn from(kind: Kind) -> Self {
        Self { kind, estimate: 0. }
    }
}

/// A finite game given as an explicit directed acyclic graph.
///
/// Vertices are decision nodes (a seat to move) or terminal nodes (a payoff
/// vector). Edges are actions. Every vertex also carries a heuristic
/// estimate, zero unless set with [`DagGame::estimate_at`], which
/// [`DagGame::estimate`] reports for use with [`AlphaBetaCutoff`].
///
/// Nodes may have several parents; the searches treat each path separately.
/// Cycles are not checked and will overflow the stack during search.
///
/// # Panics
///
/// [`Problem::transition`] panics if the action is not one of
/// [`Problem::actions`] at the given state, for example an action taken
/// from a different node.
#[derive(Debug)]
pub struct DagGame {
    graph: DiGraph<Vertex, DagAction>,
    root: NodeIndex,
    visits: AtomicUsize,
}

impl DagGame {
    /// A game whose root is a decision node for `seat` with no actions yet.
    pub fn new(seat: Seat) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(Vertex::from(Kind::Decision(seat)));
        Self {
            graph,
            root,
            visits: AtomicUsize::new(0),
        }
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    /// Searches start from `node` instead.
    pub fn set_root(&mut self, node: NodeIndex) {
        self.root = node;
    }
    pub fn decision(&mut self, seat: Seat) -> NodeIndex {
        self.graph.add_node(Vertex::from(Kind::Decision(seat)))
    }
    pub fn terminal(&mut self, payoff: Payoff<Seat>) -> NodeIndex {
        self.graph.add_node(Vertex::from(Kind::Terminal(payoff)))
    }
    /// Adds the next action at `from`, leading to `to`.
    pub fn connect(&mut self, from: NodeIndex, to: NodeIndex) -> DagAction {
        let action = DagAction::from(self.graph.edges(from).count());
        self.graph.add_edge(from, to, action);
        action
    }
    pub fn estimate_at(&mut self, node: NodeIndex, estimate: Utility) {
        self.graph[node].estimate = estimate;
    }
    /// The annotated heuristic estimate at a state.
    pub fn estimate(&self, state: &DagState) -> Utility {
        self.graph[state.index()].estimate
    }
    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    /// Successor states generated since construction or the last reset.
    pub fn visits(&self) -> usize {
        self.visits.load(Ordering::Relaxed)
    }
    /// Zeroes the visit counter, returning its previous value.
    pub fn reset(&self) -> usize {
        self.visits.swap(0, Ordering::Relaxed)
    }
    /// Plies on the longest path from the root.
    pub fn depth(&self) -> Ply {
        self.depth_from(self.root, &mut HashMap::new())
    }

    /// Memoized per node, since shared children are reachable along many paths.
    fn depth_from(&self, node: NodeIndex, memo: &mut HashMap<NodeIndex, Ply>) -> Ply {
        if let Some(&depth) = memo.get(&node) {
            return depth;
        }
        let depth = self
            .graph
            .neighbors(node)
            .map(|child| self.depth_from(child, memo) + 1)
            .max()
            .unwrap_or(0);
        memo.insert(node, depth);
        depth
    }
    /// State at `index`; `mover` is kept as the seat of terminal nodes.
    fn state(&self, index: NodeIndex, mover: Seat) -> DagState {
        match self.graph[index].kind {
            Kind::Decision(seat) => DagState::new(index, seat),
            Kind::Terminal(_) => DagState::new(index, mover),
        }
    }
    /// Outgoing edges of `node` in action order.
    fn outgoing(&self, node: NodeIndex) -> Vec<(DagAction, NodeIndex)> {
        use petgraph::visit::EdgeRef;
        let mut edges = self
            .graph
            .edges(node)
            .map(|e| (*e.weight(), e.target()))
            .collect::<Vec<_>>();
        edges.sort();
        edges
    }
    /// Draws the subtree under `x` with box-drawing branches.
    fn show(
        &self,
        f: &mut std::fmt::Formatter,
        x: NodeIndex,
        prefix: &str,
    ) -> std::fmt::Result {
        let children = self.outgoing(x);
        let n = children.len();
        for (i, (action, child)) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            match self.graph[child].kind {
                Kind::Decision(seat) => writeln!(f, "{}{}──{} {}", prefix, stem, action, seat)?,
                Kind::Terminal(ref payoff) => writeln!(f, "{}{}──{} {}", prefix, stem, action, payoff)?,
            }
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl Problem for DagGame {
    type P = Seat;
    type A = DagAction;
    type S = DagState;
    fn start(&self) -> Self::S {
        self.state(self.root, Seat::default())
    }
    fn is_terminal(&self, state: &Self::S) -> bool {
        matches!(self.graph[state.index()].kind, Kind::Terminal(_))
    }
    fn actions(&self, state: &Self::S) -> Vec<Self::A> {
        self.outgoing(state.index())
            .into_iter()
            .map(|(action, _)| action)
            .collect()
    }
    fn transition(&self, state: &Self::S, action: &Self::A) -> Self::S {
        self.visits.fetch_add(1, Ordering::Relaxed);
        let target = self
            .outgoing(state.index())
            .into_iter()
            .find(|(edge, _)| edge == action)
            .map(|(_, target)| target)
            .expect("action available at state");
        self.state(target, state.player_to_move())
    }
    /// Empty at decision nodes, so a search that asks fails with a missing payoff.
    fn evaluate(&self, state: &Self::S) -> Payoff<Self::P> {
        match self.graph[state.index()].kind {
            Kind::Terminal(ref payoff) => payoff.clone(),
            Kind::Decision(_) => Payoff::default(),
        }
    }
}

impl std::fmt::Display for DagGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.graph[self.root].kind {
            Kind::Decision(seat) => writeln!(f, "ROOT {}", seat)?,
            Kind::Terminal(ref payoff) => writeln!(f, "ROOT {}", payoff)?,
        }
        self.show(f, self.root, "")
    }
}
