//! petgraph::UnGraph wrapper with UserNode weights and an ordered id index.

use std::collections::{BTreeMap, BTreeSet};

use kindling_core::errors::GraphError;
use kindling_core::UserId;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A user in the friendship graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNode {
    pub user_id: UserId,
    /// Has adopted the promoted item during the live cascade.
    pub infected_live: bool,
    /// Scratch flag used only while the influence cone is being estimated.
    /// False outside every estimator call.
    pub infected_test: bool,
    pub buying_probability_live: f64,
    /// Scratch probability written by the influence cone estimator.
    pub buying_probability_test: f64,
    /// Historical play count for the currently promoted item.
    pub engagement: u64,
}

impl UserNode {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            infected_live: false,
            infected_test: false,
            buying_probability_live: 0.0,
            buying_probability_test: 0.0,
            engagement: 0,
        }
    }

    fn reset(&mut self) {
        self.infected_live = false;
        self.infected_test = false;
        self.buying_probability_live = 0.0;
        self.buying_probability_test = 0.0;
    }
}

/// The underlying undirected graph type.
pub type FriendshipGraph = UnGraph<UserNode, ()>;

/// Mutable undirected friendship graph.
///
/// Edges are symmetric and only ever added. Node enumeration is always in
/// ascending user id, which the greedy tie-break and every RNG draw order
/// depend on. `Clone` is a deep copy, which is what independent runs need.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub(crate) graph: FriendshipGraph,
    node_index: BTreeMap<UserId, NodeIndex>,
}

impl GraphSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_index: BTreeMap::new(),
        }
    }

    /// Get or create the node for `user_id`.
    pub fn add_node(&mut self, user_id: UserId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&user_id) {
            return idx;
        }
        let idx = self.graph.add_node(UserNode::new(user_id));
        self.node_index.insert(user_id, idx);
        idx
    }

    /// Add the undirected edge `{i, j}`.
    ///
    /// Returns `Ok(false)` when the edge already exists. Both endpoints must
    /// already be nodes of the graph.
    pub fn add_edge(&mut self, i: UserId, j: UserId) -> Result<bool, GraphError> {
        if i == j {
            return Err(GraphError::SelfLoop { node: i });
        }
        let a = self.index_of(i)?;
        let b = self.index_of(j)?;
        if self.graph.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(a, b, ());
        Ok(true)
    }

    pub fn has_edge(&self, i: UserId, j: UserId) -> bool {
        match (self.node_index.get(&i), self.node_index.get(&j)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Number of friends of `user_id`. Zero is a valid answer.
    pub fn degree(&self, user_id: UserId) -> Result<usize, GraphError> {
        let idx = self.index_of(user_id)?;
        Ok(self.graph.neighbors(idx).count())
    }

    /// Degree in this snapshot, or 0 if the user is not part of it.
    pub fn degree_or_zero(&self, user_id: UserId) -> usize {
        self.node_index
            .get(&user_id)
            .map_or(0, |&idx| self.graph.neighbors(idx).count())
    }

    /// The friends of `user_id`, in ascending id order.
    pub fn neighbors(&self, user_id: UserId) -> Result<BTreeSet<UserId>, GraphError> {
        let idx = self.index_of(user_id)?;
        Ok(self.neighbor_ids(idx))
    }

    /// Friends of `user_id` in this snapshot; empty if the user is not part of it.
    pub fn neighbors_or_empty(&self, user_id: UserId) -> BTreeSet<UserId> {
        self.node_index
            .get(&user_id)
            .map(|&idx| self.neighbor_ids(idx))
            .unwrap_or_default()
    }

    /// Number of users adjacent to both `u` and `v`. Unknown users have none.
    pub fn common_neighbor_count(&self, u: UserId, v: UserId) -> usize {
        let (Some(&a), Some(&b)) = (self.node_index.get(&u), self.node_index.get(&v)) else {
            return 0;
        };
        let left: BTreeSet<NodeIndex> = self.graph.neighbors(a).collect();
        self.graph
            .neighbors(b)
            .filter(|n| left.contains(n))
            .count()
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.node_index.contains_key(&user_id)
    }

    /// All user ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.node_index.keys().copied()
    }

    /// All edges as `(i, j)` with `i < j`, sorted.
    pub fn edges(&self) -> Vec<(UserId, UserId)> {
        let mut edges: Vec<(UserId, UserId)> = self
            .graph
            .edge_references()
            .map(|e| {
                let a = self.graph[e.source()].user_id;
                let b = self.graph[e.target()].user_id;
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn max_degree(&self) -> usize {
        self.graph
            .node_indices()
            .map(|idx| self.graph.neighbors(idx).count())
            .max()
            .unwrap_or(0)
    }

    pub fn node(&self, user_id: UserId) -> Option<&UserNode> {
        self.node_index.get(&user_id).map(|&idx| &self.graph[idx])
    }

    pub fn node_mut(&mut self, user_id: UserId) -> Option<&mut UserNode> {
        let idx = *self.node_index.get(&user_id)?;
        Some(&mut self.graph[idx])
    }

    /// Users currently marked as adopters in the live cascade.
    pub fn infected_count(&self) -> usize {
        self.graph
            .node_weights()
            .filter(|n| n.infected_live)
            .count()
    }

    /// Restore live and scratch attributes to their defaults before an
    /// independent run. Engagement and edges are left untouched.
    pub fn reset_attributes(&mut self) {
        for node in self.graph.node_weights_mut() {
            node.reset();
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, user_id: UserId) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(&user_id)
            .copied()
            .ok_or(GraphError::UnknownNode { node: user_id })
    }

    fn neighbor_ids(&self, idx: NodeIndex) -> BTreeSet<UserId> {
        self.graph
            .neighbors(idx)
            .map(|n| self.graph[n].user_id)
            .collect()
    }
}

impl Default for GraphSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
