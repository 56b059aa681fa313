//! Snapshot construction from a collaborator-supplied edge list.

use std::collections::BTreeSet;

use kindling_core::errors::GraphError;
use kindling_core::UserId;

use super::GraphSnapshot;

impl GraphSnapshot {
    /// Build a snapshot from undirected `(user, friend)` pairs.
    ///
    /// The node set is every endpoint. Repeated pairs, in either
    /// orientation, collapse to one edge. A self-loop rejects the whole list.
    pub fn from_edges(edges: &[(UserId, UserId)]) -> Result<Self, GraphError> {
        if let Some(&(node, _)) = edges.iter().find(|(a, b)| a == b) {
            return Err(GraphError::SelfLoop { node });
        }

        let members: BTreeSet<UserId> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        let mut snapshot = Self::new();
        for id in members {
            snapshot.add_node(id);
        }
        for &(a, b) in edges {
            snapshot.add_edge(a, b)?;
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_and_reversed_pairs_collapse() {
        let graph = GraphSnapshot::from_edges(&[(1, 2), (2, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn self_loop_is_rejected() {
        let err = GraphSnapshot::from_edges(&[(1, 2), (4, 4)]).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop { node: 4 }));
    }

    #[test]
    fn empty_list_gives_empty_graph() {
        let graph = GraphSnapshot::from_edges(&[]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.max_degree(), 0);
    }
}
