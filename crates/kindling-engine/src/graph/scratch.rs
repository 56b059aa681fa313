//! Scoped acquisition of the scratch infection flags.

use std::ops::{Deref, DerefMut};

use kindling_core::errors::GraphError;
use kindling_core::UserId;
use petgraph::graph::NodeIndex;

use super::GraphSnapshot;

/// Marks a candidate seed set as `infected_test` for as long as it lives.
///
/// The flags are cleared in `Drop`, so every exit path of an estimate
/// (including `?` returns) leaves the graph with no scratch infection.
pub struct ScratchGuard<'g> {
    graph: &'g mut GraphSnapshot,
    marked: Vec<NodeIndex>,
}

impl<'g> ScratchGuard<'g> {
    /// Mark every id in `seeds`. Fails before marking anything if an id is unknown.
    pub fn acquire(graph: &'g mut GraphSnapshot, seeds: &[UserId]) -> Result<Self, GraphError> {
        let marked = seeds
            .iter()
            .map(|&s| graph.index_of(s))
            .collect::<Result<Vec<_>, _>>()?;
        for &idx in &marked {
            graph.graph[idx].infected_test = true;
        }
        Ok(Self { graph, marked })
    }
}

impl Deref for ScratchGuard<'_> {
    type Target = GraphSnapshot;

    fn deref(&self) -> &GraphSnapshot {
        self.graph
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut GraphSnapshot {
        self.graph
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        for &idx in &self.marked {
            self.graph.graph[idx].infected_test = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> GraphSnapshot {
        GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn flags_are_set_while_held_and_cleared_on_drop() {
        let mut graph = path_graph();
        {
            let guard = ScratchGuard::acquire(&mut graph, &[1, 3]).unwrap();
            assert!(guard.node(1).unwrap().infected_test);
            assert!(!guard.node(2).unwrap().infected_test);
            assert!(guard.node(3).unwrap().infected_test);
        }
        assert!(graph.node_ids().all(|id| !graph.node(id).unwrap().infected_test));
    }

    #[test]
    fn unknown_seed_marks_nothing() {
        let mut graph = path_graph();
        let err = ScratchGuard::acquire(&mut graph, &[1, 99]).err().unwrap();
        assert!(matches!(err, GraphError::UnknownNode { node: 99 }));
        assert!(!graph.node(1).unwrap().infected_test);
    }
}
