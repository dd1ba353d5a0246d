//! Connected-component discovery via depth-first reachability.
//!
//! Components are maximal sets of users mutually reachable along outgoing
//! edges. The walk follows outgoing edges only; true undirected connectivity
//! therefore depends on the dataset declaring both directions, which typical
//! input does. The original recursed; this implementation uses an explicit
//! stack so pathological chain-shaped graphs cannot overflow the call stack.

use serde::Serialize;

use petgraph::graph::NodeIndex;

use crate::graph::SocialGraph;

/// One connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Member user IDs, sorted lexicographically.
    pub members: Vec<String>,
}

impl Component {
    /// Number of users in the component.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the component has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition every user in the graph into components, in discovery order.
///
/// Users are claimed greedily: iterate users in insertion order, and each
/// user not yet claimed by an earlier component seeds a depth-first walk
/// that collects everything reachable from it.
#[must_use]
pub fn connected_components(graph: &SocialGraph) -> Vec<Component> {
    let mut visited = vec![false; graph.user_count()];
    let mut components = Vec::new();

    for seed in graph.node_indices() {
        if visited[seed.index()] {
            continue;
        }

        let mut members: Vec<String> = Vec::new();
        let mut stack: Vec<NodeIndex> = vec![seed];

        while let Some(node) = stack.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;
            if let Some(user) = graph.user_id(node) {
                members.push(user.to_owned());
            }
            for next in graph.neighbor_indices(node) {
                if !visited[next.index()] {
                    stack.push(next);
                }
            }
        }

        members.sort_unstable();
        components.push(Component { members });
    }

    components
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
