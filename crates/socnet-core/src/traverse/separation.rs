//! Unbounded breadth-first shortest path: degree of separation.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, VecDeque};
use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::graph::SocialGraph;

/// Result of a degree-of-separation query.
///
/// Disconnection is a defined outcome, not an error. The original tool
/// signalled it with `-1`; here it is its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Separation {
    /// Shortest outgoing-edge path length between the two users.
    Hops(usize),
    /// No path exists, or one of the users is unknown.
    Disconnected,
}

impl Separation {
    /// Returns `true` if a path was found.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Hops(_))
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops(n) => write!(f, "{n}"),
            Self::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Shortest hop count from `a` to `b` following outgoing edges.
///
/// Standard single-source BFS with a per-node depth map; returns the moment
/// `b` is first discovered. A known user is zero hops from itself. Either
/// endpoint being unknown reports [`Separation::Disconnected`].
#[must_use]
pub fn degree_of_separation(graph: &SocialGraph, a: &str, b: &str) -> Separation {
    let (Some(start), Some(target)) = (graph.node_index(a), graph.node_index(b)) else {
        return Separation::Disconnected;
    };
    if start == target {
        return Separation::Hops(0);
    }

    let mut depth: HashMap<NodeIndex, usize> = HashMap::new();
    depth.insert(start, 0);
    let mut frontier: VecDeque<NodeIndex> = VecDeque::new();
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let next_depth = depth[&current] + 1;
        for next in graph.neighbor_indices(current) {
            if depth.contains_key(&next) {
                continue;
            }
            if next == target {
                return Separation::Hops(next_depth);
            }
            depth.insert(next, next_depth);
            frontier.push_back(next);
        }
    }

    Separation::Disconnected
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
