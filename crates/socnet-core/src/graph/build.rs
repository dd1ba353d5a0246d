//! Graph construction from declared friendship links.
//!
//! # Overview
//!
//! [`SocialGraph`] wraps a [`petgraph`] directed graph plus an identifier
//! map. It is mutated only while a dataset is being loaded; every analysis
//! pass afterwards takes `&SocialGraph`.
//!
//! ## Lenient Lookup
//!
//! Lookups never fail: an unknown user behaves exactly like a user with no
//! friends. The traversal code therefore never has to branch on "user
//! exists" versus "user has no edges".

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, instrument};

/// A directed social graph.
///
/// Nodes are user identifiers (opaque, case-sensitive strings). An edge
/// `A → B` means "A lists B as a friend". Self-loops and parallel edges are
/// valid input and are stored as-is; multiplicity contributes to out-degree.
#[derive(Debug, Default)]
pub struct SocialGraph {
    /// Directed graph: nodes = user IDs, edges = declared friendships.
    graph: DiGraph<String, ()>,
    /// Mapping from user ID to petgraph `NodeIndex`.
    node_map: HashMap<String, NodeIndex>,
}

impl SocialGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of `(source, target)` edge pairs.
    ///
    /// Both endpoints of every edge become nodes. Duplicate pairs produce
    /// parallel edges.
    #[instrument(skip(edges))]
    #[must_use]
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (source, target) in edges {
            store.add_edge(source.as_ref(), target.as_ref());
        }
        debug!(
            users = store.user_count(),
            edges = store.edge_count(),
            "social graph built"
        );
        store
    }

    /// Ensure `user` has a node, creating an edgeless one if needed.
    ///
    /// Returns the node's index. Called by the loader for every record
    /// source, so an isolated user still shows up in components and stats.
    pub fn add_user(&mut self, user: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(user) {
            return idx;
        }
        let idx = self.graph.add_node(user.to_owned());
        self.node_map.insert(user.to_owned(), idx);
        idx
    }

    /// Append a directed edge `source → target`.
    ///
    /// Missing endpoints are created. The edge is added unconditionally, so
    /// repeated calls with the same pair accumulate multiplicity.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let s = self.add_user(source);
        let t = self.add_user(target);
        self.graph.add_edge(s, t, ());
    }

    /// Returns `true` if `user` has a node in the graph.
    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.node_map.contains_key(user)
    }

    /// Number of users (nodes).
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a user ID.
    #[must_use]
    pub fn node_index(&self, user: &str) -> Option<NodeIndex> {
        self.node_map.get(user).copied()
    }

    /// Return the user ID label for a node.
    #[must_use]
    pub fn user_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Iterate all user IDs in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterate all node indices.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Iterate the out-neighbors of a node in edge-declaration order, one
    /// entry per stored edge.
    ///
    /// petgraph walks adjacency newest-edge-first, so the list is collected
    /// and reversed to restore the order the friends were declared in.
    pub fn neighbor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut out: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        out.reverse();
        out.into_iter()
    }

    /// Iterate a user's declared friends by ID, in declaration order.
    ///
    /// Unknown users yield an empty iterator; duplicates yield one entry per
    /// stored edge.
    pub fn neighbors<'a>(&'a self, user: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.node_index(user)
            .into_iter()
            .flat_map(|idx| self.neighbor_indices(idx))
            .filter_map(|n| self.user_id(n))
    }

    /// A user's raw out-degree: the literal count of stored outgoing edges,
    /// duplicates and self-loops included. Zero for unknown users.
    #[must_use]
    pub fn out_degree(&self, user: &str) -> usize {
        self.node_index(user).map_or(0, |idx| self.out_degree_of(idx))
    }

    /// Out-degree by node index.
    #[must_use]
    pub fn out_degree_of(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
