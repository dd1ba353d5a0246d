//! Bounded multi-hop discovery scan behind friend suggestions.
//!
//! # Overview
//!
//! A breadth-first walk from the query user, capped at
//! [`SUGGESTION_DEPTH`](crate::limits::SUGGESTION_DEPTH) hops. Each user is
//! scored once, at the moment it is first discovered, provided it is neither
//! the query user nor one of their direct (1-hop) friends. Nodes at the
//! depth cap are still discovered and scored but not expanded further.
//!
//! Scoring on first discovery only (rather than counting every path) keeps
//! the scan at O(V+E) instead of enumerating paths; the score is bounded by
//! the branching factor, an accepted approximation of mutual-connection
//! strength.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::graph::SocialGraph;
use crate::limits::SUGGESTION_DEPTH;

/// One ranked friend suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggested user.
    pub user: String,
    /// Number of distinct branches that first introduced this candidate
    /// within the depth cap.
    pub score: usize,
}

/// Run the bounded scan and return raw `(user, score)` pairs, unranked.
///
/// Candidates exclude `start` itself and every direct friend of `start`.
/// Unknown `start` users yield an empty result.
#[must_use]
pub fn discovery_scores(graph: &SocialGraph, start: &str) -> Vec<(String, usize)> {
    let Some(start_idx) = graph.node_index(start) else {
        return Vec::new();
    };

    // Direct friends and the start user are never candidates.
    let mut excluded: HashSet<NodeIndex> = graph.neighbor_indices(start_idx).collect();
    excluded.insert(start_idx);

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    visited.insert(start_idx);

    let mut scores: HashMap<NodeIndex, usize> = HashMap::new();
    let mut frontier: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    frontier.push_back((start_idx, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        if depth >= SUGGESTION_DEPTH {
            // Discovered but not expanded.
            continue;
        }
        for next in graph.neighbor_indices(current) {
            if visited.insert(next) {
                if !excluded.contains(&next) {
                    *scores.entry(next).or_insert(0) += 1;
                }
                frontier.push_back((next, depth + 1));
            }
        }
    }

    scores
        .into_iter()
        .filter_map(|(idx, score)| graph.user_id(idx).map(|u| (u.to_owned(), score)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
