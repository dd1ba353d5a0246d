//! Influence ranking by raw out-degree.

#![allow(clippy::module_name_repetitions)]

use serde::Serialize;

use crate::graph::SocialGraph;
use crate::rank::rank_descending;

/// A user and their raw out-degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influencer {
    /// User ID.
    pub user: String,
    /// Literal count of the user's outgoing friend entries, duplicates and
    /// self-loops included.
    pub degree: usize,
}

/// Rank every user by out-degree, descending, truncated to `cap`.
///
/// Ties break lexicographically on the user identifier. Edgeless users are
/// included with degree zero.
#[must_use]
pub fn most_influential(graph: &SocialGraph, cap: usize) -> Vec<Influencer> {
    let degrees: Vec<(String, usize)> = graph
        .node_indices()
        .filter_map(|idx| {
            graph
                .user_id(idx)
                .map(|user| (user.to_owned(), graph.out_degree_of(idx)))
        })
        .collect();

    rank_descending(degrees, cap)
        .into_iter()
        .map(|(user, degree)| Influencer { user, degree })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_out_degree_descending() {
        let g = SocialGraph::from_edges([
            ("hub", "a"),
            ("hub", "b"),
            ("hub", "c"),
            ("a", "hub"),
        ]);
        let ranked = most_influential(&g, 5);
        assert_eq!(ranked[0].user, "hub");
        assert_eq!(ranked[0].degree, 3);
        assert_eq!(ranked[1], Influencer { user: "a".into(), degree: 1 });
    }

    #[test]
    fn duplicates_count_toward_degree() {
        let g = SocialGraph::from_edges([("a", "b"), ("a", "b"), ("b", "a")]);
        let ranked = most_influential(&g, 5);
        assert_eq!(ranked[0], Influencer { user: "a".into(), degree: 2 });
    }

    #[test]
    fn cap_truncates() {
        let g = SocialGraph::from_edges([("a", "b"), ("c", "d"), ("e", "f")]);
        assert_eq!(most_influential(&g, 2).len(), 2);
    }

    #[test]
    fn target_only_users_have_degree_zero() {
        let g = SocialGraph::from_edges([("a", "b")]);
        let ranked = most_influential(&g, 5);
        assert_eq!(ranked.last().map(|i| i.degree), Some(0));
    }

    #[test]
    fn empty_graph_ranks_nobody() {
        assert!(most_influential(&SocialGraph::new(), 5).is_empty());
    }
}
