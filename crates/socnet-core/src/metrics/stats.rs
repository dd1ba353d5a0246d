//! Aggregate network statistics.

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use serde::Serialize;

use crate::graph::SocialGraph;
use crate::limits::STATS_TOP_USERS;
use crate::metrics::influence::{most_influential, Influencer};

/// Average out-degree across the network.
///
/// An empty network has no meaningful average; that state is reported
/// explicitly rather than as a NaN from dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageDegree {
    /// Sum of all out-degrees divided by the user count.
    PerUser(f64),
    /// The store holds no users.
    EmptyNetwork,
}

impl fmt::Display for AverageDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerUser(avg) => write!(f, "{avg:.2}"),
            Self::EmptyNetwork => write!(f, "empty network"),
        }
    }
}

/// Summary statistics for the whole graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    /// Total number of users in the store.
    pub total_users: usize,
    /// Total stored edges, duplicates included.
    pub total_edges: usize,
    /// Average out-degree, or the empty-network marker.
    pub average_degree: AverageDegree,
    /// Top users by out-degree, capped at
    /// [`STATS_TOP_USERS`](crate::limits::STATS_TOP_USERS).
    pub top_by_degree: Vec<Influencer>,
}

/// Compute summary statistics over the graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn network_stats(graph: &SocialGraph) -> NetworkStats {
    let total_users = graph.user_count();
    let total_edges = graph.edge_count();
    let average_degree = if total_users == 0 {
        AverageDegree::EmptyNetwork
    } else {
        AverageDegree::PerUser(total_edges as f64 / total_users as f64)
    };

    NetworkStats {
        total_users,
        total_edges,
        average_degree,
        top_by_degree: most_influential(graph, STATS_TOP_USERS),
    }
}
