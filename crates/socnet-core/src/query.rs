//! Query façade: the five public analysis operations.
//!
//! Each operation is a pure function of the current graph; none mutate it.
//! Unknown user identifiers are accepted silently and produce empty or
//! disconnected results, per the lenient-lookup policy of
//! [`SocialGraph`](crate::graph::SocialGraph).

use tracing::debug;

use crate::graph::SocialGraph;
use crate::limits::{MAX_COMPONENTS, MAX_INFLUENCERS, MAX_SUGGESTIONS};
use crate::metrics::influence::{self, Influencer};
use crate::metrics::stats::{self, NetworkStats};
use crate::rank::rank_descending;
use crate::traverse::components::{self, Component};
use crate::traverse::separation::{self, Separation};
use crate::traverse::suggest::{self, Suggestion};

/// Ranked friend suggestions for `user`: non-direct candidates within the
/// hop cap, best score first, at most
/// [`MAX_SUGGESTIONS`](crate::limits::MAX_SUGGESTIONS) entries.
#[must_use]
pub fn suggest_friends(graph: &SocialGraph, user: &str) -> Vec<Suggestion> {
    let scores = suggest::discovery_scores(graph, user);
    debug!(user, candidates = scores.len(), "suggestion scan complete");
    rank_descending(scores, MAX_SUGGESTIONS)
        .into_iter()
        .map(|(user, score)| Suggestion { user, score })
        .collect()
}

/// Shortest outgoing-edge path length between two users, or
/// [`Separation::Disconnected`].
#[must_use]
pub fn degree_of_separation(graph: &SocialGraph, a: &str, b: &str) -> Separation {
    separation::degree_of_separation(graph, a, b)
}

/// The largest connected components, descending by size, at most
/// [`MAX_COMPONENTS`](crate::limits::MAX_COMPONENTS) entries.
///
/// Size ties break on the lexicographically smallest member.
#[must_use]
pub fn connected_components(graph: &SocialGraph) -> Vec<Component> {
    let mut components = components::connected_components(graph);
    components.sort_unstable_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.members.cmp(&b.members))
    });
    components.truncate(MAX_COMPONENTS);
    components
}

/// Top users by raw out-degree, at most
/// [`MAX_INFLUENCERS`](crate::limits::MAX_INFLUENCERS) entries.
#[must_use]
pub fn most_influential(graph: &SocialGraph) -> Vec<Influencer> {
    influence::most_influential(graph, MAX_INFLUENCERS)
}

/// Aggregate statistics over the whole network.
#[must_use]
pub fn network_stats(graph: &SocialGraph) -> NetworkStats {
    stats::network_stats(graph)
}
