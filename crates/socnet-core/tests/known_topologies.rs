//! Known-topology regression tests for the query façade.
//!
//! Each test uses a hand-crafted graph with analytically known results, so
//! any algorithm change that shifts behavior is caught here.

use socnet_core::query::{
    connected_components, degree_of_separation, most_influential, network_stats, suggest_friends,
};
use socnet_core::{AverageDegree, Separation, SocialGraph};

fn diamond() -> SocialGraph {
    // A ↔ B, A ← C (and A → C), B ↔ D, declared as directed pairs:
    SocialGraph::from_edges([
        ("A", "B"),
        ("A", "C"),
        ("B", "A"),
        ("B", "D"),
        ("C", "A"),
        ("D", "B"),
    ])
}

#[test]
fn diamond_separation_a_to_d_is_two() {
    let g = diamond();
    assert_eq!(degree_of_separation(&g, "A", "D"), Separation::Hops(2));
    // Symmetric input, symmetric answer.
    assert_eq!(degree_of_separation(&g, "D", "A"), Separation::Hops(2));
}

#[test]
fn diamond_suggestions_for_a() {
    let g = diamond();
    let suggestions = suggest_friends(&g, "A");
    // D is reachable only through B; B and C are direct friends; A is self.
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].user, "D");
    assert_eq!(suggestions[0].score, 1);
}

#[test]
fn diamond_is_one_component() {
    let g = diamond();
    let comps = connected_components(&g);
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].members, vec!["A", "B", "C", "D"]);
}

#[test]
fn diamond_influence_top_degree_is_two() {
    let g = diamond();
    let ranked = most_influential(&g);
    assert_eq!(ranked[0].degree, 2);
    // A and B both have degree 2; lexicographic tie-break puts A first.
    assert_eq!(ranked[0].user, "A");
    assert_eq!(ranked[1].user, "B");
}

#[test]
fn diamond_stats() {
    let g = diamond();
    let stats = network_stats(&g);
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.total_edges, 6);
    assert_eq!(stats.average_degree, AverageDegree::PerUser(1.5));
    assert_eq!(stats.top_by_degree.len(), 4);
}

#[test]
fn isolated_record_user() {
    let mut g = diamond();
    g.add_user("E");

    assert!(suggest_friends(&g, "E").is_empty());

    let comps = connected_components(&g);
    assert!(comps.iter().any(|c| c.members == vec!["E"]));

    assert_eq!(degree_of_separation(&g, "A", "E"), Separation::Disconnected);
    assert_eq!(degree_of_separation(&g, "E", "E"), Separation::Hops(0));
}

#[test]
fn unknown_users_yield_trivial_results() {
    let g = diamond();
    assert!(suggest_friends(&g, "nobody").is_empty());
    assert_eq!(
        degree_of_separation(&g, "nobody", "A"),
        Separation::Disconnected
    );
}

#[test]
fn empty_graph_is_fully_degenerate_but_calm() {
    let g = SocialGraph::new();
    assert!(suggest_friends(&g, "anyone").is_empty());
    assert_eq!(degree_of_separation(&g, "x", "y"), Separation::Disconnected);
    assert!(connected_components(&g).is_empty());
    assert!(most_influential(&g).is_empty());
    assert_eq!(network_stats(&g).average_degree, AverageDegree::EmptyNetwork);
}

#[test]
fn four_hop_candidates_are_invisible_to_suggestions() {
    // hub — a — b — c — d: c is at hop 3 (scored), d at hop 4 (not).
    let g = SocialGraph::from_edges([
        ("hub", "a"),
        ("a", "hub"),
        ("a", "b"),
        ("b", "a"),
        ("b", "c"),
        ("c", "b"),
        ("c", "d"),
        ("d", "c"),
    ]);
    let users: Vec<&str> = g.users().collect();
    assert_eq!(users.len(), 5);

    let suggestions = suggest_friends(&g, "hub");
    let suggested: Vec<&str> = suggestions.iter().map(|s| s.user.as_str()).collect();
    assert_eq!(suggested, vec!["b", "c"]);
}
