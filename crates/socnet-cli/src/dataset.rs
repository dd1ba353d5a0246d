//! Dataset loader: flat friendship records into a [`SocialGraph`].
//!
//! # Record format
//!
//! One record per line: a user identifier, a comma, then a `;`-separated
//! friend list:
//!
//! ```text
//! alice,bob;carol
//! bob,alice
//! dave,
//! ```
//!
//! Edges are stored exactly as declared — directed, duplicates kept. The
//! loader never symmetrizes; datasets that mean mutual friendship declare
//! both directions. A record with no friends (or no comma at all) still
//! registers its user, so isolated users show up in components and stats.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use socnet_core::SocialGraph;
use tracing::{debug, instrument, warn};

/// Load and parse a dataset file.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Oddly-shaped lines are
/// loaded leniently (and logged), never fatal.
#[instrument]
pub fn load(path: &Path) -> Result<SocialGraph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    let graph = parse(&text);
    debug!(
        users = graph.user_count(),
        edges = graph.edge_count(),
        "dataset loaded"
    );
    Ok(graph)
}

/// Parse dataset text into a graph. Infallible: malformed lines degrade to
/// whatever identifiers they do contain.
#[must_use]
pub fn parse(text: &str) -> SocialGraph {
    let mut graph = SocialGraph::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // A line without a comma is a user with no declared friends.
        let (user, friends) = line.split_once(',').unwrap_or((line, ""));
        let user = user.trim();
        if user.is_empty() {
            warn!(line = lineno + 1, "record with empty user identifier, skipped");
            continue;
        }

        graph.add_user(user);
        for token in friends.split(';') {
            let friend = token.trim();
            if friend.is_empty() {
                continue;
            }
            graph.add_edge(user, friend);
        }
    }

    graph
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn parses_friend_lists() {
        let g = parse("alice,bob;carol\nbob,alice\n");
        assert_eq!(g.user_count(), 3);
        assert_eq!(g.neighbors("alice").collect::<Vec<_>>(), vec!["bob", "carol"]);
        assert_eq!(g.neighbors("bob").collect::<Vec<_>>(), vec!["alice"]);
        assert_eq!(g.out_degree("carol"), 0);
    }

    #[test]
    fn friendless_record_still_registers_user() {
        let g = parse("dave,\n");
        assert!(g.contains("dave"));
        assert_eq!(g.out_degree("dave"), 0);

        let g = parse("erin\n");
        assert!(g.contains("erin"));
    }

    #[test]
    fn blank_lines_and_whitespace_are_tolerated() {
        let g = parse("\n  alice , bob ; carol \n\n");
        assert_eq!(g.neighbors("alice").collect::<Vec<_>>(), vec!["bob", "carol"]);
    }

    #[test]
    fn trailing_semicolons_produce_no_ghost_users() {
        let g = parse("alice,bob;;\n");
        assert_eq!(g.user_count(), 2);
        assert_eq!(g.out_degree("alice"), 1);
    }

    #[test]
    fn duplicates_and_self_loops_load_as_is() {
        let g = parse("alice,bob;bob;alice\n");
        assert_eq!(g.out_degree("alice"), 3);
    }

    #[test]
    fn empty_user_record_is_skipped() {
        let g = parse(",bob\n");
        assert_eq!(g.user_count(), 0);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "alice,bob").expect("write");
        let g = load(file.path()).expect("load");
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load(Path::new("/no/such/dataset.csv")).unwrap_err();
        assert!(err.to_string().contains("dataset.csv"));
    }
}
