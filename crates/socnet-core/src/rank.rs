//! Shared ranking: descending-score sort with deterministic tie-break.
//!
//! The original tool sorted scored pairs pulled out of an unordered map, so
//! tie order was unspecified. Here ties break lexicographically on the user
//! identifier, a documented behavior change that makes every ranking
//! reproducible.

/// Sort `(user, score)` pairs by descending score, ties by ascending user
/// identifier, then truncate to `cap` entries.
#[must_use]
pub fn rank_descending(mut entries: Vec<(String, usize)>, cap: usize) -> Vec<(String, usize)> {
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(cap);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, usize)]) -> Vec<(String, usize)> {
        raw.iter().map(|(u, s)| ((*u).to_owned(), *s)).collect()
    }

    #[test]
    fn sorts_by_descending_score() {
        let ranked = rank_descending(pairs(&[("a", 1), ("b", 3), ("c", 2)]), 5);
        assert_eq!(ranked, pairs(&[("b", 3), ("c", 2), ("a", 1)]));
    }

    #[test]
    fn ties_break_lexicographically() {
        let ranked = rank_descending(pairs(&[("zed", 2), ("amy", 2), ("bob", 2)]), 5);
        assert_eq!(ranked, pairs(&[("amy", 2), ("bob", 2), ("zed", 2)]));
    }

    #[test]
    fn truncates_to_cap() {
        let ranked = rank_descending(pairs(&[("a", 5), ("b", 4), ("c", 3), ("d", 2)]), 2);
        assert_eq!(ranked, pairs(&[("a", 5), ("b", 4)]));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank_descending(Vec::new(), 5).is_empty());
    }
}
