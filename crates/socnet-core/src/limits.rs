//! Named result caps and traversal bounds.
//!
//! The original tool buried these as literals at each call site; they are
//! named here so behavior is explicit and testable.

/// Hop cap for the friend-suggestion scan. Users at this depth are still
/// discovered and scored but are not expanded further.
pub const SUGGESTION_DEPTH: usize = 3;

/// Maximum number of friend suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum number of connected components reported.
pub const MAX_COMPONENTS: usize = 5;

/// Maximum number of users in the influence ranking.
pub const MAX_INFLUENCERS: usize = 5;

/// Number of top-degree users included in the network statistics summary.
pub const STATS_TOP_USERS: usize = 10;
