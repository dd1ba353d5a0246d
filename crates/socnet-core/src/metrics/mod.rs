//! Degree-based metrics: influence ranking and network statistics.
//!
//! "Influence" here is raw out-degree — the literal count of a user's
//! declared friend entries, duplicates included. A deliberately simple
//! centrality proxy.

pub mod influence;
pub mod stats;

pub use influence::Influencer;
pub use stats::{AverageDegree, NetworkStats};
