#![forbid(unsafe_code)]
//! socnet-core library.
//!
//! An in-memory social-graph engine. The graph is built once from declared
//! friendship links and is read-only afterwards; all analysis operations are
//! pure functions over a shared reference, so concurrent queries need no
//! coordination.
//!
//! # Conventions
//!
//! - **Errors**: graph queries are infallible by design. Unknown users,
//!   disconnected pairs, and empty networks are values, not errors.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod graph;
pub mod limits;
pub mod metrics;
pub mod query;
pub mod rank;
pub mod traverse;

pub use graph::SocialGraph;
pub use metrics::influence::Influencer;
pub use metrics::stats::{AverageDegree, NetworkStats};
pub use traverse::components::Component;
pub use traverse::separation::Separation;
pub use traverse::suggest::Suggestion;
