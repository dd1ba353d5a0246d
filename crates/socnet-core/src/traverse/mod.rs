//! Traversal engine: breadth-first and depth-first walks over the graph.
//!
//! All traversals are stateless with respect to the graph — each allocates
//! its own visited set and frontier, takes `&SocialGraph`, and never
//! mutates it. Visited-set gating is what makes self-loops and duplicate
//! edges safe: a node is expanded at most once regardless of how many edges
//! reach it.

pub mod components;
pub mod separation;
pub mod suggest;

pub use components::Component;
pub use separation::Separation;
pub use suggest::Suggestion;
