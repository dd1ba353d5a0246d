//! Social graph construction and storage.
//!
//! # Overview
//!
//! This module owns the adjacency representation every query operates on: a
//! petgraph directed graph whose nodes are user identifiers and whose edges
//! are declared friendship links.
//!
//! ## Pipeline
//!
//! ```text
//! dataset records (user, friend)…
//!        ↓  build::SocialGraph::from_edges() / add_edge()
//! SocialGraph (DiGraph, duplicates and self-loops retained)
//!        ↓  traverse::* / metrics::*  (read-only)
//! query results (suggestions, separation, components, influence, stats)
//! ```
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A lists B as a friend". Nothing here assumes the
//! reverse edge exists; typical datasets declare both directions themselves.
//!
//! ## Duplicate Edges
//!
//! Parallel edges are deliberately kept. A user who lists the same friend
//! twice has out-degree 2 for that relation, and degree-based rankings count
//! the multiplicity.

pub mod build;

pub use build::SocialGraph;
