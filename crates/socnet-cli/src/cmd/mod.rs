//! Command handlers, one module per subcommand.

pub mod completions;
pub mod components;
pub mod influence;
pub mod separation;
pub mod stats;
pub mod suggest;
