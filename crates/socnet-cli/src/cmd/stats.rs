//! `sn stats` — aggregate network statistics.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use socnet_core::{query, NetworkStats};

use crate::dataset;
use crate::output::{pretty_kv, pretty_section, render, OutputMode};

/// Arguments for `sn stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Path to the friendship dataset.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// Execute `sn stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = dataset::load(&args.data)?;
    let stats = query::network_stats(&graph);
    render(output, &stats, render_text, render_pretty)
}

fn render_text(stats: &NetworkStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "users\t{}", stats.total_users)?;
    writeln!(w, "edges\t{}", stats.total_edges)?;
    writeln!(w, "avg_degree\t{}", stats.average_degree)?;
    for i in &stats.top_by_degree {
        writeln!(w, "{}\t{}", i.user, i.degree)?;
    }
    Ok(())
}

fn render_pretty(stats: &NetworkStats, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Network statistics")?;
    pretty_kv(w, "Total users", stats.total_users.to_string())?;
    pretty_kv(w, "Total edges", stats.total_edges.to_string())?;
    pretty_kv(w, "Avg connections", stats.average_degree.to_string())?;
    if !stats.top_by_degree.is_empty() {
        writeln!(w)?;
        writeln!(w, "Top users by connections:")?;
        for i in &stats.top_by_degree {
            writeln!(w, "  {}  ({})", i.user, i.degree)?;
        }
    }
    Ok(())
}
