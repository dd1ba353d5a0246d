//! `sn separation` — degree of separation between two users.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::{query, Separation};

use crate::dataset;
use crate::output::{pretty_kv, pretty_section, render, OutputMode};

/// Arguments for `sn separation`.
#[derive(Args, Debug)]
pub struct SeparationArgs {
    /// First user.
    pub user_a: String,

    /// Second user.
    pub user_b: String,

    /// Path to the friendship dataset.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// Report payload for `sn separation`.
#[derive(Debug, Serialize)]
pub struct SeparationReport {
    pub user_a: String,
    pub user_b: String,
    pub separation: Separation,
}

/// Execute `sn separation`.
pub fn run_separation(args: &SeparationArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = dataset::load(&args.data)?;
    let separation = query::degree_of_separation(&graph, &args.user_a, &args.user_b);
    let report = SeparationReport {
        user_a: args.user_a.clone(),
        user_b: args.user_b.clone(),
        separation,
    };
    render(output, &report, render_text, render_pretty)
}

fn render_text(report: &SeparationReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", report.separation)
}

fn render_pretty(report: &SeparationReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(
        w,
        &format!("Separation: {} ↔ {}", report.user_a, report.user_b),
    )?;
    match report.separation {
        Separation::Hops(n) => pretty_kv(w, "Degrees", n.to_string()),
        Separation::Disconnected => pretty_kv(w, "Degrees", "not connected"),
    }
}
