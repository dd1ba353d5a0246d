//! `sn influence` — most-connected users by raw degree.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::{query, Influencer};

use crate::dataset;
use crate::output::{pretty_section, render, OutputMode};

/// Arguments for `sn influence`.
#[derive(Args, Debug)]
pub struct InfluenceArgs {
    /// Path to the friendship dataset.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// Report payload for `sn influence`.
#[derive(Debug, Serialize)]
pub struct InfluenceReport {
    pub influencers: Vec<Influencer>,
}

/// Execute `sn influence`.
pub fn run_influence(args: &InfluenceArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = dataset::load(&args.data)?;
    let report = InfluenceReport {
        influencers: query::most_influential(&graph),
    };
    render(output, &report, render_text, render_pretty)
}

fn render_text(report: &InfluenceReport, w: &mut dyn Write) -> std::io::Result<()> {
    for i in &report.influencers {
        writeln!(w, "{}\t{}", i.user, i.degree)?;
    }
    Ok(())
}

fn render_pretty(report: &InfluenceReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Most influential users")?;
    for i in &report.influencers {
        writeln!(w, "{}  ({} connections)", i.user, i.degree)?;
    }
    Ok(())
}
