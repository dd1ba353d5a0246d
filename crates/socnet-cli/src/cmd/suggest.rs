//! `sn suggest` — ranked friend suggestions for one user.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::{query, Suggestion};

use crate::dataset;
use crate::output::{pretty_section, render, OutputMode};

/// Arguments for `sn suggest`.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// User to compute suggestions for.
    pub user: String,

    /// Path to the friendship dataset.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// Report payload for `sn suggest`.
#[derive(Debug, Serialize)]
pub struct SuggestReport {
    pub user: String,
    pub suggestions: Vec<Suggestion>,
}

/// Execute `sn suggest`.
pub fn run_suggest(args: &SuggestArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = dataset::load(&args.data)?;
    let suggestions = query::suggest_friends(&graph, &args.user);
    let report = SuggestReport {
        user: args.user.clone(),
        suggestions,
    };
    render(output, &report, render_text, render_pretty)
}

fn render_text(report: &SuggestReport, w: &mut dyn Write) -> std::io::Result<()> {
    for s in &report.suggestions {
        writeln!(w, "{}\t{}", s.user, s.score)?;
    }
    Ok(())
}

fn render_pretty(report: &SuggestReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Friend suggestions for {}", report.user))?;
    if report.suggestions.is_empty() {
        writeln!(w, "(none)")?;
        return Ok(());
    }
    for s in &report.suggestions {
        writeln!(w, "{}  ({} distant mutuals)", s.user, s.score)?;
    }
    Ok(())
}
