//! `sn components` — largest connected components.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use socnet_core::{query, Component};

use crate::dataset;
use crate::output::{pretty_section, render, OutputMode};

/// Arguments for `sn components`.
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Path to the friendship dataset.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,
}

/// Report payload for `sn components`.
#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub components: Vec<Component>,
}

/// Execute `sn components`.
pub fn run_components(args: &ComponentsArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = dataset::load(&args.data)?;
    let report = ComponentsReport {
        components: query::connected_components(&graph),
    };
    render(output, &report, render_text, render_pretty)
}

fn render_text(report: &ComponentsReport, w: &mut dyn Write) -> std::io::Result<()> {
    for c in &report.components {
        writeln!(w, "{}\t{}", c.len(), c.members.join(";"))?;
    }
    Ok(())
}

fn render_pretty(report: &ComponentsReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Largest connected components")?;
    if report.components.is_empty() {
        writeln!(w, "(empty network)")?;
        return Ok(());
    }
    for (i, c) in report.components.iter().enumerate() {
        writeln!(
            w,
            "Component {} ({} users): {}",
            i + 1,
            c.len(),
            c.members.join(" ")
        )?;
    }
    Ok(())
}
