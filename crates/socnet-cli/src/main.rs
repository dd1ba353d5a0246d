#![forbid(unsafe_code)]

mod cmd;
mod dataset;
mod output;

use std::env;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sn: social-graph analysis tool",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format (default: pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, env, and TTY state.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Ranked friend suggestions for a user",
        long_about = "Suggest friends from multi-hop mutual connections (3 hops, top 5).",
        after_help = "EXAMPLES:\n    # Suggestions for alice\n    sn suggest alice --data friends.csv\n\n    # Emit machine-readable output\n    sn suggest alice --data friends.csv --format json"
    )]
    Suggest(cmd::suggest::SuggestArgs),

    #[command(
        about = "Degree of separation between two users",
        long_about = "Shortest friendship-path length between two users, or 'disconnected'.",
        after_help = "EXAMPLES:\n    # How far apart are alice and dave?\n    sn separation alice dave --data friends.csv"
    )]
    Separation(cmd::separation::SeparationArgs),

    #[command(
        about = "Largest connected components",
        long_about = "Partition the network into connected components and report the 5 largest.",
        after_help = "EXAMPLES:\n    sn components --data friends.csv"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        about = "Most influential users by connection count",
        long_about = "Rank users by raw out-degree and report the top 5.",
        after_help = "EXAMPLES:\n    sn influence --data friends.csv"
    )]
    Influence(cmd::influence::InfluenceArgs),

    #[command(
        about = "Aggregate network statistics",
        long_about = "User count, average connections per user, and top 10 users by degree.",
        after_help = "EXAMPLES:\n    sn stats --data friends.csv\n    sn stats --data friends.csv --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(about = "Generate shell completion scripts")]
    Completions(cmd::completions::CompletionsArgs),
}

/// Default filter directives when `SOCNET_LOG` is unset: `-v` (or the
/// `DEBUG` env var) raises the baseline to debug.
fn default_filter_directives(verbose: bool, debug_env: bool) -> &'static str {
    if verbose || debug_env {
        "socnet=debug,info"
    } else {
        "socnet=info,warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SOCNET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(default_filter_directives(verbose, env::var("DEBUG").is_ok()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Suggest(ref args) => cmd::suggest::run_suggest(args, output),
        Commands::Separation(ref args) => cmd::separation::run_separation(args, output),
        Commands::Components(ref args) => cmd::components::run_components(args, output),
        Commands::Influence(ref args) => cmd::influence::run_influence(args, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output),
        Commands::Completions(ref args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
    }
}
