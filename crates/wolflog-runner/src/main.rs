use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wolflog_lib::OutputFormat;
use wolflog_runner::{env, resolve_log_path, run_context, run_latest, run_parse, run_summary};

/// Structured views of Werewolf game transcripts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory used to resolve transcript names [env: WOLFLOG_DIR, default: logs]
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full parsed game log.
    Parse {
        log: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the latest thought, behavior and speech per player in the final phase.
    Latest {
        log: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the analysis context (roster, timeline, per-player digests).
    Context {
        log: PathBuf,
        /// JSON object file mapping player names to experience notes.
        #[arg(long)]
        experience: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print a short plain-text overview.
    Summary { log: PathBuf },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format: json or yaml [env: WOLFLOG_OUTPUT, default: json]
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_else(env::output_format)
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_new(env::log_filter())
        .or_else(|_| EnvFilter::try_new(env::DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to set global default tracing subscriber: {e}"))
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let log_dir = cli.log_dir.unwrap_or_else(env::log_dir);

    let output = match cli.command {
        Command::Parse { log, output } => run_parse(
            &resolve_log_path(&log, &log_dir),
            output.format(),
            !output.compact,
        )?,
        Command::Latest { log, output } => run_latest(
            &resolve_log_path(&log, &log_dir),
            output.format(),
            !output.compact,
        )?,
        Command::Context {
            log,
            experience,
            output,
        } => run_context(
            &resolve_log_path(&log, &log_dir),
            experience.as_deref(),
            output.format(),
            !output.compact,
        )?,
        Command::Summary { log } => run_summary(&resolve_log_path(&log, &log_dir))?,
    };

    println!("{output}");
    Ok(())
}
