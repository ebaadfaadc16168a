use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use theme_tokens::{
    config::{BuildConfig, DEFAULT_CONFIG},
    logging, orchestrator, Theme,
};
use theme_tokens_core::Format;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "theme-tokens")]
#[command(about = "Derive the light theme from dark design tokens and render CSS, SCSS, TypeScript and JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (optional, defaults apply when missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Dark token document, overrides `source`
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory, overrides `output_dir`
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Log semantic colors that have no registered inverse
    #[arg(long, global = true)]
    warn_unmatched: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the light document, then write every format for both themes
    Build,

    /// Derive and save the light document only
    Invert {
        /// Where to write it, defaults to `derived` from the config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render one theme in one format to stdout
    Format {
        /// css, scss, ts or json
        format: Format,

        #[arg(long, value_enum, default_value_t = Theme::Dark)]
        theme: Theme,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut config = BuildConfig::load(&cli.config)?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(out_dir) = cli.out_dir {
        config.output_dir = out_dir;
    }
    config.warn_unmatched |= cli.warn_unmatched;

    match cli.command {
        Command::Build => {
            let report = orchestrator::build(&config)?;
            info!(
                files = report.files.len(),
                inverted = report.inversion.inverted,
                unmatched = report.inversion.unmatched,
                "build finished"
            );
        }
        Command::Invert { output } => {
            let destination = output.unwrap_or_else(|| config.derived.clone());
            orchestrator::derive_light(&config, &destination)?;
        }
        Command::Format { format, theme } => {
            let dictionary = orchestrator::resolve_theme(&config, theme)?;
            let text = orchestrator::render(&config, &dictionary, theme, format, Utc::now())?;
            print!("{text}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("{err:?}");
            ExitCode::from(1)
        }
    }
}
