mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, lang, phone, search, stars, validate, Context};
use crate::error::{exit_code_for, report_error};
use miktzoa_config as config;

#[derive(Debug, Parser)]
#[command(name = "miktzoa", version, about = "miktzoa CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shape phone numbers for input fields and display
    #[command(subcommand)]
    Phone(phone::PhoneCommand),
    #[command(subcommand)]
    Lang(lang::LangCommand),
    /// Build the listing URL for a profession/city search
    Search(search::SearchArgs),
    /// Check that required form fields are filled
    Validate(validate::ValidateArgs),
    Stars(stars::StarsArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Phone(cmd) => match cmd {
                    phone::PhoneCommand::Normalize(args) => phone::normalize(&ctx, args),
                    phone::PhoneCommand::Format(args) => phone::format(&ctx, args),
                },
                Command::Lang(cmd) => match cmd {
                    lang::LangCommand::Switch(args) => lang::switch(&ctx, args),
                    lang::LangCommand::Ls(args) => lang::list(&ctx, args),
                },
                Command::Search(args) => search::search(&ctx, args),
                Command::Validate(args) => validate::validate(&ctx, args),
                Command::Stars(args) => stars::stars(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
