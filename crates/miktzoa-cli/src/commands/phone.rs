use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use miktzoa_core::domain::{format_for_display, normalize_on_input};
use serde::Serialize;
use std::io::{self, BufRead};
use tracing::debug;

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    /// Reshape values the way a phone input does while typing
    Normalize(PhoneArgs),
    /// Format stored values for read-only display
    Format(PhoneArgs),
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    /// Values to process; stdin lines are read when none are given
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PhoneDto {
    input: String,
    output: String,
}

pub fn normalize(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    emit(ctx, args, normalize_on_input)
}

pub fn format(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    emit(ctx, args, format_for_display)
}

fn emit(ctx: &Context<'_>, args: PhoneArgs, transform: fn(&str) -> String) -> Result<()> {
    let values = if args.values.is_empty() {
        read_stdin_lines()?
    } else {
        args.values
    };
    debug!(count = values.len(), "formatting phone values");

    let items: Vec<PhoneDto> = values
        .into_iter()
        .map(|input| {
            let output = transform(&input);
            PhoneDto { input, output }
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        println!("{}", item.output);
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| "read phone values from stdin")
}
