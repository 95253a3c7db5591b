use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use miktzoa_core::rules::{validate_required_fields, FormField, REQUIRED_FIELDS_NOTICE};
use miktzoa_core::CoreError;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Required field as name=value; repeat for each field
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<FormField>,
}

fn parse_field(raw: &str) -> Result<FormField, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("field name cannot be empty".to_string());
    }
    Ok(FormField::new(name, value))
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let missing = match validate_required_fields(&args.fields) {
        Ok(()) => Vec::new(),
        Err(CoreError::MissingRequiredFields(missing)) => missing,
        Err(err) => return Err(err.into()),
    };
    debug!(fields = args.fields.len(), missing = missing.len(), "validated form");

    if ctx.json {
        print_json(&serde_json::json!({
            "valid": missing.is_empty(),
            "missing": missing,
        }))?;
    } else if missing.is_empty() {
        println!("ok");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(invalid_input(format!(
            "{} ({})",
            REQUIRED_FIELDS_NOTICE,
            missing.join(", ")
        )))
    }
}
