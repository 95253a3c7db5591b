use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use miktzoa_core::rules::{render_stars, validate_max_stars};

#[derive(Debug, Args)]
pub struct StarsArgs {
    #[arg(allow_negative_numbers = true)]
    pub rating: f64,
    /// Number of stars in the row; defaults to rating.max_stars from config
    #[arg(long)]
    pub max: Option<u32>,
}

pub fn stars(ctx: &Context<'_>, args: StarsArgs) -> Result<()> {
    let max_stars = match args.max {
        Some(max) => validate_max_stars(max)?,
        None => ctx.config.rating.max_stars,
    };
    let rendered = render_stars(args.rating, max_stars);

    if ctx.json {
        print_json(&serde_json::json!({
            "rating": args.rating,
            "max_stars": max_stars,
            "stars": rendered,
        }))?;
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
