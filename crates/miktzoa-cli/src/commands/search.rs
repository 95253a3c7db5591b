use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use miktzoa_core::{build_search_url, Language, SearchQuery};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Listing language; defaults to the configured language
    #[arg(long)]
    pub lang: Option<String>,
    #[arg(long, default_value = "")]
    pub profession: String,
    #[arg(long, default_value = "")]
    pub city: String,
}

pub fn search(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let lang = match args.lang.as_deref() {
        Some(raw) => raw.parse::<Language>()?,
        None => ctx.config.default_language,
    };
    let query = SearchQuery {
        profession: args.profession,
        city: args.city,
    };

    let Some(url) = build_search_url(lang, &query) else {
        return Err(invalid_input("search needs a profession or a city"));
    };

    if ctx.json {
        print_json(&serde_json::json!({ "query": query, "url": url }))?;
    } else {
        println!("{}", url);
    }
    Ok(())
}
