use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::{Args, Subcommand};
use miktzoa_core::domain::{switch_language_path, Language};
use serde::Serialize;

#[derive(Debug, Subcommand)]
pub enum LangCommand {
    /// Rewrite a site path for another language
    Switch(LangSwitchArgs),
    Ls(LangListArgs),
}

#[derive(Debug, Args)]
pub struct LangSwitchArgs {
    pub lang: String,
    #[arg(long, default_value = "/")]
    pub path: String,
}

#[derive(Debug, Args)]
pub struct LangListArgs {}

#[derive(Debug, Serialize)]
struct LanguageDto {
    code: Language,
    default: bool,
}

pub fn switch(ctx: &Context<'_>, args: LangSwitchArgs) -> Result<()> {
    let lang: Language = args.lang.parse()?;
    let path = switch_language_path(&args.path, lang);

    if ctx.json {
        print_json(&serde_json::json!({ "lang": lang, "path": path }))?;
    } else {
        println!("{}", path);
    }
    Ok(())
}

pub fn list(ctx: &Context<'_>, _args: LangListArgs) -> Result<()> {
    let items: Vec<LanguageDto> = Language::ALL
        .into_iter()
        .map(|code| LanguageDto {
            code,
            default: code == ctx.config.default_language,
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        if item.default {
            println!("{} (default)", item.code);
        } else {
            println!("{}", item.code);
        }
    }
    Ok(())
}
