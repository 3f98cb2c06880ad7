//! flowdeck news - Browse the news feed

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Filter by tag (case-insensitive exact match)
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Free-text filter over title and summary
    #[arg(long, short)]
    pub search: Option<String>,

    /// List all known tags
    #[arg(long)]
    pub tags: bool,
}

pub fn run(ctx: &mut AppContext, args: &NewsArgs) -> Result<()> {
    if args.tags {
        let tags = ctx.news.tags();
        if ctx.machine_mode {
            println!("{}", serde_json::to_string(&tags)?);
        } else {
            println!("{}", tags.join(", "));
        }
        return Ok(());
    }

    let items = match (&args.tag, &args.search) {
        (Some(tag), _) => ctx.news.by_tag(tag),
        (None, Some(term)) => ctx.news.search(term),
        (None, None) => ctx.news.items().iter().collect(),
    };

    if ctx.machine_mode {
        println!("{}", serde_json::to_string(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{} No news items match.", "!".yellow());
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {}  {}",
            item.title.bold(),
            item.source.cyan(),
            item.date.dimmed()
        );
        println!("    {}", item.summary);
        if !item.tags.is_empty() {
            println!("    {}", item.tags.join(", ").dimmed());
        }
    }
    Ok(())
}
