//! flowdeck deals - Pipeline board operations

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DealsArgs {
    #[command(subcommand)]
    pub action: Option<DealsAction>,
}

#[derive(Subcommand, Debug)]
pub enum DealsAction {
    /// Show the board (default)
    List,

    /// Add a deal to the first stage
    Add {
        /// Deal title
        title: String,
        /// Target company name
        #[arg(long, default_value = "")]
        company: String,
        /// Industry sector
        #[arg(long, default_value = "")]
        industry: String,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Move a deal to another stage
    Move {
        /// Deal id
        deal_id: String,
        /// Target stage id (e.g. loi, diligence)
        stage: String,
    },

    /// Append a new stage column
    AddStage {
        /// Stage display name
        name: String,
    },

    /// Move the stage at one position to another
    Reorder {
        /// Current position (0-based)
        source: usize,
        /// New position (0-based)
        target: usize,
    },

    /// Show deals shared through the network feed
    Network,
}

pub fn run(ctx: &mut AppContext, args: &DealsArgs) -> Result<()> {
    match args.action.as_ref().unwrap_or(&DealsAction::List) {
        DealsAction::List => print_board(ctx),
        DealsAction::Add {
            title,
            company,
            industry,
            description,
        } => {
            let id = ctx
                .board
                .add_deal(title, company, industry, description)?
                .id
                .clone();
            tracing::info!(%id, "deal added");
            print_board(ctx)
        }
        DealsAction::Move { deal_id, stage } => {
            ctx.board.move_deal(deal_id, stage)?;
            print_board(ctx)
        }
        DealsAction::AddStage { name } => {
            ctx.board.add_stage(name)?;
            print_board(ctx)
        }
        DealsAction::Reorder { source, target } => {
            ctx.board.reorder_stages(*source, *target);
            print_board(ctx)
        }
        DealsAction::Network => print_network(ctx),
    }
}

fn print_board(ctx: &AppContext) -> Result<()> {
    if ctx.machine_mode {
        println!(
            "{}",
            serde_json::json!({
                "stages": ctx.board.stages(),
                "deals": ctx.board.deals(),
                "total_revenue_musd": ctx.board.total_revenue(),
            })
        );
        return Ok(());
    }

    for stage in ctx.board.stages() {
        let deals = ctx.board.deals_in_stage(&stage.id);
        println!("{} ({})", stage.name.bold(), deals.len());
        for deal in deals {
            println!(
                "  [{}] {}  {}  rev {}  ebitda {}",
                deal.id,
                deal.title.cyan(),
                deal.company_name,
                deal.revenue,
                deal.ebitda
            );
        }
    }
    // Seed revenue strings are denominated in millions, e.g. "$5.2M".
    println!(
        "{}",
        format!("Total pipeline revenue: ${:.1}M", ctx.board.total_revenue()).dimmed()
    );
    Ok(())
}

fn print_network(ctx: &AppContext) -> Result<()> {
    if ctx.machine_mode {
        println!("{}", serde_json::to_string(&ctx.network_deals)?);
        return Ok(());
    }
    for deal in &ctx.network_deals {
        println!(
            "{}  {}  {}  {}",
            deal.title.bold(),
            deal.amount.green(),
            deal.sector,
            deal.posted_date.dimmed()
        );
        println!("    {}", deal.description);
    }
    Ok(())
}
