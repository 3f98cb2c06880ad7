//! flowdeck portfolio - Portfolio companies and fund metrics

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::error::{FdError, Result};
use crate::portfolio::{CompanyStatus, GoalStatus};

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    #[command(subcommand)]
    pub action: Option<PortfolioAction>,
}

#[derive(Subcommand, Debug)]
pub enum PortfolioAction {
    /// List companies (default)
    List {
        /// Filter by status: active, exited, write-off
        #[arg(long)]
        status: Option<String>,
    },

    /// Fund-level rollup metrics
    Metrics,

    /// Add a company to the book
    AddCompany {
        /// Company name
        name: String,
        /// Sector
        #[arg(long, default_value = "")]
        sector: String,
        /// Acquisition date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Invested capital, in dollars
        #[arg(long, default_value = "0")]
        invested: f64,
        /// Current marked value, in dollars
        #[arg(long, default_value = "0")]
        value: f64,
    },

    /// Attach a new goal to a company
    AddGoal {
        /// Company id
        company_id: String,
        /// Goal title
        title: String,
    },

    /// Update a goal's progress and status
    UpdateGoal {
        /// Company id
        company_id: String,
        /// Goal id
        goal_id: String,
        /// Percent complete (0-100)
        #[arg(long, default_value = "0")]
        progress: u8,
        /// Status: on-track, at-risk, delayed, completed
        #[arg(long, default_value = "on-track")]
        status: String,
    },

    /// Change a company's lifecycle status
    SetStatus {
        /// Company id
        company_id: String,
        /// Status: active, exited, write-off
        status: String,
    },
}

pub fn run(ctx: &mut AppContext, args: &PortfolioArgs) -> Result<()> {
    match args
        .action
        .as_ref()
        .unwrap_or(&PortfolioAction::List { status: None })
    {
        PortfolioAction::List { status } => {
            let status = status.as_deref().map(parse_company_status).transpose()?;
            list(ctx, status)
        }
        PortfolioAction::Metrics => metrics(ctx),
        PortfolioAction::AddCompany {
            name,
            sector,
            date,
            invested,
            value,
        } => {
            let date = date
                .clone()
                .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
            ctx.portfolio
                .add_company(name, sector, &date, *invested, *value)?;
            list(ctx, None)
        }
        PortfolioAction::AddGoal { company_id, title } => {
            ctx.portfolio.add_goal(company_id, title)?;
            list(ctx, None)
        }
        PortfolioAction::UpdateGoal {
            company_id,
            goal_id,
            progress,
            status,
        } => {
            let status = parse_goal_status(status)?;
            ctx.portfolio
                .update_goal(company_id, goal_id, *progress, status)?;
            list(ctx, None)
        }
        PortfolioAction::SetStatus { company_id, status } => {
            let status = parse_company_status(status)?;
            ctx.portfolio.set_status(company_id, status)?;
            list(ctx, None)
        }
    }
}

fn list(ctx: &AppContext, status: Option<CompanyStatus>) -> Result<()> {
    let companies: Vec<_> = match status {
        Some(s) => ctx.portfolio.by_status(s),
        None => ctx.portfolio.companies().iter().collect(),
    };

    if ctx.machine_mode {
        println!("{}", serde_json::to_string(&companies)?);
        return Ok(());
    }

    for company in companies {
        println!(
            "[{}] {}  {}  {}  moic {:.2}x  irr {:.1}%  own {:.0}%",
            company.id,
            company.name.bold(),
            company.sector,
            company.status.to_string().cyan(),
            company.moic(),
            company.irr,
            company.ownership_percentage
        );
        for goal in &company.goals {
            println!(
                "    [{}] {}  {}%  {:?}",
                goal.id, goal.title, goal.progress, goal.status
            );
        }
    }
    Ok(())
}

fn metrics(ctx: &AppContext) -> Result<()> {
    let metrics = ctx.portfolio.fund_metrics();
    if ctx.machine_mode {
        println!("{}", serde_json::to_string(&metrics)?);
        return Ok(());
    }
    println!(
        "invested ${:.1}M  value ${:.1}M  moic {:.2}x  active {}",
        metrics.total_invested / 1e6,
        metrics.total_value / 1e6,
        metrics.moic,
        metrics.active_companies
    );
    Ok(())
}

fn parse_company_status(raw: &str) -> Result<CompanyStatus> {
    match raw.to_lowercase().as_str() {
        "active" => Ok(CompanyStatus::Active),
        "exited" => Ok(CompanyStatus::Exited),
        "write-off" | "writeoff" => Ok(CompanyStatus::WriteOff),
        other => Err(FdError::InvalidInput(format!(
            "unknown status '{other}'. Valid: active, exited, write-off"
        ))),
    }
}

fn parse_goal_status(raw: &str) -> Result<GoalStatus> {
    match raw.to_lowercase().as_str() {
        "on-track" | "ontrack" => Ok(GoalStatus::OnTrack),
        "at-risk" | "atrisk" => Ok(GoalStatus::AtRisk),
        "delayed" => Ok(GoalStatus::Delayed),
        "completed" => Ok(GoalStatus::Completed),
        other => Err(FdError::InvalidInput(format!(
            "unknown goal status '{other}'. Valid: on-track, at-risk, delayed, completed"
        ))),
    }
}
