//! Portfolio tracking: companies, goals, and fund-level rollups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FdError, Result};
use crate::pipeline::DealDocument;

/// Lifecycle status of a portfolio company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompanyStatus {
    #[default]
    Active,
    Exited,
    #[serde(rename = "Write-off")]
    WriteOff,
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Exited => write!(f, "Exited"),
            Self::WriteOff => write!(f, "Write-off"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalStatus {
    #[default]
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    Delayed,
    Completed,
}

/// A strategic goal attached to a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyGoal {
    pub id: String,
    pub title: String,
    /// Percent complete, clamped to 0..=100.
    pub progress: u8,
    pub status: GoalStatus,
}

/// A company held in the fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioCompany {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub acquisition_date: String,
    /// Invested capital, in dollars.
    pub initial_investment: f64,
    /// Current marked value, in dollars.
    pub current_value: f64,
    /// Percent of equity held.
    pub ownership_percentage: f64,
    /// Internal rate of return, percent. Negative for underwater positions.
    pub irr: f64,
    pub status: CompanyStatus,
    pub board_seat: bool,
    /// Currency-formatted operating figures, e.g. "$32.5M".
    pub revenue: String,
    pub ebitda: String,
    #[serde(default)]
    pub documents: Vec<DealDocument>,
    #[serde(default)]
    pub goals: Vec<CompanyGoal>,
}

impl PortfolioCompany {
    /// Multiple on invested capital. Zero investment reads as 0.0 rather
    /// than a division error.
    #[must_use]
    pub fn moic(&self) -> f64 {
        if self.initial_investment <= 0.0 {
            0.0
        } else {
            self.current_value / self.initial_investment
        }
    }
}

/// Fund-level aggregate metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundMetrics {
    pub total_invested: f64,
    pub total_value: f64,
    pub moic: f64,
    pub active_companies: usize,
}

/// The portfolio: a flat company list with goal operations.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    companies: Vec<PortfolioCompany>,
}

impl Portfolio {
    #[must_use]
    pub fn new(companies: Vec<PortfolioCompany>) -> Self {
        Self { companies }
    }

    #[must_use]
    pub fn companies(&self) -> &[PortfolioCompany] {
        &self.companies
    }

    #[must_use]
    pub fn get(&self, company_id: &str) -> Option<&PortfolioCompany> {
        self.companies.iter().find(|c| c.id == company_id)
    }

    /// Companies matching a status, in insertion order.
    #[must_use]
    pub fn by_status(&self, status: CompanyStatus) -> Vec<&PortfolioCompany> {
        self.companies
            .iter()
            .filter(|c| c.status == status)
            .collect()
    }

    /// Add a company to the book.
    pub fn add_company(
        &mut self,
        name: &str,
        sector: &str,
        acquisition_date: &str,
        initial_investment: f64,
        current_value: f64,
    ) -> Result<&PortfolioCompany> {
        if name.trim().is_empty() {
            return Err(FdError::InvalidInput("company name is empty".to_string()));
        }
        if initial_investment < 0.0 || current_value < 0.0 {
            return Err(FdError::InvalidInput(
                "investment amounts must be non-negative".to_string(),
            ));
        }
        self.companies.push(PortfolioCompany {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            sector: sector.trim().to_string(),
            acquisition_date: acquisition_date.to_string(),
            initial_investment,
            current_value,
            ownership_percentage: 0.0,
            irr: 0.0,
            status: CompanyStatus::Active,
            board_seat: false,
            revenue: String::new(),
            ebitda: String::new(),
            documents: Vec::new(),
            goals: Vec::new(),
        });
        Ok(self.companies.last().expect("just pushed"))
    }

    /// Attach a new goal to a company, starting at zero progress.
    pub fn add_goal(&mut self, company_id: &str, title: &str) -> Result<&CompanyGoal> {
        if title.trim().is_empty() {
            return Err(FdError::InvalidInput("goal title is empty".to_string()));
        }
        let company = self.company_mut(company_id)?;
        company.goals.push(CompanyGoal {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            progress: 0,
            status: GoalStatus::OnTrack,
        });
        Ok(company.goals.last().expect("just pushed"))
    }

    /// Update a goal's progress and status. Progress clamps to 0..=100, and
    /// a Completed status forces progress to 100.
    pub fn update_goal(
        &mut self,
        company_id: &str,
        goal_id: &str,
        progress: u8,
        status: GoalStatus,
    ) -> Result<()> {
        let company = self.company_mut(company_id)?;
        let goal = company
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| FdError::InvalidInput(format!("no goal {goal_id}")))?;
        goal.status = status;
        goal.progress = if status == GoalStatus::Completed {
            100
        } else {
            progress.min(100)
        };
        Ok(())
    }

    /// Mark a company's lifecycle status.
    pub fn set_status(&mut self, company_id: &str, status: CompanyStatus) -> Result<()> {
        self.company_mut(company_id)?.status = status;
        Ok(())
    }

    /// Roll up fund metrics over the whole book, exits included.
    #[must_use]
    pub fn fund_metrics(&self) -> FundMetrics {
        let total_invested: f64 = self.companies.iter().map(|c| c.initial_investment).sum();
        let total_value: f64 = self.companies.iter().map(|c| c.current_value).sum();
        FundMetrics {
            total_invested,
            total_value,
            moic: if total_invested <= 0.0 {
                0.0
            } else {
                total_value / total_invested
            },
            active_companies: self.by_status(CompanyStatus::Active).len(),
        }
    }

    fn company_mut(&mut self, company_id: &str) -> Result<&mut PortfolioCompany> {
        self.companies
            .iter_mut()
            .find(|c| c.id == company_id)
            .ok_or_else(|| FdError::CompanyNotFound(company_id.to_string()))
    }
}
