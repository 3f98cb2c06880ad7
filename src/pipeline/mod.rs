//! Deal pipeline: deals, stages, and the kanban board operations.
//!
//! Stage reordering is modeled as a discrete splice-and-reinsert over
//! explicit source/target indices rather than a stateful drag session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::parse_currency;
use crate::error::{FdError, Result};

/// A document attached to a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealDocument {
    pub id: String,
    pub name: String,
    pub upload_date: String,
    pub size: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

/// One deal in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub industry: String,
    /// Currency-formatted strings, e.g. "$5.2M".
    pub revenue: String,
    pub ebitda: String,
    /// Stage id; always one of the board's stages.
    pub stage: String,
    pub description: String,
    pub notes: String,
    #[serde(default)]
    pub documents: Vec<DealDocument>,
}

/// A deal shared through the network feed (read-only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDeal {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub deal_type: NetworkDealType,
    pub amount: String,
    pub sector: String,
    pub description: String,
    pub posted_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkDealType {
    #[serde(rename = "M&A")]
    MergersAndAcquisitions,
    #[serde(rename = "Company Round")]
    CompanyRound,
    #[serde(rename = "Trade Finance")]
    TradeFinance,
    #[serde(rename = "Project Finance")]
    ProjectFinance,
}

/// A pipeline stage column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
}

/// The kanban board: an ordered stage list plus the deals in them.
#[derive(Debug, Clone, Default)]
pub struct StageBoard {
    stages: Vec<Stage>,
    deals: Vec<Deal>,
}

impl StageBoard {
    /// Default stage columns for a fresh pipeline.
    #[must_use]
    pub fn default_stages() -> Vec<Stage> {
        ["Sourcing", "Review", "LOI", "Diligence", "Closing"]
            .into_iter()
            .map(|name| Stage {
                id: slugify(name),
                name: name.to_string(),
            })
            .collect()
    }

    /// Build a board; deals pointing at unknown stages are rejected.
    pub fn new(stages: Vec<Stage>, deals: Vec<Deal>) -> Result<Self> {
        let board = Self { stages, deals };
        for deal in &board.deals {
            if !board.has_stage(&deal.stage) {
                return Err(FdError::UnknownStage(deal.stage.clone()));
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    #[must_use]
    pub fn has_stage(&self, stage_id: &str) -> bool {
        self.stages.iter().any(|s| s.id == stage_id)
    }

    /// Deals currently in a stage, in board order.
    #[must_use]
    pub fn deals_in_stage(&self, stage_id: &str) -> Vec<&Deal> {
        self.deals.iter().filter(|d| d.stage == stage_id).collect()
    }

    /// Append a new stage column.
    pub fn add_stage(&mut self, name: &str) -> Result<&Stage> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FdError::InvalidInput("stage name is empty".to_string()));
        }
        let id = slugify(name);
        if self.has_stage(&id) {
            return Err(FdError::DuplicateStage(id));
        }
        self.stages.push(Stage {
            id,
            name: name.to_string(),
        });
        Ok(self.stages.last().expect("just pushed"))
    }

    /// Reorder stages by moving the stage at `source` to `target`.
    /// Out-of-range indices are a no-op, matching a drop outside the board.
    pub fn reorder_stages(&mut self, source: usize, target: usize) {
        if source >= self.stages.len() || target >= self.stages.len() || source == target {
            return;
        }
        let stage = self.stages.remove(source);
        self.stages.insert(target, stage);
    }

    /// Move a deal to another stage.
    pub fn move_deal(&mut self, deal_id: &str, stage_id: &str) -> Result<()> {
        if !self.has_stage(stage_id) {
            return Err(FdError::UnknownStage(stage_id.to_string()));
        }
        let deal = self
            .deals
            .iter_mut()
            .find(|d| d.id == deal_id)
            .ok_or_else(|| FdError::DealNotFound(deal_id.to_string()))?;
        deal.stage = stage_id.to_string();
        Ok(())
    }

    /// Add a deal into the first stage.
    pub fn add_deal(
        &mut self,
        title: &str,
        company_name: &str,
        industry: &str,
        description: &str,
    ) -> Result<&Deal> {
        let first_stage = self
            .stages
            .first()
            .ok_or_else(|| FdError::InvalidInput("board has no stages".to_string()))?
            .id
            .clone();
        if title.trim().is_empty() {
            return Err(FdError::InvalidInput("deal title is empty".to_string()));
        }
        self.deals.push(Deal {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            company_name: company_name.trim().to_string(),
            industry: industry.trim().to_string(),
            revenue: String::new(),
            ebitda: String::new(),
            stage: first_stage,
            description: description.to_string(),
            notes: String::new(),
            documents: Vec::new(),
        });
        Ok(self.deals.last().expect("just pushed"))
    }

    /// Number of deals per stage, in board order.
    #[must_use]
    pub fn stage_counts(&self) -> Vec<(String, usize)> {
        self.stages
            .iter()
            .map(|s| (s.id.clone(), self.deals_in_stage(&s.id).len()))
            .collect()
    }

    /// Total pipeline revenue, parsed from each deal's formatted string.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.deals.iter().map(|d| parse_currency(&d.revenue)).sum()
    }
}

/// Lower-case a stage name into a stable id: "Due Diligence" -> "due-diligence".
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
