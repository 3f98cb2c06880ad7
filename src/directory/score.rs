//! Match scores produced by the external matching service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FdError, Result};

/// One relevance score for a directory entity, with the service's rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "entityId")]
    pub entity_id: String,
    /// Relevance in [0, 100].
    pub score: f64,
    pub rationale: String,
}

/// Mapping from entity id to match score.
///
/// At most one entry per id; duplicates are a data-contract violation from
/// the matching service and are rejected at construction time.
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    scores: HashMap<String, MatchScore>,
}

impl ScoreIndex {
    /// Empty index: no matching requested, or the service was unavailable.
    /// Indistinguishable by design.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from score entries.
    ///
    /// # Errors
    /// Returns [`FdError::DuplicateScore`] if the service returned more than
    /// one entry for the same entity.
    pub fn new(entries: Vec<MatchScore>) -> Result<Self> {
        let mut scores = HashMap::with_capacity(entries.len());
        for entry in entries {
            let id = entry.entity_id.clone();
            if scores.insert(id.clone(), entry).is_some() {
                return Err(FdError::DuplicateScore(id));
            }
        }
        Ok(Self { scores })
    }

    /// Score for an entity; entities absent from the index score 0.
    #[must_use]
    pub fn score_for(&self, entity_id: &str) -> f64 {
        self.scores.get(entity_id).map_or(0.0, |s| s.score)
    }

    /// Rationale text for an entity, if the service scored it.
    #[must_use]
    pub fn rationale_for(&self, entity_id: &str) -> Option<&str> {
        self.scores.get(entity_id).map(|s| s.rationale.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if any of the given entity ids has a positive score. This is the
    /// switch that makes ranking ignore the user's sort spec.
    #[must_use]
    pub fn any_positive<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().any(|id| self.score_for(id) > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(id: &str, value: f64) -> MatchScore {
        MatchScore {
            entity_id: id.to_string(),
            score: value,
            rationale: "fits the thesis".to_string(),
        }
    }

    #[test]
    fn test_absent_entity_scores_zero() {
        let index = ScoreIndex::new(vec![score("a", 90.0)]).unwrap();
        assert_eq!(index.score_for("a"), 90.0);
        assert_eq!(index.score_for("b"), 0.0);
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let err = ScoreIndex::new(vec![score("a", 90.0), score("a", 40.0)]);
        assert!(matches!(err, Err(FdError::DuplicateScore(id)) if id == "a"));
    }

    #[test]
    fn test_any_positive() {
        let index = ScoreIndex::new(vec![score("a", 90.0), score("b", 0.0)]).unwrap();
        assert!(index.any_positive(["a", "b"]));
        assert!(!index.any_positive(["b", "c"]));
        assert!(!ScoreIndex::empty().any_positive(["a"]));
    }

    #[test]
    fn test_rationale_lookup() {
        let index = ScoreIndex::new(vec![score("a", 90.0)]).unwrap();
        assert_eq!(index.rationale_for("a"), Some("fits the thesis"));
        assert!(index.rationale_for("b").is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"entityId": "inv-100", "score": 85, "rationale": "strong fit"}"#;
        let parsed: MatchScore = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.entity_id, "inv-100");
        assert_eq!(parsed.score, 85.0);
    }
}
