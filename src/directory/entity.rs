//! Directory entities and the immutable entity store.

use serde::{Deserialize, Serialize};

use crate::error::{FdError, Result};

/// Classification tag for a directory entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Investor,
    Advisor,
    Legal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Investor => write!(f, "INVESTOR"),
            Self::Advisor => write!(f, "ADVISOR"),
            Self::Legal => write!(f, "LEGAL"),
        }
    }
}

/// One investor, advisor, or legal-service provider.
///
/// Immutable once added to an [`EntityStore`]; the search engine only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub description: String,
    /// Free-text "City, Region" string.
    pub location: String,
    /// Ordered, non-unique tags. Also carries investor subtypes such as
    /// "Family office" so type refinements can filter on it.
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Currency-formatted strings, e.g. "$50,000".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_check_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_check_size: Option<String>,
    pub contact_email: String,
    pub website: String,
    /// 1-5 rating.
    pub rating: f64,
    /// Assets under management, formatted ("$250M", "$5B+").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_count: Option<u32>,
}

impl Entity {
    /// Maximum check size parsed to a number; 0 when absent or unparseable.
    #[must_use]
    pub fn max_check_value(&self) -> f64 {
        self.max_check_size.as_deref().map_or(0.0, parse_currency)
    }
}

/// Parse a currency-formatted string by stripping everything that is not a
/// digit, period, or minus sign. Empty or unparseable input degrades to 0.
#[must_use]
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Immutable, ordered collection of directory entities.
///
/// Identifier uniqueness is enforced here, at construction time; a duplicate
/// id is a data-contract failure, not a condition the engine resolves.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    /// Build a store from an ordered list of entities.
    ///
    /// # Errors
    /// Returns [`FdError::DuplicateEntity`] if two entities share an id.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(FdError::DuplicateEntity(entity.id.clone()));
            }
        }
        Ok(Self { entities })
    }

    /// Entities in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entity(id: &str, name: &str) -> Entity {
        Entity {
            id: id.to_string(),
            name: name.to_string(),
            entity_type: EntityType::Investor,
            description: "We invest in things.".to_string(),
            location: "New York, NY".to_string(),
            focus_areas: vec!["SaaS".to_string()],
            min_check_size: Some("$50,000".to_string()),
            max_check_size: Some("$5,000,000".to_string()),
            contact_email: "contact@example.com".to_string(),
            website: "https://example.com".to_string(),
            rating: 4.0,
            aum: Some("$250M".to_string()),
            deal_count: Some(12),
        }
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$5,000,000"), 5_000_000.0);
        assert_eq!(parse_currency("$50,000"), 50_000.0);
        assert_eq!(parse_currency("1.5"), 1.5);
        assert_eq!(parse_currency("-$200"), -200.0);
    }

    #[test]
    fn test_parse_currency_degrades_to_zero() {
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("Unlimited"), 0.0);
        assert_eq!(parse_currency("$-"), 0.0);
        assert_eq!(parse_currency("..."), 0.0);
    }

    #[test]
    fn test_max_check_value_missing() {
        let mut e = make_entity("a", "A");
        e.max_check_size = None;
        assert_eq!(e.max_check_value(), 0.0);
    }

    #[test]
    fn test_store_rejects_duplicate_ids() {
        let err = EntityStore::new(vec![make_entity("a", "A"), make_entity("a", "B")]);
        assert!(matches!(err, Err(FdError::DuplicateEntity(id)) if id == "a"));
    }

    #[test]
    fn test_store_preserves_insertion_order() {
        let store =
            EntityStore::new(vec![make_entity("b", "B"), make_entity("a", "A")]).unwrap();
        let ids: Vec<&str> = store.entities().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_store_lookup() {
        let store = EntityStore::new(vec![make_entity("a", "A")]).unwrap();
        assert_eq!(store.get("a").unwrap().name, "A");
        assert!(store.get("zzz").is_none());
    }

    #[test]
    fn test_entity_type_serde_tags() {
        let json = serde_json::to_string(&EntityType::Investor).unwrap();
        assert_eq!(json, "\"INVESTOR\"");
        let t: EntityType = serde_json::from_str("\"LEGAL\"").unwrap();
        assert_eq!(t, EntityType::Legal);
    }
}
