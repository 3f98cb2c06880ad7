//! Client for the external matching service.
//!
//! The service is a generative-text API: we send a requester profile plus a
//! compacted digest of the directory, and it returns scored matches as JSON.
//! Every failure mode (missing key, network error, non-2xx, malformed body,
//! out-of-range score) degrades to an empty result; callers can never tell
//! "service down" apart from "no scores yet", which is the contract the
//! directory engine relies on.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::MatchingConfig;
use crate::directory::{Entity, MatchScore};
use crate::error::{FdError, Result};

/// Requester profile sent to the matching service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingProfile {
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub raise_amount: f64,
    pub stage: String,
    /// Executive summary or pitch-deck text.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_file_name: Option<String>,
}

/// Inputs for deal-teaser generation.
#[derive(Debug, Clone)]
pub struct TeaserInputs {
    pub company_name: String,
    pub industry: String,
    pub key_highlights: String,
}

const TEASER_FALLBACK: &str = "Could not generate description.";

/// Blocking HTTP client for the matching service.
pub struct MatchClient {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for MatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("has_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl MatchClient {
    /// Build a client from config.
    ///
    /// # Errors
    /// Only if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &MatchingConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FdError::Config(format!("matching http client: {err}")))?;
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        })
    }

    /// True if a key is configured; without one every call returns empty.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Score the directory against a requester profile.
    ///
    /// Returns scored matches, or an empty list on any failure. Never errors.
    #[must_use]
    pub fn analyze_match(&self, profile: &MatchingProfile, entities: &[Entity]) -> Vec<MatchScore> {
        let Some(key) = self.api_key.as_deref() else {
            tracing::warn!("matching api key not configured; returning empty match results");
            return Vec::new();
        };

        let prompt = build_match_prompt(profile, entities);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let url = format!(
            "{}/models/{}:generateContent?key={key}",
            self.endpoint, self.model
        );
        match self.post_for_text(&url, &body) {
            Some(text) => parse_match_results(&text),
            None => Vec::new(),
        }
    }

    /// Generate an anonymized deal-teaser description (max 150 words).
    ///
    /// Returns a placeholder string on any failure.
    #[must_use]
    pub fn generate_teaser(&self, inputs: &TeaserInputs) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return "API key missing. Cannot generate description.".to_string();
        };

        let prompt = format!(
            "Write a professional, anonymized deal teaser description (max 150 words) \
             for a search fund acquisition target.\n\n\
             Company Name (for context, keep anonymized in output): {}\n\
             Industry: {}\n\
             Highlights: {}\n\n\
             Tone: Professional, enticing to investors, confidential.",
            inputs.company_name, inputs.industry, inputs.key_highlights
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let url = format!(
            "{}/models/{}:generateContent?key={key}",
            self.endpoint, self.model
        );
        self.post_for_text(&url, &body)
            .unwrap_or_else(|| TEASER_FALLBACK.to_string())
    }

    /// POST a request and extract the first candidate's text, or None on any
    /// failure.
    fn post_for_text(&self, url: &str, body: &Value) -> Option<String> {
        let response = match self.client.post(url).json(body).send() {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!("matching request failed: {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!("matching service returned HTTP {}", response.status());
            return None;
        }
        let payload: Value = match response.json() {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!("matching response was not JSON: {err}");
                return None;
            }
        };
        extract_candidate_text(&payload)
    }
}

/// Compact entity digest to keep the prompt context small.
fn entity_digest(entities: &[Entity]) -> Value {
    Value::Array(
        entities
            .iter()
            .map(|e| {
                json!({
                    "id": e.id,
                    "name": e.name,
                    "desc": e.description,
                    "focus": e.focus_areas,
                    "checks": format!(
                        "{} - {}",
                        e.min_check_size.as_deref().unwrap_or("0"),
                        e.max_check_size.as_deref().unwrap_or("Unlimited"),
                    ),
                    "loc": e.location,
                })
            })
            .collect(),
    )
}

fn build_match_prompt(profile: &MatchingProfile, entities: &[Entity]) -> String {
    format!(
        "You are an expert investment banker and deal matchmaker.\n\n\
         Startup Profile:\n\
         - Name: {}\n\
         - Industry: {}\n\
         - Stage: {}\n\
         - Seeking Capital: ${}\n\
         - Location: {}\n\
         - Context/Deck Summary: \"{}\"\n\n\
         Task:\n\
         Analyze the \"Available Database of Investors\" below and identify the \
         Top 3 best matches for this specific startup. Consider investment stage, \
         check size fit (if available), industry focus, and location relevance.\n\n\
         Available Database of Investors:\n{}\n\n\
         Return a JSON array of objects with:\n\
         - entityId (string)\n\
         - score (number 0-100)\n\
         - rationale (string, explain specifically why this investor fits the deck provided)",
        profile.company_name,
        profile.industry,
        profile.stage,
        profile.raise_amount,
        profile.location,
        profile.description,
        entity_digest(entities),
    )
}

/// Pull the generated text out of a generateContent response.
fn extract_candidate_text(payload: &Value) -> Option<String> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(ToString::to_string)
}

/// Parse the model's JSON text into score entries. A single malformed or
/// out-of-range entry invalidates the whole response: a half-trustworthy
/// score list must look exactly like an unavailable service.
fn parse_match_results(text: &str) -> Vec<MatchScore> {
    let Ok(results) = serde_json::from_str::<Vec<MatchScore>>(text) else {
        tracing::warn!("matching response text was not a valid score array");
        return Vec::new();
    };
    if results
        .iter()
        .any(|r| !(0.0..=100.0).contains(&r.score) || r.entity_id.is_empty())
    {
        tracing::warn!("matching response contained out-of-contract entries; discarding");
        return Vec::new();
    }
    results
}
