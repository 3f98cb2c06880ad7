//! Client for the market-data service.
//!
//! Quotes degrade to locally generated synthetic data on any network or
//! parsing failure, so callers never observe an error state, only
//! plausible-looking substitute numbers.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MarketConfig;
use crate::error::{FdError, Result};

/// A stock quote, real or synthetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
    pub volume: String,
    pub market_cap: String,
    pub pe_ratio: f64,
    pub high_52: f64,
    pub low_52: f64,
    /// True when the quote was generated locally because the service was
    /// unreachable or returned garbage.
    #[serde(default)]
    pub synthetic: bool,
}

/// An upcoming IPO listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpoListing {
    pub symbol: String,
    pub company_name: String,
    pub filing_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_offered: Option<String>,
}

/// A market index snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndex {
    pub name: String,
    pub value: f64,
    pub change: f64,
}

/// Raw quote payload from the service.
#[derive(Debug, Deserialize)]
struct QuotePayload {
    symbol: Option<String>,
    price: Option<f64>,
    change_percent: Option<f64>,
    volume: Option<f64>,
    market_cap: Option<f64>,
    pe_ratio: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
}

/// Raw IPO payload from the service.
#[derive(Debug, Deserialize)]
struct IpoPayload {
    symbol: String,
    name: String,
    filing_date: String,
    price_range: Option<String>,
    shares: Option<String>,
}

/// Blocking HTTP client for quotes and IPO listings.
pub struct QuoteClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for QuoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteClient")
            .field("endpoint", &self.endpoint)
            .field("has_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl QuoteClient {
    /// Build a client from config.
    ///
    /// # Errors
    /// Only if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &MarketConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FdError::Config(format!("market http client: {err}")))?;
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Fetch a quote for a ticker symbol, falling back to a synthetic quote
    /// with the same shape on any failure. Never errors.
    #[must_use]
    pub fn stock_quote(&self, symbol: &str) -> StockQuote {
        let url = format!(
            "{}/stocks/{}/quote?api_key={}",
            self.endpoint,
            symbol,
            self.api_key.as_deref().unwrap_or_default()
        );
        match self.fetch_json::<QuotePayload>(&url) {
            Some(payload) => StockQuote {
                symbol: payload
                    .symbol
                    .unwrap_or_else(|| symbol.to_uppercase()),
                price: payload.price.unwrap_or(0.0),
                change_percent: payload.change_percent.unwrap_or(0.0),
                volume: format_compact(payload.volume),
                market_cap: format_compact(payload.market_cap),
                pe_ratio: payload.pe_ratio.unwrap_or(0.0),
                high_52: payload.fifty_two_week_high.unwrap_or(0.0),
                low_52: payload.fifty_two_week_low.unwrap_or(0.0),
                synthetic: false,
            },
            None => {
                tracing::warn!(symbol, "quote fetch failed; using synthetic data");
                synthetic_quote(symbol)
            }
        }
    }

    /// Fetch upcoming IPOs, with a static fallback list on failure.
    #[must_use]
    pub fn upcoming_ipos(&self) -> Vec<IpoListing> {
        let url = format!(
            "{}/stocks/corporate-actions/ipos?api_key={}",
            self.endpoint,
            self.api_key.as_deref().unwrap_or_default()
        );
        match self.fetch_json::<Vec<IpoPayload>>(&url) {
            Some(items) => items
                .into_iter()
                .map(|item| IpoListing {
                    symbol: item.symbol,
                    company_name: item.name,
                    filing_date: item.filing_date,
                    offering_price: item.price_range,
                    shares_offered: item.shares,
                })
                .collect(),
            None => fallback_ipos(),
        }
    }

    /// Static market-index overview. The service exposes no endpoint for
    /// this; values mirror the dashboard's fixed snapshot.
    #[must_use]
    pub fn market_overview(&self) -> Vec<MarketIndex> {
        vec![
            MarketIndex {
                name: "S&P 500".to_string(),
                value: 4352.12,
                change: 1.2,
            },
            MarketIndex {
                name: "NASDAQ".to_string(),
                value: 13412.55,
                change: 0.8,
            },
            MarketIndex {
                name: "DOW JONES".to_string(),
                value: 33850.20,
                change: -0.3,
            },
        ]
    }

    fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Option<T> {
        let response = match self.client.get(url).send() {
            Ok(r) => r,
            Err(err) => {
                tracing::debug!("market request failed: {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("market service returned HTTP {}", response.status());
            return None;
        }
        response.json().ok()
    }
}

/// Generate a plausible substitute quote.
fn synthetic_quote(symbol: &str) -> StockQuote {
    let mut rng = rand::rng();
    let base_price: f64 = rng.random_range(50.0..150.0);
    let change: f64 = rng.random_range(-2.0..2.0);

    StockQuote {
        symbol: symbol.to_uppercase(),
        price: round2(base_price),
        change_percent: round2(change),
        volume: format!("{:.1}M", rng.random_range(1.0..11.0)),
        market_cap: format!("{:.1}B", rng.random_range(50.0..550.0)),
        pe_ratio: round2(rng.random_range(10.0..40.0)),
        high_52: round2(base_price * 1.2),
        low_52: round2(base_price * 0.8),
        synthetic: true,
    }
}

fn fallback_ipos() -> Vec<IpoListing> {
    vec![
        IpoListing {
            symbol: "TECH".to_string(),
            company_name: "Future Tech AI".to_string(),
            filing_date: "2023-11-15".to_string(),
            offering_price: Some("$18-$22".to_string()),
            shares_offered: None,
        },
        IpoListing {
            symbol: "BIO".to_string(),
            company_name: "Genetics Plus".to_string(),
            filing_date: "2023-11-20".to_string(),
            offering_price: Some("$14-$16".to_string()),
            shares_offered: None,
        },
        IpoListing {
            symbol: "SOLR".to_string(),
            company_name: "Sun Power Corp".to_string(),
            filing_date: "2023-12-01".to_string(),
            offering_price: Some("$25-$28".to_string()),
            shares_offered: None,
        },
    ]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a large number compactly: billions as "N.NB", millions as "N.NM".
fn format_compact(num: Option<f64>) -> String {
    match num {
        None => "-".to_string(),
        Some(n) if n <= 0.0 => "-".to_string(),
        Some(n) if n >= 1e9 => format!("{:.1}B", n / 1e9),
        Some(n) if n >= 1e6 => format!("{:.1}M", n / 1e6),
        Some(n) => format!("{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(Some(2_500_000_000.0)), "2.5B");
        assert_eq!(format_compact(Some(7_300_000.0)), "7.3M");
        assert_eq!(format_compact(Some(950.0)), "950");
        assert_eq!(format_compact(None), "-");
        assert_eq!(format_compact(Some(0.0)), "-");
    }

    #[test]
    fn test_synthetic_quote_shape() {
        let quote = synthetic_quote("aapl");
        assert_eq!(quote.symbol, "AAPL");
        assert!(quote.synthetic);
        assert!((50.0..150.0).contains(&quote.price));
        assert!((-2.0..2.0).contains(&quote.change_percent));
        assert!((10.0..40.0).contains(&quote.pe_ratio));
        assert!(quote.high_52 > quote.price);
        assert!(quote.low_52 < quote.price);
        assert!(quote.volume.ends_with('M'));
        assert!(quote.market_cap.ends_with('B'));
    }

    #[test]
    fn test_unreachable_service_falls_back() {
        let config = MarketConfig {
            endpoint: "http://127.0.0.1:1/v1".to_string(),
            api_key: None,
            timeout_secs: 1,
        };
        let client = QuoteClient::from_config(&config).unwrap();

        let quote = client.stock_quote("msft");
        assert!(quote.synthetic);
        assert_eq!(quote.symbol, "MSFT");

        let ipos = client.upcoming_ipos();
        assert_eq!(ipos.len(), 3);
        assert_eq!(ipos[0].symbol, "TECH");
    }

    #[test]
    fn test_market_overview_static() {
        let client = QuoteClient::from_config(&MarketConfig::default()).unwrap();
        let overview = client.market_overview();
        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0].name, "S&P 500");
        assert!(overview[2].change < 0.0);
    }
}
