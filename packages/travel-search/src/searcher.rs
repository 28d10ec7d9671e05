//! Web search backend seam.
//!
//! The orchestrator only needs "query in, snippets out". This trait
//! abstracts over search providers so the simulated backend, a real HTTP
//! backend, and test mocks are interchangeable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// One raw search hit: the only signal the normalizer gets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSearchResult {
    /// Page title, when the provider returns one.
    pub title: Option<String>,

    /// Result URL. Kept as a string; the normalizer parses and drops
    /// records whose URL is malformed.
    pub url: String,

    /// Free-text snippet used for field extraction.
    pub content: String,
}

impl RawSearchResult {
    /// Create a result from a URL and snippet.
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
            content: content.into(),
        }
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Search provider abstraction.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Run the query and return at most `limit` raw results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawSearchResult>>;
}

#[async_trait]
impl<T: WebSearcher + ?Sized> WebSearcher for Arc<T> {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawSearchResult>> {
        (**self).search(query, limit).await
    }
}

/// Simulated search backend.
///
/// Returns a fixed corpus of realistic travel-site snippets after an
/// artificial network delay (2 seconds by default). Stands in for a real
/// web-search integration; there is no cancellation, a caller that loses
/// interest simply discards the result.
pub struct SimulatedSearcher {
    delay: Duration,
}

impl Default for SimulatedSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSearcher {
    /// Simulated backend with the default 2-second latency.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    /// Override the simulated latency (tests use `Duration::ZERO`).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl WebSearcher for SimulatedSearcher {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawSearchResult>> {
        tracing::debug!(query = %query, "simulating web search");
        tokio::time::sleep(self.delay).await;

        let mut results = simulated_corpus();
        results.truncate(limit);
        Ok(results)
    }
}

/// The fixed result set the simulated backend serves, modeled on real
/// travel-site listings.
fn simulated_corpus() -> Vec<RawSearchResult> {
    vec![
        RawSearchResult::new(
            "https://www.traveltourister.com/india/ooty-tour-packages",
            "Complete Ooty tour packages starting from ₹8,500 per person. 3 days 2 nights \
             package includes accommodation, meals, transport and sightseeing. Professional \
             guide included. Family-friendly tours available.",
        )
        .with_title("Ooty Tour Packages | Top Travel Agent in Ooty | Best Tour Operators"),
        RawSearchResult::new(
            "https://www.swantour.com/tour-packages-from-ooty",
            "Premium Ooty tour packages starting at ₹11,250. Resort accommodation, all meals \
             included, private transport. Cover Ooty, Coonoor, and Kodaikanal. 4 days 3 nights \
             with tea garden visits.",
        )
        .with_title("Verified Ooty Travel Packages - Swan Tour"),
        RawSearchResult::new(
            "https://www.trawell.in/tour-packages/ooty",
            "Budget-friendly Ooty packages from ₹4,500 per person. Hotel accommodation, \
             breakfast included, shared transport. 2 days 1 night package covers major \
             attractions. Group tours available.",
        )
        .with_title("Budget Ooty Tours - Trawell.in"),
        RawSearchResult::new(
            "https://www.tourtravelworld.com/packages/ooty-holiday-packages.htm",
            "Luxury Ooty packages from ₹25,000 per person. Premium resort stay, all meals, \
             private car, professional guide. 5 days 4 nights covering Ooty, Coonoor, \
             Mudumalai National Park.",
        )
        .with_title("Luxury Ooty Holiday Packages - Tour Travel World"),
        RawSearchResult::new(
            "https://www.makemytrip.com/holidays-india/ooty-travel-packages.html",
            "Verified Ooty travel packages with up to 30% discount. Starting ₹9,999 for 3 \
             days. Hotel booking, sightseeing, meals. Covers Botanical Gardens, Ooty Lake, \
             Nilgiri Railway.",
        )
        .with_title("MakeMyTrip Ooty Packages - Up to 30% Off"),
        RawSearchResult::new(
            "https://www.goibibo.com/holidays/ooty-tour-packages/",
            "Customizable Ooty packages from ₹12,000. Resort accommodation, transport, meals \
             optional. 3-5 days packages available. Includes tea estate tours and mountain \
             railway.",
        )
        .with_title("GoIbibo Ooty Tour Packages"),
        RawSearchResult::new(
            "https://www.thomascook.in/holidays/ooty-tour-packages",
            "Premium Ooty tour packages by Thomas Cook. Starting ₹18,500 per person. Luxury \
             hotels, all transfers, guided tours. 4 days 3 nights with Coonoor and Kodaikanal \
             extension.",
        )
        .with_title("Thomas Cook Ooty Tours"),
        RawSearchResult::new(
            "https://www.yatra.com/holidays/ooty-tour-packages",
            "Affordable Ooty packages from ₹7,800. Hotel stay, breakfast, sightseeing tours. \
             2-4 days options. Special honeymoon and family packages available.",
        )
        .with_title("Yatra Ooty Holiday Packages"),
    ]
}

/// HTTP-backed searcher.
///
/// POSTs `{query, max_results}` to a configured endpoint and expects
/// `{"results": [{title, url, content}, ...]}` back. Non-2xx responses
/// surface as [`SearchError::Backend`].
pub struct HttpSearcher {
    endpoint: url::Url,
    client: reqwest::Client,
}

impl HttpSearcher {
    /// Create a searcher against the given endpoint.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = url::Url::parse(endpoint).map_err(|_| SearchError::InvalidEndpoint {
            url: endpoint.to_string(),
        })?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl WebSearcher for HttpSearcher {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawSearchResult>> {
        #[derive(Serialize)]
        struct Request<'a> {
            query: &'a str,
            max_results: usize,
        }

        #[derive(Deserialize)]
        struct Response {
            results: Vec<RawSearchResult>,
        }

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&Request {
                query,
                max_results: limit,
            })
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(SearchError::Backend {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;
        let decoded: Response = serde_json::from_str(&body)?;

        let mut results = decoded.results;
        results.truncate(limit);
        Ok(results)
    }
}

/// Mock searcher for testing.
///
/// Serves canned results per query; unknown queries return an empty set.
#[derive(Default)]
pub struct MockSearcher {
    results: RwLock<HashMap<String, Vec<RawSearchResult>>>,
}

impl MockSearcher {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add results for a query (builder pattern).
    pub fn with_results(self, query: &str, results: Vec<RawSearchResult>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawSearchResult>> {
        let mut results = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        results.truncate(limit);
        Ok(results)
    }
}
