//! Search orchestration.
//!
//! Builds the query, runs the backend, normalizes and verifies each hit.
//! The public operation is infallible: any failure along the live path is
//! absorbed by synthetic fallback generation, so the caller always gets a
//! displayable result set (possibly empty on the live path, exactly three
//! on the fallback path).

use crate::fallback::FallbackGenerator;
use crate::normalize::PackageNormalizer;
use crate::rng::PackageRng;
use crate::searcher::WebSearcher;
use crate::types::{SearchParams, TravelPackage};
use crate::verify::TrustRegistry;

/// How many raw results we ask the backend for.
const RESULT_LIMIT: usize = 8;

/// The travel-package search orchestrator.
///
/// Generic over the search backend so the simulated backend, a real HTTP
/// backend, and mocks slot in interchangeably.
pub struct TravelSearch<S> {
    searcher: S,
    registry: TrustRegistry,
    seed: Option<u64>,
}

impl<S: WebSearcher> TravelSearch<S> {
    /// Orchestrator over the given backend, with the default trust registry.
    pub fn new(searcher: S) -> Self {
        Self {
            searcher,
            registry: TrustRegistry::new(),
            seed: None,
        }
    }

    /// Use a custom trust registry.
    pub fn with_registry(mut self, registry: TrustRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Fix the random seed so normalization and fallback are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run one search. Never fails; the fallback path covers backend
    /// errors. An empty result set is a valid outcome, not an error.
    pub async fn search(&self, params: &SearchParams) -> Vec<TravelPackage> {
        let search_id = uuid::Uuid::new_v4();
        tracing::info!(
            search_id = %search_id,
            destination = %params.destination,
            "starting travel package search"
        );

        match self.run_live_search(params).await {
            Ok(packages) => {
                tracing::info!(count = packages.len(), "search complete");
                packages
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed, generating fallback packages");
                let mut generator = FallbackGenerator::new().with_rng(self.rng());
                generator.generate(params)
            }
        }
    }

    async fn run_live_search(
        &self,
        params: &SearchParams,
    ) -> crate::error::Result<Vec<TravelPackage>> {
        let query = build_query(params);
        tracing::debug!(query = %query, "querying search backend");

        let raw_results = self.searcher.search(&query, RESULT_LIMIT).await?;

        let mut normalizer = PackageNormalizer::new()
            .with_rng(self.rng())
            .with_registry(self.registry.clone());

        let mut packages: Vec<TravelPackage> = raw_results
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| normalizer.normalize(raw, index))
            .collect();

        // The normalizer stamps verified=true; the registry has the final say.
        for package in &mut packages {
            package.agency.verified = self.registry.verify(&package.booking_url);
        }

        Ok(packages)
    }

    fn rng(&self) -> PackageRng {
        match self.seed {
            Some(seed) => PackageRng::with_seed(seed),
            None => PackageRng::new(),
        }
    }
}

/// Natural-language query the backend receives.
fn build_query(params: &SearchParams) -> String {
    format!(
        "{} travel packages tour {} {} days from {} verified agencies",
        params.destination, params.budget, params.duration, params.current_location
    )
}
