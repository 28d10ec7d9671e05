//! Travel-Package Discovery Engine
//!
//! A query-driven search pipeline that turns unstructured web-search
//! snippets into fully-populated, displayable travel-package records.
//!
//! # Design
//!
//! - **Snippets in, packages out**: the snippet is the only extraction
//!   signal; every missing field resolves to a typed default so the caller
//!   always gets a complete record.
//! - **Injectable randomness**: defaults that need variety (rating,
//!   location, stock image) draw from a seedable [`PackageRng`], so tests
//!   are deterministic.
//! - **Data-driven trust**: agency verification is a domain-to-tier table
//!   ([`TrustRegistry`]), extensible without code changes.
//! - **Infallible search**: backend failures fall back to synthetic
//!   package generation; the caller never sees an error, only data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use travel_search::{SimulatedSearcher, TravelSearch};
//!
//! let search = TravelSearch::new(SimulatedSearcher::new());
//! let packages = search.search(&params).await;
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire and domain types (SearchParams, TravelPackage)
//! - [`extract`] - Pure heuristic field extractors
//! - [`normalize`] - Raw result to package normalization
//! - [`verify`] - Agency trust classification
//! - [`fallback`] - Synthetic package generation
//! - [`searcher`] - Search backend seam (simulated, HTTP, mock)
//! - [`search`] - The orchestrator

pub mod error;
pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod rng;
pub mod search;
pub mod searcher;
pub mod types;
pub mod verify;

// Re-export core types at crate root
pub use error::{Result, SearchError};
pub use fallback::FallbackGenerator;
pub use normalize::PackageNormalizer;
pub use rng::PackageRng;
pub use search::TravelSearch;
pub use searcher::{
    HttpSearcher, MockSearcher, RawSearchResult, SimulatedSearcher, WebSearcher,
};
pub use types::{
    AccommodationPreference, Agency, BudgetBand, DurationBand, GroupSizeBand, Inclusions,
    Preferences, SearchParams, TravelPackage, VerificationLevel,
};
pub use verify::TrustRegistry;
