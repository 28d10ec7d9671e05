//! Wire and domain types for travel-package search.

pub mod package;
pub mod params;

pub use package::{Agency, Inclusions, TravelPackage, VerificationLevel};
pub use params::{
    AccommodationPreference, BudgetBand, DurationBand, GroupSizeBand, Preferences, SearchParams,
};
