//! The displayable travel-package record.
//!
//! Serialized field names are camelCase to match the card UI's wire shape
//! (`originalPrice`, `bookingUrl`, `verificationLevel`).

use serde::{Deserialize, Serialize};

/// A fully-populated, display-ready travel offer.
///
/// Created fresh per search batch and held in UI state until the next
/// search; never persisted. `price` is always positive, and
/// `original_price`, when present, is at least `price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    /// Unique within a result batch (`scraped-{n}` / `fallback-{n}`).
    pub id: String,

    /// Offer title, at most 60 characters plus an ellipsis.
    pub title: String,

    /// Best-guess destination, defaulting to "India".
    pub destination: String,

    /// Human-readable duration, e.g. "4 Days / 3 Nights".
    pub duration: String,

    /// Price per person, INR.
    pub price: u32,

    /// Pre-discount price, when the offer advertises one. Always >= `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,

    /// The offering agency.
    pub agency: Agency,

    /// What the package covers.
    pub inclusions: Inclusions,

    /// Up to 4 selling points, insertion order.
    pub highlights: Vec<String>,

    /// Card image URL.
    pub image: String,

    /// Outbound booking link.
    pub booking_url: String,
}

impl TravelPackage {
    /// Discount percentage the card badge shows, if an original price is
    /// advertised. Rounded to the nearest integer.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original == 0 {
            return None;
        }
        let pct = ((original - self.price) as f64 / original as f64) * 100.0;
        Some(pct.round() as u32)
    }
}

/// The agency offering a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub name: String,
    pub location: String,
    /// In [3.5, 5.0], one decimal.
    pub rating: f32,
    pub verified: bool,
    pub verification_level: VerificationLevel,
}

/// What a package covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inclusions {
    pub food: bool,
    pub accommodation: String,
    pub transport: bool,
    pub sightseeing: bool,
}

/// Three-tier trust classification for an agency.
///
/// Ordered: `Basic < Verified < Premium`, so the trust registry can take
/// the highest tier among matching domain entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    Basic,
    Verified,
    Premium,
}
