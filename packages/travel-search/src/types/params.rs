//! Search parameters collected from the trip form.
//!
//! Serde representations match the original wire strings (`"10k-25k"`,
//! `"3-5"`, ...) so the JSON body the UI submits deserializes directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-entered trip parameters. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Where the user wants to go (free text).
    pub destination: String,

    /// Where the trip starts from (free text).
    pub current_location: String,

    /// Budget band per person.
    pub budget: BudgetBand,

    /// Trip length band.
    pub duration: DurationBand,

    /// Travel party size band.
    pub group_size: GroupSizeBand,

    /// Inclusion preferences.
    pub preferences: Preferences,
}

/// Inclusion preferences from the form toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub food_included: bool,
    pub accommodation_type: AccommodationPreference,
    pub transport_included: bool,
}

/// Per-person budget band, in INR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBand {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-25k")]
    Band10kTo25k,
    #[serde(rename = "25k-50k")]
    Band25kTo50k,
    #[serde(rename = "50k-100k")]
    Band50kTo100k,
    #[serde(rename = "above-100k")]
    Above100k,
}

impl BudgetBand {
    /// Inclusive price range for synthetic package generation.
    pub fn price_range(self) -> (u32, u32) {
        match self {
            BudgetBand::Under10k => (5_000, 9_999),
            BudgetBand::Band10kTo25k => (10_000, 24_999),
            BudgetBand::Band25kTo50k => (25_000, 49_999),
            BudgetBand::Band50kTo100k => (50_000, 99_999),
            BudgetBand::Above100k => (100_000, 200_000),
        }
    }

    /// Wire string, as submitted by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetBand::Under10k => "under-10k",
            BudgetBand::Band10kTo25k => "10k-25k",
            BudgetBand::Band25kTo50k => "25k-50k",
            BudgetBand::Band50kTo100k => "50k-100k",
            BudgetBand::Above100k => "above-100k",
        }
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip length band, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationBand {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11-15")]
    ElevenToFifteen,
    #[serde(rename = "15+")]
    FifteenPlus,
}

impl DurationBand {
    /// Wire string, as submitted by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            DurationBand::OneToTwo => "1-2",
            DurationBand::ThreeToFive => "3-5",
            DurationBand::SixToTen => "6-10",
            DurationBand::ElevenToFifteen => "11-15",
            DurationBand::FifteenPlus => "15+",
        }
    }
}

impl fmt::Display for DurationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel party size band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSizeBand {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Couple,
    #[serde(rename = "3-4")]
    Small,
    #[serde(rename = "5-8")]
    Medium,
    #[serde(rename = "8+")]
    Large,
}

/// Preferred accommodation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationPreference {
    Hotel,
    Resort,
    Homestay,
    Guesthouse,
    Any,
}

impl AccommodationPreference {
    /// Display label used in generated packages. `Any` resolves to the
    /// hotel default.
    pub fn label(self) -> &'static str {
        match self {
            AccommodationPreference::Hotel | AccommodationPreference::Any => "Hotel",
            AccommodationPreference::Resort => "Resort",
            AccommodationPreference::Homestay => "Homestay",
            AccommodationPreference::Guesthouse => "Guesthouse",
        }
    }
}
