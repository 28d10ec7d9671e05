//! Synthetic package generation.
//!
//! When the live search path fails, the orchestrator still owes the caller
//! a displayable result set. Three canned templates (complete, budget,
//! luxury) are filled in from the caller's own parameters, with prices
//! drawn uniformly from the requested budget band.

use crate::rng::PackageRng;
use crate::types::{
    Agency, DurationBand, Inclusions, SearchParams, TravelPackage, VerificationLevel,
};

const AGENCY_LOCATIONS: &[&str] = &[
    "Mumbai, Maharashtra",
    "Delhi, NCR",
    "Bangalore, Karnataka",
    "Chennai, Tamil Nadu",
    "Pune, Maharashtra",
    "Hyderabad, Telangana",
    "Kolkata, West Bengal",
    "Ahmedabad, Gujarat",
];

const TRAVEL_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1544735716-392fe2489ffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1587899897387-091795e5c39c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1571896349842-33c89424de2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
];

struct Template {
    title: fn(&str) -> String,
    highlights: [&'static str; 3],
    agency_name: &'static str,
    level: VerificationLevel,
}

const TEMPLATES: &[Template] = &[
    Template {
        title: |dest| format!("Complete {dest} Experience"),
        highlights: [
            "All major attractions",
            "Professional guide",
            "Comfortable accommodation",
        ],
        agency_name: "Verified Tours India",
        level: VerificationLevel::Premium,
    },
    Template {
        title: |dest| format!("Budget-Friendly {dest} Tour"),
        highlights: [
            "Best value for money",
            "Group-friendly",
            "Essential sightseeing",
        ],
        agency_name: "Travel Pro",
        level: VerificationLevel::Verified,
    },
    Template {
        title: |dest| format!("Luxury {dest} Package"),
        highlights: [
            "Premium accommodation",
            "Private transport",
            "Gourmet meals",
        ],
        agency_name: "Holiday Experts",
        level: VerificationLevel::Premium,
    },
];

/// Generates the three synthetic packages for a failed search.
pub struct FallbackGenerator {
    rng: PackageRng,
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackGenerator {
    /// Generator with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: PackageRng::new(),
        }
    }

    /// Inject the random source (tests pass a seeded rng).
    pub fn with_rng(mut self, rng: PackageRng) -> Self {
        self.rng = rng;
        self
    }

    /// Build exactly three packages from the caller's parameters.
    pub fn generate(&mut self, params: &SearchParams) -> Vec<TravelPackage> {
        let (min, max) = params.budget.price_range();

        let duration = match params.duration {
            DurationBand::OneToTwo => "2 Days / 1 Night",
            _ => "4 Days / 3 Nights",
        };

        TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, template)| {
                let price = self.rng.int_in(min, max);
                let original_price = self.rng.chance(0.4).then(|| (price as f64 * 1.2) as u32);

                TravelPackage {
                    id: format!("fallback-{}", index + 1),
                    title: (template.title)(&params.destination),
                    destination: params.destination.clone(),
                    duration: duration.to_string(),
                    price,
                    original_price,
                    agency: Agency {
                        name: template.agency_name.to_string(),
                        location: self.rng.pick(AGENCY_LOCATIONS).to_string(),
                        rating: self.rng.rating(),
                        verified: true,
                        verification_level: template.level,
                    },
                    inclusions: Inclusions {
                        food: params.preferences.food_included,
                        accommodation: params.preferences.accommodation_type.label().to_string(),
                        transport: params.preferences.transport_included,
                        sightseeing: true,
                    },
                    highlights: template.highlights.iter().map(|h| h.to_string()).collect(),
                    image: self.rng.pick(TRAVEL_IMAGES).to_string(),
                    booking_url: format!("https://example.com/book/{}", index + 1),
                }
            })
            .collect()
    }
}
