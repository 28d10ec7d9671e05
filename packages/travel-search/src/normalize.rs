//! Raw result to travel package normalization.
//!
//! Turns one raw search hit into a fully-populated, display-ready package.
//! The contract is "always produce a complete record even with sparse
//! source data": each field takes the extractor's answer when the snippet
//! carries a signal, and a typed default (fixed or drawn from the injected
//! rng) otherwise. The one exception is the URL: a record whose URL cannot
//! be parsed is dropped with a warning, never surfaced to the caller.

use url::Url;

use crate::extract;
use crate::rng::PackageRng;
use crate::searcher::RawSearchResult;
use crate::types::{Agency, Inclusions, TravelPackage};
use crate::verify::TrustRegistry;

const MAX_TITLE_CHARS: usize = 60;

/// Price range used when the snippet has no currency token: [10000, 40000).
const DEFAULT_PRICE_MIN: u32 = 10_000;
const DEFAULT_PRICE_MAX: u32 = 39_999;

const DEFAULT_DESTINATION: &str = "India";

const FALLBACK_DURATIONS: &[&str] = &[
    "3 Days / 2 Nights",
    "4 Days / 3 Nights",
    "5 Days / 4 Nights",
    "6 Days / 5 Nights",
];

const ACCOMMODATION_TYPES: &[&str] = &["Hotel", "Resort", "Homestay", "Guesthouse"];

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

/// Normalizes raw search hits into display-ready packages.
///
/// Holds the rng so a whole batch shares one random stream; construct with
/// [`PackageRng::with_seed`] for reproducible output.
pub struct PackageNormalizer {
    rng: PackageRng,
    registry: TrustRegistry,
}

impl Default for PackageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageNormalizer {
    /// Normalizer with OS-seeded randomness and the default trust registry.
    pub fn new() -> Self {
        Self {
            rng: PackageRng::new(),
            registry: TrustRegistry::new(),
        }
    }

    /// Inject the random source (tests pass a seeded rng).
    pub fn with_rng(mut self, rng: PackageRng) -> Self {
        self.rng = rng;
        self
    }

    /// Use a custom trust registry for tier classification.
    pub fn with_registry(mut self, registry: TrustRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Normalize one raw result into a package.
    ///
    /// Returns `None` when the record is unusable (malformed URL); the
    /// failure is logged at `warn` and the caller skips the record.
    pub fn normalize(&mut self, raw: &RawSearchResult, index: usize) -> Option<TravelPackage> {
        let url = match Url::parse(&raw.url) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(url = %raw.url, error = %err, "dropping result with malformed URL");
                return None;
            }
        };
        let host = match url.host_str() {
            Some(host) => host.to_string(),
            None => {
                tracing::warn!(url = %raw.url, "dropping result with hostless URL");
                return None;
            }
        };

        let title = raw
            .title
            .clone()
            .unwrap_or_else(|| format!("Travel Package {}", index + 1));
        let content = raw.content.as_str();
        let lower = content.to_lowercase();

        let price = extract::extract_price(content)
            .unwrap_or_else(|| self.rng.int_in(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX));

        let destination = extract::extract_destination(content, &title)
            .unwrap_or(DEFAULT_DESTINATION)
            .to_string();

        let duration = extract::extract_duration(content)
            .unwrap_or_else(|| self.rng.pick(FALLBACK_DURATIONS).to_string());

        let accommodation = extract::extract_accommodation(content)
            .unwrap_or_else(|| *self.rng.pick(ACCOMMODATION_TYPES))
            .to_string();

        // Keyword signal OR a coin flip: demo liveliness, not extraction.
        let food = lower.contains("meal") || lower.contains("food") || self.rng.chance(0.5);
        let transport =
            lower.contains("transport") || lower.contains("cab") || self.rng.chance(0.4);
        let sightseeing = lower.contains("sightseeing") || self.rng.chance(0.3);

        let original_price = self
            .rng
            .chance(0.3)
            .then(|| discounted_original(price));

        let package = TravelPackage {
            id: format!("scraped-{}", index + 1),
            title: truncate_title(&title),
            destination,
            duration,
            price,
            original_price,
            agency: Agency {
                name: agency_name_from_host(&host),
                location: self.rng.pick(AGENCY_LOCATIONS).to_string(),
                rating: self.rng.rating(),
                verified: true,
                verification_level: self.registry.classify_host(&host),
            },
            inclusions: Inclusions {
                food,
                accommodation,
                transport,
                sightseeing,
            },
            highlights: extract::extract_highlights(content, &title)
                .into_iter()
                .map(str::to_string)
                .collect(),
            image: self.rng.pick(TRAVEL_IMAGES).to_string(),
            booking_url: raw.url.clone(),
        };

        Some(package)
    }
}

/// Advertised pre-discount price: 1.2x, so it always exceeds `price`.
fn discounted_original(price: u32) -> u32 {
    (price as f64 * 1.2).floor() as u32
}

/// Cap at 60 characters, appending an ellipsis when truncated.
fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let mut truncated: String = title.chars().take(MAX_TITLE_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        title.to_string()
    }
}

/// Agency name from the URL host: strip `www.`, take the first dot-label,
/// capitalize the first letter.
fn agency_name_from_host(host: &str) -> String {
    let stripped = host.strip_prefix("www.").unwrap_or(host);
    let label = stripped.split('.').next().unwrap_or(stripped);
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seeded() -> PackageNormalizer {
        PackageNormalizer::new().with_rng(PackageRng::with_seed(1))
    }

    fn raw(url: &str, content: &str) -> RawSearchResult {
        RawSearchResult::new(url, content)
    }

    #[test]
    fn extracted_price_is_exact() {
        let result = raw(
            "https://www.swantour.com/ooty",
            "Premium packages starting at ₹11,250 per person",
        );
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.price, 11_250);
    }

    #[test]
    fn missing_price_falls_in_default_range() {
        let result = raw("https://www.example.com/ooty", "a lovely trip");
        for seed in 0..50 {
            let mut normalizer =
                PackageNormalizer::new().with_rng(PackageRng::with_seed(seed));
            let pkg = normalizer.normalize(&result, 0).unwrap();
            assert!((10_000..40_000).contains(&pkg.price));
        }
    }

    #[test]
    fn long_title_truncated_to_sixty_plus_ellipsis() {
        let long_title = "a".repeat(61);
        let result = raw("https://www.example.com/x", "snippet").with_title(long_title);
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.title.chars().count(), 63);
        assert!(pkg.title.ends_with("..."));
        assert_eq!(&pkg.title[..60], "a".repeat(60).as_str());
    }

    #[test]
    fn short_title_unchanged() {
        let result =
            raw("https://www.example.com/x", "snippet").with_title("Ooty Weekend Getaway");
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.title, "Ooty Weekend Getaway");
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let result = raw("https://www.example.com/x", "snippet");
        let pkg = seeded().normalize(&result, 4).unwrap();
        assert_eq!(pkg.title, "Travel Package 5");
    }

    #[test]
    fn duration_parsed_from_snippet() {
        let result = raw("https://www.example.com/x", "enjoy 5 days in the hills");
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.duration, "5 Days / 4 Nights");
    }

    #[test]
    fn destination_defaults_to_india() {
        let result = raw("https://www.example.com/x", "a mystery trip");
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.destination, "India");
    }

    #[test]
    fn keyword_forces_inclusion_regardless_of_rng() {
        let result = raw(
            "https://www.example.com/x",
            "all meals, private transport, and sightseeing included",
        );
        for seed in 0..20 {
            let mut normalizer =
                PackageNormalizer::new().with_rng(PackageRng::with_seed(seed));
            let pkg = normalizer.normalize(&result, 0).unwrap();
            assert!(pkg.inclusions.food);
            assert!(pkg.inclusions.transport);
            assert!(pkg.inclusions.sightseeing);
        }
    }

    #[test]
    fn agency_name_derived_from_domain() {
        let result = raw("https://www.makemytrip.com/holidays", "trip");
        let pkg = seeded().normalize(&result, 0).unwrap();
        assert_eq!(pkg.agency.name, "Makemytrip");
        assert_eq!(
            pkg.agency.verification_level,
            crate::types::VerificationLevel::Premium
        );
    }

    #[test]
    fn malformed_url_drops_record() {
        let result = raw("#", "snippet with ₹9,999");
        assert!(seeded().normalize(&result, 0).is_none());
    }

    #[test]
    fn same_seed_same_output() {
        let result = raw("https://www.example.com/x", "sparse snippet");

        let a = PackageNormalizer::new()
            .with_rng(PackageRng::with_seed(99))
            .normalize(&result, 0)
            .unwrap();
        let b = PackageNormalizer::new()
            .with_rng(PackageRng::with_seed(99))
            .normalize(&result, 0)
            .unwrap();

        assert_eq!(a.price, b.price);
        assert_eq!(a.duration, b.duration);
        assert_eq!(a.agency.rating, b.agency.rating);
        assert_eq!(a.image, b.image);
    }

    #[test]
    fn randomized_fields_stay_in_legal_ranges() {
        let result = raw("https://www.example.com/x", "sparse snippet");
        for seed in 0..200 {
            let mut normalizer =
                PackageNormalizer::new().with_rng(PackageRng::with_seed(seed));
            let pkg = normalizer.normalize(&result, 0).unwrap();

            assert!(pkg.price > 0);
            assert!((3.5..=5.0).contains(&pkg.agency.rating));
            assert!(FALLBACK_DURATIONS.contains(&pkg.duration.as_str()));
            assert!(ACCOMMODATION_TYPES.contains(&pkg.inclusions.accommodation.as_str()));
            assert!(AGENCY_LOCATIONS.contains(&pkg.agency.location.as_str()));
            assert!(TRAVEL_IMAGES.contains(&pkg.image.as_str()));
            if let Some(original) = pkg.original_price {
                assert!(original >= pkg.price);
            }
        }
    }

    proptest! {
        #[test]
        fn title_cap_holds_for_any_title(title in ".{0,200}") {
            let out = truncate_title(&title);
            let count = title.chars().count();
            if count > 60 {
                prop_assert_eq!(out.chars().count(), 63);
                prop_assert!(out.ends_with("..."));
            } else {
                prop_assert_eq!(out, title);
            }
        }

        #[test]
        fn any_currency_amount_roundtrips(amount in 1u32..10_000_000) {
            let content = format!("grab it for ₹{} today", amount);
            prop_assert_eq!(extract::extract_price(&content), Some(amount));
        }
    }
}
