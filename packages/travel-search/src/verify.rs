//! Agency trust classification.
//!
//! A data-driven registry maps domain fragments to verification tiers, so
//! adding a platform is a data change, not a code change. The same table
//! backs both operations: tier classification for the card badge, and the
//! boolean verified flag the orchestrator stamps onto each package.

use url::Url;

use crate::types::VerificationLevel;

/// One trusted-platform entry.
#[derive(Debug, Clone)]
struct TrustedDomain {
    /// Substring matched against the URL host (e.g. `"makemytrip.com"`).
    fragment: String,
    tier: VerificationLevel,
}

/// Domain allow-list with per-domain trust tiers.
///
/// # Fail-open verification
///
/// [`TrustRegistry::verify`] returns `true` when the URL cannot be parsed
/// at all. That reproduces the shipped behavior: an unverifiable booking
/// link is presented as verified. It is a questionable trust policy and is
/// kept deliberately; see DESIGN.md before relying on this flag for
/// anything stronger than a display badge.
#[derive(Debug, Clone)]
pub struct TrustRegistry {
    entries: Vec<TrustedDomain>,
}

impl Default for TrustRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustRegistry {
    /// Registry with the default trusted travel platforms.
    pub fn new() -> Self {
        use VerificationLevel::*;

        let defaults = [
            ("makemytrip.com", Premium),
            ("yatra.com", Premium),
            ("goibibo.com", Premium),
            ("tripadvisor.com", Verified),
            ("booking.com", Verified),
            ("cleartrip.com", Basic),
            ("ixigo.com", Basic),
        ];

        Self {
            entries: defaults
                .into_iter()
                .map(|(fragment, tier)| TrustedDomain {
                    fragment: fragment.to_string(),
                    tier,
                })
                .collect(),
        }
    }

    /// Empty registry; every URL classifies as basic and unverified.
    pub fn empty() -> Self {
        Self { entries: vec![] }
    }

    /// Add a trusted domain fragment at the given tier.
    pub fn with_domain(mut self, fragment: impl Into<String>, tier: VerificationLevel) -> Self {
        self.entries.push(TrustedDomain {
            fragment: fragment.into(),
            tier,
        });
        self
    }

    /// Trust tier for a booking URL: the highest tier among matching
    /// entries, `Basic` when nothing matches or the URL has no host.
    pub fn classify(&self, url: &str) -> VerificationLevel {
        match host_of(url) {
            Some(host) => self.classify_host(&host),
            None => VerificationLevel::Basic,
        }
    }

    /// Trust tier for an already-extracted host.
    pub fn classify_host(&self, host: &str) -> VerificationLevel {
        self.entries
            .iter()
            .filter(|entry| host.contains(&entry.fragment))
            .map(|entry| entry.tier)
            .max()
            .unwrap_or(VerificationLevel::Basic)
    }

    /// Whether the booking URL belongs to any trusted platform.
    ///
    /// Fails open: an unparseable URL verifies as `true`.
    pub fn verify(&self, url: &str) -> bool {
        match host_of(url) {
            Some(host) => self
                .entries
                .iter()
                .any(|entry| host.contains(&entry.fragment)),
            None => true,
        }
    }
}

fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_trusted_host_verifies() {
        let registry = TrustRegistry::new();
        assert!(registry.verify("https://www.makemytrip.com/holidays-india/"));
        assert!(registry.verify("https://www.cleartrip.com/packages"));
    }

    #[test]
    fn unknown_host_does_not_verify() {
        let registry = TrustRegistry::new();
        assert!(!registry.verify("https://www.sketchy-travel-deals.biz/ooty"));
    }

    #[test]
    fn unparseable_url_fails_open() {
        let registry = TrustRegistry::new();
        assert!(registry.verify("not a url at all"));
        assert!(registry.verify("#"));
    }

    #[test]
    fn classification_tiers() {
        let registry = TrustRegistry::new();
        assert_eq!(
            registry.classify("https://www.makemytrip.com/x"),
            VerificationLevel::Premium
        );
        assert_eq!(
            registry.classify("https://www.booking.com/x"),
            VerificationLevel::Verified
        );
        assert_eq!(
            registry.classify("https://www.ixigo.com/x"),
            VerificationLevel::Basic
        );
        assert_eq!(
            registry.classify("https://www.trawell.in/x"),
            VerificationLevel::Basic
        );
    }

    #[test]
    fn unparseable_url_classifies_basic() {
        let registry = TrustRegistry::new();
        assert_eq!(registry.classify("::::"), VerificationLevel::Basic);
    }

    #[test]
    fn registry_extends_without_code_changes() {
        let registry =
            TrustRegistry::empty().with_domain("expedia.com", VerificationLevel::Premium);
        assert_eq!(
            registry.classify("https://www.expedia.com/deals"),
            VerificationLevel::Premium
        );
        assert!(registry.verify("https://www.expedia.com/deals"));
        assert!(!registry.verify("https://www.makemytrip.com/x"));
    }
}
