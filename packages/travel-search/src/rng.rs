//! Injectable randomness boundary.
//!
//! The normalizer and fallback generator fill in fields the source snippet
//! gives no signal for (rating, location, stock image, coin-flip
//! inclusions). Routing every draw through [`PackageRng`] keeps those
//! components deterministic under test: seed the rng and two runs over the
//! same input produce identical packages.

/// Seedable random source for package generation.
///
/// Wraps [`fastrand::Rng`] so callers never reach for ambient (thread-local)
/// randomness. `new()` seeds from OS entropy; `with_seed()` is for tests and
/// reproducible runs.
#[derive(Debug, Clone)]
pub struct PackageRng {
    inner: fastrand::Rng,
}

impl PackageRng {
    /// Create an rng seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            inner: fastrand::Rng::new(),
        }
    }

    /// Create a deterministic rng from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform integer in `[min, max]` (inclusive).
    pub fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.inner.u32(min..=max)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.f64() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.inner.usize(..items.len())]
    }

    /// Agency rating: uniform in [3.5, 5.0], rounded to one decimal.
    pub fn rating(&mut self) -> f32 {
        let raw = self.inner.f32() * 1.5 + 3.5;
        (raw * 10.0).round() / 10.0
    }
}

impl Default for PackageRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = PackageRng::with_seed(42);
        let mut b = PackageRng::with_seed(42);

        for _ in 0..100 {
            assert_eq!(a.int_in(10_000, 39_999), b.int_in(10_000, 39_999));
            assert_eq!(a.chance(0.5), b.chance(0.5));
        }
    }

    #[test]
    fn int_in_stays_in_range() {
        let mut rng = PackageRng::with_seed(7);
        for _ in 0..1000 {
            let n = rng.int_in(10_000, 24_999);
            assert!((10_000..=24_999).contains(&n));
        }
    }

    #[test]
    fn rating_stays_in_range() {
        let mut rng = PackageRng::with_seed(3);
        for _ in 0..1000 {
            let r = rng.rating();
            assert!((3.5..=5.0).contains(&r), "rating out of range: {r}");
            // one decimal place
            assert!((r * 10.0 - (r * 10.0).round()).abs() < 1e-4);
        }
    }

    #[test]
    fn pick_covers_all_items() {
        let items = ["a", "b", "c", "d"];
        let mut rng = PackageRng::with_seed(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*rng.pick(&items));
        }
        assert_eq!(seen.len(), items.len());
    }
}
