/// Absolute and relative bounds under which two floats count as equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-6;
    pub const DEFAULT_RELATIVE: f64 = 1e-6;

    pub const fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Exact comparison, no slack in either direction.
    #[cfg(test)]
    pub(crate) const fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `|a - b| <= max(relative * max(|a|, |b|), absolute)`.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.relative * a.abs().max(b.abs())).max(self.absolute)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ABSOLUTE, Self::DEFAULT_RELATIVE)
    }
}

/// Share of `count` in `total` as a percentage, `0.0` for an empty total.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_absorbs_representation_error() {
        let tol = Tolerance::default();
        assert!(tol.is_close(0.1 + 0.2, 0.3));
        assert!(tol.is_close(50.0, 50.0000001));
        assert!(!tol.is_close(50.0, 50.01));
    }

    #[test]
    fn relative_term_scales_with_magnitude() {
        let tol = Tolerance::new(0.0, 1e-6);
        assert!(tol.is_close(1_000_000.0, 1_000_000.5));
        assert!(!tol.is_close(1.0, 1.5));
    }

    #[test]
    fn exact_tolerance_only_matches_identical_values() {
        let tol = Tolerance::exact();
        assert!(tol.is_close(0.25, 0.25));
        assert!(!tol.is_close(0.25, 0.25 + f64::EPSILON));
    }

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(4, 4), 100.0);
    }
}
