//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// For inputs already in [0, 360) this is the identity, so results match a
/// plain `% 360.0` bit for bit whenever the raw value is non-negative.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-14 + 360.0 rounds to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        assert_eq!(normalize_360(-1e-14), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_matches_rem_for_positive() {
        for raw in [0.5, 123.456, 359.999, 1234.5678] {
            assert_eq!(normalize_360(raw).to_bits(), (raw % 360.0).to_bits());
        }
    }

    #[test]
    fn separation_wraps() {
        assert!((angular_separation(355.0, 3.0) - 8.0).abs() < 1e-12);
        assert!((angular_separation(3.0, 355.0) - 8.0).abs() < 1e-12);
        assert!((angular_separation(10.0, 190.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation(42.0, 42.0)).abs() < 1e-12);
    }
}
