//! Guarded division.

/// `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// Every ratio in the engine whose denominator can legitimately be zero
/// (isolated nodes, empty neighbour unions, empty snapshots) goes through
/// here instead of surfacing an error.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_resolves_to_zero() {
        assert_eq!(ratio_or_zero(3.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(0.0, 0.0), 0.0);
    }

    #[test]
    fn ordinary_division() {
        assert_eq!(ratio_or_zero(1.0, 2.0), 0.5);
    }
}
