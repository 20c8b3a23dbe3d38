//! # Price Grid Module
//!
//! Validated sequence of candidate terminal underlying prices.
//!
//! The evaluator samples the payoff at each grid point; the grid must be
//! non-empty, strictly increasing, and all-positive, but need not be evenly
//! spaced. [`PriceGrid::around_spot`] synthesizes the common case of an even
//! band around the current spot (the default plotting range is +/- 20% of
//! spot over 200 points).

use serde::Serialize;

use crate::error::ValidationError;

/// Ordered, validated set of hypothetical terminal prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceGrid(Vec<f64>);

impl PriceGrid {
    /// Number of points in the default synthesized grid.
    pub const DEFAULT_STEPS: usize = 200;
    /// Band of the default synthesized grid: +/- 20% around spot.
    pub const DEFAULT_BAND: f64 = 0.2;

    /// Validates and wraps an explicit price sequence.
    ///
    /// # Parameters
    /// * `prices` - Candidate terminal prices, strictly increasing, all > 0.
    ///
    /// # Returns
    /// The grid, or the [`ValidationError`] identifying the first violation.
    pub fn new(prices: Vec<f64>) -> Result<Self, ValidationError> {
        if prices.is_empty() {
            return Err(ValidationError::EmptyPriceGrid);
        }
        for (i, &p) in prices.iter().enumerate() {
            if p <= 0.0 || !p.is_finite() {
                return Err(ValidationError::NonPositiveGridPrice(p, i));
            }
            if i > 0 && prices[i - 1] >= p {
                return Err(ValidationError::NonMonotonicGrid(prices[i - 1], p, i));
            }
        }
        Ok(Self(prices))
    }

    /// Synthesizes an evenly spaced grid spanning
    /// `[spot * (1 - band_fraction), spot * (1 + band_fraction)]`.
    ///
    /// # Parameters
    /// * `spot` - Current underlying price, must be strictly positive.
    /// * `band_fraction` - Half-width of the band relative to spot, in (0, 1).
    /// * `steps` - Number of grid points, at least 2.
    pub fn around_spot(
        spot: f64,
        band_fraction: f64,
        steps: usize,
    ) -> Result<Self, ValidationError> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(ValidationError::NonPositiveGridPrice(spot, 0));
        }
        if !(0.0..1.0).contains(&band_fraction) || band_fraction == 0.0 {
            return Err(ValidationError::InvalidBandFraction(band_fraction));
        }
        if steps < 2 {
            return Err(ValidationError::TooFewGridSteps(steps));
        }
        let lo = spot * (1.0 - band_fraction);
        let hi = spot * (1.0 + band_fraction);
        let step = (hi - lo) / (steps - 1) as f64;
        let prices = (0..steps).map(|i| lo + step * i as f64).collect();
        Ok(Self(prices))
    }

    /// Default grid for a given spot: +/- 20% over 200 points.
    pub fn default_for_spot(spot: f64) -> Result<Self, ValidationError> {
        Self::around_spot(spot, Self::DEFAULT_BAND, Self::DEFAULT_STEPS)
    }

    /// Read-only view of the grid prices.
    pub fn prices(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(PriceGrid::new(vec![]).unwrap_err(), ValidationError::EmptyPriceGrid);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let err = PriceGrid::new(vec![100.0, 0.0, 110.0]).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveGridPrice(0.0, 1));
    }

    #[test]
    fn test_rejects_non_monotonic_grid() {
        let err = PriceGrid::new(vec![100.0, 110.0, 105.0]).unwrap_err();
        assert_eq!(err, ValidationError::NonMonotonicGrid(110.0, 105.0, 2));
        // Equal adjacent prices are also rejected (strictly increasing).
        let err = PriceGrid::new(vec![100.0, 100.0]).unwrap_err();
        assert_eq!(err, ValidationError::NonMonotonicGrid(100.0, 100.0, 1));
    }

    #[test]
    fn test_accepts_uneven_spacing() {
        let grid = PriceGrid::new(vec![90.0, 100.0, 105.0, 120.0]).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.prices()[3], 120.0);
    }

    #[test]
    fn test_around_spot_spans_band() {
        let grid = PriceGrid::around_spot(3000.0, 0.2, 200).unwrap();
        assert_eq!(grid.len(), 200);
        assert!((grid.prices()[0] - 2400.0).abs() < 1e-9, "lower bound is spot * 0.8");
        assert!((grid.prices()[199] - 3600.0).abs() < 1e-9, "upper bound is spot * 1.2");
        // Strictly increasing by construction.
        for w in grid.prices().windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_around_spot_rejects_degenerate_parameters() {
        assert!(matches!(
            PriceGrid::around_spot(-1.0, 0.2, 10),
            Err(ValidationError::NonPositiveGridPrice(_, _))
        ));
        assert_eq!(
            PriceGrid::around_spot(3000.0, 1.5, 10).unwrap_err(),
            ValidationError::InvalidBandFraction(1.5)
        );
        assert_eq!(
            PriceGrid::around_spot(3000.0, 0.2, 1).unwrap_err(),
            ValidationError::TooFewGridSteps(1)
        );
    }
}
