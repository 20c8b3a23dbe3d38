//! # Payoff Evaluator Module
//!
//! Computes terminal PnL for a multi-leg position across a price grid.
//!
//! ## Description
//! [`evaluate`] walks every grid point, sums each leg's signed PnL at that
//! hypothetical terminal price, and returns the aggregate curve aligned
//! index-for-index with the grid. [`evaluate_with_breakdown`] additionally
//! keeps the per-leg PnL matrix (rows = legs, columns = grid points) for
//! renderers that plot each leg separately.
//!
//! ## Guarantees
//! Evaluation is a pure function of its inputs: no side effects, no shared
//! state, bit-identical results on re-evaluation. Cost is
//! `O(|legs| * |grid|)` with O(1) work per cell. A curve is either complete
//! and internally consistent or the call fails; NaN placeholders are never
//! substituted.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use serde::Serialize;

use crate::error::ValidationError;
use crate::grid::PriceGrid;
use crate::leg::Leg;

/// Sampled PnL of a strategy over a price grid.
///
/// # Fields
/// * `prices` - Grid points, ascending (copied from the input grid).
/// * `total_pnl` - Aggregate strategy PnL, aligned with `prices`.
/// * `per_leg_pnl` - Optional breakdown matrix; `per_leg_pnl[i][j]` is the
///   PnL of leg `i` at `prices[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlCurve {
    pub prices: Vec<f64>,
    pub total_pnl: Vec<f64>,
    pub per_leg_pnl: Option<Vec<Vec<f64>>>,
}

impl PnlCurve {
    /// Estimates breakeven prices: grid points where PnL is exactly zero,
    /// plus linear interpolations where PnL changes sign between adjacent
    /// points. Ascending, deduplicated by construction.
    pub fn breakeven_prices(&self) -> Vec<f64> {
        let mut crossings = Vec::new();
        for i in 1..self.prices.len() {
            let (p0, p1) = (self.prices[i - 1], self.prices[i]);
            let (y0, y1) = (self.total_pnl[i - 1], self.total_pnl[i]);
            if y0 == 0.0 {
                crossings.push(p0);
            } else if y0 * y1 < 0.0 {
                crossings.push(p0 + (p1 - p0) * (y0 / (y0 - y1)));
            }
        }
        if let (Some(&last_price), Some(&last_pnl)) = (self.prices.last(), self.total_pnl.last()) {
            if last_pnl == 0.0 {
                crossings.push(last_price);
            }
        }
        crossings
    }

    /// Maximum profit over the sampled grid.
    pub fn max_profit(&self) -> f64 {
        self.total_pnl.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Maximum loss over the sampled grid (most negative PnL).
    pub fn max_loss(&self) -> f64 {
        self.total_pnl.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

fn evaluate_inner(
    legs: &[Leg],
    grid: &PriceGrid,
    with_breakdown: bool,
) -> Result<PnlCurve, ValidationError> {
    if legs.is_empty() {
        return Err(ValidationError::EmptyLegs);
    }

    let prices = grid.prices().to_vec();
    let mut total_pnl = vec![0.0; prices.len()];
    let mut per_leg_pnl = if with_breakdown {
        Some(Vec::with_capacity(legs.len()))
    } else {
        None
    };

    for leg in legs {
        let mut row = Vec::new();
        if with_breakdown {
            row.reserve(prices.len());
        }
        for (j, &price) in prices.iter().enumerate() {
            let pnl = leg.pnl_at(price);
            total_pnl[j] += pnl;
            if with_breakdown {
                row.push(pnl);
            }
        }
        if let Some(rows) = per_leg_pnl.as_mut() {
            rows.push(row);
        }
    }

    Ok(PnlCurve { prices, total_pnl, per_leg_pnl })
}

/// Evaluates the aggregate terminal PnL curve for `legs` over `grid`.
///
/// # Parameters
/// * `legs` - Non-empty, already-validated position legs. Read-only.
/// * `grid` - Validated price grid (non-empty, ascending, positive).
///
/// # Returns
/// The aggregate [`PnlCurve`] (no per-leg breakdown), or
/// [`ValidationError::EmptyLegs`].
pub fn evaluate(legs: &[Leg], grid: &PriceGrid) -> Result<PnlCurve, ValidationError> {
    evaluate_inner(legs, grid, false)
}

/// Same as [`evaluate`] but also returns the per-leg PnL matrix.
pub fn evaluate_with_breakdown(
    legs: &[Leg],
    grid: &PriceGrid,
) -> Result<PnlCurve, ValidationError> {
    evaluate_inner(legs, grid, true)
}
