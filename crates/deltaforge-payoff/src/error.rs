//! # Payoff Engine Errors
//!
//! Error taxonomy for leg construction, grid validation, and hedge sizing.
//!
//! ## Description
//! Two failure families exist. [`ValidationError`] covers malformed inputs
//! (bad leg fields, degenerate price grids, empty leg lists, mis-ordered
//! strategy strikes) and is raised at the point of the offending call.
//! [`MissingDeltaError`] is specific to hedge sizing: an option leg without a
//! quoted delta cannot be hedged, and substituting zero would silently
//! mis-size the hedge, so the engine refuses instead. Hedge-leg synthesis can
//! hit either family, so it reports through the [`HedgeError`] wrapper.
//!
//! Neither error is recovered from locally; both surface to the caller, which
//! decides whether to skip a leg, re-fetch market data, or abort.

/// Input validation failure types.
///
/// # Variants
/// * `NonPositiveQuantity` - Leg quantity must be strictly positive
/// * `NonPositiveStrike` - Option strike must be strictly positive
/// * `NegativeEntryPrice` - Entry price/premium may be zero but not negative
/// * `EmptyLegs` - Evaluation requires at least one leg
/// * `EmptyPriceGrid` - Grid must contain at least one price
/// * `NonPositiveGridPrice` - Every grid price must be strictly positive
/// * `NonMonotonicGrid` - Grid prices must be strictly increasing
/// * `InvalidBandFraction` - Synthesized grid band must lie in (0, 1)
/// * `TooFewGridSteps` - Synthesized grid needs at least two points
/// * `StrikeOrdering` - Strategy-builder strikes violate the required ordering
#[derive(Debug, Clone, PartialEq, serde::Serialize, thiserror::Error)]
pub enum ValidationError {
    /// Leg quantity must be strictly positive.
    #[error("quantity must be > 0; got {0}")]
    NonPositiveQuantity(f64),
    /// Option strike must be strictly positive.
    #[error("strike must be > 0; got {0}")]
    NonPositiveStrike(f64),
    /// Entry price (premium or futures fill) may be zero but never negative.
    #[error("entry price must be >= 0; got {0}")]
    NegativeEntryPrice(f64),
    /// At least one leg is required for evaluation.
    #[error("leg list is empty")]
    EmptyLegs,
    /// The price grid contains no points.
    #[error("price grid is empty")]
    EmptyPriceGrid,
    /// A grid price at the given index is zero or negative.
    #[error("price grid contains non-positive price {0} at index {1}")]
    NonPositiveGridPrice(f64, usize),
    /// Adjacent grid prices at the given index fail strict ascending order.
    #[error("price grid must be strictly increasing; {0} followed by {1} at index {2}")]
    NonMonotonicGrid(f64, f64, usize),
    /// Band fraction for a synthesized grid must lie strictly in (0, 1).
    #[error("grid band fraction must be in (0, 1); got {0}")]
    InvalidBandFraction(f64),
    /// A synthesized grid needs at least two points to span a range.
    #[error("grid must have at least 2 steps; got {0}")]
    TooFewGridSteps(usize),
    /// Strategy strikes do not satisfy the required ordering.
    #[error("strikes must satisfy {0}")]
    StrikeOrdering(&'static str),
}

/// Raised when hedge sizing encounters an option leg without a quoted delta.
///
/// The engine never substitutes zero for a missing delta - that would size the
/// hedge against a fictitious exposure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, thiserror::Error)]
#[error("option leg {index} ({leg}) has no delta; cannot size hedge")]
pub struct MissingDeltaError {
    /// Position of the offending leg in the input sequence.
    pub index: usize,
    /// Human-readable description of the leg (side, kind, strike).
    pub leg: String,
}

/// Failure modes of hedge-leg synthesis: a malformed hedge-instrument price,
/// or an option leg without a quoted delta.
#[derive(Debug, Clone, PartialEq, serde::Serialize, thiserror::Error)]
pub enum HedgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    MissingDelta(#[from] MissingDeltaError),
}
