//! # Delta Hedge Sizing Module
//!
//! Net option-delta aggregation and static hedge-leg synthesis.
//!
//! ## Description
//! [`net_option_delta`] sums `signed_quantity * delta` over the option legs of
//! a position (futures legs do not contribute; their delta is handled by the
//! hedge itself). [`size_hedge_leg`] negates that exposure and synthesizes a
//! futures leg that zeroes the position's directional exposure at entry.
//!
//! The hedge is static and point-in-time: it is computed once against the
//! deltas quoted at construction and is never recomputed as price or time
//! evolve. Dynamic rehedging is an explicit non-goal of this engine.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use deltaforge_models::Side;
use serde::Serialize;
use tracing::debug;

use crate::error::{HedgeError, MissingDeltaError, ValidationError};
use crate::leg::Leg;

/// Derived hedge-sizing scalars, computed on demand and never stored.
///
/// # Fields
/// * `net_option_delta` - Aggregate signed delta of the option legs.
/// * `hedge_quantity` - Signed futures quantity that offsets it (`-net`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HedgeSizing {
    pub net_option_delta: f64,
    pub hedge_quantity: f64,
}

/// Aggregate signed delta of the option legs.
///
/// # Parameters
/// * `legs` - Position legs; only calls and puts contribute.
///
/// # Returns
/// `Σ signed_quantity * delta` over option legs, or a [`MissingDeltaError`]
/// naming the first option leg that carries no delta. Zero is never silently
/// substituted for a missing delta - that would mis-size the hedge.
pub fn net_option_delta(legs: &[Leg]) -> Result<f64, MissingDeltaError> {
    let mut net = 0.0;
    for (index, leg) in legs.iter().enumerate() {
        if !leg.is_option() {
            continue;
        }
        let delta = leg
            .delta()
            .ok_or_else(|| MissingDeltaError { index, leg: leg.to_string() })?;
        net += leg.signed_quantity() * delta;
    }
    Ok(net)
}

/// Computes the hedge-sizing scalars for a set of legs.
pub fn hedge_sizing(legs: &[Leg]) -> Result<HedgeSizing, MissingDeltaError> {
    let net = net_option_delta(legs)?;
    Ok(HedgeSizing { net_option_delta: net, hedge_quantity: -net })
}

/// Synthesizes the futures leg that neutralizes the option legs' delta.
///
/// # Parameters
/// * `legs` - Position legs whose option deltas define the exposure.
/// * `hedge_entry_price` - Current mid/BBO of the hedge instrument, supplied
///   by the caller from the market-data collaborator. Must be non-negative
///   and finite; it becomes the synthesized leg's entry price.
///
/// # Returns
/// A `future` leg with `side = Buy` if the hedge quantity is non-negative,
/// else `Sell`, and `quantity = |hedge_quantity|`. A zero-delta position
/// yields a zero-quantity leg rather than no leg, so downstream evaluation
/// stays uniform; dropping zero-quantity legs is caller policy. Fails with
/// [`HedgeError::Validation`] on a negative or non-finite price and
/// [`HedgeError::MissingDelta`] when an option leg carries no delta.
pub fn size_hedge_leg(legs: &[Leg], hedge_entry_price: f64) -> Result<Leg, HedgeError> {
    if hedge_entry_price < 0.0 || !hedge_entry_price.is_finite() {
        return Err(ValidationError::NegativeEntryPrice(hedge_entry_price).into());
    }
    let sizing = hedge_sizing(legs)?;
    let side = if sizing.hedge_quantity >= 0.0 { Side::Buy } else { Side::Sell };
    let quantity = sizing.hedge_quantity.abs();
    debug!(
        net_option_delta = sizing.net_option_delta,
        hedge_quantity = sizing.hedge_quantity,
        %side,
        "sizing static delta hedge"
    );
    Ok(Leg::hedge_future(side, hedge_entry_price, quantity))
}

/// Convenience: the original legs with the synthesized hedge leg appended,
/// ready for evaluation as a delta-neutral position.
pub fn delta_neutral_legs(
    legs: &[Leg],
    hedge_entry_price: f64,
) -> Result<Vec<Leg>, HedgeError> {
    let hedge = size_hedge_leg(legs, hedge_entry_price)?;
    let mut all = legs.to_vec();
    all.push(hedge);
    Ok(all)
}
