//! # Strategy Builders Module
//!
//! Canned multi-leg structures: straddle, iron condor, call butterfly.
//!
//! ## Description
//! Builders assemble validated leg lists for the common structures evaluated
//! by this engine. Each enforces the strike ordering that defines the
//! structure (e.g. an iron condor requires
//! `long put < short put < short call < long call`), so a mis-ordered set of
//! fills fails loudly at construction instead of producing a payoff curve for
//! a different strategy than intended.
//!
//! Builders return plain `Vec<Leg>`; deltas for hedge sizing are attached by
//! the caller from chain quotes or [`crate::pricing`].

use deltaforge_models::Side;
use tracing::debug;

use crate::error::ValidationError;
use crate::leg::Leg;

/// Long straddle: buy a call and a put at the same strike.
///
/// # Parameters
/// * `strike` - Shared strike of both legs.
/// * `call_premium` - Ask paid for the call.
/// * `put_premium` - Ask paid for the put.
/// * `quantity` - Size of each leg.
pub fn build_straddle(
    strike: f64,
    call_premium: f64,
    put_premium: f64,
    quantity: f64,
) -> Result<Vec<Leg>, ValidationError> {
    let legs = vec![
        Leg::call(Side::Buy, strike, call_premium, quantity)?,
        Leg::put(Side::Buy, strike, put_premium, quantity)?,
    ];
    debug!(strike, quantity, "built long straddle");
    Ok(legs)
}

/// Iron condor: long put / short put below spot, short call / long call above.
///
/// Strikes must satisfy `long put < short put < short call < long call`.
#[allow(clippy::too_many_arguments)]
pub fn build_iron_condor(
    long_put_strike: f64,
    long_put_premium: f64,
    short_put_strike: f64,
    short_put_premium: f64,
    short_call_strike: f64,
    short_call_premium: f64,
    long_call_strike: f64,
    long_call_premium: f64,
    quantity: f64,
) -> Result<Vec<Leg>, ValidationError> {
    if !(long_put_strike < short_put_strike
        && short_put_strike < short_call_strike
        && short_call_strike < long_call_strike)
    {
        return Err(ValidationError::StrikeOrdering(
            "long put < short put < short call < long call",
        ));
    }
    let legs = vec![
        Leg::put(Side::Buy, long_put_strike, long_put_premium, quantity)?,
        Leg::put(Side::Sell, short_put_strike, short_put_premium, quantity)?,
        Leg::call(Side::Sell, short_call_strike, short_call_premium, quantity)?,
        Leg::call(Side::Buy, long_call_strike, long_call_premium, quantity)?,
    ];
    debug!(
        long_put_strike,
        short_put_strike, short_call_strike, long_call_strike, quantity, "built iron condor"
    );
    Ok(legs)
}

/// Long call butterfly: buy one call at the lower strike, sell two at the
/// middle, buy one at the upper.
///
/// Strikes must satisfy `lower < middle < upper`.
pub fn build_call_butterfly(
    lower_strike: f64,
    lower_premium: f64,
    middle_strike: f64,
    middle_premium: f64,
    upper_strike: f64,
    upper_premium: f64,
    quantity: f64,
) -> Result<Vec<Leg>, ValidationError> {
    if !(lower_strike < middle_strike && middle_strike < upper_strike) {
        return Err(ValidationError::StrikeOrdering("lower < middle < upper"));
    }
    let legs = vec![
        Leg::call(Side::Buy, lower_strike, lower_premium, quantity)?,
        Leg::call(Side::Sell, middle_strike, middle_premium, 2.0 * quantity)?,
        Leg::call(Side::Buy, upper_strike, upper_premium, quantity)?,
    ];
    debug!(lower_strike, middle_strike, upper_strike, quantity, "built call butterfly");
    Ok(legs)
}
