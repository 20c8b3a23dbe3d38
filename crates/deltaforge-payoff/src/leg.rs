//! # Position Leg Module
//!
//! Validated representation of one component of a multi-leg derivatives
//! position, with its terminal-value and per-leg PnL functions.
//!
//! ## Description
//! A [`Leg`] is either a European option (call or put, with a strike) or a
//! linear future/perpetual. The kind is a closed sum type, so a strike is
//! structurally present exactly when the leg is an option - there is no way to
//! construct a future carrying a stray strike. Construction validates every
//! numeric field; callers never see a partially constructed leg.
//!
//! ## PnL convention
//! Options realize PnL at expiry as `intrinsic value - premium`; a future
//! realizes PnL purely as price change from entry, so its entry price enters
//! the terminal-value formula directly and is *not* subtracted again as a cost
//! basis. See [`Leg::pnl_at`].
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use deltaforge_models::chain::OptionQuote;
use deltaforge_models::Side;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Contract kind for a position leg.
///
/// The strike lives inside the option variants so it cannot be set on a
/// future or omitted on an option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LegKind {
    /// European call option.
    Call { strike: f64 },
    /// European put option.
    Put { strike: f64 },
    /// Linear future or perpetual.
    Future,
}

impl LegKind {
    /// True for the option variants.
    pub fn is_option(&self) -> bool {
        matches!(self, LegKind::Call { .. } | LegKind::Put { .. })
    }

    /// The strike, for option variants.
    pub fn strike(&self) -> Option<f64> {
        match self {
            LegKind::Call { strike } | LegKind::Put { strike } => Some(*strike),
            LegKind::Future => None,
        }
    }
}

/// One validated component of a multi-leg position.
///
/// # Fields (via accessors)
/// * `kind` - Call/Put (with strike) or Future.
/// * `side` - Buy (long) or Sell (short).
/// * `entry_price` - Premium paid/received for options; fill price for futures.
/// * `quantity` - Unsigned size, strictly positive (fractional allowed).
/// * `delta` - Quoted per-unit delta, options only; used for hedge sizing.
///
/// Fields are private so the construction-time invariants cannot be broken
/// after the fact; the evaluator treats legs as immutable. Deserialization
/// routes through the same validation as the constructors, so a wire payload
/// cannot produce a leg the constructors would reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LegRaw")]
pub struct Leg {
    kind: LegKind,
    side: Side,
    entry_price: f64,
    quantity: f64,
    delta: Option<f64>,
}

/// Unvalidated mirror of [`Leg`] used as the deserialization input.
#[derive(Deserialize)]
struct LegRaw {
    kind: LegKind,
    side: Side,
    entry_price: f64,
    quantity: f64,
    #[serde(default)]
    delta: Option<f64>,
}

impl TryFrom<LegRaw> for Leg {
    type Error = ValidationError;

    fn try_from(raw: LegRaw) -> Result<Self, ValidationError> {
        // Zero-quantity futures are legal values (synthesized hedge legs,
        // see hedge sizing) and must survive a serialize/deserialize round
        // trip; everything else goes through the constructor checks.
        let leg = if matches!(raw.kind, LegKind::Future) && raw.quantity == 0.0 {
            if raw.entry_price < 0.0 || !raw.entry_price.is_finite() {
                return Err(ValidationError::NegativeEntryPrice(raw.entry_price));
            }
            Leg::hedge_future(raw.side, raw.entry_price, raw.quantity)
        } else {
            Leg::validated(raw.kind, raw.side, raw.entry_price, raw.quantity)?
        };
        Ok(match raw.delta {
            Some(delta) => leg.with_delta(delta),
            None => leg,
        })
    }
}

impl Leg {
    fn validated(
        kind: LegKind,
        side: Side,
        entry_price: f64,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        if quantity <= 0.0 || !quantity.is_finite() {
            return Err(ValidationError::NonPositiveQuantity(quantity));
        }
        if let Some(strike) = kind.strike() {
            if strike <= 0.0 || !strike.is_finite() {
                return Err(ValidationError::NonPositiveStrike(strike));
            }
        }
        if entry_price < 0.0 || !entry_price.is_finite() {
            return Err(ValidationError::NegativeEntryPrice(entry_price));
        }
        Ok(Self { kind, side, entry_price, quantity, delta: None })
    }

    /// Constructs a validated call leg.
    ///
    /// # Parameters
    /// * `side` - Buy or sell.
    /// * `strike` - Exercise price, must be strictly positive.
    /// * `entry_price` - Premium, must be non-negative.
    /// * `quantity` - Size, must be strictly positive.
    ///
    /// # Returns
    /// A fully validated [`Leg`], or the [`ValidationError`] naming the
    /// offending field.
    pub fn call(
        side: Side,
        strike: f64,
        entry_price: f64,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        Self::validated(LegKind::Call { strike }, side, entry_price, quantity)
    }

    /// Constructs a validated put leg.
    pub fn put(
        side: Side,
        strike: f64,
        entry_price: f64,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        Self::validated(LegKind::Put { strike }, side, entry_price, quantity)
    }

    /// Constructs a validated linear future/perpetual leg.
    ///
    /// `entry_price` is the fill price; it enters the terminal-value formula
    /// directly (see [`Leg::terminal_value`]).
    pub fn future(side: Side, entry_price: f64, quantity: f64) -> Result<Self, ValidationError> {
        Self::validated(LegKind::Future, side, entry_price, quantity)
    }

    /// Internal constructor for synthesized hedge legs, which are allowed a
    /// quantity of exactly zero so downstream evaluation stays uniform.
    /// Callers must have validated `entry_price >= 0` already.
    pub(crate) fn hedge_future(side: Side, entry_price: f64, quantity: f64) -> Self {
        debug_assert!(quantity >= 0.0 && entry_price >= 0.0);
        Self { kind: LegKind::Future, side, entry_price, quantity, delta: None }
    }

    /// Attaches a quoted delta (options only; ignored by futures math).
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Builds a call leg priced off a venue quote: buy at the ask, sell at
    /// the bid. Carries the quote's delta when present.
    pub fn call_from_quote(
        side: Side,
        strike: f64,
        quote: &OptionQuote,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        let entry = match side {
            Side::Buy => quote.ask,
            Side::Sell => quote.bid,
        };
        let leg = Self::call(side, strike, entry, quantity)?;
        Ok(match quote.delta {
            Some(delta) => leg.with_delta(delta),
            None => leg,
        })
    }

    /// Builds a put leg priced off a venue quote: buy at the ask, sell at
    /// the bid. Carries the quote's delta when present.
    pub fn put_from_quote(
        side: Side,
        strike: f64,
        quote: &OptionQuote,
        quantity: f64,
    ) -> Result<Self, ValidationError> {
        let entry = match side {
            Side::Buy => quote.ask,
            Side::Sell => quote.bid,
        };
        let leg = Self::put(side, strike, entry, quantity)?;
        Ok(match quote.delta {
            Some(delta) => leg.with_delta(delta),
            None => leg,
        })
    }

    pub fn kind(&self) -> LegKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn delta(&self) -> Option<f64> {
        self.delta
    }

    /// The strike, for option legs.
    pub fn strike(&self) -> Option<f64> {
        self.kind.strike()
    }

    /// True when the leg is a call or put.
    pub fn is_option(&self) -> bool {
        self.kind.is_option()
    }

    /// Signed size: `quantity * (+1 if buy else -1)`.
    pub fn signed_quantity(&self) -> f64 {
        self.quantity * self.side.sign()
    }

    /// Per-unit intrinsic value at a hypothetical terminal underlying price,
    /// independent of quantity and side.
    ///
    /// # Description
    /// - Call: `max(price - strike, 0)`
    /// - Put: `max(strike - price, 0)`
    /// - Future: `price - entry_price` (linear; the fill price is the one
    ///   place where entry price enters the terminal value directly)
    pub fn terminal_value(&self, price: f64) -> f64 {
        match self.kind {
            LegKind::Call { strike } => (price - strike).max(0.0),
            LegKind::Put { strike } => (strike - price).max(0.0),
            LegKind::Future => price - self.entry_price,
        }
    }

    /// Signed PnL of this leg at a hypothetical terminal underlying price.
    ///
    /// # Description
    /// `signed_quantity * (terminal_value - cost_adjustment)`, where the cost
    /// adjustment is the premium for options and zero for futures. The future
    /// already embeds its entry price in [`Leg::terminal_value`]; subtracting
    /// it again would double-count the cost basis.
    pub fn pnl_at(&self, price: f64) -> f64 {
        let cost_adjustment = match self.kind {
            LegKind::Future => 0.0,
            LegKind::Call { .. } | LegKind::Put { .. } => self.entry_price,
        };
        self.signed_quantity() * (self.terminal_value(price) - cost_adjustment)
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LegKind::Call { strike } => {
                write!(f, "{} {} call K={}", self.side, self.quantity, strike)
            }
            LegKind::Put { strike } => {
                write!(f, "{} {} put K={}", self.side, self.quantity, strike)
            }
            LegKind::Future => {
                write!(f, "{} {} future @ {}", self.side, self.quantity, self.entry_price)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_quantity() {
        let err = Leg::call(Side::Buy, 3000.0, 100.0, 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity(0.0));
        let err = Leg::future(Side::Sell, 3000.0, -1.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity(-1.0));
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        let err = Leg::put(Side::Buy, 0.0, 100.0, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveStrike(0.0));
        let err = Leg::call(Side::Buy, -50.0, 100.0, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveStrike(-50.0));
    }

    #[test]
    fn test_rejects_negative_entry_price_but_allows_zero() {
        let err = Leg::call(Side::Buy, 3000.0, -5.0, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::NegativeEntryPrice(-5.0));
        assert!(Leg::call(Side::Buy, 3000.0, 0.0, 1.0).is_ok(), "zero premium is legal");
    }

    #[test]
    fn test_future_has_no_strike() {
        let leg = Leg::future(Side::Buy, 3000.0, 1.0).unwrap();
        assert!(leg.strike().is_none());
        assert!(!leg.is_option());
    }

    #[test]
    fn test_signed_quantity() {
        let long = Leg::call(Side::Buy, 3000.0, 100.0, 2.5).unwrap();
        let short = Leg::call(Side::Sell, 3000.0, 100.0, 2.5).unwrap();
        assert_eq!(long.signed_quantity(), 2.5);
        assert_eq!(short.signed_quantity(), -2.5);
    }

    #[test]
    fn test_terminal_value_is_non_negative_for_options() {
        let call = Leg::call(Side::Buy, 100.0, 5.0, 1.0).unwrap();
        let put = Leg::put(Side::Buy, 100.0, 5.0, 1.0).unwrap();
        for price in [1.0, 50.0, 99.9, 100.0, 100.1, 250.0] {
            assert!(call.terminal_value(price) >= 0.0);
            assert!(put.terminal_value(price) >= 0.0);
        }
        // Exactly zero on the out-of-the-money side of the strike.
        assert_eq!(call.terminal_value(90.0), 0.0);
        assert_eq!(put.terminal_value(110.0), 0.0);
    }

    #[test]
    fn test_short_call_pnl_scenario() {
        // Sell 1 call K=100 for a 5.0 premium.
        let leg = Leg::call(Side::Sell, 100.0, 5.0, 1.0).unwrap();
        let expected = [(90.0, 5.0), (100.0, 5.0), (105.0, 0.0), (120.0, -15.0)];
        for (price, pnl) in expected {
            assert!(
                (leg.pnl_at(price) - pnl).abs() < 1e-12,
                "pnl at {price} should be {pnl}, got {}",
                leg.pnl_at(price)
            );
        }
    }

    #[test]
    fn test_long_future_pnl_is_linear_in_price() {
        // Buy 2 futures at 100.
        let leg = Leg::future(Side::Buy, 100.0, 2.0).unwrap();
        assert_eq!(leg.pnl_at(90.0), -20.0);
        assert_eq!(leg.pnl_at(110.0), 20.0);
        // Exact linearity: signed_quantity * (price - entry).
        for price in [50.0, 100.0, 123.456] {
            assert_eq!(leg.pnl_at(price), 2.0 * (price - 100.0));
        }
    }

    #[test]
    fn test_future_entry_price_not_double_counted() {
        // A future entered at 100 must break even at exactly 100.
        let leg = Leg::future(Side::Buy, 100.0, 1.0).unwrap();
        assert_eq!(leg.pnl_at(100.0), 0.0);
    }

    #[test]
    fn test_from_quote_uses_side_appropriate_price() {
        let quote = OptionQuote {
            bid: 95.0,
            ask: 105.0,
            bid_iv: None,
            ask_iv: None,
            delta: Some(0.55),
            volume: 0.0,
        };
        let bought = Leg::call_from_quote(Side::Buy, 3000.0, &quote, 1.0).unwrap();
        let sold = Leg::call_from_quote(Side::Sell, 3000.0, &quote, 1.0).unwrap();
        assert_eq!(bought.entry_price(), 105.0, "buyer lifts the ask");
        assert_eq!(sold.entry_price(), 95.0, "seller hits the bid");
        assert_eq!(bought.delta(), Some(0.55));
    }

    #[test]
    fn test_leg_serde_round_trip() {
        let leg = Leg::put(Side::Sell, 2800.0, 42.5, 1.5).unwrap().with_delta(-0.3);
        let json = serde_json::to_string(&leg).unwrap();
        let back: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leg);
    }

    #[test]
    fn test_deserialize_rejects_invalid_fields() {
        // A wire payload must pass the same checks as the constructors.
        let json = r#"{"kind":{"kind":"call","strike":-50.0},"side":"buy","entry_price":-5.0,"quantity":-2.0,"delta":null}"#;
        let err = serde_json::from_str::<Leg>(json).unwrap_err();
        assert!(err.to_string().contains("quantity"), "checks fire in constructor order: {err}");

        let json = r#"{"kind":{"kind":"put","strike":-1.0},"side":"sell","entry_price":5.0,"quantity":1.0,"delta":null}"#;
        let err = serde_json::from_str::<Leg>(json).unwrap_err();
        assert!(err.to_string().contains("strike"), "negative strike rejected: {err}");

        let json = r#"{"kind":{"kind":"future"},"side":"buy","entry_price":-100.0,"quantity":1.0,"delta":null}"#;
        assert!(serde_json::from_str::<Leg>(json).is_err(), "negative entry price rejected");

        // Zero quantity is only legal for synthesized hedge futures, never
        // for options.
        let json = r#"{"kind":{"kind":"call","strike":100.0},"side":"buy","entry_price":5.0,"quantity":0.0,"delta":null}"#;
        assert!(serde_json::from_str::<Leg>(json).is_err(), "zero-quantity option rejected");
    }

    #[test]
    fn test_zero_quantity_hedge_leg_round_trips() {
        let leg = Leg::hedge_future(Side::Buy, 100.0, 0.0);
        let json = serde_json::to_string(&leg).unwrap();
        let back: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leg);
    }
}
