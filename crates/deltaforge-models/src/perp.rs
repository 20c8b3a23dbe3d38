//! # Perpetual Futures & Rates Module
//!
//! Contracts for the hedge-instrument quote and the risk-free-rate series.
//!
//! ## Description
//! [`PerpBbo`] carries the best-bid-offer of the perpetual (or dated future)
//! used as the delta-hedge instrument; its mid is what callers pass to hedge
//! sizing as the hedge leg's entry price. [`RatePoint`] is one observation of
//! an annualized risk-free-rate series, published in percent (e.g. `4.5` for
//! 4.5%). The payoff engine itself does not discount; rates are carried for
//! callers that feed them into delta recomputation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Best-bid-offer snapshot for a perpetual/futures instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerpBbo {
    /// Venue symbol (e.g., "ETH-USD-PERP").
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub captured_at: DateTime<Utc>,
}

impl PerpBbo {
    /// Midpoint of the quoted bid/ask, used as hedge-leg entry price.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// One observation of an annualized risk-free-rate series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    /// Rate in percent, as published (e.g., `4.5` means 4.5%).
    pub rate_percent: f64,
}

impl RatePoint {
    /// Rate as a decimal fraction (e.g., `0.045` for 4.5%).
    pub fn as_decimal(&self) -> f64 {
        self.rate_percent / 100.0
    }
}
