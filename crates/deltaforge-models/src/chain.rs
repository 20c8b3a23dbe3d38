//! # Option Chain Snapshot Module
//!
//! Parsed option-chain data as delivered by an external market-data collaborator.
//!
//! ## Description
//! A [`ChainSnapshot`] holds one expiry's worth of per-strike call/put quotes
//! for a single underlying, together with the spot reference price at capture
//! time. The payoff engine reads strikes, side-appropriate bid/ask prices and
//! quoted deltas out of these rows; it never fetches or recomputes them.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Quoted market data for one option contract (one strike, one right).
///
/// # Fields
/// * `bid` - Best bid premium.
/// * `ask` - Best ask premium.
/// * `bid_iv` - Implied volatility at the bid, if the venue publishes it.
/// * `ask_iv` - Implied volatility at the ask, if the venue publishes it.
/// * `delta` - Quoted delta, if the venue publishes Greeks.
/// * `volume` - Traded volume over the venue's reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub bid: f64,
    pub ask: f64,
    #[serde(default)]
    pub bid_iv: Option<f64>,
    #[serde(default)]
    pub ask_iv: Option<f64>,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub volume: f64,
}

impl OptionQuote {
    /// Midpoint of the quoted bid/ask.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// One row of the chain: the call and put quoted at a single strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    pub strike: f64,
    pub call: OptionQuote,
    pub put: OptionQuote,
}

/// Snapshot of an option chain for one underlying and one expiry.
///
/// # Fields
/// * `underlying` - Asset identifier (e.g., "ETH").
/// * `expiry` - Contract expiration date shared by every row.
/// * `spot_price` - Reference price of the underlying at capture time.
/// * `rows` - Per-strike quotes, ascending by strike.
/// * `captured_at` - Capture timestamp (UTC).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub underlying: String,
    pub expiry: NaiveDate,
    pub spot_price: f64,
    pub rows: Vec<StrikeRow>,
    pub captured_at: DateTime<Utc>,
}

impl ChainSnapshot {
    /// Instantiates a new, empty chain snapshot captured now.
    pub fn new(underlying: String, expiry: NaiveDate, spot_price: f64) -> Self {
        Self {
            underlying,
            expiry,
            spot_price,
            rows: Vec::new(),
            captured_at: Utc::now(),
        }
    }

    /// Identifies the "At-The-Money" (ATM) row based on current spot.
    ///
    /// # Returns
    /// The row whose strike is closest to `spot_price`, or `None` if the
    /// snapshot has no rows.
    pub fn atm_row(&self) -> Option<&StrikeRow> {
        self.rows.iter().min_by(|a, b| {
            let da = (a.strike - self.spot_price).abs();
            let db = (b.strike - self.spot_price).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Looks up the row quoted at `strike`.
    ///
    /// Tolerates tiny float mismatch between a stored fill strike and the
    /// venue's quoted strike (relative scale 1e-8).
    pub fn row_at_strike(&self, strike: f64) -> Option<&StrikeRow> {
        let tol = (strike.abs() * 1e-8).max(1e-8);
        self.rows.iter().find(|r| (r.strike - strike).abs() <= tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(bid: f64, ask: f64, delta: Option<f64>) -> OptionQuote {
        OptionQuote { bid, ask, bid_iv: None, ask_iv: None, delta, volume: 0.0 }
    }

    fn sample_chain() -> ChainSnapshot {
        let mut chain = ChainSnapshot::new(
            "ETH".to_string(),
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            3010.0,
        );
        for strike in [2900.0, 3000.0, 3100.0] {
            chain.rows.push(StrikeRow {
                strike,
                call: quote(95.0, 105.0, Some(0.55)),
                put: quote(88.0, 92.0, Some(-0.45)),
            });
        }
        chain
    }

    #[test]
    fn test_atm_row_nearest_strike() {
        let chain = sample_chain();
        let atm = chain.atm_row().expect("chain has rows");
        assert_eq!(atm.strike, 3000.0, "3000 is nearest to spot 3010");
    }

    #[test]
    fn test_atm_row_empty_chain() {
        let chain = ChainSnapshot::new(
            "ETH".to_string(),
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            3000.0,
        );
        assert!(chain.atm_row().is_none());
    }

    #[test]
    fn test_row_at_strike_tolerates_float_noise() {
        let chain = sample_chain();
        let row = chain.row_at_strike(3000.0 + 1e-9);
        assert!(row.is_some(), "lookup should tolerate sub-tolerance noise");
        assert_eq!(row.unwrap().strike, 3000.0);
        assert!(chain.row_at_strike(2950.0).is_none(), "no row quoted at 2950");
    }

    #[test]
    fn test_quote_mid() {
        let q = quote(95.0, 105.0, None);
        assert_eq!(q.mid(), 100.0);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let chain = sample_chain();
        let json = serde_json::to_string(&chain).unwrap();
        let back: ChainSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows.len(), chain.rows.len());
        assert_eq!(back.rows[1].call.delta, Some(0.55));
    }
}
