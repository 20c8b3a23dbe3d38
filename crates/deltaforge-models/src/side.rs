//! # Position Side Module
//!
//! Canonical buy/sell direction with an explicit sign convention.
//!
//! ## Description
//! Every signed-quantity computation in the workspace goes through
//! [`Side::sign`] rather than inline `if buy { 1.0 } else { -1.0 }` arithmetic,
//! so the convention lives in exactly one tested place.

use serde::{Deserialize, Serialize};

/// Direction of a position leg: long (buy) or short (sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Long exposure; contributes `+1` to signed quantity.
    Buy,
    /// Short exposure; contributes `-1` to signed quantity.
    Sell,
}

impl Side {
    /// Multiplier applied to an unsigned quantity to obtain signed exposure.
    ///
    /// # Returns
    /// `+1.0` for [`Side::Buy`], `-1.0` for [`Side::Sell`].
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }

    /// The opposing direction.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}
