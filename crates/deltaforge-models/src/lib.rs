//! # DeltaForge Market Data Models
//!
//! Canonical data contracts shared between the payoff engine and external
//! market-data collaborators.
//!
//! ## Description
//! This crate defines the parsed, already-numeric shapes the payoff engine
//! consumes: option-chain snapshots (per-strike call/put quotes with optional
//! Greeks), perpetual-futures best-bid-offer quotes used to price hedge legs,
//! and risk-free-rate observations. Transport concerns (REST polling, retry,
//! response schemas) live entirely outside this workspace; these types are the
//! boundary.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions

pub mod chain;
pub mod perp;
pub mod side;

pub use chain::{ChainSnapshot, OptionQuote, StrikeRow};
pub use perp::{PerpBbo, RatePoint};
pub use side::Side;
