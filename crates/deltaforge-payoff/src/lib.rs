//! # DeltaForge Payoff & Hedge Engine
//!
//! Terminal payoff evaluation and static delta-hedge sizing for multi-leg
//! derivatives positions.
//!
//! ## Description
//! This crate is the computational core of DeltaForge. Given a list of
//! validated position legs (European calls/puts and linear futures) and a
//! price grid, it computes the per-leg and aggregate PnL at a fixed valuation
//! horizon (expiry), and derives the futures quantity that neutralizes the
//! option legs' directional exposure at entry.
//!
//! ### Core Subsystems
//! - **Leg Model**: Tagged contract representation with validated
//!   construction, terminal intrinsic value, and per-leg PnL.
//! - **Payoff Evaluator**: Pure, deterministic PnL curve over a price grid,
//!   with optional per-leg breakdown for renderers.
//! - **Hedge Sizing**: Net option delta aggregation and synthesis of the
//!   offsetting futures leg (static, point-in-time).
//! - **Strategy Builders**: Straddle, iron condor, and call butterfly leg
//!   assembly with strike-ordering checks.
//! - **Pricing**: Black-Scholes delta for venues that do not quote Greeks.
//!
//! Every operation is a pure function from explicit inputs to outputs; there
//! is no cross-call state, no I/O, and no blocking, so the engine may be
//! called concurrently over disjoint inputs without coordination. Early
//! exercise, discounting, dynamic rehedging, and transaction costs are out of
//! scope.
//!
//! ## References
//! - IEEE Std 1016-2009: Software Design Descriptions
//! - Black, F., & Scholes, M. (1973). The Pricing of Options and Corporate Liabilities.

pub mod error;
pub mod grid;
pub mod hedge;
pub mod leg;
pub mod payoff;
pub mod pricing;
pub mod strategy;

pub use error::{HedgeError, MissingDeltaError, ValidationError};
pub use grid::PriceGrid;
pub use hedge::{delta_neutral_legs, hedge_sizing, net_option_delta, size_hedge_leg, HedgeSizing};
pub use leg::{Leg, LegKind};
pub use payoff::{evaluate, evaluate_with_breakdown, PnlCurve};
pub use pricing::{bs_call_delta, bs_put_delta};
pub use strategy::{build_call_butterfly, build_iron_condor, build_straddle};
