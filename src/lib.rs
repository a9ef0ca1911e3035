//! Exact off‑chain swap simulation for concentrated‑liquidity AMM pools.
//!
//! The crate predicts, to the last unit, what a swap will do on‑chain:
//! the amounts paid and received, the fee charged, and the pool price,
//! tick and liquidity the swap leaves behind. Every computation is integer
//! arithmetic that mirrors the contract, never floating point.
//!
//! This crate exposes:
//! - Pure math primitives (`math::*`): sqrt‑price/amount conversions, the
//!   single swap step, liquidity deltas and tick/price conversion.
//! - Tick data providers (`provider::*`): an in‑memory tick list, an
//!   in‑memory bitmap, and a paged provider backed by any async source.
//! - The [`SwapSimulator`], which walks the tick‑crossing loop over an
//!   immutable [`PoolSnapshot`].
//!
//! # Examples
//!
//! ## Pure math
//! ```no_run
//! use clmm_swap_sim::{math::tick_math, RESOLUTION, U256};
//!
//! let sqrt_price = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
//! assert_eq!(sqrt_price, U256::ONE << RESOLUTION);
//! ```
//!
//! ## Quoting a swap
//! ```no_run
//! use clmm_swap_sim::{
//!     math::tick_math::{get_sqrt_ratio_at_tick, MAX_TICK, MIN_TICK},
//!     provider::Tick,
//!     PoolSnapshot, SwapSimulator, U256,
//! };
//!
//! # async fn quote() -> Result<(), clmm_swap_sim::error::Error> {
//! let snapshot = PoolSnapshot {
//!     sqrt_price_x96: get_sqrt_ratio_at_tick(0)?,
//!     tick_current: 0,
//!     tick_spacing: 60,
//!     liquidity: 1_000_000_000_000,
//!     fee_pips: 30,
//! };
//! let ticks = vec![
//!     Tick::new(MIN_TICK / 60 * 60, 1_000_000_000_000, 1_000_000_000_000),
//!     Tick::new(MAX_TICK / 60 * 60, 1_000_000_000_000, -1_000_000_000_000),
//! ];
//!
//! let simulator = SwapSimulator::from_ticks(snapshot, ticks)?;
//! let amount_out = simulator
//!     .swap_exact_in(true, U256::from(1_000_000u64), None)
//!     .await?;
//! println!("amount out: {amount_out}");
//! # Ok(())
//! # }
//! ```

pub use alloy_primitives::{I256, U256};

pub mod config;
pub mod error;
mod hash;
pub mod math;
pub mod pool;
pub mod provider;

pub use config::SimulatorConfig;
pub use hash::FastMap;
pub use pool::snapshot::PoolSnapshot;
pub use pool::swap::{SwapQuote, SwapSimulator, SwapState, sqrt_price_limit_from_slippage};

/// `2^160 - 1`, the widest amount the shift‑then‑divide price path accepts.
const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0]);

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

/// Fee rates are expressed in pips out of this denominator (10000 = 100%).
pub const FEE_DENOMINATOR: u32 = 10_000;
const U256_FEE_DENOMINATOR: U256 = U256::from_limbs([FEE_DENOMINATOR as u64, 0, 0, 0]);
