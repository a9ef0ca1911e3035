use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::FEE_DENOMINATOR;
use crate::error::{Error, StateError, SwapError};
use crate::math::tick_bitmap::check_tick_spacing;
use crate::math::tick_math::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};

/// Pool state a simulation starts from. Never modified by a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Current sqrt price as a Q64.96 value.
    pub sqrt_price_x96: U256,
    pub tick_current: i32,
    pub tick_spacing: i32,
    /// Liquidity active at the current price.
    pub liquidity: u128,
    /// Swap fee in pips out of [`FEE_DENOMINATOR`].
    pub fee_pips: u32,
}

impl PoolSnapshot {
    /// Rejects snapshots no pool could be in.
    pub fn validate(&self) -> Result<(), Error> {
        check_tick_spacing(self.tick_spacing)?;
        if self.fee_pips >= FEE_DENOMINATOR {
            return Err(SwapError::InvalidFee(self.fee_pips).into());
        }
        if self.sqrt_price_x96 < MIN_SQRT_RATIO || self.sqrt_price_x96 >= MAX_SQRT_RATIO {
            return Err(StateError::SqrtPriceOutOfBounds.into());
        }
        if !(MIN_TICK..=MAX_TICK).contains(&self.tick_current) {
            return Err(StateError::TickOutOfBounds.into());
        }
        Ok(())
    }
}
