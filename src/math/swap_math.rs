use crate::error::{Error, MathError, SwapError};
use crate::math::math_helpers::{mul_div, mul_div_rounding_up};
use crate::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use crate::{FEE_DENOMINATOR, U256_FEE_DENOMINATOR};
use alloy_primitives::{I256, U256};

/// Computes one bounded price move within a single liquidity range.
///
/// `amount_remaining` is positive for an exact‑input swap and negative for
/// an exact‑output swap. The direction is `zero_for_one` whenever
/// `sqrt_ratio_current_x96 >= sqrt_ratio_target_x96`. `fee_pips` is the fee
/// rate out of [`FEE_DENOMINATOR`].
///
/// Returns `(sqrt_ratio_next_x96, amount_in, amount_out, fee_amount)`. The
/// next price always lies between the current and target prices, inclusive.
pub fn compute_swap_step(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_target_x96: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<(U256, U256, U256, U256), Error> {
    if fee_pips >= FEE_DENOMINATOR {
        return Err(SwapError::InvalidFee(fee_pips).into());
    }

    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_in = !amount_remaining.is_negative();
    let remaining_abs = amount_remaining.unsigned_abs();
    let fee = U256::from(fee_pips);

    let sqrt_ratio_next_x96: U256;
    let mut amount_in = U256::ZERO;
    let mut amount_out = U256::ZERO;

    if exact_in {
        let amount_remaining_less_fee =
            mul_div(remaining_abs, U256_FEE_DENOMINATOR - fee, U256_FEE_DENOMINATOR)?;

        amount_in = if zero_for_one {
            get_amount_0_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, true)?
        } else {
            get_amount_1_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, true)?
        };

        sqrt_ratio_next_x96 = if amount_remaining_less_fee >= amount_in {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_input(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        };
    } else {
        amount_out = if zero_for_one {
            get_amount_1_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, false)?
        } else {
            get_amount_0_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, false)?
        };

        sqrt_ratio_next_x96 = if remaining_abs >= amount_out {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_output(
                sqrt_ratio_current_x96,
                liquidity,
                remaining_abs,
                zero_for_one,
            )?
        };
    }

    let reached_target = sqrt_ratio_target_x96 == sqrt_ratio_next_x96;

    // recompute whatever was not already computed for the exact range
    if zero_for_one {
        if !(reached_target && exact_in) {
            amount_in =
                get_amount_0_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, true)?;
        }
        if !(reached_target && !exact_in) {
            amount_out =
                get_amount_1_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, false)?;
        }
    } else {
        if !(reached_target && exact_in) {
            amount_in =
                get_amount_1_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, true)?;
        }
        if !(reached_target && !exact_in) {
            amount_out =
                get_amount_0_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, false)?;
        }
    }

    // never hand out more than was asked for
    if !exact_in && amount_out > remaining_abs {
        amount_out = remaining_abs;
    }

    let fee_amount = if exact_in && !reached_target {
        // the remainder of the maximum input is taken as fee
        remaining_abs
            .checked_sub(amount_in)
            .ok_or(MathError::Underflow)?
    } else {
        mul_div_rounding_up(amount_in, fee, U256_FEE_DENOMINATOR - fee)?
    };

    Ok((sqrt_ratio_next_x96, amount_in, amount_out, fee_amount))
}
