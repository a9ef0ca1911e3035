use crate::math::math_helpers::{div_rounding_up, mul_div, mul_div_rounding_up};
use crate::{
    Q96, RESOLUTION, U160_MAX,
    error::{Error, MathError, StateError},
};
use alloy_primitives::U256;

/// Next sqrt price after adding or removing `amount` of token0, rounded up.
///
/// The price moves by `L * P / (L ± amount * P)`. The `amount * P` product
/// and the `L * 2^96 + product` sum are evaluated modulo `2^256`, exactly as
/// the contract does, and the product is checked by dividing it back out.
/// When either wrapped the price is taken from the equivalent form
/// `L * 2^96 / (L * 2^96 / P + amount)`, which cannot lose precision in the
/// rounding direction that matters.
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if amount.is_zero() {
        return Ok(sqrt_p_x96);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let product = amount.wrapping_mul(sqrt_p_x96);
    let product_fits = product / amount == sqrt_p_x96;

    if add {
        if product_fits {
            let denominator = numerator1.wrapping_add(product);
            if denominator >= numerator1 {
                return Ok(mul_div_rounding_up(numerator1, sqrt_p_x96, denominator)?);
            }
        }

        match (numerator1 / sqrt_p_x96).checked_add(amount) {
            Some(denominator) => Ok(div_rounding_up(numerator1, denominator)?),
            // denominator beyond 2^256 while the numerator is below it
            None if numerator1.is_zero() => Ok(U256::ZERO),
            None => Ok(U256::ONE),
        }
    } else {
        if !product_fits || numerator1 <= product {
            return Err(StateError::InsufficientReserves.into());
        }
        Ok(mul_div_rounding_up(numerator1, sqrt_p_x96, numerator1 - product)?)
    }
}

/// Next sqrt price after adding or removing `amount` of token1, rounded down.
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    let liquidity = U256::from(liquidity);

    let next = if add {
        let quotient = if amount <= U160_MAX {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q96, liquidity)?
        };
        sqrt_p_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)?
    } else {
        let quotient = if amount <= U160_MAX {
            div_rounding_up(amount << RESOLUTION, liquidity)?
        } else {
            mul_div_rounding_up(amount, Q96, liquidity)?
        };
        if sqrt_p_x96 <= quotient {
            return Err(StateError::InsufficientReserves.into());
        }
        sqrt_p_x96 - quotient
    };

    if next > U160_MAX {
        return Err(MathError::Overflow.into());
    }
    Ok(next)
}

/// Amount of token0 held by `liquidity` between two sqrt prices:
/// `L * 2^96 * (b - a) / b / a`. Argument order does not matter.
pub fn get_amount_0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, Error> {
    let (lower, upper) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    if lower.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = upper - lower;

    if round_up {
        Ok(div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, upper)?,
            lower,
        )?)
    } else {
        Ok(mul_div(numerator1, numerator2, upper)? / lower)
    }
}

/// Amount of token1 held by `liquidity` between two sqrt prices:
/// `L * (b - a) / 2^96`. Argument order does not matter.
pub fn get_amount_1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    let width = sqrt_ratio_a_x96.abs_diff(sqrt_ratio_b_x96);
    let liquidity = U256::from(liquidity);

    if round_up {
        mul_div_rounding_up(liquidity, width, Q96)
    } else {
        mul_div(liquidity, width, Q96)
    }
}

fn check_inputs(sqrt_p_x96: U256, liquidity: u128) -> Result<(), StateError> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero);
    }
    if liquidity == 0 {
        return Err(StateError::LiquidityIsZero);
    }
    Ok(())
}

/// Price reached after pushing `amount_in` into the pool. Rounds so that the
/// price never moves further than the input pays for.
pub fn get_next_sqrt_price_from_input(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    check_inputs(sqrt_p_x96, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_in, true)
    }
}

/// Price reached after taking `amount_out` out of the pool. Rounds so that
/// the price moves at least as far as the output requires.
pub fn get_next_sqrt_price_from_output(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    check_inputs(sqrt_p_x96, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_out, false)
    }
}
