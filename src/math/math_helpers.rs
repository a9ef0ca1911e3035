use crate::error::MathError;
use alloy_primitives::U256;

const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Computes `floor(a * b / denominator)` over the full 512‑bit product.
///
/// The product is never truncated: when it does not fit 256 bits it is
/// carried as a `(prod1, prod0)` pair and divided with a modular inverse.
/// Returns `MathError::Overflow` only when the quotient itself needs more
/// than 256 bits.
pub fn mul_div(a: U256, b: U256, mut denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    // 512-bit product split into high (prod1) and low (prod0) words
    let mm = a.mul_mod(b, U256::MAX);
    let mut prod0 = a.wrapping_mul(b);
    let (mut prod1, borrow) = mm.overflowing_sub(prod0);
    if borrow {
        prod1 = prod1.wrapping_sub(U256::ONE);
    }

    if prod1.is_zero() {
        return Ok(prod0 / denominator);
    }

    if denominator <= prod1 {
        return Err(MathError::Overflow);
    }

    let remainder = a.mul_mod(b, denominator);
    let (low, borrow) = prod0.overflowing_sub(remainder);
    prod0 = low;
    if borrow {
        prod1 = prod1.wrapping_sub(U256::ONE);
    }

    // strip the power-of-two factor from the denominator
    let twos = denominator & denominator.wrapping_neg();
    denominator /= twos;
    prod0 /= twos;
    let flip = twos.wrapping_neg().wrapping_div(twos).wrapping_add(U256::ONE);
    prod0 |= prod1.wrapping_mul(flip);

    // inverse of the odd denominator mod 2^256, correct to 8 bits then
    // doubled by each Newton-Raphson step
    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;
    for _ in 0..6 {
        inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)));
    }

    Ok(prod0.wrapping_mul(inv))
}

/// `ceil(a * b / denominator)` with the same 512‑bit intermediate as
/// [`mul_div`]. This is the rounding primitive every "round up" path in
/// the crate goes through.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let result = mul_div(a, b, denominator)?;

    if a.mul_mod(b, denominator).is_zero() {
        Ok(result)
    } else {
        result.checked_add(U256::ONE).ok_or(MathError::Overflow)
    }
}

/// `ceil(a / b)`.
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::ONE)
    }
}
