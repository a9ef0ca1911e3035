use crate::error::MathError;

/// Applies a signed liquidity delta, as happens when the price crosses an
/// initialized tick.
///
/// Liquidity can never go negative: a delta that would take it below zero
/// is reported as `MathError::Underflow`, and one that exceeds `u128` as
/// `MathError::Overflow`.
pub fn add_delta(x: u128, y: i128) -> Result<u128, MathError> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs()).ok_or(MathError::Underflow)
    } else {
        x.checked_add(y as u128).ok_or(MathError::Overflow)
    }
}
