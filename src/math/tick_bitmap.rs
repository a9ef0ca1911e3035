use crate::FastMap;
use crate::error::{SwapError, TickProviderError};
use crate::math::tick_math::MAX_TICK;
use alloy_primitives::U256;

/// Accepts spacings in `1..=MAX_TICK`, which keeps every word boundary
/// inside `i32`.
pub fn check_tick_spacing(tick_spacing: i32) -> Result<(), SwapError> {
    if (1..=MAX_TICK).contains(&tick_spacing) {
        Ok(())
    } else {
        Err(SwapError::InvalidTickSpacing(tick_spacing))
    }
}

/// Maps a compressed tick (`tick / tick_spacing`) to its `(word, bit)`
/// coordinates in the tick bitmap.
pub fn position(compressed: i32) -> (i16, u8) {
    ((compressed >> 8) as i16, compressed.rem_euclid(256) as u8)
}

/// `tick / tick_spacing`, rounded towards negative infinity.
pub fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

/// Bitmap word that a search starting at `tick` has to inspect.
pub fn word_to_search(tick: i32, tick_spacing: i32, lte: bool) -> i16 {
    let compressed = compress(tick, tick_spacing);
    if lte {
        position(compressed).0
    } else {
        position(compressed + 1).0
    }
}

/// Finds the next initialized tick inside `word`, which must be the word
/// returned by [`word_to_search`] for the same arguments.
///
/// With `lte` the search includes `tick` itself and walks down; otherwise
/// it starts strictly above `tick` and walks up. When nothing is set the
/// result is the last tick of the word in the search direction, reported
/// as uninitialized.
pub fn next_initialized_tick_in_word(
    word: U256,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> (i32, bool) {
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (_, bit_pos) = position(compressed);
        // bit_pos and everything below it
        let masked = word & (U256::MAX >> (255 - bit_pos as usize));

        if masked.is_zero() {
            ((compressed - bit_pos as i32) * tick_spacing, false)
        } else {
            let msb = 255 - masked.leading_zeros() as i32;
            ((compressed - (bit_pos as i32 - msb)) * tick_spacing, true)
        }
    } else {
        let (_, bit_pos) = position(compressed + 1);
        // bit_pos and everything above it
        let masked = word & (U256::MAX << bit_pos as usize);

        if masked.is_zero() {
            ((compressed + 1 + (255 - bit_pos as i32)) * tick_spacing, false)
        } else {
            let lsb = masked.trailing_zeros() as i32;
            ((compressed + 1 + (lsb - bit_pos as i32)) * tick_spacing, true)
        }
    }
}

/// Returns the bitmap word stored at `word`, or zero if absent.
pub fn get_word(bitmap: &FastMap<i16, U256>, word: i16) -> U256 {
    bitmap.get(&word).copied().unwrap_or(U256::ZERO)
}

/// Toggles the initialized flag of `tick`, which must be a multiple of
/// `tick_spacing`.
pub fn flip_tick(
    bitmap: &mut FastMap<i16, U256>,
    tick: i32,
    tick_spacing: i32,
) -> Result<(), TickProviderError> {
    if tick % tick_spacing != 0 {
        return Err(TickProviderError::TickNotAligned { tick, tick_spacing });
    }

    let (word_pos, bit_pos) = position(tick / tick_spacing);
    let word = bitmap.entry(word_pos).or_insert(U256::ZERO);
    *word ^= U256::ONE << bit_pos as usize;
    if word.is_zero() {
        bitmap.remove(&word_pos);
    }
    Ok(())
}

/// Word search over an in-memory bitmap.
pub fn next_initialized_tick_within_one_word(
    bitmap: &FastMap<i16, U256>,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> (i32, bool) {
    let word = get_word(bitmap, word_to_search(tick, tick_spacing, lte));
    next_initialized_tick_in_word(word, tick, tick_spacing, lte)
}
