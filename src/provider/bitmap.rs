use alloy_primitives::U256;
use async_trait::async_trait;

use crate::FastMap;
use crate::error::{Error, TickProviderError};
use crate::math::tick_bitmap;
use crate::provider::{Tick, TickDataProvider};

/// Provider laid out like pool storage: sparse 256-bit bitmap words keyed
/// by word position, plus the tick records themselves.
#[derive(Debug, Clone)]
pub struct BitmapTickDataProvider {
    tick_spacing: i32,
    bitmap: FastMap<i16, U256>,
    ticks: FastMap<i32, Tick>,
}

impl BitmapTickDataProvider {
    pub fn new(tick_spacing: i32) -> Result<Self, Error> {
        tick_bitmap::check_tick_spacing(tick_spacing)?;
        Ok(Self {
            tick_spacing,
            bitmap: FastMap::default(),
            ticks: FastMap::default(),
        })
    }

    pub fn from_ticks(
        ticks: impl IntoIterator<Item = Tick>,
        tick_spacing: i32,
    ) -> Result<Self, Error> {
        let mut provider = Self::new(tick_spacing)?;
        for tick in ticks {
            provider.insert_tick(tick)?;
        }
        Ok(provider)
    }

    /// Stores `tick`, marking it initialized. Replaces any previous record
    /// at the same index.
    pub fn insert_tick(&mut self, tick: Tick) -> Result<(), TickProviderError> {
        if !self.ticks.contains_key(&tick.index) {
            tick_bitmap::flip_tick(&mut self.bitmap, tick.index, self.tick_spacing)?;
        }
        self.ticks.insert(tick.index, tick);
        Ok(())
    }

    /// Removes the tick at `index` and clears its bitmap bit.
    pub fn remove_tick(&mut self, index: i32) -> Result<Option<Tick>, TickProviderError> {
        match self.ticks.remove(&index) {
            Some(tick) => {
                tick_bitmap::flip_tick(&mut self.bitmap, index, self.tick_spacing)?;
                Ok(Some(tick))
            }
            None => Ok(None),
        }
    }

    /// Raw bitmap word at `word_pos`, zero when no tick in it is initialized.
    pub fn word(&self, word_pos: i16) -> U256 {
        tick_bitmap::get_word(&self.bitmap, word_pos)
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

#[async_trait]
impl TickDataProvider for BitmapTickDataProvider {
    async fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickProviderError> {
        if tick_spacing != self.tick_spacing {
            return Err(TickProviderError::SpacingMismatch {
                expected: self.tick_spacing,
                actual: tick_spacing,
            });
        }
        Ok(tick_bitmap::next_initialized_tick_within_one_word(
            &self.bitmap,
            tick,
            tick_spacing,
            lte,
        ))
    }

    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
        self.ticks
            .get(&index)
            .copied()
            .ok_or(TickProviderError::TickNotFound(index))
    }
}
