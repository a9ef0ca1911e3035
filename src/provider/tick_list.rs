use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, MathError, TickProviderError};
use crate::math::tick_bitmap::{self, compress};
use crate::provider::{Tick, TickDataProvider};

/// Provider over a sorted, fully materialised list of initialized ticks.
///
/// Word searches behave exactly like a bitmap scan: a result is never
/// further away than the edge of the 256-slot word that holds the start of
/// the search.
#[derive(Debug, Clone)]
pub struct TickListDataProvider {
    ticks: Vec<Tick>,
    tick_spacing: i32,
}

impl TickListDataProvider {
    /// Builds a provider after checking that the list is usable: positive
    /// spacing, strictly ascending and spacing-aligned indices, and net
    /// liquidity summing to zero.
    pub fn new(ticks: impl IntoIterator<Item = Tick>, tick_spacing: i32) -> Result<Self, Error> {
        tick_bitmap::check_tick_spacing(tick_spacing)?;

        let ticks: Vec<Tick> = ticks.into_iter().collect();

        let mut net: i128 = 0;
        for (i, tick) in ticks.iter().enumerate() {
            if tick.index % tick_spacing != 0 {
                return Err(TickProviderError::TickNotAligned {
                    tick: tick.index,
                    tick_spacing,
                }
                .into());
            }
            if i > 0 && ticks[i - 1].index >= tick.index {
                return Err(TickProviderError::TicksNotSorted {
                    previous: ticks[i - 1].index,
                    next: tick.index,
                }
                .into());
            }
            net = net
                .checked_add(tick.liquidity_net)
                .ok_or(MathError::Overflow)?;
        }
        if net != 0 {
            return Err(TickProviderError::NonZeroNetLiquidity.into());
        }

        debug!(ticks = ticks.len(), tick_spacing, "Built tick list provider");
        Ok(Self {
            ticks,
            tick_spacing,
        })
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    fn check_spacing(&self, tick_spacing: i32) -> Result<(), TickProviderError> {
        if tick_spacing != self.tick_spacing {
            return Err(TickProviderError::SpacingMismatch {
                expected: self.tick_spacing,
                actual: tick_spacing,
            });
        }
        Ok(())
    }

    /// Index of the first tick strictly above `tick`.
    fn first_above(&self, tick: i32) -> usize {
        self.ticks.partition_point(|t| t.index <= tick)
    }

    fn search(&self, tick: i32, lte: bool) -> (i32, bool) {
        let compressed = compress(tick, self.tick_spacing);
        let above = self.first_above(tick);

        if lte {
            let minimum = ((compressed >> 8) << 8) * self.tick_spacing;
            match above.checked_sub(1).map(|i| self.ticks[i].index) {
                Some(index) if index >= minimum => (index, true),
                _ => (minimum, false),
            }
        } else {
            let word_pos = (compressed + 1) >> 8;
            let maximum = (((word_pos + 1) << 8) - 1) * self.tick_spacing;
            match self.ticks.get(above).map(|t| t.index) {
                Some(index) if index <= maximum => (index, true),
                _ => (maximum, false),
            }
        }
    }
}

#[async_trait]
impl TickDataProvider for TickListDataProvider {
    async fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickProviderError> {
        self.check_spacing(tick_spacing)?;
        Ok(self.search(tick, lte))
    }

    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
        self.ticks
            .binary_search_by_key(&index, |t| t.index)
            .map(|i| self.ticks[i])
            .map_err(|_| TickProviderError::TickNotFound(index))
    }
}
