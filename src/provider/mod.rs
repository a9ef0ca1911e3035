//! Sources of initialized-tick data for the swap loop.
//!
//! The simulator only ever asks two questions: where is the next
//! initialized tick within the current bitmap word, and what is the net
//! liquidity of a given tick. Both are async so that implementations can
//! fetch on demand.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TickProviderError;

pub mod bitmap;
pub mod paged;
pub mod tick_list;

pub use bitmap::BitmapTickDataProvider;
pub use paged::{PagedTickDataProvider, TickSource};
pub use tick_list::TickListDataProvider;

/// An initialized tick as stored by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tick {
    pub index: i32,
    /// Total liquidity referencing this tick.
    pub liquidity_gross: u128,
    /// Liquidity added when the price crosses this tick left to right.
    pub liquidity_net: i128,
}

impl Tick {
    pub fn new(index: i32, liquidity_gross: u128, liquidity_net: i128) -> Self {
        Self {
            index,
            liquidity_gross,
            liquidity_net,
        }
    }
}

#[async_trait]
pub trait TickDataProvider: Send + Sync {
    /// Next initialized tick at or below `tick` (`lte`) or strictly above it,
    /// looking no further than the 256-slot bitmap word that contains the
    /// search start. Returns the word boundary and `false` when the word holds
    /// no initialized tick in that direction.
    async fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickProviderError>;

    /// Data for an initialized tick.
    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError>;
}

#[async_trait]
impl<P: TickDataProvider + ?Sized> TickDataProvider for Arc<P> {
    async fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickProviderError> {
        (**self)
            .next_initialized_tick_within_one_word(tick, lte, tick_spacing)
            .await
    }

    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
        (**self).get_tick(index).await
    }
}

#[async_trait]
impl<P: TickDataProvider + ?Sized> TickDataProvider for &P {
    async fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickProviderError> {
        (**self)
            .next_initialized_tick_within_one_word(tick, lte, tick_spacing)
            .await
    }

    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
        (**self).get_tick(index).await
    }
}
