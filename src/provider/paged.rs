use std::future::Future;
use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;
use tracing::{trace, warn};

use crate::error::{Error, TickProviderError};
use crate::math::tick_bitmap;
use crate::provider::{Tick, TickDataProvider};

/// Remote pool storage the paged provider reads from, e.g. an RPC client
/// or an indexer.
#[async_trait]
pub trait TickSource: Send + Sync {
    /// Bitmap word at `word_pos` for the pool being simulated.
    async fn fetch_bitmap_word(&self, word_pos: i16) -> Result<U256, TickProviderError>;

    async fn fetch_tick(&self, index: i32) -> Result<Tick, TickProviderError>;
}

/// Provider that reads bitmap words and ticks from a [`TickSource`] as the
/// swap loop needs them. Nothing is cached between lookups.
///
/// A timeout, when set, bounds every individual lookup and requires a tokio
/// runtime with the time driver enabled.
#[derive(Debug, Clone)]
pub struct PagedTickDataProvider<S> {
    source: S,
    tick_spacing: i32,
    timeout: Option<Duration>,
}

impl<S: TickSource> PagedTickDataProvider<S> {
    pub fn new(source: S, tick_spacing: i32) -> Result<Self, Error> {
        tick_bitmap::check_tick_spacing(tick_spacing)?;
        Ok(Self {
            source,
            tick_spacing,
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn bounded<T: Send>(
        &self,
        lookup: impl Future<Output = Result<T, TickProviderError>> + Send,
    ) -> Result<T, TickProviderError> {
        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, lookup).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(timeout_ms = limit.as_millis() as u64, "Tick lookup timed out");
                    Err(TickProviderError::Timeout)
                }
            },
            None => lookup.await,
        }
    }
}

#[async_trait]
impl<S: TickSource> TickDataProvider for PagedTickDataProvider<S> {
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

        let word_pos = tick_bitmap::word_to_search(tick, tick_spacing, lte);
        trace!(word_pos, "Fetching bitmap word");
        let word = self.bounded(self.source.fetch_bitmap_word(word_pos)).await?;

        Ok(tick_bitmap::next_initialized_tick_in_word(
            word,
            tick,
            tick_spacing,
            lte,
        ))
    }

    async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
        trace!(index, "Fetching tick");
        self.bounded(self.source.fetch_tick(index)).await
    }
}
