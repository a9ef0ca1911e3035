use thiserror::Error;

#[derive(Debug, Error)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - underflow")]
    Underflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("State error - sqrtPrice out of bounds")]
    SqrtPriceOutOfBounds,
    #[error("State error - sqrtPrice is 0")]
    SqrtPriceIsZero,
    #[error("State error - sqrtRatio is 0")]
    SqrtRatioIsZero,

    #[error("State error - tick out of bounds")]
    TickOutOfBounds,

    #[error("State error - liquidity is 0")]
    LiquidityIsZero,

    #[error("State error - requested amount exceeds pool reserves")]
    InsufficientReserves,
}

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Swap error - sqrtPriceLimit {0} violates the bound for this direction")]
    InvalidPriceLimit(alloy_primitives::U256),
    #[error("Swap error - fee of {0} pips is not below the fee denominator")]
    InvalidFee(u32),
    #[error("Swap error - tick spacing {0} is outside 1..=887272")]
    InvalidTickSpacing(i32),
    #[error("Swap error - amount does not fit a signed 256-bit value")]
    AmountTooLarge,
    #[error("Swap error - gave up after {0} steps")]
    IterationLimitExceeded(usize),
}

#[derive(Debug, Error)]
pub enum TickProviderError {
    #[error("Tick provider error - tick {0} is not in the provider")]
    TickNotFound(i32),
    #[error("Tick provider error - tick {tick} is not a multiple of spacing {tick_spacing}")]
    TickNotAligned { tick: i32, tick_spacing: i32 },
    #[error("Tick provider error - ticks must be strictly ascending, got {previous} then {next}")]
    TicksNotSorted { previous: i32, next: i32 },
    #[error("Tick provider error - net liquidity of all ticks must sum to zero")]
    NonZeroNetLiquidity,
    #[error("Tick provider error - built for spacing {expected}, asked about spacing {actual}")]
    SpacingMismatch { expected: i32, actual: i32 },
    #[error("Tick provider error - lookup timed out")]
    Timeout,
    #[error("Tick provider error - {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TickProviderError {
    /// Wraps a backend failure, keeping it as the error source.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),

    #[error(transparent)]
    SwapError(#[from] crate::error::SwapError),

    #[error(transparent)]
    TickProviderError(#[from] crate::error::TickProviderError),
}
