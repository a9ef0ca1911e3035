use alloy_primitives::{I256, U256};
use tracing::{debug, trace, warn};

use crate::config::SimulatorConfig;
use crate::error::{Error, MathError, SwapError};
use crate::math::liquidity_math::add_delta;
use crate::math::math_helpers::mul_div;
use crate::math::swap_math::compute_swap_step;
use crate::math::tick_math::{
    MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
};
use crate::pool::snapshot::PoolSnapshot;
use crate::provider::{Tick, TickDataProvider, TickListDataProvider};

const BPS_DENOMINATOR: U256 = U256::from_limbs([10_000, 0, 0, 0]);

/// Derives a sqrt price limit from a slippage tolerance in basis points of
/// the current sqrt price.
///
/// The limit sits `slippage_bps` below the current price for `zero_for_one`
/// swaps and above it otherwise, clamped to the range a swap accepts.
pub fn sqrt_price_limit_from_slippage(
    sqrt_price_x96: U256,
    zero_for_one: bool,
    slippage_bps: u32,
) -> Result<U256, Error> {
    let slippage = U256::from(slippage_bps);

    if zero_for_one {
        let factor = BPS_DENOMINATOR.saturating_sub(slippage);
        let limit = mul_div(sqrt_price_x96, factor, BPS_DENOMINATOR)?;
        Ok(limit.max(MIN_SQRT_RATIO + U256::ONE))
    } else {
        let limit = mul_div(sqrt_price_x96, BPS_DENOMINATOR + slippage, BPS_DENOMINATOR)?;
        Ok(limit.min(MAX_SQRT_RATIO - U256::ONE))
    }
}

/// Running state of one simulated swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapState {
    /// Amount still to be swapped in (exact input, `>= 0`) or out (exact
    /// output, `< 0`).
    pub amount_specified_remaining: I256,
    /// Amount already swapped out (exact input, accumulates negatively) or
    /// in (exact output, accumulates positively, fees included).
    pub amount_calculated: I256,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    /// Liquidity in range at `sqrt_price_x96`.
    pub liquidity: u128,
    /// Fees charged so far, in the input token.
    pub fee_paid: U256,
    /// Loop iterations executed.
    pub steps: usize,
}

impl SwapState {
    fn initial(snapshot: &PoolSnapshot, amount_specified: I256) -> Self {
        Self {
            amount_specified_remaining: amount_specified,
            amount_calculated: I256::ZERO,
            sqrt_price_x96: snapshot.sqrt_price_x96,
            tick: snapshot.tick_current,
            liquidity: snapshot.liquidity,
            fee_paid: U256::ZERO,
            steps: 0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct StepComputations {
    // the price at the beginning of the step
    sqrt_price_start_x96: U256,
    // the next tick to swap to from the current tick in the swap direction
    tick_next: i32,
    // whether tick_next is initialized or not
    initialized: bool,
    // sqrt(price) for the next tick (1/0)
    sqrt_price_next_x96: U256,
    // how much is being swapped in in this step
    amount_in: U256,
    // how much is being swapped out
    amount_out: U256,
    // how much fee is being paid in
    fee_amount: U256,
}

/// Outcome of a swap from the pool's point of view: positive amounts are
/// paid into the pool, negative amounts are paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount0: I256,
    pub amount1: I256,
    /// Total fee charged, in the input token.
    pub fee_paid: U256,
    pub sqrt_price_x96_after: U256,
    pub tick_after: i32,
    pub liquidity_after: u128,
    pub steps: usize,
}

/// Off-chain replica of a pool's swap loop.
///
/// Holds an immutable [`PoolSnapshot`] and a [`TickDataProvider`]. Every
/// call starts from the snapshot, so one simulator can serve any number of
/// independent quotes.
#[derive(Debug, Clone)]
pub struct SwapSimulator<P> {
    snapshot: PoolSnapshot,
    provider: P,
    config: SimulatorConfig,
}

impl SwapSimulator<TickListDataProvider> {
    /// Simulator over an in-memory list of initialized ticks.
    pub fn from_ticks(
        snapshot: PoolSnapshot,
        ticks: impl IntoIterator<Item = Tick>,
    ) -> Result<Self, Error> {
        let provider = TickListDataProvider::new(ticks, snapshot.tick_spacing)?;
        Self::new(snapshot, provider)
    }
}

impl<P: TickDataProvider> SwapSimulator<P> {
    pub fn new(snapshot: PoolSnapshot, provider: P) -> Result<Self, Error> {
        snapshot.validate()?;
        Ok(Self {
            snapshot,
            provider,
            config: SimulatorConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: SimulatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn snapshot(&self) -> &PoolSnapshot {
        &self.snapshot
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Output received for exactly `amount_in` of the input token.
    pub async fn swap_exact_in(
        &self,
        zero_for_one: bool,
        amount_in: U256,
        sqrt_price_limit_x96: Option<U256>,
    ) -> Result<U256, Error> {
        let amount = to_signed(amount_in).ok_or(SwapError::AmountTooLarge)?;
        let state = self.swap(zero_for_one, amount, sqrt_price_limit_x96).await?;

        let amount_out = state
            .amount_calculated
            .checked_neg()
            .ok_or(MathError::Overflow)?;
        Ok(amount_out.into_raw())
    }

    /// Input required, fees included, to receive exactly `amount_out`.
    ///
    /// If the price limit or the end of liquidity is hit first, the returned
    /// input buys less than `amount_out`.
    pub async fn swap_exact_out(
        &self,
        zero_for_one: bool,
        amount_out: U256,
        sqrt_price_limit_x96: Option<U256>,
    ) -> Result<U256, Error> {
        let amount = to_signed(amount_out).ok_or(SwapError::AmountTooLarge)?;
        let state = self.swap(zero_for_one, -amount, sqrt_price_limit_x96).await?;
        Ok(state.amount_calculated.into_raw())
    }

    /// Runs the swap and reports the signed token deltas together with the
    /// pool state it leaves behind.
    pub async fn quote(
        &self,
        zero_for_one: bool,
        amount_specified: I256,
        sqrt_price_limit_x96: Option<U256>,
    ) -> Result<SwapQuote, Error> {
        let state = self
            .swap(zero_for_one, amount_specified, sqrt_price_limit_x96)
            .await?;

        let exact_input = !amount_specified.is_negative();
        let amount_used = amount_specified
            .checked_sub(state.amount_specified_remaining)
            .ok_or(MathError::Overflow)?;
        let (amount0, amount1) = if zero_for_one == exact_input {
            (amount_used, state.amount_calculated)
        } else {
            (state.amount_calculated, amount_used)
        };

        Ok(SwapQuote {
            amount0,
            amount1,
            fee_paid: state.fee_paid,
            sqrt_price_x96_after: state.sqrt_price_x96,
            tick_after: state.tick,
            liquidity_after: state.liquidity,
            steps: state.steps,
        })
    }

    /// Walks the swap loop for a signed amount: positive for exact input,
    /// negative for exact output.
    ///
    /// `sqrt_price_limit_x96` defaults to the most extreme price the swap
    /// direction allows. A limit at or beyond the current price in the trade
    /// direction leaves the state untouched.
    pub async fn swap(
        &self,
        zero_for_one: bool,
        amount_specified: I256,
        sqrt_price_limit_x96: Option<U256>,
    ) -> Result<SwapState, Error> {
        let snapshot = &self.snapshot;
        let mut state = SwapState::initial(snapshot, amount_specified);

        let sqrt_price_limit_x96 = sqrt_price_limit_x96.unwrap_or(if zero_for_one {
            MIN_SQRT_RATIO + U256::ONE
        } else {
            MAX_SQRT_RATIO - U256::ONE
        });

        if zero_for_one {
            if sqrt_price_limit_x96 <= MIN_SQRT_RATIO {
                return Err(SwapError::InvalidPriceLimit(sqrt_price_limit_x96).into());
            }
            if sqrt_price_limit_x96 >= snapshot.sqrt_price_x96 {
                return Ok(state);
            }
        } else {
            if sqrt_price_limit_x96 >= MAX_SQRT_RATIO {
                return Err(SwapError::InvalidPriceLimit(sqrt_price_limit_x96).into());
            }
            if sqrt_price_limit_x96 <= snapshot.sqrt_price_x96 {
                return Ok(state);
            }
        }

        let exact_input = !amount_specified.is_negative();

        debug!(
            zero_for_one,
            exact_input,
            amount_specified = %amount_specified,
            sqrt_price_limit_x96 = %sqrt_price_limit_x96,
            "Starting swap simulation"
        );

        while !state.amount_specified_remaining.is_zero()
            && state.sqrt_price_x96 != sqrt_price_limit_x96
        {
            if let Some(max_iterations) = self.config.max_iterations {
                if state.steps >= max_iterations {
                    warn!(
                        max_iterations,
                        tick = state.tick,
                        "Swap simulation exceeded iteration limit"
                    );
                    return Err(SwapError::IterationLimitExceeded(max_iterations).into());
                }
            }

            let mut step = StepComputations {
                sqrt_price_start_x96: state.sqrt_price_x96,
                ..StepComputations::default()
            };

            (step.tick_next, step.initialized) = self
                .provider
                .next_initialized_tick_within_one_word(
                    state.tick,
                    zero_for_one,
                    snapshot.tick_spacing,
                )
                .await?;

            // the bitmap search does not know about the tick bounds
            step.tick_next = step.tick_next.clamp(MIN_TICK, MAX_TICK);
            step.sqrt_price_next_x96 = get_sqrt_ratio_at_tick(step.tick_next)?;

            let sqrt_price_target_x96 = if zero_for_one {
                step.sqrt_price_next_x96.max(sqrt_price_limit_x96)
            } else {
                step.sqrt_price_next_x96.min(sqrt_price_limit_x96)
            };

            (
                state.sqrt_price_x96,
                step.amount_in,
                step.amount_out,
                step.fee_amount,
            ) = compute_swap_step(
                state.sqrt_price_x96,
                sqrt_price_target_x96,
                state.liquidity,
                state.amount_specified_remaining,
                snapshot.fee_pips,
            )?;

            state.fee_paid = state
                .fee_paid
                .checked_add(step.fee_amount)
                .ok_or(MathError::Overflow)?;

            let paid_in = step
                .amount_in
                .checked_add(step.fee_amount)
                .and_then(to_signed)
                .ok_or(MathError::Overflow)?;
            let paid_out = to_signed(step.amount_out).ok_or(MathError::Overflow)?;

            if exact_input {
                state.amount_specified_remaining = state
                    .amount_specified_remaining
                    .checked_sub(paid_in)
                    .ok_or(MathError::Overflow)?;
                state.amount_calculated = state
                    .amount_calculated
                    .checked_sub(paid_out)
                    .ok_or(MathError::Overflow)?;
            } else {
                state.amount_specified_remaining = state
                    .amount_specified_remaining
                    .checked_add(paid_out)
                    .ok_or(MathError::Overflow)?;
                state.amount_calculated = state
                    .amount_calculated
                    .checked_add(paid_in)
                    .ok_or(MathError::Overflow)?;
            }

            if state.sqrt_price_x96 == step.sqrt_price_next_x96 {
                if step.initialized {
                    let tick = self.provider.get_tick(step.tick_next).await?;
                    // moving left, liquidity_net applies with the opposite sign
                    let liquidity_net = if zero_for_one {
                        tick.liquidity_net
                            .checked_neg()
                            .ok_or(MathError::Overflow)?
                    } else {
                        tick.liquidity_net
                    };
                    state.liquidity = add_delta(state.liquidity, liquidity_net)?;

                    debug!(
                        tick = step.tick_next,
                        liquidity_net,
                        liquidity = state.liquidity,
                        "Crossed initialized tick"
                    );
                }

                state.tick = if zero_for_one {
                    step.tick_next - 1
                } else {
                    step.tick_next
                };
            } else if state.sqrt_price_x96 != step.sqrt_price_start_x96 {
                // recompute unless we're on a lower tick boundary and haven't moved
                state.tick = get_tick_at_sqrt_ratio(state.sqrt_price_x96)?;
            }

            state.steps += 1;
            trace!(?step, tick = state.tick, "Swap step");
        }

        debug!(
            steps = state.steps,
            amount_calculated = %state.amount_calculated,
            fee_paid = %state.fee_paid,
            tick = state.tick,
            "Finished swap simulation"
        );

        Ok(state)
    }
}

/// `value` as a non-negative `I256`, if it fits.
fn to_signed(value: U256) -> Option<I256> {
    if value > I256::MAX.into_raw() {
        None
    } else {
        Some(I256::from_raw(value))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::error::{StateError, TickProviderError};
    use crate::provider::BitmapTickDataProvider;

    const LIQUIDITY: u128 = 1_000_000_000_000;

    fn full_range_ticks(liquidity: u128) -> Vec<Tick> {
        let liquidity_net = liquidity as i128;
        vec![
            Tick::new(-887220, liquidity, liquidity_net),
            Tick::new(887220, liquidity, -liquidity_net),
        ]
    }

    #[fixture]
    fn snapshot() -> PoolSnapshot {
        PoolSnapshot {
            sqrt_price_x96: get_sqrt_ratio_at_tick(0).unwrap(),
            tick_current: 0,
            tick_spacing: 60,
            liquidity: LIQUIDITY,
            fee_pips: 30,
        }
    }

    #[fixture]
    fn simulator(snapshot: PoolSnapshot) -> SwapSimulator<TickListDataProvider> {
        SwapSimulator::from_ticks(snapshot, full_range_ticks(LIQUIDITY)).unwrap()
    }

    // ---------------- price limits ----------------

    #[rstest]
    #[case::at_min(true, MIN_SQRT_RATIO)]
    #[case::below_min(true, U256::ONE)]
    #[case::at_max(false, MAX_SQRT_RATIO)]
    #[case::above_max(false, U256::MAX)]
    #[tokio::test]
    async fn rejects_limit_outside_the_price_range(
        simulator: SwapSimulator<TickListDataProvider>,
        #[case] zero_for_one: bool,
        #[case] limit: U256,
    ) {
        let result = simulator
            .swap(zero_for_one, I256::try_from(1_000i64).unwrap(), Some(limit))
            .await;
        assert!(matches!(
            result,
            Err(Error::SwapError(SwapError::InvalidPriceLimit(l))) if l == limit
        ));
    }

    #[rstest]
    #[case::zero_for_one_at_price(true, 0)]
    #[case::zero_for_one_above_price(true, 1)]
    #[case::one_for_zero_at_price(false, 0)]
    #[case::one_for_zero_below_price(false, -1)]
    #[tokio::test]
    async fn limit_behind_the_price_returns_initial_state(
        simulator: SwapSimulator<TickListDataProvider>,
        #[case] zero_for_one: bool,
        #[case] offset: i8,
    ) {
        let price = simulator.snapshot().sqrt_price_x96;
        let limit = match offset {
            0 => price,
            o if o > 0 => price + U256::ONE,
            _ => price - U256::ONE,
        };
        let amount = I256::try_from(1_000_000i64).unwrap();

        let state = simulator.swap(zero_for_one, amount, Some(limit)).await.unwrap();

        assert_eq!(state, SwapState::initial(simulator.snapshot(), amount));
        assert_eq!(state.steps, 0);
    }

    // ---------------- loop behaviour ----------------

    #[rstest]
    #[tokio::test]
    async fn zero_amount_runs_no_steps(simulator: SwapSimulator<TickListDataProvider>) {
        let state = simulator.swap(true, I256::ZERO, None).await.unwrap();
        assert_eq!(state.steps, 0);
        assert_eq!(state.amount_calculated, I256::ZERO);

        assert_eq!(simulator.swap_exact_in(false, U256::ZERO, None).await.unwrap(), U256::ZERO);
        assert_eq!(simulator.swap_exact_out(true, U256::ZERO, None).await.unwrap(), U256::ZERO);
    }

    #[rstest]
    #[tokio::test]
    async fn exact_in_and_exact_out_agree(simulator: SwapSimulator<TickListDataProvider>) {
        let amount_out = simulator
            .swap_exact_in(true, U256::from(1_000_000u64), None)
            .await
            .unwrap();
        let amount_in = simulator.swap_exact_out(true, amount_out, None).await.unwrap();

        // rounding always favours the pool
        assert!(amount_in <= U256::from(1_000_000u64));
        assert!(U256::from(1_000_000u64) - amount_in <= U256::from(2u8));
    }

    #[rstest]
    #[tokio::test]
    async fn quote_reports_pool_side_deltas(simulator: SwapSimulator<TickListDataProvider>) {
        let amount = I256::try_from(1_000_000i64).unwrap();

        let quote = simulator.quote(true, amount, None).await.unwrap();
        assert_eq!(quote.amount0, amount);
        assert!(quote.amount1.is_negative());
        assert_eq!(quote.fee_paid, U256::from(3_000u64));
        assert!(quote.sqrt_price_x96_after < simulator.snapshot().sqrt_price_x96);

        let quote = simulator.quote(true, -amount, None).await.unwrap();
        assert_eq!(quote.amount1, -amount);
        assert!(quote.amount0.is_positive());

        let quote = simulator.quote(false, amount, None).await.unwrap();
        assert_eq!(quote.amount1, amount);
        assert!(quote.amount0.is_negative());
    }

    #[rstest]
    #[tokio::test]
    async fn snapshot_is_not_modified(simulator: SwapSimulator<TickListDataProvider>) {
        let before = *simulator.snapshot();
        let first = simulator.quote(true, I256::try_from(5_000_000i64).unwrap(), None).await.unwrap();
        let second = simulator.quote(true, I256::try_from(5_000_000i64).unwrap(), None).await.unwrap();

        assert_eq!(*simulator.snapshot(), before);
        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn draining_all_liquidity_stops_at_the_limit(
        simulator: SwapSimulator<TickListDataProvider>,
    ) {
        let state = simulator.swap(true, I256::MAX, None).await.unwrap();

        assert_eq!(state.sqrt_price_x96, MIN_SQRT_RATIO + U256::ONE);
        assert_eq!(state.liquidity, 0);
        assert!(state.amount_specified_remaining.is_positive());
    }

    #[rstest]
    #[tokio::test]
    async fn iteration_cap_aborts_long_walks(simulator: SwapSimulator<TickListDataProvider>) {
        let simulator =
            simulator.with_config(SimulatorConfig::default().with_max_iterations(Some(3)));

        let result = simulator.swap(true, I256::MAX, None).await;
        assert!(matches!(
            result,
            Err(Error::SwapError(SwapError::IterationLimitExceeded(3)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn uncapped_walk_completes(simulator: SwapSimulator<TickListDataProvider>) {
        let simulator = simulator.with_config(SimulatorConfig::default().with_max_iterations(None));
        let state = simulator.swap(false, I256::MAX, None).await.unwrap();
        assert_eq!(state.sqrt_price_x96, MAX_SQRT_RATIO - U256::ONE);
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_amount_wider_than_i256(simulator: SwapSimulator<TickListDataProvider>) {
        let result = simulator.swap_exact_in(true, U256::MAX, None).await;
        assert!(matches!(result, Err(Error::SwapError(SwapError::AmountTooLarge))));
    }

    #[rstest]
    #[tokio::test]
    async fn list_and_bitmap_providers_agree(snapshot: PoolSnapshot) {
        let ticks = vec![
            Tick::new(-887220, LIQUIDITY, LIQUIDITY as i128),
            Tick::new(-600, 7 * LIQUIDITY, 7 * LIQUIDITY as i128),
            Tick::new(120, 7 * LIQUIDITY, -(7 * LIQUIDITY as i128)),
            Tick::new(887220, LIQUIDITY, -(LIQUIDITY as i128)),
        ];
        let mut snapshot = snapshot;
        snapshot.liquidity = 8 * LIQUIDITY;

        let list = SwapSimulator::from_ticks(snapshot, ticks.clone()).unwrap();
        let bitmap = SwapSimulator::new(
            snapshot,
            BitmapTickDataProvider::from_ticks(ticks, snapshot.tick_spacing).unwrap(),
        )
        .unwrap();

        for (zero_for_one, amount) in [(true, 10i64.pow(14)), (false, 10i64.pow(14)), (true, -10i64.pow(10))] {
            let amount = I256::try_from(amount).unwrap();
            assert_eq!(
                list.swap(zero_for_one, amount, None).await.unwrap(),
                bitmap.swap(zero_for_one, amount, None).await.unwrap()
            );
        }
    }

    #[rstest]
    #[tokio::test]
    async fn missing_tick_aborts_the_swap(snapshot: PoolSnapshot) {
        // bitmap bit set without a tick record behind it
        struct Hollow;

        #[async_trait::async_trait]
        impl TickDataProvider for Hollow {
            async fn next_initialized_tick_within_one_word(
                &self,
                _tick: i32,
                _lte: bool,
                _tick_spacing: i32,
            ) -> Result<(i32, bool), TickProviderError> {
                Ok((-60, true))
            }

            async fn get_tick(&self, index: i32) -> Result<Tick, TickProviderError> {
                Err(TickProviderError::TickNotFound(index))
            }
        }

        let simulator = SwapSimulator::new(snapshot, Hollow).unwrap();
        let result = simulator.swap(true, I256::MAX, None).await;
        assert!(matches!(
            result,
            Err(Error::TickProviderError(TickProviderError::TickNotFound(-60)))
        ));
    }

    #[rstest]
    fn rejects_invalid_snapshot(mut snapshot: PoolSnapshot) {
        snapshot.sqrt_price_x96 = U256::ZERO;
        let result = SwapSimulator::from_ticks(snapshot, full_range_ticks(LIQUIDITY));
        assert!(matches!(result, Err(Error::StateError(StateError::SqrtPriceOutOfBounds))));
    }

    #[rstest]
    #[tokio::test]
    async fn borrowed_provider_matches_owned(snapshot: PoolSnapshot) {
        let provider = TickListDataProvider::new(full_range_ticks(LIQUIDITY), 60).unwrap();
        let borrowed = SwapSimulator::new(snapshot, &provider).unwrap();
        let owned = SwapSimulator::new(snapshot, provider.clone()).unwrap();

        let amount = I256::try_from(1_000_000i64).unwrap();
        assert_eq!(
            borrowed.swap(true, amount, None).await.unwrap(),
            owned.swap(true, amount, None).await.unwrap()
        );
    }

    #[rstest]
    fn rejects_spacing_beyond_the_tick_range(mut snapshot: PoolSnapshot) {
        snapshot.tick_spacing = 10_000_000;
        let result = SwapSimulator::from_ticks(snapshot, Vec::new());
        assert!(matches!(
            result,
            Err(Error::SwapError(SwapError::InvalidTickSpacing(10_000_000)))
        ));
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn widest_spacing_swaps_without_overflow(
        mut snapshot: PoolSnapshot,
        #[case] zero_for_one: bool,
    ) {
        snapshot.tick_spacing = MAX_TICK;
        let simulator = SwapSimulator::from_ticks(snapshot, Vec::new()).unwrap();

        let state = simulator
            .swap(zero_for_one, I256::try_from(1_000i64).unwrap(), None)
            .await
            .unwrap();
        assert!(state.amount_specified_remaining.is_zero());
        assert!(state.amount_calculated.is_negative());
    }

    // ---------------- slippage helper ----------------

    #[rstest]
    #[case(true, 50, 9_950)]
    #[case(false, 50, 10_050)]
    #[case(true, 0, 10_000)]
    fn slippage_limit_scales_the_price(
        #[case] zero_for_one: bool,
        #[case] bps: u32,
        #[case] expected_factor: u64,
    ) {
        let price = U256::from(10u128.pow(30));
        let limit = sqrt_price_limit_from_slippage(price, zero_for_one, bps).unwrap();
        assert_eq!(limit, U256::from(10u128.pow(26)) * U256::from(expected_factor));
    }

    #[rstest]
    #[case(true, 20_000, MIN_SQRT_RATIO + U256::ONE)]
    #[case(false, 10_000, MAX_SQRT_RATIO - U256::ONE)]
    fn slippage_limit_is_clamped(#[case] zero_for_one: bool, #[case] bps: u32, #[case] expected: U256) {
        let price = MAX_SQRT_RATIO - U256::from(10u8);
        let limit = sqrt_price_limit_from_slippage(price, zero_for_one, bps).unwrap();
        assert_eq!(limit, expected);
    }
}
