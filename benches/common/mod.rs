#![allow(dead_code)]

use std::hint::black_box;

use clmm_swap_sim::{
    FastMap, I256, U256,
    math::{liquidity_math, math_helpers, sqrt_price_math, swap_math, tick_bitmap, tick_math},
    provider::Tick,
};
use criterion::Criterion;

pub const LIQUIDITY: u128 = 1_000_000_000_000_000_000;

/// Positions stacked every `spacing` ticks around the current price, each
/// adding `LIQUIDITY` over its own range.
pub fn dense_ticks(count: i32, spacing: i32) -> Vec<Tick> {
    let mut ticks = Vec::with_capacity(2 * count as usize);
    for i in 1..=count {
        ticks.push(Tick::new(-i * spacing, LIQUIDITY, LIQUIDITY as i128));
    }
    ticks.reverse();
    for i in 1..=count {
        ticks.push(Tick::new(i * spacing, LIQUIDITY, -(LIQUIDITY as i128)));
    }
    ticks
}

pub fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");
    group.bench_function("get_sqrt_ratio_at_tick", |b| {
        b.iter(|| tick_math::get_sqrt_ratio_at_tick(black_box(-123_456)))
    });

    let sqrt_price = tick_math::get_sqrt_ratio_at_tick(98_765).unwrap();
    group.bench_function("get_tick_at_sqrt_ratio", |b| {
        b.iter(|| tick_math::get_tick_at_sqrt_ratio(black_box(sqrt_price)))
    });
    group.finish();
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let sqrt_price = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
    let lower = tick_math::get_sqrt_ratio_at_tick(-600).unwrap();
    let amount = U256::from(10u64.pow(18));

    let mut group = c.benchmark_group("sqrt_price_math");
    group.bench_function("get_next_sqrt_price_from_input", |b| {
        b.iter(|| {
            sqrt_price_math::get_next_sqrt_price_from_input(
                black_box(sqrt_price),
                black_box(LIQUIDITY),
                black_box(amount),
                true,
            )
        })
    });
    group.bench_function("get_amount_0_delta", |b| {
        b.iter(|| {
            sqrt_price_math::get_amount_0_delta(black_box(lower), black_box(sqrt_price), LIQUIDITY, true)
        })
    });
    group.bench_function("get_amount_1_delta", |b| {
        b.iter(|| {
            sqrt_price_math::get_amount_1_delta(black_box(lower), black_box(sqrt_price), LIQUIDITY, false)
        })
    });
    group.finish();
}

pub fn bench_swap_math(c: &mut Criterion) {
    let current = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
    let target = tick_math::get_sqrt_ratio_at_tick(-60).unwrap();
    let exact_in = I256::from_raw(U256::from(10u64.pow(15)));

    let mut group = c.benchmark_group("swap_math");
    group.bench_function("compute_swap_step/exact_in", |b| {
        b.iter(|| {
            swap_math::compute_swap_step(
                black_box(current),
                black_box(target),
                LIQUIDITY,
                black_box(exact_in),
                30,
            )
        })
    });
    group.bench_function("compute_swap_step/exact_out", |b| {
        b.iter(|| {
            swap_math::compute_swap_step(
                black_box(current),
                black_box(target),
                LIQUIDITY,
                black_box(-exact_in),
                30,
            )
        })
    });
    group.finish();
}

pub fn bench_math_helpers(c: &mut Criterion) {
    let a = U256::MAX >> 1;
    let b_ = U256::from(u128::MAX);
    let denominator = U256::MAX >> 3;

    let mut group = c.benchmark_group("math_helpers");
    group.bench_function("mul_div", |b| {
        b.iter(|| math_helpers::mul_div(black_box(a), black_box(b_), black_box(denominator)))
    });
    group.bench_function("mul_div_rounding_up", |b| {
        b.iter(|| {
            math_helpers::mul_div_rounding_up(black_box(a), black_box(b_), black_box(denominator))
        })
    });
    group.bench_function("add_delta", |b| {
        b.iter(|| liquidity_math::add_delta(black_box(LIQUIDITY), black_box(-(LIQUIDITY as i128) / 2)))
    });
    group.finish();
}

pub fn bench_tick_bitmap(c: &mut Criterion) {
    let mut bitmap = FastMap::default();
    for tick in dense_ticks(500, 10) {
        tick_bitmap::flip_tick(&mut bitmap, tick.index, 10).unwrap();
    }

    let mut group = c.benchmark_group("tick_bitmap");
    group.bench_function("next_initialized_tick_within_one_word/lte", |b| {
        b.iter(|| tick_bitmap::next_initialized_tick_within_one_word(&bitmap, black_box(-1_234), 10, true))
    });
    group.bench_function("next_initialized_tick_within_one_word/gt", |b| {
        b.iter(|| tick_bitmap::next_initialized_tick_within_one_word(&bitmap, black_box(1_234), 10, false))
    });
    group.finish();
}
