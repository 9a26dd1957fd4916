// Tick Update and Crossing Logic

use crate::types::TickInfo;

/// Storage seam for tick records.
///
/// The ledger implements this over a buffered pool transaction, so the
/// same update/cross code runs for committed swaps and for quotes.
pub trait TickStore {
    fn read_tick(&self, tick: i32) -> TickInfo;
    fn write_tick(&mut self, tick: i32, info: &TickInfo);
}

/// Update a tick when liquidity is added or removed.
///
/// Returns true when the tick flipped between initialized and
/// uninitialized, so the caller can maintain its tick index.
pub fn update_tick<S: TickStore>(
    store: &mut S,
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
    upper: bool,
) -> bool {
    let mut info = store.read_tick(tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = liquidity_gross_before.saturating_add(liquidity_delta).max(0);

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 && liquidity_gross_after > 0 {
        // growth below the current tick is assumed to have happened outside
        if current_tick >= tick {
            info.fee_growth_outside_0 = fee_growth_global_0;
            info.fee_growth_outside_1 = fee_growth_global_1;
        } else {
            info.fee_growth_outside_0 = 0;
            info.fee_growth_outside_1 = 0;
        }
    }

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = if upper {
        info.liquidity_net.saturating_sub(liquidity_delta)
    } else {
        info.liquidity_net.saturating_add(liquidity_delta)
    };
    info.initialized = liquidity_gross_after > 0;

    if info.initialized {
        store.write_tick(tick, &info);
    } else {
        store.write_tick(tick, &TickInfo::default());
    }

    flipped
}

/// Cross a tick boundary during a swap. Returns the tick's liquidity_net.
pub fn cross_tick<S: TickStore>(
    store: &mut S,
    tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> i128 {
    let mut info = store.read_tick(tick);

    info.fee_growth_outside_0 = fee_growth_global_0.wrapping_sub(info.fee_growth_outside_0);
    info.fee_growth_outside_1 = fee_growth_global_1.wrapping_sub(info.fee_growth_outside_1);

    store.write_tick(tick, &info);

    info.liquidity_net
}
