// Buffered pool transaction
//
// Every mutating pool operation runs against a `PoolTx`: slot0, touched
// ticks and the tick index are held in memory and only reach storage on
// `commit`. A simulation runs the same code and drops the buffer.

use soroban_sdk::{BytesN, Env, Map, Vec};

use belugalaunch_common::{LedgerError, Slot0};
use belugalaunch_swap::SwapState;
use belugalaunch_tick::{TickInfo, TickStore};

use crate::storage::{read_slot0, read_tick_index, read_tick_info, write_slot0, write_tick_index, write_tick_info};

pub struct PoolTx<'a> {
    env: &'a Env,
    pool_id: BytesN<32>,
    pub slot0: Slot0,
    pub index: Vec<i32>,
    ticks: Map<i32, TickInfo>,
    index_dirty: bool,
}

impl<'a> PoolTx<'a> {
    pub fn load(env: &'a Env, pool_id: &BytesN<32>) -> Result<Self, LedgerError> {
        let slot0 = read_slot0(env, pool_id).ok_or(LedgerError::PoolNotInitialized)?;
        Ok(Self {
            env,
            pool_id: pool_id.clone(),
            slot0,
            index: read_tick_index(env, pool_id),
            ticks: Map::new(env),
            index_dirty: false,
        })
    }

    pub fn swap_state(&self) -> SwapState {
        SwapState {
            sqrt_price_x64: self.slot0.sqrt_price_x64,
            tick: self.slot0.tick,
            liquidity: self.slot0.liquidity,
            fee_growth_global_0: self.slot0.fee_growth_global_0,
            fee_growth_global_1: self.slot0.fee_growth_global_1,
        }
    }

    pub fn apply_swap_state(&mut self, state: &SwapState) {
        self.slot0.sqrt_price_x64 = state.sqrt_price_x64;
        self.slot0.tick = state.tick;
        self.slot0.liquidity = state.liquidity;
        self.slot0.fee_growth_global_0 = state.fee_growth_global_0;
        self.slot0.fee_growth_global_1 = state.fee_growth_global_1;
    }

    /// Keep the index in step with a tick whose initialized flag may have flipped
    pub fn sync_index(&mut self, tick: i32) {
        if self.read_tick(tick).initialized {
            belugalaunch_tick::insert_tick(&mut self.index, tick);
        } else {
            belugalaunch_tick::remove_tick(&mut self.index, tick);
        }
        self.index_dirty = true;
    }

    pub fn commit(self) {
        write_slot0(self.env, &self.pool_id, &self.slot0);
        for (tick, info) in self.ticks.iter() {
            write_tick_info(self.env, &self.pool_id, tick, &info);
        }
        if self.index_dirty {
            write_tick_index(self.env, &self.pool_id, &self.index);
        }
    }
}

impl TickStore for PoolTx<'_> {
    fn read_tick(&self, tick: i32) -> TickInfo {
        match self.ticks.get(tick) {
            Some(info) => info,
            None => read_tick_info(self.env, &self.pool_id, tick),
        }
    }

    fn write_tick(&mut self, tick: i32, info: &TickInfo) {
        self.ticks.set(tick, info.clone());
    }
}

// ============================================================
// SIMULATION
// ============================================================

/// How a simulated operation ends
pub enum Abort<T> {
    /// Expected exit carrying the result
    Quote(T),
    /// The operation itself failed
    Fail(LedgerError),
}

impl<T> From<LedgerError> for Abort<T> {
    fn from(err: LedgerError) -> Self {
        Abort::Fail(err)
    }
}

/// Run `op` against a throwaway buffer of the pool. `op` must leave by
/// returning `Abort::Quote`; nothing it did is committed.
pub fn simulate<T, F>(env: &Env, pool_id: &BytesN<32>, op: F) -> Result<T, LedgerError>
where
    F: FnOnce(&mut PoolTx) -> Result<(), Abort<T>>,
{
    let mut tx = PoolTx::load(env, pool_id)?;
    match op(&mut tx) {
        Err(Abort::Quote(result)) => Ok(result),
        Err(Abort::Fail(err)) => Err(err),
        Ok(()) => Err(LedgerError::SimulationInvariantViolated),
    }
}
