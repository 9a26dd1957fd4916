#![no_std]

pub mod types;
pub mod update;
pub mod fee_growth;
pub mod index;

pub use types::TickInfo;
pub use update::{cross_tick, update_tick, TickStore};
pub use fee_growth::get_fee_growth_inside;
pub use index::{insert_tick, next_initialized_tick, remove_tick};
