#![no_std]

pub mod types;
pub mod engine;

pub use types::{SwapError, SwapOutcome, SwapState, SwapStep};
pub use engine::{compute_swap_step, execute_swap, resolve_price_limit};
