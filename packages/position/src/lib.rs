#![no_std]

pub mod types;
pub mod manager;

pub use types::Position;
pub use manager::{pending_fees, update_position, validate_position_params};
