#![no_std]

//! Types and interfaces shared by the ledger, factory, launch and burner
//! contracts.

pub mod types;
pub mod error;
pub mod client;
pub mod guard;

pub use types::*;
pub use error::{LedgerError, LedgerErrorMsg};
pub use client::{BurnerClient, FactoryClient, LedgerClient};
pub use guard::ReentrancyGuard;
