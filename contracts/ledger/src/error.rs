// The ledger's error enum is shared through belugalaunch-common so that
// callers can match on it.

pub use belugalaunch_common::{LedgerError, LedgerErrorMsg};

use belugalaunch_swap::SwapError;

pub fn from_swap_error(err: SwapError) -> LedgerError {
    match err {
        SwapError::InvalidAmount => LedgerError::InvalidAmount,
        SwapError::PriceLimitOutOfBounds => LedgerError::PriceLimitOutOfBounds,
    }
}
