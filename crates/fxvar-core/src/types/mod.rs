//! Domain types.

mod direction;
mod pair;

pub use direction::Direction;
pub use pair::{CurrencyPair, PAIR_CODE_LEN};
