use thiserror::Error;

use crate::arena::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
  /// No trailing gap can hold the rounded request plus its header.
  #[error("arena exhausted: no gap fits a {requested} byte request")]
  Exhausted { requested: usize },

  /// The address is not the payload start of a live slot.
  #[error("no live slot at address {0}")]
  UnknownAddress(Address),
}
