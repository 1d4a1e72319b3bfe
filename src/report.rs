//! Arena usage report, compiled in with the `debug-report` feature.

use core::{fmt, ops::Range};

use crate::arena::Arena;

/// Snapshot of the slot chain plus a read-only view of the raw arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaReport<'a> {
  /// Live slots.
  pub slot_count: usize,
  /// Header and payload bytes of every live slot.
  pub used_bytes: usize,
  pub arena_size: usize,
  pub buffer: &'a [u8],
}

impl<const N: usize, const ALIGN: usize> Arena<N, ALIGN> {
  pub fn report(&self) -> ArenaReport<'_> {
    let (slot_count, used_bytes) = self
      .slots()
      .fold((0, 0), |(count, used), (_, header)| (count + 1, used + header.footprint()));

    ArenaReport {
      slot_count,
      used_bytes,
      arena_size: N,
      buffer: self.buffer(),
    }
  }
}

impl<'a> ArenaReport<'a> {
  /// Hex view of `range`, sixteen bytes to a line.
  ///
  /// The end is clamped to the arena. A start that is not a multiple of
  /// sixteen is divided by sixteen.
  pub fn hex_dump(
    &self,
    range: Range<usize>,
  ) -> HexDump<'a> {
    let Range { mut start, mut end } = range;

    if start < end {
      if start % 16 != 0 {
        start /= 16;
      }
      end = end.min(self.buffer.len());
    }

    HexDump {
      buffer: self.buffer,
      start,
      end,
    }
  }
}

impl fmt::Display for ArenaReport<'_> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(
      f,
      "Size:{}, Used:(N:{}, Size:{})",
      self.arena_size, self.slot_count, self.used_bytes
    )
  }
}

pub struct HexDump<'a> {
  buffer: &'a [u8],
  start: usize,
  end: usize,
}

impl fmt::Display for HexDump<'_> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    if self.start >= self.end {
      return Ok(());
    }

    for i in self.start..self.end {
      if i != 0 && i % 16 == 0 {
        writeln!(f)?;
      }
      write!(f, "{:02X} ", self.buffer[i])?;
    }

    writeln!(f)
  }
}
