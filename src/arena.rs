use core::fmt;

use log::{debug, trace};

use crate::{
  align_to,
  error::ArenaError,
  slot::{HEAD, HEAD_SIZE, HEADER_SIZE, SlotHeader, read_u32, write_u32},
};

pub const DEFAULT_ARENA_SIZE: usize = 2048;
pub const DEFAULT_ALIGNMENT: usize = 8;

/// Offset of a payload inside the arena, as handed out by [`Arena::allocate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);

impl Address {
  pub const fn new(offset: u32) -> Self {
    Self(offset)
  }

  pub const fn offset(self) -> u32 {
    self.0
  }

  /// Offset of the header that precedes this payload.
  fn header(self) -> Option<u32> {
    self.0.checked_sub(HEADER_SIZE as u32)
  }
}

impl fmt::Display for Address {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "{:#06x}", self.0)
  }
}

/// Where a new slot goes and which `next` field must point at it.
#[derive(Debug, Clone, Copy)]
struct Placement {
  previous: u32,
  offset: u32,
  gap: usize,
}

/// Walks the slot chain from the head pointer, yielding `(offset, header)`.
pub struct Slots<'a> {
  buffer: &'a [u8],
  cursor: u32,
}

impl Iterator for Slots<'_> {
  type Item = (u32, SlotHeader);

  fn next(&mut self) -> Option<Self::Item> {
    if self.cursor == HEAD {
      return None;
    }

    let offset = self.cursor;
    let header = SlotHeader::read(self.buffer, offset);
    self.cursor = header.next;

    Some((offset, header))
  }
}

/// Fixed-size slot allocator over an inline `N` byte buffer.
///
/// Requests are rounded up to a multiple of `ALIGN` and placed in the
/// smallest gap that trails an existing slot.
pub struct Arena<const N: usize = DEFAULT_ARENA_SIZE, const ALIGN: usize = DEFAULT_ALIGNMENT> {
  buffer: [u8; N],
}

impl<const N: usize, const ALIGN: usize> Arena<N, ALIGN> {
  const LAYOUT: () = {
    assert!(ALIGN.is_power_of_two(), "arena alignment must be a power of two");
    assert!(N >= HEAD_SIZE + HEADER_SIZE, "arena cannot hold a single header");
    assert!(N <= u32::MAX as usize, "arena offsets must fit in 32 bits");
  };

  pub const fn new() -> Self {
    let () = Self::LAYOUT;

    Self { buffer: [0; N] }
  }

  pub const fn capacity(&self) -> usize {
    N
  }

  pub const fn alignment(&self) -> usize {
    ALIGN
  }

  /// Live slots in chain order, which is also ascending offset order.
  pub fn slots(&self) -> Slots<'_> {
    Slots {
      buffer: &self.buffer,
      cursor: read_u32(&self.buffer, HEAD),
    }
  }

  pub fn is_live(
    &self,
    address: Address,
  ) -> bool {
    self.find_slot(address).is_some()
  }

  /// Reserves `size` bytes, or returns `None` when no gap fits.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Option<Address> {
    self.try_allocate(size).ok()
  }

  pub fn try_allocate(
    &mut self,
    size: usize,
  ) -> Result<Address, ArenaError> {
    let requested = size;

    if size > N {
      debug!("allocate({requested}): larger than the {N} byte arena");
      return Err(ArenaError::Exhausted { requested });
    }

    let size = align_to!(size, ALIGN);

    let Some(placement) = self.find_placement(size + HEADER_SIZE) else {
      debug!("allocate({requested}): no gap fits {size} + {HEADER_SIZE} bytes");
      return Err(ArenaError::Exhausted { requested });
    };

    let next = read_u32(&self.buffer, placement.previous);
    SlotHeader::new(next, size as u32).write(&mut self.buffer, placement.offset);
    write_u32(&mut self.buffer, placement.previous, placement.offset);

    let address = Address(placement.offset + HEADER_SIZE as u32);
    trace!(
      "allocate({requested}): slot {:#06x} after {:#06x}, {size} bytes at {address}",
      placement.offset,
      placement.previous,
    );

    Ok(address)
  }

  /// Best fit over the gaps trailing each live slot. The gap between the
  /// head pointer and the first slot is not a candidate.
  fn find_placement(
    &self,
    needed: usize,
  ) -> Option<Placement> {
    let mut best: Option<Placement> = None;
    let mut has_slots = false;

    for (offset, header) in self.slots() {
      has_slots = true;

      let limit = match header.next {
        HEAD => N,
        next => next as usize,
      };
      let end = header.end(offset);
      let gap = limit.saturating_sub(end as usize);

      if needed <= gap && best.is_none_or(|best| gap < best.gap) {
        best = Some(Placement {
          previous: offset,
          offset: end,
          gap,
        });
      }
    }

    if !has_slots && needed <= N - HEAD_SIZE {
      best = Some(Placement {
        previous: HEAD,
        offset: HEAD_SIZE as u32,
        gap: N - HEAD_SIZE,
      });
    }

    best
  }

  /// Unlinks the slot whose payload starts at `address`.
  ///
  /// Unknown addresses are ignored. The freed bytes are left as they are.
  pub fn release(
    &mut self,
    address: Address,
  ) {
    let mut previous = HEAD;
    let mut unlink = None;

    for (offset, header) in self.slots() {
      if Some(offset) == address.header() {
        unlink = Some((previous, header.next));
        break;
      }
      previous = offset;
    }

    match unlink {
      Some((previous, next)) => {
        write_u32(&mut self.buffer, previous, next);
        trace!("release({address}): {:#06x} now links to {next:#06x}", previous);
      }
      None => debug!("release({address}): not a live slot, ignored"),
    }
  }

  /// [`release`](Self::release) that accepts the empty result of a failed allocation.
  pub fn release_opt(
    &mut self,
    address: Option<Address>,
  ) {
    if let Some(address) = address {
      self.release(address);
    }
  }

  /// The reserved payload of a live slot, rounded size included.
  pub fn payload(
    &self,
    address: Address,
  ) -> Result<&[u8], ArenaError> {
    let (_, header) = self
      .find_slot(address)
      .ok_or(ArenaError::UnknownAddress(address))?;

    let start = address.offset() as usize;
    Ok(&self.buffer[start..start + header.size as usize])
  }

  pub fn payload_mut(
    &mut self,
    address: Address,
  ) -> Result<&mut [u8], ArenaError> {
    let (_, header) = self
      .find_slot(address)
      .ok_or(ArenaError::UnknownAddress(address))?;

    let start = address.offset() as usize;
    Ok(&mut self.buffer[start..start + header.size as usize])
  }

  fn find_slot(
    &self,
    address: Address,
  ) -> Option<(u32, SlotHeader)> {
    let header = address.header()?;
    self.slots().find(|&(offset, _)| offset == header)
  }

  #[cfg(any(test, feature = "debug-report"))]
  pub(crate) fn buffer(&self) -> &[u8] {
    &self.buffer
  }
}

impl<const N: usize, const ALIGN: usize> Default for Arena<N, ALIGN> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize, const ALIGN: usize> fmt::Debug for Arena<N, ALIGN> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("Arena")
      .field("capacity", &N)
      .field("alignment", &ALIGN)
      .field("slots", &self.slots().count())
      .finish()
  }
}
