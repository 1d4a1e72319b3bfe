/// Bytes reserved at offset 0 for the head pointer.
pub const HEAD_SIZE: usize = 4;

/// Width of the in-band header written in front of every payload.
pub const HEADER_SIZE: usize = 8;

/// Offset of the `size` field inside a header.
const SIZE_FIELD: usize = 4;

/// Offset of the head pointer. Also the "no further slot" sentinel.
pub(crate) const HEAD: u32 = 0;

/// Reads a little-endian `u32` at `offset`.
pub(crate) fn read_u32(
  buffer: &[u8],
  offset: u32,
) -> u32 {
  let at = offset as usize;
  let bytes = &buffer[at..at + 4];
  u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Writes `value` as a little-endian `u32` at `offset`.
pub(crate) fn write_u32(
  buffer: &mut [u8],
  offset: u32,
  value: u32,
) {
  let at = offset as usize;
  buffer[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

/// Decoded view of an 8-byte slot header.
///
/// ```text
///   |+0|+1|+2|+3|+4|+5|+6|+7|+8 ...
///   |   next    |   size    | payload
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHeader {
  /// Offset of the next slot's header, `0` when this is the last slot.
  pub next: u32,
  /// Reserved payload bytes, already rounded to the arena alignment.
  pub size: u32,
}

impl SlotHeader {
  pub fn new(
    next: u32,
    size: u32,
  ) -> Self {
    Self { next, size }
  }

  pub(crate) fn read(
    buffer: &[u8],
    offset: u32,
  ) -> Self {
    Self {
      next: read_u32(buffer, offset),
      size: read_u32(buffer, offset + SIZE_FIELD as u32),
    }
  }

  pub(crate) fn write(
    &self,
    buffer: &mut [u8],
    offset: u32,
  ) {
    write_u32(buffer, offset, self.next);
    write_u32(buffer, offset + SIZE_FIELD as u32, self.size);
  }

  /// First byte after this slot's payload, given the header's own offset.
  pub fn end(
    &self,
    offset: u32,
  ) -> u32 {
    offset + HEADER_SIZE as u32 + self.size
  }

  /// Bytes this slot occupies, header included.
  pub fn footprint(&self) -> usize {
    HEADER_SIZE + self.size as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_u32_is_little_endian() {
    let mut buffer = [0u8; 8];

    write_u32(&mut buffer, 2, 0x1234_5678);

    assert_eq!(buffer, [0x00, 0x00, 0x78, 0x56, 0x34, 0x12, 0x00, 0x00]);
    assert_eq!(read_u32(&buffer, 2), 0x1234_5678);
  }

  #[test]
  fn test_header_layout() {
    let mut buffer = [0xFFu8; 16];

    SlotHeader::new(0x0000_0040, 0x0000_0010).write(&mut buffer, 4);

    assert_eq!(&buffer[..4], &[0xFF; 4]);
    assert_eq!(&buffer[4..12], &[0x40, 0, 0, 0, 0x10, 0, 0, 0]);
    assert_eq!(&buffer[12..], &[0xFF; 4]);
    assert_eq!(SlotHeader::read(&buffer, 4), SlotHeader::new(0x40, 0x10));
  }

  #[test]
  fn test_end_and_footprint() {
    let header = SlotHeader::new(0, 16);

    assert_eq!(header.end(4), 28);
    assert_eq!(header.footprint(), 24);
  }
}
