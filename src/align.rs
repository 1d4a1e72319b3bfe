/// Rounds `value` up to the next multiple of `alignment`.
///
/// A value that is already a multiple is left untouched, so `0` stays `0`.
/// `alignment` must be non-zero; the arena only ever passes powers of two.
///
/// # Examples
///
/// ```rust
/// use datalloc::align_to;
///
/// assert_eq!(align_to!(13, 8), 16);
/// assert_eq!(align_to!(16, 8), 16);
/// assert_eq!(align_to!(0, 8), 0);
/// assert_eq!(align_to!(3, 4), 4);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $alignment:expr) => {{
    let value = $value;
    let alignment = $alignment;
    match value % alignment {
      0 => value,
      rest => value + (alignment - rest),
    }
  }};
}
