//! Walks through a few allocations and dumps the start of the arena after
//! each step. Run with `RUST_LOG=trace` to see every placement.

use datalloc::{Address, Arena, ArenaError};

/// Prints the current program break using `sbrk(0)`.
/// The arena lives inside this binary's memory, so the break never has to move for it.
#[cfg(unix)]
fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { libc::sbrk(0) },
  );
}

#[cfg(not(unix))]
fn print_program_break(_label: &str) {}

fn dump(
  arena: &Arena,
  range: std::ops::Range<usize>,
) {
  let report = arena.report();
  println!("\n{report}");
  print!("{}", report.hex_dump(range));
}

fn print_text(
  arena: &Arena,
  name: &str,
  address: Address,
) -> Result<(), ArenaError> {
  let payload = arena.payload(address)?;
  let text = payload.split(|&b| b == 0).next().unwrap_or_default();
  println!("{name}({address})={}", String::from_utf8_lossy(text));
  Ok(())
}

fn main() -> Result<(), ArenaError> {
  env_logger::init();

  let mut arena: Arena = Arena::new();

  println!("==== datalloc sample ====\n");
  print_program_break("start");

  // --------------------------------------------------------------------
  // 1) 16 bytes for a C string, 2 bytes for an i16.
  // --------------------------------------------------------------------
  let a = arena.allocate(16);
  if let Some(a) = a {
    arena.payload_mut(a)?.copy_from_slice(b"datAlloc Sample\0");
    print_text(&arena, "a", a)?;
  }

  let b = arena.allocate(2);
  if let Some(b) = b {
    arena.payload_mut(b)?[..2].copy_from_slice(&15i16.to_le_bytes());
    let value = arena.payload(b)?;
    println!("b({b})={}", i16::from_le_bytes([value[0], value[1]]));
  }
  dump(&arena, 0..64);

  // --------------------------------------------------------------------
  // 2) Free the first slot. The bytes stay, only the head pointer moves.
  // --------------------------------------------------------------------
  println!("\nfree:a");
  arena.release_opt(a);
  dump(&arena, 0..64);

  // --------------------------------------------------------------------
  // 3) 4 bytes for an i32. The gap before `b` is never a candidate,
  //    so this lands after it.
  // --------------------------------------------------------------------
  println!();
  let c = arena.allocate(4);
  if let Some(c) = c {
    arena.payload_mut(c)?[..4].copy_from_slice(&0xABCDi32.to_le_bytes());
    let value = arena.payload(c)?;
    println!(
      "c({c})={:X}",
      i32::from_le_bytes([value[0], value[1], value[2], value[3]])
    );
  }
  dump(&arena, 0..64);

  arena.release_opt(b);
  arena.release_opt(c);
  dump(&arena, 0..64);

  // --------------------------------------------------------------------
  // 4) Something that can never fit.
  // --------------------------------------------------------------------
  if let Err(err) = arena.try_allocate(4000) {
    println!("\n{err}");
  }

  print_program_break("end");

  Ok(())
}
