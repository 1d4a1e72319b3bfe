//! # datalloc - A Fixed-Arena Slot Allocator
//!
//! This crate provides a tiny dynamic-memory allocator that carves variable
//! sized slots out of a single fixed byte buffer. It never asks the operating
//! system for memory, so it works on targets that have no heap at all.
//!
//! ## Overview
//!
//! All bookkeeping lives inside the arena itself. The first four bytes hold
//! the offset of the first slot, and every slot starts with an eight byte
//! header that links to the next one:
//!
//! ```text
//!   Arena Layout (N bytes, default 2048):
//!
//!   0      4             12
//!   ┌──────┬──────┬──────┬───────────┬──────┬──────┬──────┬───────────┬──────┐
//!   │ head │ next │ size │  payload  │ gap  │ next │ size │  payload  │ gap  │
//!   └──┬───┴──┬───┴──────┴───────────┴──────┴──────┴──────┴───────────┴──────┘
//!      │      │          ▲                  ▲
//!      │      │          │                  └── second header
//!      │      └──────────┼──────────────────────┘
//!      │                 └── Address returned to user
//!      └── offset of the first header (4)
//! ```
//!
//! A `next` of `0` ends the chain; offset 0 is the head and never a slot.
//! Headers are two little-endian `u32` fields:
//!
//! ```text
//!   |+0|+1|+2|+3|+4|+5|+6|+7|+8 ...
//!   |   next    |   size    | payload (size bytes, rounded to ALIGN)
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   datalloc
//!   ├── align      - Size rounding macro (align_to!)
//!   ├── slot       - Header layout and little-endian codec
//!   ├── arena      - Arena, Address and the placement search
//!   ├── error      - ArenaError
//!   └── report     - ArenaReport and HexDump (feature `debug-report`)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use datalloc::Arena;
//!
//! let mut arena: Arena = Arena::new();
//!
//! let address = arena.allocate(16).expect("fresh arena has room");
//! arena.payload_mut(address)?.copy_from_slice(b"datAlloc Sample\0");
//! assert_eq!(arena.payload(address)?, b"datAlloc Sample\0");
//!
//! arena.release(address);
//! # Ok::<(), datalloc::ArenaError>(())
//! ```
//!
//! ## Placement
//!
//! `allocate` rounds the request up to `ALIGN`, then looks at the gap that
//! trails every live slot and takes the smallest one that can hold the
//! header plus payload. Ties go to the first gap in chain order. The gap
//! between the head and the first slot is never a candidate, so releasing
//! the first slot leaves that space unused until the chain is empty again.
//!
//! `release` unlinks the slot from the chain and nothing else: neighbours
//! are not merged and the bytes are not cleared.
//!
//! ## Configuration
//!
//! - `Arena<N, ALIGN>`: arena size and size rounding, checked at compile
//!   time (`ALIGN` a power of two, `12 <= N <= u32::MAX`).
//! - Feature `debug-report`: enables `Arena::report` and the hex dump
//!   helpers. Always on in this crate's own tests.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: share an arena behind your own lock
//! - **No coalescing**: adjacent free gaps are not merged
//! - **No misuse detection**: double release and foreign addresses are ignored
//! - **Size rounding only**: payloads are not aligned in memory beyond `ALIGN`

#![cfg_attr(not(test), no_std)]

pub mod align;
mod arena;
mod error;
#[cfg(any(test, feature = "debug-report"))]
mod report;
mod slot;

pub use arena::{Address, Arena, DEFAULT_ALIGNMENT, DEFAULT_ARENA_SIZE, Slots};
pub use error::ArenaError;
#[cfg(any(test, feature = "debug-report"))]
pub use report::{ArenaReport, HexDump};
pub use slot::{HEAD_SIZE, HEADER_SIZE, SlotHeader};
