//! A minimal single-word bit-flag container written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! [`Bitfield`] is the main struct in this library. It wraps one `u64` and
//! treats every set bit position as an independent toggle ("flag"). Callers
//! define their own flag constants as powers of two and may combine them with
//! bitwise OR before passing them in; the operations treat a single bit and a
//! combined mask identically.
//!
//! # Examples
//! ```
//! use flag_field::Bitfield;
//!
//! const DARK_MODE: u64 = 1;
//! const MOBILE_MENU: u64 = 1 << 1;
//!
//! let mut field = Bitfield::new();
//! field.set(DARK_MODE)?;
//! assert!(field.get(DARK_MODE)?);
//! assert!(!field.get(MOBILE_MENU)?);
//! field.delete(DARK_MODE)?;
//! assert!(field.is_empty());
//! # Ok::<(), flag_field::FlagError>(())
//! ```
//!
//! # Use Cases
//!
//! - Compact boolean state (feature toggles, UI state, option sets) with no
//!   dynamic allocation
//! - Embedded and other resource-constrained environments
//! - Up to 64 independent toggles; for wider or growable sets use a
//!   multi-word bitset instead
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Test, set and delete of single flags or pre-combined masks
//! - Validation of every candidate flag with a four-way error taxonomy
//!   ([`FlagError`]); failed calls never touch stored state
//! - [`flag_from_f64`] admission path for flag values held in a double,
//!   including the 2^53 exact-integer ceiling check
//! - `Display` renders the word in binary alongside its decimal value

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitfield;

pub use bitfield::{Bitfield, F64_SAFE_MAX, FlagError, flag_from_f64};
