//! CPU capability detection for the cksum SIMD backends.
//!
//! This crate answers one question: "which carryless-multiply families can I
//! legally run on this machine?" The answer is a compact bitset ([`Caps`])
//! probed once per process and memoized.
//!
//! # Usage
//!
//! ```
//! let caps = platform::caps();
//! #[cfg(target_arch = "x86_64")]
//! {
//!   if caps.has(platform::caps::x86::VPCLMUL512_READY) {
//!     // 512-bit vector carryless multiply is usable
//!   }
//! }
//! ```
//!
//! With the `std` feature (default) the probe uses runtime feature detection;
//! without it, only compile-time target features are reported.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod caps;
mod detect;

pub use caps::Caps;

/// Probe the current CPU, memoized after the first call.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn caps() -> Caps {
  use std::sync::OnceLock;
  static CAPS: OnceLock<Caps> = OnceLock::new();
  *CAPS.get_or_init(detect::probe)
}

/// Compile-time capabilities only (no runtime probe available).
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::compile_time()
}
