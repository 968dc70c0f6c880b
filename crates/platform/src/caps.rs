//! Capability bitset and per-architecture feature constants.
//!
//! Each constant is a *ready-to-use* bundle: it is set only when every ISA
//! extension a kernel needs is present, so callers never re-combine raw
//! feature bits.

/// 64-bit feature bitset.
///
/// Each architecture uses its own region of the bitset; the API is uniform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub u64);

impl Caps {
  /// Empty capability set.
  pub const NONE: Self = Self(0);

  /// Create a bitset with a single bit set.
  #[inline]
  #[must_use]
  pub const fn from_bit(bit: u16) -> Self {
    Self(1u64 << bit)
  }

  /// Check if all bits in `other` are set in `self`.
  #[inline]
  #[must_use]
  pub const fn has(self, other: Self) -> bool {
    (self.0 & other.0) == other.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Check if the set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

/// x86_64 capability bits.
pub mod x86 {
  use super::Caps;

  /// PCLMULQDQ + SSSE3: the 128-bit fold kernel is usable.
  pub const PCLMUL_READY: Caps = Caps::from_bit(0);
  /// VPCLMULQDQ + AVX2: the 256-bit fold kernel is usable.
  pub const VPCLMUL256_READY: Caps = Caps::from_bit(1);
  /// VPCLMULQDQ + AVX-512F + AVX-512BW: the 512-bit fold kernel is usable.
  pub const VPCLMUL512_READY: Caps = Caps::from_bit(2);
}

/// aarch64 capability bits.
pub mod aarch64 {
  use super::Caps;

  /// PMULL (crypto extension) + NEON: the 128-bit fold kernel is usable.
  pub const PMULL_READY: Caps = Caps::from_bit(16);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
