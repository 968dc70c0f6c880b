//! Backend selection: one probe, one choice, process-wide.
//!
//! Ordering (first available wins): 512-bit vector CLMUL → 256-bit vector
//! CLMUL → 128-bit CLMUL → PMULL → scalar. The scalar fallback is slice-by-8,
//! or chorba when the crate is built with the `chorba` feature.
//!
//! With `std`, `CKSUM_FORCE` overrides the automatic choice (`auto`,
//! `slice8`, `chorba`, `clmul`, `vclmul256`, `vclmul512`, `pmull`); a forced
//! backend the CPU cannot run falls back to auto. Forced or not, the first
//! selection is memoized and every later caller observes the same one.

use crate::slice8;

/// Identifier of a CRC engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
  /// Scalar slice-by-8 (the reference).
  Slice8,
  /// Scalar chorba (shift-and-XOR pre-reduction).
  Chorba,
  /// 128-bit carryless-multiply folding.
  Clmul128,
  /// 256-bit vector carryless-multiply folding.
  Vclmul256,
  /// 512-bit vector carryless-multiply folding.
  Vclmul512,
  /// aarch64 PMULL folding.
  Pmull,
}

impl Backend {
  /// Stable human-readable name (used by `cksum --debug`).
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Slice8 => "slice8",
      Self::Chorba => "chorba",
      Self::Clmul128 => "clmul128",
      Self::Vclmul256 => "vclmul256",
      Self::Vclmul512 => "vclmul512",
      Self::Pmull => "pmull",
    }
  }
}

/// Raw register update over a buffer: `crc' = crc advanced by data`.
pub(crate) type KernelFn = fn(u32, &[u8]) -> u32;

/// A resolved backend: kernel plus the driver's preferred read granularity.
#[derive(Clone, Copy)]
pub struct Selection {
  pub backend: Backend,
  pub(crate) kernel: KernelFn,
  /// Bytes per half of the stream driver's double buffer.
  pub(crate) half_len: usize,
}

const SCALAR_HALF: usize = 1 << 20;
#[allow(dead_code)] // scalar-only targets
const CLMUL128_HALF: usize = 32 * 1024;
#[allow(dead_code)]
const WIDE_HALF: usize = 1 << 20;

// ─────────────────────────────────────────────────────────────────────────────
// Kernel wrappers
// ─────────────────────────────────────────────────────────────────────────────

fn kernel_scalar(crc: u32, data: &[u8]) -> u32 {
  #[cfg(all(feature = "chorba", feature = "alloc"))]
  {
    crate::chorba::chorba_large(crc, data)
  }
  #[cfg(all(feature = "chorba", not(feature = "alloc")))]
  {
    crate::chorba::chorba_small(crc, data)
  }
  #[cfg(not(feature = "chorba"))]
  {
    slice8::compute(crc, data)
  }
}

#[cfg(target_arch = "x86_64")]
fn kernel_clmul128(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only after PCLMUL_READY was detected.
  unsafe { crate::simd::x86_64::pclmul::compute_unchecked(crc, data) }
}

#[cfg(target_arch = "x86_64")]
fn kernel_vclmul256(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only after VPCLMUL256_READY was detected.
  unsafe { crate::simd::x86_64::vpclmul256::compute_unchecked(crc, data) }
}

#[cfg(target_arch = "x86_64")]
fn kernel_vclmul512(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only after VPCLMUL512_READY was detected.
  unsafe { crate::simd::x86_64::vpclmul512::compute_unchecked(crc, data) }
}

#[cfg(target_arch = "aarch64")]
fn kernel_pmull(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only after PMULL_READY was detected.
  unsafe { crate::simd::aarch64::pmull::compute_unchecked(crc, data) }
}

const fn scalar_selection() -> Selection {
  Selection {
    backend: if cfg!(feature = "chorba") { Backend::Chorba } else { Backend::Slice8 },
    kernel: kernel_scalar,
    half_len: SCALAR_HALF,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

#[allow(unused_variables)]
fn select_auto(caps: platform::Caps) -> Selection {
  #[cfg(target_arch = "x86_64")]
  {
    use platform::caps::x86;
    if caps.has(x86::VPCLMUL512_READY) {
      return Selection {
        backend: Backend::Vclmul512,
        kernel: kernel_vclmul512,
        half_len: WIDE_HALF,
      };
    }
    if caps.has(x86::VPCLMUL256_READY) {
      return Selection {
        backend: Backend::Vclmul256,
        kernel: kernel_vclmul256,
        half_len: WIDE_HALF,
      };
    }
    if caps.has(x86::PCLMUL_READY) {
      return Selection {
        backend: Backend::Clmul128,
        kernel: kernel_clmul128,
        half_len: CLMUL128_HALF,
      };
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use platform::caps::aarch64;
    if caps.has(aarch64::PMULL_READY) {
      return Selection {
        backend: Backend::Pmull,
        kernel: kernel_pmull,
        half_len: CLMUL128_HALF,
      };
    }
  }

  scalar_selection()
}

/// Forced backend override, parsed from `CKSUM_FORCE`.
#[cfg(feature = "std")]
#[allow(unused_variables)]
fn select_forced(name: &str, caps: platform::Caps) -> Option<Selection> {
  if name.eq_ignore_ascii_case("slice8") || name.eq_ignore_ascii_case("scalar") {
    return Some(Selection {
      backend: Backend::Slice8,
      kernel: |crc, data| slice8::compute(crc, data),
      half_len: SCALAR_HALF,
    });
  }
  if name.eq_ignore_ascii_case("chorba") {
    #[cfg(feature = "alloc")]
    return Some(Selection {
      backend: Backend::Chorba,
      kernel: |crc, data| crate::chorba::chorba_large(crc, data),
      half_len: SCALAR_HALF,
    });
  }

  #[cfg(target_arch = "x86_64")]
  {
    use platform::caps::x86;
    if (name.eq_ignore_ascii_case("clmul") || name.eq_ignore_ascii_case("pclmul")) && caps.has(x86::PCLMUL_READY) {
      return Some(Selection {
        backend: Backend::Clmul128,
        kernel: kernel_clmul128,
        half_len: CLMUL128_HALF,
      });
    }
    if name.eq_ignore_ascii_case("vclmul256") && caps.has(x86::VPCLMUL256_READY) {
      return Some(Selection {
        backend: Backend::Vclmul256,
        kernel: kernel_vclmul256,
        half_len: WIDE_HALF,
      });
    }
    if name.eq_ignore_ascii_case("vclmul512") && caps.has(x86::VPCLMUL512_READY) {
      return Some(Selection {
        backend: Backend::Vclmul512,
        kernel: kernel_vclmul512,
        half_len: WIDE_HALF,
      });
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use platform::caps::aarch64;
    if name.eq_ignore_ascii_case("pmull") && caps.has(aarch64::PMULL_READY) {
      return Some(Selection {
        backend: Backend::Pmull,
        kernel: kernel_pmull,
        half_len: CLMUL128_HALF,
      });
    }
  }

  None
}

#[cfg(feature = "std")]
fn select() -> Selection {
  let caps = platform::caps();
  if let Ok(force) = std::env::var("CKSUM_FORCE") {
    let force = force.trim();
    if !force.is_empty() && !force.eq_ignore_ascii_case("auto") {
      if let Some(sel) = select_forced(force, caps) {
        return sel;
      }
    }
  }
  select_auto(caps)
}

/// The process-wide backend selection, decided on first use.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn selected() -> Selection {
  use std::sync::OnceLock;
  static SELECTION: OnceLock<Selection> = OnceLock::new();
  *SELECTION.get_or_init(select)
}

/// Without `std` the choice is compile-time and needs no memo.
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
pub fn selected() -> Selection {
  select_auto(platform::caps())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
