//! Capability probing (runtime under `std`, compile-time otherwise).

use crate::caps::Caps;

/// Runtime probe of the current CPU.
#[cfg(feature = "std")]
#[must_use]
pub(crate) fn probe() -> Caps {
  let mut caps = compile_time();

  #[cfg(target_arch = "x86_64")]
  {
    use crate::caps::x86;
    if std::arch::is_x86_feature_detected!("pclmulqdq") && std::arch::is_x86_feature_detected!("ssse3") {
      caps |= x86::PCLMUL_READY;
    }
    if std::arch::is_x86_feature_detected!("vpclmulqdq") && std::arch::is_x86_feature_detected!("avx2") {
      caps |= x86::VPCLMUL256_READY;
    }
    // AVX-512F for the wide registers, AVX-512BW for the byte shuffle.
    if std::arch::is_x86_feature_detected!("vpclmulqdq")
      && std::arch::is_x86_feature_detected!("avx512f")
      && std::arch::is_x86_feature_detected!("avx512bw")
    {
      caps |= x86::VPCLMUL512_READY;
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;
    if std::arch::is_aarch64_feature_detected!("aes") && std::arch::is_aarch64_feature_detected!("neon") {
      caps |= aarch64::PMULL_READY;
    }
  }

  caps
}

/// Capabilities implied by compile-time target features.
#[must_use]
pub(crate) fn compile_time() -> Caps {
  #[allow(unused_mut)]
  let mut caps = Caps::NONE;

  #[cfg(all(target_arch = "x86_64", target_feature = "pclmulqdq", target_feature = "ssse3"))]
  {
    caps |= crate::caps::x86::PCLMUL_READY;
  }
  #[cfg(all(target_arch = "x86_64", target_feature = "vpclmulqdq", target_feature = "avx2"))]
  {
    caps |= crate::caps::x86::VPCLMUL256_READY;
  }
  #[cfg(all(
    target_arch = "x86_64",
    target_feature = "vpclmulqdq",
    target_feature = "avx512f",
    target_feature = "avx512bw"
  ))]
  {
    caps |= crate::caps::x86::VPCLMUL512_READY;
  }
  #[cfg(all(target_arch = "aarch64", target_feature = "aes", target_feature = "neon"))]
  {
    caps |= crate::caps::aarch64::PMULL_READY;
  }

  caps
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "std"))]
mod tests {
  use super::*;

  #[test]
  fn test_probe_is_superset_of_compile_time() {
    let rt = probe();
    let ct = compile_time();
    assert!(rt.has(ct), "runtime caps must include compile-time caps");
  }

  #[cfg(target_arch = "x86_64")]
  #[test]
  fn test_vpclmul512_implies_vpclmul256_hardware() {
    // Not an architectural guarantee, but true of every shipping part:
    // an AVX-512 VPCLMULQDQ machine also runs the 256-bit kernel.
    let caps = probe();
    if caps.has(crate::caps::x86::VPCLMUL512_READY) {
      assert!(caps.has(crate::caps::x86::VPCLMUL256_READY));
    }
  }
}
