//! Fuzz target for kernel cross-equivalence.
//!
//! Every backend available on this machine must produce the slice-by-8
//! register value for arbitrary data and arbitrary seed CRCs.

#![no_main]

use arbitrary::Arbitrary;
use cksum::__backends as backends;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Input { seed, data } = input;
  let want = backends::slice8(seed, &data);

  assert_eq!(backends::chorba_small(seed, &data), want, "chorba_small");
  assert_eq!(backends::chorba_large(seed, &data), want, "chorba_large");
  assert_eq!(backends::soft128(seed, &data), want, "soft128");
  assert_eq!(backends::soft256(seed, &data), want, "soft256");
  assert_eq!(backends::soft512(seed, &data), want, "soft512");

  #[cfg(target_arch = "x86_64")]
  {
    if let Some(got) = backends::clmul128(seed, &data) {
      assert_eq!(got, want, "clmul128");
    }
    if let Some(got) = backends::vclmul256(seed, &data) {
      assert_eq!(got, want, "vclmul256");
    }
    if let Some(got) = backends::vclmul512(seed, &data) {
      assert_eq!(got, want, "vclmul512");
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    if let Some(got) = backends::pmull(seed, &data) {
      assert_eq!(got, want, "pmull");
    }
  }
});
