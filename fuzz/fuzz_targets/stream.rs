//! Fuzz target for the streaming API.
//!
//! Tests that:
//! - Arbitrary chunkings produce the same digest as one-shot
//! - The digest matches the catalog CRC-32/CKSUM of data ∥ length-octets

#![no_main]

use arbitrary::Arbitrary;
use crc::{CRC_32_CKSUM, Crc};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let oneshot = cksum::checksum(data);

  let mut hasher = cksum::Cksum::new();
  let mut offset = 0;
  let mut chunk_idx = 0usize;
  while offset < data.len() {
    let chunk = if input.chunk_sizes.is_empty() {
      64
    } else {
      input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 4096 + 1
    };
    let end = (offset + chunk).min(data.len());
    hasher.update(&data[offset..end]).unwrap();
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(hasher.finalize(), oneshot, "chunked mismatch");
  assert_eq!(hasher.length(), data.len() as u64);

  // Independent oracle: catalog CRC over data with the length appended.
  let oracle = Crc::<u32>::new(&CRC_32_CKSUM);
  let mut extended = data.clone();
  let mut n = data.len() as u64;
  while n != 0 {
    extended.push(n as u8);
    n >>= 8;
  }
  assert_eq!(oneshot, oracle.checksum(&extended), "oracle mismatch");
});
