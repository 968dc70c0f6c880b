//! Known-answer vectors and differential checks against the `crc` crate.

use crc::{CRC_32_CKSUM, Crc};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8) ^ ((x >> 8) as u8);
  }
  out
}

#[test]
fn posix_reference_vectors() {
  let vectors: &[(&[u8], u32, u64)] = &[
    (b"", 0xFFFF_FFFF, 0),
    (b"\x00", 0xFB3E_E248, 1),
    (b"a", 0x48C2_79FE, 1),
    (b"abc", 0x48AA_78A2, 3),
    (b"123456789", 0x377A_6011, 9),
    (b"The quick brown fox jumps over the lazy dog", 0x7BAB_9CE8, 43),
  ];
  for &(data, crc, len) in vectors {
    assert_eq!(cksum::checksum(data), crc, "{data:?}");
    let (stream_crc, stream_len) = cksum::crc_sum_stream(data).unwrap();
    assert_eq!((stream_crc, stream_len), (crc, len), "{data:?}");
  }
}

#[test]
fn posix_large_vectors() {
  assert_eq!(cksum::checksum(&vec![0u8; 1 << 20]), 0xB3EE_248F);
  assert_eq!(cksum::checksum(&vec![0xABu8; 65_536]), 0x2BE7_7330);
  assert_eq!(cksum::checksum(&gen_bytes(300_000, 0x9E37_79B9_7F4A_7C15)), 0x1880_C040);
}

#[test]
fn polynomial_part_matches_crc_crate() {
  // CRC-32/CKSUM in the catalog is the raw polynomial with a final
  // complement and no length fold; undo the complement to compare registers.
  let oracle = Crc::<u32>::new(&CRC_32_CKSUM);
  for len in [0usize, 1, 9, 64, 1000, 4096, 65_537] {
    let data = gen_bytes(len, 0xC0DE ^ len as u64);
    let raw = cksum::__backends::slice8(0, &data);
    assert_eq!(raw, !oracle.checksum(&data), "len={len}");
  }
  assert_eq!(oracle.checksum(b"123456789"), 0x765E_7680);
}

#[test]
fn digest_matches_crc_crate_with_length_appended() {
  // The full cksum digest equals the catalog CRC of data ∥ length-octets.
  let oracle = Crc::<u32>::new(&CRC_32_CKSUM);
  for len in [1usize, 255, 256, 257, 65_535, 65_536, 100_000] {
    let data = gen_bytes(len, 0xFACE ^ len as u64);
    let mut extended = data.clone();
    let mut n = len as u64;
    while n != 0 {
      extended.push(n as u8);
      n >>= 8;
    }
    assert_eq!(cksum::checksum(&data), oracle.checksum(&extended), "len={len}");
  }
}

#[test]
fn determinism() {
  let data = gen_bytes(123_456, 1);
  assert_eq!(cksum::checksum(&data), cksum::checksum(&data));
  let a = cksum::crc_sum_stream(&data[..]).unwrap();
  let b = cksum::crc_sum_stream(&data[..]).unwrap();
  assert_eq!(a, b);
}

#[test]
fn concatenation_adds_lengths() {
  let a = gen_bytes(10_000, 2);
  let b = gen_bytes(20_000, 3);
  let (_, la) = cksum::crc_sum_stream(&a[..]).unwrap();
  let (_, lb) = cksum::crc_sum_stream(&b[..]).unwrap();
  let joined: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
  let (_, lab) = cksum::crc_sum_stream(&joined[..]).unwrap();
  assert_eq!(lab, la + lb);
}

#[test]
fn length_overflow_is_an_error() {
  let mut hasher = cksum::Cksum::resume(0, u64::MAX - 1);
  let err = hasher.update(&[0u8; 16]).unwrap_err();
  assert!(matches!(err, cksum::CksumError::LengthOverflow));
}

#[test]
fn raw_digest_byte_order() {
  // The raw output form is the digest in big-endian byte order.
  let crc = cksum::checksum(b"abc");
  assert_eq!(crc.to_be_bytes(), [0x48, 0xAA, 0x78, 0xA2]);
}
