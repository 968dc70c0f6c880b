//! Stream driver: pulls a byte source through the selected backend and
//! performs the POSIX post-processing (length fold, complement).
//!
//! The driver owns a private double buffer sized to the backend's preferred
//! read granularity and walks an explicit phase machine:
//!
//! ```text
//! Idle ──prime──▶ Primed ──▶ Folding ──short read──▶ Tailing ──▶ Done
//! ```
//!
//! Reads are strictly sequential; EOF is sticky (a zero-byte read ends the
//! stream for good). Whatever way the operation terminates, the buffers are
//! dropped before returning.

use std::io::Read;

use crate::dispatch;
use crate::error::CksumError;
use crate::Cksum;

/// Driver phases; `Tailing` is entered on the first short fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
  Idle,
  Primed,
  Folding,
  Tailing,
  Done,
}

struct Driver<R> {
  src: R,
  eof: bool,
}

impl<R: Read> Driver<R> {
  /// Fill `buf` completely unless the source runs out first.
  ///
  /// Returns the number of bytes placed in `buf`; short only at EOF.
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, CksumError> {
    let mut filled = 0;
    while filled < buf.len() && !self.eof {
      match self.src.read(&mut buf[filled..]) {
        Ok(0) => self.eof = true,
        Ok(n) => filled += n,
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
        Err(e) => return Err(e.into()),
      }
    }
    Ok(filled)
  }
}

/// Compute the POSIX checksum and byte length of `source`.
///
/// This is the whole cksum contract in one call: drive the backend over the
/// stream, fold in the length, complement. Errors discard all partial state.
///
/// # Examples
///
/// ```
/// let (crc, len) = cksum::crc_sum_stream(&b"123456789"[..]).unwrap();
/// assert_eq!((crc, len), (0x377A_6011, 9));
/// ```
pub fn crc_sum_stream<R: Read>(source: R) -> Result<(u32, u64), CksumError> {
  let sel = dispatch::selected();
  let mut driver = Driver { src: source, eof: false };
  let mut hasher = Cksum::new();

  // Two halves, refilled alternately: the pending half always holds the
  // stream bytes that follow the active half.
  let mut halves = [vec![0u8; sel.half_len], vec![0u8; sel.half_len]];
  let mut lens = [0usize; 2];
  let mut active = 0usize;
  let mut phase = Phase::Idle;

  while phase != Phase::Done {
    phase = match phase {
      Phase::Idle => {
        lens[0] = driver.fill(&mut halves[0])?;
        lens[1] = driver.fill(&mut halves[1])?;
        Phase::Primed
      }
      Phase::Primed | Phase::Folding => {
        if lens[active] == 0 {
          Phase::Done
        } else {
          hasher.update(&halves[active][..lens[active]])?;
          let refilled = driver.fill(&mut halves[active])?;
          lens[active] = refilled;
          active ^= 1;
          if driver.eof { Phase::Tailing } else { Phase::Folding }
        }
      }
      Phase::Tailing => {
        // Source exhausted: drain whatever the halves still hold, in order.
        if lens[active] == 0 {
          Phase::Done
        } else {
          hasher.update(&halves[active][..lens[active]])?;
          lens[active] = 0;
          active ^= 1;
          Phase::Tailing
        }
      }
      Phase::Done => unreachable!(),
    };
  }

  Ok((hasher.finalize(), hasher.length()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::io::{self, Cursor, Read};

  use super::*;
  use crate::slice8;

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

  fn expected(data: &[u8]) -> u32 {
    let crc = slice8::compute(0, data);
    Cksum::resume(crc, data.len() as u64).finalize()
  }

  #[test]
  fn test_stream_known_vectors() {
    for (data, crc) in [
      (&b""[..], 0xFFFF_FFFFu32),
      (&b"\x00"[..], 0xFB3E_E248),
      (&b"a"[..], 0x48C2_79FE),
      (&b"abc"[..], 0x48AA_78A2),
      (&b"123456789"[..], 0x377A_6011),
      (&b"The quick brown fox jumps over the lazy dog"[..], 0x7BAB_9CE8),
    ] {
      let (got, len) = crc_sum_stream(data).unwrap();
      assert_eq!(got, crc, "{data:?}");
      assert_eq!(len, data.len() as u64);
    }
  }

  #[test]
  fn test_stream_spans_multiple_halves() {
    // Longer than any backend's double buffer.
    let data = gen_bytes(5 * (1 << 20) + 12345, 99);
    let (crc, len) = crc_sum_stream(Cursor::new(&data)).unwrap();
    assert_eq!(len, data.len() as u64);
    assert_eq!(crc, expected(&data));
  }

  /// A reader that returns one byte at a time (worst-case short reads).
  struct Trickle<'a>(&'a [u8]);

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      if self.0.is_empty() || buf.is_empty() {
        return Ok(0);
      }
      buf[0] = self.0[0];
      self.0 = &self.0[1..];
      Ok(1)
    }
  }

  #[test]
  fn test_stream_short_reads() {
    let data = gen_bytes(70_000, 5);
    let (crc, len) = crc_sum_stream(Trickle(&data)).unwrap();
    assert_eq!(len, data.len() as u64);
    assert_eq!(crc, expected(&data));
  }

  /// A reader that fails partway through.
  struct Failing {
    remaining: usize,
  }

  impl Read for Failing {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      if self.remaining == 0 {
        return Err(io::Error::other("disk on fire"));
      }
      let n = buf.len().min(self.remaining);
      self.remaining -= n;
      Ok(n)
    }
  }

  #[test]
  fn test_stream_propagates_io_error() {
    let err = crc_sum_stream(Failing { remaining: 4096 }).unwrap_err();
    assert!(matches!(err, CksumError::Io(_)), "{err:?}");
  }

  #[test]
  fn test_stream_interrupted_reads_are_retried() {
    struct Flaky<'a> {
      data: &'a [u8],
      hiccup: bool,
    }
    impl Read for Flaky<'_> {
      fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.hiccup = !self.hiccup;
        if self.hiccup {
          return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
      }
    }

    let data = gen_bytes(10_000, 3);
    let (crc, len) = crc_sum_stream(Flaky { data: &data, hiccup: false }).unwrap();
    assert_eq!(len, data.len() as u64);
    assert_eq!(crc, expected(&data));
  }
}
