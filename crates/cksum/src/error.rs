//! Engine error taxonomy.

/// Errors surfaced by the stream driver and the streaming hasher.
///
/// Transport errors are propagated unchanged; the arithmetic error is the
/// length counter wrapping. Partial CRC state is discarded in both cases.
#[derive(Debug)]
#[non_exhaustive]
pub enum CksumError {
  /// The byte source reported a failure.
  #[cfg(feature = "std")]
  Io(std::io::Error),
  /// The cumulative byte count exceeded the 64-bit counter.
  LengthOverflow,
}

impl core::fmt::Display for CksumError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      #[cfg(feature = "std")]
      Self::Io(e) => write!(f, "read error: {e}"),
      Self::LengthOverflow => f.write_str("stream length overflowed the 64-bit counter"),
    }
  }
}

impl core::error::Error for CksumError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      #[cfg(feature = "std")]
      Self::Io(e) => Some(e),
      Self::LengthOverflow => None,
    }
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for CksumError {
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}
