//! `cksum` — print POSIX CRC checksums and byte counts of files.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cksum", version, about = "Print CRC checksum and byte counts", max_term_width = 100)]
struct Args {
  /// Files to checksum; with none (or "-") read standard input.
  files: Vec<PathBuf>,

  /// Digest algorithm; only `crc` (POSIX cksum) is supported.
  #[arg(short = 'a', long = "algorithm", default_value = "crc")]
  algorithm: String,

  /// Emit the digest as four raw big-endian bytes (single input only).
  #[arg(long)]
  raw: bool,

  /// Create a BSD-style checksum line.
  #[arg(long, conflicts_with = "raw")]
  tag: bool,

  /// Report which CRC backend was selected to standard error.
  #[arg(long)]
  debug: bool,
}

fn sum_one(path: &Path) -> io::Result<(u32, u64)> {
  let result = if path.as_os_str() == "-" {
    cksum::crc_sum_stream(io::stdin().lock())
  } else {
    cksum::crc_sum_stream(File::open(path)?)
  };
  result.map_err(|e| match e {
    cksum::CksumError::Io(e) => e,
    other => io::Error::other(other.to_string()),
  })
}

fn print_sum(args: &Args, path: &Path, crc: u32, length: u64) -> io::Result<()> {
  let mut out = io::stdout().lock();
  let named = path.as_os_str() != "-";
  if args.raw {
    out.write_all(&crc.to_be_bytes())?;
  } else if args.tag {
    if named {
      writeln!(out, "CRC ({}) = {crc}", path.display())?;
    } else {
      writeln!(out, "CRC = {crc}")?;
    }
  } else if named {
    writeln!(out, "{crc} {length} {}", path.display())?;
  } else {
    writeln!(out, "{crc} {length}")?;
  }
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();

  if !args.algorithm.eq_ignore_ascii_case("crc") {
    eprintln!("cksum: unknown algorithm: {}", args.algorithm);
    return ExitCode::FAILURE;
  }

  let files = if args.files.is_empty() {
    vec![PathBuf::from("-")]
  } else {
    args.files.clone()
  };

  if args.raw && files.len() > 1 {
    eprintln!("cksum: the --raw option is not supported with multiple files");
    return ExitCode::FAILURE;
  }

  if args.debug {
    eprintln!("cksum: using {} backend", cksum::dispatch::selected().backend.name());
  }

  let mut failed = false;
  for path in &files {
    match sum_one(path) {
      Ok((crc, length)) => {
        if let Err(e) = print_sum(&args, path, crc, length) {
          eprintln!("cksum: write error: {e}");
          failed = true;
        }
      }
      Err(e) => {
        eprintln!("cksum: {}: {e}", path.display());
        failed = true;
      }
    }
  }

  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
