//! Block decompression backends.
//!
//! Each supported algorithm is a variant of [`Decoder`], compiled in by its Cargo feature. All
//! of them share one contract: decode a complete compressed block from `input` into `output`,
//! never writing past `output.len()`, and return the number of bytes produced. Every failure is
//! the same [`DecompressError`]; library diagnostics are only emitted as `trace` events.
//!
//! Decoder state is created per call and dropped before returning, so a `Decoder` can be shared
//! freely between threads.

#[cfg(any(feature = "lzma", feature = "xz"))]
use std::io::Cursor;

#[cfg(feature = "gzip")]
use flate2::{Decompress, FlushDecompress, Status};

#[cfg(feature = "zstd")]
use ruzstd::decoding::FrameDecoder;

use tracing::trace;

use super::error::DecompressError;
use super::superblock::Compressor;

/// Caller policy applied to decoders that support it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Upper bound on LZMA decoder memory in bytes. `None` leaves it unbounded.
    pub lzma_memlimit: Option<usize>,
}

/// A bound decode operation for one compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    #[cfg(feature = "gzip")]
    Gzip,
    #[cfg(feature = "lzma")]
    Lzma { memlimit: Option<usize> },
    #[cfg(feature = "lzo")]
    Lzo,
    #[cfg(feature = "xz")]
    Xz,
    #[cfg(feature = "lz4")]
    Lz4,
    #[cfg(feature = "zstd")]
    Zstd,
}

impl Decoder {
    /// Bind the decoder for `compressor`, if this build includes it
    #[allow(unused_variables)]
    pub fn new(compressor: Compressor, options: &DecodeOptions) -> Option<Self> {
        match compressor {
            #[cfg(feature = "gzip")]
            Compressor::Gzip => Some(Decoder::Gzip),
            #[cfg(feature = "lzma")]
            Compressor::Lzma => Some(Decoder::Lzma { memlimit: options.lzma_memlimit }),
            #[cfg(feature = "lzo")]
            Compressor::Lzo => Some(Decoder::Lzo),
            #[cfg(feature = "xz")]
            Compressor::Xz => Some(Decoder::Xz),
            #[cfg(feature = "lz4")]
            Compressor::Lz4 => Some(Decoder::Lz4),
            #[cfg(feature = "zstd")]
            Compressor::Zstd => Some(Decoder::Zstd),
            _ => None,
        }
    }

    pub fn compressor(&self) -> Compressor {
        match *self {
            #[cfg(feature = "gzip")]
            Decoder::Gzip => Compressor::Gzip,
            #[cfg(feature = "lzma")]
            Decoder::Lzma { .. } => Compressor::Lzma,
            #[cfg(feature = "lzo")]
            Decoder::Lzo => Compressor::Lzo,
            #[cfg(feature = "xz")]
            Decoder::Xz => Compressor::Xz,
            #[cfg(feature = "lz4")]
            Decoder::Lz4 => Compressor::Lz4,
            #[cfg(feature = "zstd")]
            Decoder::Zstd => Compressor::Zstd,
        }
    }

    /// Decompress a whole block. `output.len()` is the capacity: a block that would decode to
    /// more bytes than that fails.
    #[allow(unused_variables)]
    pub fn decode(&self, input: &[u8], output: &mut [u8]) -> Result<usize, DecompressError> {
        let capacity = output.len();
        let decoded: Option<usize> = match *self {
            #[cfg(feature = "gzip")]
            Decoder::Gzip => decode_zlib(input, output),
            #[cfg(feature = "lzma")]
            Decoder::Lzma { memlimit } => decode_lzma(input, output, memlimit),
            #[cfg(feature = "lzo")]
            Decoder::Lzo => decode_lzo(input, output),
            #[cfg(feature = "xz")]
            Decoder::Xz => decode_xz(input, output),
            #[cfg(feature = "lz4")]
            Decoder::Lz4 => decode_lz4(input, output),
            #[cfg(feature = "zstd")]
            Decoder::Zstd => decode_zstd(input, output),
        };

        match decoded {
            Some(n) if n <= capacity => Ok(n),
            Some(n) => {
                trace!(compressor = %self.compressor(), decoded = n, capacity, "decoder overran its output");
                Err(DecompressError::new(self.compressor()))
            },
            None => Err(DecompressError::new(self.compressor())),
        }
    }

    /// Decompress a whole block into a new buffer of at most `capacity` bytes
    pub fn decode_to_vec(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, DecompressError> {
        let mut out = vec![0; capacity];
        let n = self.decode(input, &mut out)?;
        out.truncate(n);
        Ok(out)
    }
}

// Anything other than a clean end of stream is a failure, including a stream that ran out of
// output space or input before its end marker. The zlib-rs inflater may write into spare output
// space past the decoded length, so it inflates into scratch and only the payload is copied out.
#[cfg(feature = "gzip")]
fn decode_zlib(input: &[u8], output: &mut [u8]) -> Option<usize> {
    let mut scratch = vec![0u8; output.len()];
    let mut inflater = Decompress::new(true);
    match inflater.decompress(input, &mut scratch, FlushDecompress::Finish) {
        Ok(Status::StreamEnd) => {
            let n = usize::try_from(inflater.total_out()).ok()?;
            output.get_mut(..n)?.copy_from_slice(scratch.get(..n)?);
            Some(n)
        },
        Ok(status) => {
            trace!(?status, "zlib stream did not end cleanly");
            None
        },
        Err(e) => {
            trace!(error = %e, "zlib stream rejected");
            None
        },
    }
}

// Legacy LZMA-alone streams carry their own header with properties and unpacked size.
#[cfg(feature = "lzma")]
fn decode_lzma(mut input: &[u8], output: &mut [u8], memlimit: Option<usize>) -> Option<usize> {
    let options = lzma_rs::decompress::Options {
        memlimit,
        ..Default::default()
    };
    let mut writer = Cursor::new(output);
    match lzma_rs::lzma_decompress_with_options(&mut input, &mut writer, &options) {
        Ok(()) => usize::try_from(writer.position()).ok(),
        Err(e) => {
            trace!(error = ?e, "lzma stream rejected");
            None
        },
    }
}

#[cfg(feature = "xz")]
fn decode_xz(mut input: &[u8], output: &mut [u8]) -> Option<usize> {
    let mut writer = Cursor::new(output);
    match lzma_rs::xz_decompress(&mut input, &mut writer) {
        Ok(()) => usize::try_from(writer.position()).ok(),
        Err(e) => {
            trace!(error = ?e, "xz stream rejected");
            None
        },
    }
}

#[cfg(feature = "lzo")]
fn decode_lzo(input: &[u8], output: &mut [u8]) -> Option<usize> {
    let (decoded, err) = rust_lzo::LZOContext::decompress_to_slice(input, output);
    if err != rust_lzo::LZOError::OK {
        trace!("lzo stream rejected");
        return None;
    }
    Some(decoded.len())
}

#[cfg(feature = "lz4")]
fn decode_lz4(input: &[u8], output: &mut [u8]) -> Option<usize> {
    lz4_flex::block::decompress_into(input, output)
        .map_err(|e| trace!(error = %e, "lz4 block rejected"))
        .ok()
}

#[cfg(feature = "zstd")]
fn decode_zstd(input: &[u8], output: &mut [u8]) -> Option<usize> {
    let mut decoder = FrameDecoder::new();
    decoder.decode_all(input, output)
        .map_err(|e| trace!(error = ?e, "zstd frame rejected"))
        .ok()
}
