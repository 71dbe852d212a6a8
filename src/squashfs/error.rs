use std::io;

use thiserror::Error;

use super::superblock::Compressor;

/// A block could not be decompressed. Backends do not distinguish between a corrupt stream, a
/// stream that does not fit the output buffer, or a malformed header: the block is unreadable
/// and retrying with the same input cannot succeed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{compressor} decompression failed")]
pub struct DecompressError {
    compressor: Compressor,
}

impl DecompressError {
    pub(crate) fn new(compressor: Compressor) -> Self {
        Self { compressor }
    }

    pub fn compressor(&self) -> Compressor {
        self.compressor
    }
}

impl From<DecompressError> for io::Error {
    fn from(e: DecompressError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

/// The image uses a compressor this build or registry cannot decode. This is a configuration
/// mismatch, not data corruption.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} compression is not supported")]
pub struct UnsupportedCompressor(pub Compressor);

impl From<UnsupportedCompressor> for io::Error {
    fn from(e: UnsupportedCompressor) -> Self {
        io::Error::new(io::ErrorKind::Unsupported, e)
    }
}
