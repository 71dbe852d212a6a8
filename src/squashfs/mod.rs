pub mod block;
pub mod compressed;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod superblock;
pub mod swap;

pub use compressed::{DecodeOptions, Decoder};
pub use error::{DecompressError, UnsupportedCompressor};
pub use metadata::{Inode, WireFormat};
pub use registry::{select_decoder, supported_compressors, CodecRegistry};
pub use superblock::{Compressor, Superblock, MAGIC};
