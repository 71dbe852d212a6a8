//! Decoding layer for read-only SquashFS images: block decompression across every SquashFS
//! compressor, and conversion of the little-endian on-disk structures into host values.
//!
//! Everything above this layer (block caches, table indexing, directory traversal, the
//! filesystem interface) is left to the caller. The caller reads raw bytes from the image, picks
//! a [`Decoder`](squashfs::Decoder) for the image's compressor, decompresses, and decodes the
//! resulting structures.
//!
//! ## Feature Flags
//! Each compressor is a Cargo feature: `gzip`, `lzma`, `xz`, `lzo`, `lz4`, `zstd`. All are
//! enabled by default. [`supported_compressors`](squashfs::supported_compressors) reports what a
//! build includes.
//!
//! ## Usage Example
//! ```rust
//! use std::io;
//! use sqfs_decode::squashfs::{CodecRegistry, Superblock, WireFormat};
//! use sqfs_decode::squashfs::block::{read_metadata_block, METADATA_BLOCK_SIZE};
//!
//! fn first_inode_block(image: &[u8]) -> io::Result<Vec<u8>> {
//!     let sb = Superblock::from_bytes(image)?;
//!     if !sb.has_valid_magic() {
//!         return Err(io::Error::new(io::ErrorKind::InvalidData, "not a squashfs image"));
//!     }
//!     let decoder = CodecRegistry::new().require(sb.compressor)?;
//!
//!     let mut table = &image[sb.inode_table as usize..];
//!     let mut buf = [0u8; METADATA_BLOCK_SIZE];
//!     let (_, size) = read_metadata_block(&mut table, Some(&decoder), &mut buf)?;
//!     Ok(buf[..size].to_vec())
//! }
//! ```

pub mod squashfs;
