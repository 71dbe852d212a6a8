use std::fmt;
use std::io;
use std::io::Read;

use bitflags::bitflags;
use byteorder::{LittleEndian, ReadBytesExt};
use num_enum::{FromPrimitive, IntoPrimitive};

use super::metadata::{EntryReference, WireFormat};
use super::swap::FieldWidth::{self, W16, W32, W64};

/// "hsqs" when read as bytes from the start of the image
pub const MAGIC: u32 = 0x73717368;

/// Value of a table offset that marks the table as absent
pub const INVALID_TABLE: u64 = u64::MAX;

#[derive(Debug, Clone)]
pub struct Superblock {
    pub magic: u32,
    pub inode_count: u32,
    pub mod_time: u32,
    pub block_size: u32,
    pub frag_count: u32,
    pub compressor: Compressor,
    pub block_log: u16,
    pub flags: SuperblockFlags,
    pub id_count: u16,
    pub version_major: u16,
    pub version_minor: u16,
    pub root_inode: EntryReference,
    pub bytes_used: u64,
    pub id_table: u64,
    pub xattr_table: u64,
    pub inode_table: u64,
    pub dir_table: u64,
    pub frag_table: u64,
    pub export_table: u64,
}

bitflags! {
    pub struct SuperblockFlags: u16 {
        const INODES_UNCOMPRESSED = 0x0001;
        const DATABLOCKS_UNCOMPRESSED = 0x0002;
        const FRAGMENTS_UNCOMPRESSED = 0x0008;
        const FRAGMENTS_NOT_USED = 0x0010;
        const FRAGMENTS_ALWAYS_GENERATED = 0x0020;
        const DATA_DEDUPLICATED = 0x0040;
        const NFS_EXPORT_EXISTS = 0x0080;
        const XATTRS_UNCOMPRESSED = 0x0100;
        const NO_XATTRS = 0x0200;
        const COMPRESSOR_OPTIONS_PRESENT = 0x0400;
        const ID_TABLE_UNCOMPRESSED = 0x0800;
    }
}

/// The compression algorithm recorded in the superblock. Codes are fixed by the format; any
/// unrecognized code decodes as `Unknown`, which never selects a decoder.
#[derive(Debug, IntoPrimitive, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Compressor {
    #[num_enum(default)]
    Unknown = 0,
    Gzip = 1,
    Lzma = 2,
    Lzo = 3,
    Xz = 4,
    Lz4 = 5,
    Zstd = 6,
}

impl Compressor {
    /// Every valid compressor, in code order
    pub const ALL: [Compressor; 6] = [
        Compressor::Gzip,
        Compressor::Lzma,
        Compressor::Lzo,
        Compressor::Xz,
        Compressor::Lz4,
        Compressor::Zstd,
    ];

    /// The name squashfs-tools uses for this compressor
    pub fn name(self) -> Option<&'static str> {
        match self {
            Compressor::Unknown => None,
            Compressor::Gzip => Some("zlib"),
            Compressor::Lzma => Some("lzma"),
            Compressor::Lzo => Some("lzo"),
            Compressor::Xz => Some("xz"),
            Compressor::Lz4 => Some("lz4"),
            Compressor::Zstd => Some("zstd"),
        }
    }

    /// Parse a compressor name. "gzip" is accepted as an alias for "zlib".
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zlib" | "gzip" => Some(Compressor::Gzip),
            "lzma" => Some(Compressor::Lzma),
            "lzo" => Some(Compressor::Lzo),
            "xz" => Some(Compressor::Xz),
            "lz4" => Some(Compressor::Lz4),
            "zstd" => Some(Compressor::Zstd),
            _ => None,
        }
    }
}

impl fmt::Display for Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str("unknown"),
        }
    }
}

impl Superblock {
    pub fn has_valid_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn has_xattr_table(&self) -> bool {
        self.xattr_table != INVALID_TABLE
    }

    pub fn has_export_table(&self) -> bool {
        self.export_table != INVALID_TABLE
    }

    pub fn has_frag_table(&self) -> bool {
        self.frag_table != INVALID_TABLE
    }
}

impl WireFormat for Superblock {
    const LAYOUT: &'static [FieldWidth] = &[
        W32, W32, W32, W32, W32,
        W16, W16, W16, W16, W16, W16,
        W64, W64, W64, W64, W64, W64, W64, W64,
    ];

    fn read<R>(r: &mut R) -> io::Result<Superblock>
    where R: Read
    {
        Ok(Superblock {
            magic: r.read_u32::<LittleEndian>()?,
            inode_count: r.read_u32::<LittleEndian>()?,
            mod_time: r.read_u32::<LittleEndian>()?,
            block_size: r.read_u32::<LittleEndian>()?,
            frag_count: r.read_u32::<LittleEndian>()?,
            compressor: Compressor::from(r.read_u16::<LittleEndian>()?),
            block_log: r.read_u16::<LittleEndian>()?,
            flags: SuperblockFlags::from_bits_truncate(r.read_u16::<LittleEndian>()?),
            id_count: r.read_u16::<LittleEndian>()?,
            version_major: r.read_u16::<LittleEndian>()?,
            version_minor: r.read_u16::<LittleEndian>()?,
            root_inode: EntryReference::read(r)?,
            bytes_used: r.read_u64::<LittleEndian>()?,
            id_table: r.read_u64::<LittleEndian>()?,
            xattr_table: r.read_u64::<LittleEndian>()?,
            inode_table: r.read_u64::<LittleEndian>()?,
            dir_table: r.read_u64::<LittleEndian>()?,
            frag_table: r.read_u64::<LittleEndian>()?,
            export_table: r.read_u64::<LittleEndian>()?,
        })
    }
}

const _: () = assert!(<Superblock as WireFormat>::BYTE_SIZE == 96);

/// Rewrite a raw superblock to host order in place
pub fn normalize_superblock(buf: &mut [u8]) {
    Superblock::normalize(buf)
}
