use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use num_enum::{FromPrimitive, IntoPrimitive};

use super::swap::{layout_size, FieldWidth, HOST_ORDER};
use super::swap::FieldWidth::{W16, W32, W64};

/// Fragment index of a file whose tail is not stored in a fragment
pub const INVALID_FRAG: u32 = 0xFFFF_FFFF;

/// Xattr index of an inode without extended attributes
pub const INVALID_XATTR: u32 = 0xFFFF_FFFF;

/// A fixed-layout structure stored little-endian on disk.
///
/// `read` decodes the structure field by field, converting each field to host order as it goes.
/// `normalize` is the in-place alternative for callers that keep raw buffers: it rewrites each
/// field of a raw structure to host order and must be applied exactly once per buffer.
pub trait WireFormat: Sized {
    /// Widths of the structure's fields, in on-disk order
    const LAYOUT: &'static [FieldWidth];
    const BYTE_SIZE: usize = layout_size(Self::LAYOUT);

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read;

    fn from_bytes(buf: &[u8]) -> io::Result<Self> {
        Self::read(&mut &buf[..])
    }

    /// # Panics
    /// Panics if `buf` is shorter than `BYTE_SIZE`.
    fn normalize(buf: &mut [u8]) {
        HOST_ORDER.normalize(buf, Self::LAYOUT)
    }
}

/// An opaque reference to a location inside a metadata table: the offset of a metadata block
/// relative to the table start, and a byte offset within the uncompressed block.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EntryReference {
    val: u64
}

impl EntryReference {
    pub fn new(location: u64, offset: u16) -> Self {
        Self {
            val: (location << 16) | u64::from(offset),
        }
    }

    pub fn location(&self) -> u64 {
        self.val >> 16
    }

    pub fn offset(&self) -> u16 {
        (self.val & 0xFFFF) as u16
    }

    pub fn raw(&self) -> u64 {
        self.val
    }

    pub fn from_bytes(buf: &[u8]) -> io::Result<Self> {
        Self::read(&mut &buf[..])
    }

    pub fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            val: r.read_u64::<LittleEndian>()?
        })
    }
}

impl std::fmt::Debug for EntryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.location(), self.offset())
    }
}

#[derive(Debug, IntoPrimitive, FromPrimitive, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum InodeType {
    BasicDir = 1,
    BasicFile = 2,
    BasicSymlink = 3,
    BasicBlockDev = 4,
    BasicCharDev = 5,
    BasicNamedPipe = 6,
    BasicSocket = 7,
    ExtDir = 8,
    ExtFile = 9,
    ExtSymlink = 10,
    ExtBlockDev = 11,
    ExtCharDev = 12,
    ExtNamedPipe = 13,
    ExtSocket = 14,
    #[num_enum(default)]
    Unknown = 0xFFFF,
}

impl InodeType {
    /// File type bits for `st_mode`
    pub fn mode_bits(self) -> u16 {
        match self {
            InodeType::BasicBlockDev |
            InodeType::ExtBlockDev => 0o60000,
            InodeType::BasicCharDev |
            InodeType::ExtCharDev => 0o20000,
            InodeType::BasicDir |
            InodeType::ExtDir => 0o40000,
            InodeType::BasicFile |
            InodeType::ExtFile => 0o100000,
            InodeType::BasicNamedPipe |
            InodeType::ExtNamedPipe => 0o10000,
            InodeType::BasicSocket |
            InodeType::ExtSocket => 0o140000,
            InodeType::BasicSymlink |
            InodeType::ExtSymlink => 0o120000,
            InodeType::Unknown => 0,
        }
    }
}

/// The header shared by every inode variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InodeHeader {
    pub inode_type: InodeType,
    pub mode: u16,
    pub uid: u16,
    pub gid: u16,
    pub mtime: u32,
    pub inode_number: u32,
}

impl WireFormat for InodeHeader {
    const LAYOUT: &'static [FieldWidth] = &[W16, W16, W16, W16, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            inode_type: InodeType::from(r.read_u16::<LittleEndian>()?),
            mode: r.read_u16::<LittleEndian>()?,
            uid: r.read_u16::<LittleEndian>()?,
            gid: r.read_u16::<LittleEndian>()?,
            mtime: r.read_u32::<LittleEndian>()?,
            inode_number: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Fifo or socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpcInode {
    pub header: InodeHeader,
    pub nlink: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongIpcInode {
    pub header: InodeHeader,
    pub nlink: u32,
    pub xattr: u32,
}

/// Block or character device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevInode {
    pub header: InodeHeader,
    pub nlink: u32,
    pub rdev: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongDevInode {
    pub header: InodeHeader,
    pub nlink: u32,
    pub rdev: u32,
    pub xattr: u32,
}

/// Symbolic link. The target path (`symlink_size` bytes) follows the fixed part on disk; the
/// extended variant shares this layout and stores its xattr index after the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymlinkInode {
    pub header: InodeHeader,
    pub nlink: u32,
    pub symlink_size: u32,
}

/// Regular file. A list of data block sizes follows the fixed part on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegInode {
    pub header: InodeHeader,
    pub start_block: u32,
    pub fragment: u32,
    pub offset: u32,
    pub file_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongRegInode {
    pub header: InodeHeader,
    pub start_block: u64,
    pub file_size: u64,
    pub sparse: u64,
    pub nlink: u32,
    pub fragment: u32,
    pub offset: u32,
    pub xattr: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirInode {
    pub header: InodeHeader,
    pub start_block: u32,
    pub nlink: u32,
    pub file_size: u16,
    pub offset: u16,
    pub parent_inode: u32,
}

/// Large directory. `i_count` directory index records follow the fixed part on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongDirInode {
    pub header: InodeHeader,
    pub nlink: u32,
    pub file_size: u32,
    pub start_block: u32,
    pub parent_inode: u32,
    pub i_count: u16,
    pub offset: u16,
    pub xattr: u32,
}

impl IpcInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl LongIpcInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
            xattr: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl DevInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
            rdev: r.read_u32::<LittleEndian>()?,
        })
    }

    pub fn major(&self) -> u32 {
        (self.rdev >> 8) & 0xFFF
    }

    pub fn minor(&self) -> u32 {
        (self.rdev & 0xFF) | ((self.rdev >> 12) & 0xFFF00)
    }
}

impl LongDevInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
            rdev: r.read_u32::<LittleEndian>()?,
            xattr: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl SymlinkInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
            symlink_size: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl RegInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            start_block: r.read_u32::<LittleEndian>()?,
            fragment: r.read_u32::<LittleEndian>()?,
            offset: r.read_u32::<LittleEndian>()?,
            file_size: r.read_u32::<LittleEndian>()?,
        })
    }

    /// Number of entries in the block size list that follows this inode. `None` for a zero
    /// block size.
    pub fn block_count(&self, block_size: u32) -> Option<u32> {
        block_count(self.file_size.into(), self.fragment, block_size).map(|n| n as u32)
    }
}

impl LongRegInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            start_block: r.read_u64::<LittleEndian>()?,
            file_size: r.read_u64::<LittleEndian>()?,
            sparse: r.read_u64::<LittleEndian>()?,
            nlink: r.read_u32::<LittleEndian>()?,
            fragment: r.read_u32::<LittleEndian>()?,
            offset: r.read_u32::<LittleEndian>()?,
            xattr: r.read_u32::<LittleEndian>()?,
        })
    }

    pub fn block_count(&self, block_size: u32) -> Option<u64> {
        block_count(self.file_size, self.fragment, block_size)
    }
}

// A file's tail lives in a fragment unless the fragment index is unset, in which case the last
// partial block gets its own entry.
fn block_count(file_size: u64, fragment: u32, block_size: u32) -> Option<u64> {
    let block_size = u64::from(block_size);
    let whole = file_size.checked_div(block_size)?;
    if fragment == INVALID_FRAG && file_size % block_size != 0 {
        Some(whole + 1)
    } else {
        Some(whole)
    }
}

impl DirInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            start_block: r.read_u32::<LittleEndian>()?,
            nlink: r.read_u32::<LittleEndian>()?,
            file_size: r.read_u16::<LittleEndian>()?,
            offset: r.read_u16::<LittleEndian>()?,
            parent_inode: r.read_u32::<LittleEndian>()?,
        })
    }
}

impl LongDirInode {
    fn read_body<R: Read>(header: InodeHeader, r: &mut R) -> io::Result<Self> {
        Ok(Self {
            header,
            nlink: r.read_u32::<LittleEndian>()?,
            file_size: r.read_u32::<LittleEndian>()?,
            start_block: r.read_u32::<LittleEndian>()?,
            parent_inode: r.read_u32::<LittleEndian>()?,
            i_count: r.read_u16::<LittleEndian>()?,
            offset: r.read_u16::<LittleEndian>()?,
            xattr: r.read_u32::<LittleEndian>()?,
        })
    }
}

// Every inode variant is its header followed by a body; the layout is the header's fields
// followed by the body's.
macro_rules! inode_wire_format {
    ($t:ty, [$($w:ident),*]) => {
        impl WireFormat for $t {
            const LAYOUT: &'static [FieldWidth] = &[W16, W16, W16, W16, W32, W32, $($w),*];

            fn read<R>(r: &mut R) -> io::Result<Self>
            where R: Read
            {
                let header = InodeHeader::read(r)?;
                Self::read_body(header, r)
            }
        }
    };
}

inode_wire_format!(IpcInode, [W32]);
inode_wire_format!(LongIpcInode, [W32, W32]);
inode_wire_format!(DevInode, [W32, W32]);
inode_wire_format!(LongDevInode, [W32, W32, W32]);
inode_wire_format!(SymlinkInode, [W32, W32]);
inode_wire_format!(RegInode, [W32, W32, W32, W32]);
inode_wire_format!(LongRegInode, [W64, W64, W64, W32, W32, W32, W32]);
inode_wire_format!(DirInode, [W32, W32, W16, W16, W32]);
inode_wire_format!(LongDirInode, [W32, W32, W32, W32, W16, W16, W32]);

/// The fixed part of an inode, decoded according to its type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inode {
    Dir(DirInode),
    LongDir(LongDirInode),
    File(RegInode),
    LongFile(LongRegInode),
    Symlink(SymlinkInode),
    Dev(DevInode),
    LongDev(LongDevInode),
    Ipc(IpcInode),
    LongIpc(LongIpcInode),
}

impl Inode {
    /// Read the header and then the body selected by its type tag. An unknown type tag is
    /// `InvalidData`.
    pub fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        let header = InodeHeader::read(r)?;
        Ok(match header.inode_type {
            InodeType::BasicDir => Inode::Dir(DirInode::read_body(header, r)?),
            InodeType::ExtDir => Inode::LongDir(LongDirInode::read_body(header, r)?),
            InodeType::BasicFile => Inode::File(RegInode::read_body(header, r)?),
            InodeType::ExtFile => Inode::LongFile(LongRegInode::read_body(header, r)?),
            InodeType::BasicSymlink |
            InodeType::ExtSymlink => Inode::Symlink(SymlinkInode::read_body(header, r)?),
            InodeType::BasicBlockDev |
            InodeType::BasicCharDev => Inode::Dev(DevInode::read_body(header, r)?),
            InodeType::ExtBlockDev |
            InodeType::ExtCharDev => Inode::LongDev(LongDevInode::read_body(header, r)?),
            InodeType::BasicNamedPipe |
            InodeType::BasicSocket => Inode::Ipc(IpcInode::read_body(header, r)?),
            InodeType::ExtNamedPipe |
            InodeType::ExtSocket => Inode::LongIpc(LongIpcInode::read_body(header, r)?),
            InodeType::Unknown => {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "Unknown inode type"));
            },
        })
    }

    pub fn from_bytes(buf: &[u8]) -> io::Result<Self> {
        Self::read(&mut &buf[..])
    }

    pub fn header(&self) -> &InodeHeader {
        match self {
            Inode::Dir(i) => &i.header,
            Inode::LongDir(i) => &i.header,
            Inode::File(i) => &i.header,
            Inode::LongFile(i) => &i.header,
            Inode::Symlink(i) => &i.header,
            Inode::Dev(i) => &i.header,
            Inode::LongDev(i) => &i.header,
            Inode::Ipc(i) => &i.header,
            Inode::LongIpc(i) => &i.header,
        }
    }

    /// Permission bits combined with the file type bits
    pub fn mode(&self) -> u16 {
        let header = self.header();
        header.mode | header.inode_type.mode_bits()
    }

    pub fn nlink(&self) -> u32 {
        match self {
            Inode::Dir(i) => i.nlink,
            Inode::LongDir(i) => i.nlink,
            Inode::File(_) => 1,
            Inode::LongFile(i) => i.nlink,
            Inode::Symlink(i) => i.nlink,
            Inode::Dev(i) => i.nlink,
            Inode::LongDev(i) => i.nlink,
            Inode::Ipc(i) => i.nlink,
            Inode::LongIpc(i) => i.nlink,
        }
    }

    /// Index into the xattr id table, if the inode has extended attributes. Extended symlinks
    /// store theirs after the target path and are not covered here.
    pub fn xattr(&self) -> Option<u32> {
        let xattr = match self {
            Inode::LongDir(i) => i.xattr,
            Inode::LongFile(i) => i.xattr,
            Inode::LongDev(i) => i.xattr,
            Inode::LongIpc(i) => i.xattr,
            _ => INVALID_XATTR,
        };
        (xattr != INVALID_XATTR).then_some(xattr)
    }

    pub fn file_size(&self) -> Option<u64> {
        match self {
            Inode::Dir(i) => Some(i.file_size.into()),
            Inode::LongDir(i) => Some(i.file_size.into()),
            Inode::File(i) => Some(i.file_size.into()),
            Inode::LongFile(i) => Some(i.file_size),
            Inode::Symlink(i) => Some(i.symlink_size.into()),
            _ => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Inode::Dir(_) | Inode::LongDir(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Inode::File(_) | Inode::LongFile(_))
    }
}

/// Index record of a large directory, followed on disk by `size + 1` name bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirIndex {
    pub index: u32,
    pub start_block: u32,
    pub size: u32,
}

impl WireFormat for DirIndex {
    const LAYOUT: &'static [FieldWidth] = &[W32, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            index: r.read_u32::<LittleEndian>()?,
            start_block: r.read_u32::<LittleEndian>()?,
            size: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Directory entry, followed on disk by `size + 1` name bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub offset: u16,
    /// Difference from the inode number in the enclosing `DirHeader`
    pub inode_number: i16,
    pub inode_type: InodeType,
    pub size: u16,
}

impl DirEntry {
    pub fn name_len(&self) -> usize {
        usize::from(self.size) + 1
    }
}

impl WireFormat for DirEntry {
    const LAYOUT: &'static [FieldWidth] = &[W16, W16, W16, W16];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            offset: r.read_u16::<LittleEndian>()?,
            inode_number: r.read_i16::<LittleEndian>()?,
            inode_type: InodeType::from(r.read_u16::<LittleEndian>()?),
            size: r.read_u16::<LittleEndian>()?,
        })
    }
}

/// Directory header, followed on disk by `count + 1` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirHeader {
    pub count: u32,
    pub start_block: u32,
    pub inode_number: u32,
}

impl DirHeader {
    pub fn entry_count(&self) -> u64 {
        u64::from(self.count) + 1
    }

    /// The inode number of an entry under this header
    pub fn entry_inode_number(&self, entry: &DirEntry) -> u32 {
        self.inode_number.wrapping_add_signed(entry.inode_number.into())
    }

    /// The reference to an entry's inode within the inode table
    pub fn entry_ref(&self, entry: &DirEntry) -> EntryReference {
        EntryReference::new(self.start_block.into(), entry.offset)
    }
}

impl WireFormat for DirHeader {
    const LAYOUT: &'static [FieldWidth] = &[W32, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            count: r.read_u32::<LittleEndian>()?,
            start_block: r.read_u32::<LittleEndian>()?,
            inode_number: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Location of a fragment block. The size word uses the data block encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentEntry {
    pub start_block: u64,
    pub size: u32,
    pub unused: u32,
}

impl WireFormat for FragmentEntry {
    const LAYOUT: &'static [FieldWidth] = &[W64, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            start_block: r.read_u64::<LittleEndian>()?,
            size: r.read_u32::<LittleEndian>()?,
            unused: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Xattr key record, followed on disk by `size` name bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrEntry {
    pub xattr_type: u16,
    pub size: u16,
}

impl XattrEntry {
    const PREFIX_MASK: u16 = 0x00FF;
    const VALUE_OOL: u16 = 0x0100;

    /// Namespace prefix index: 0 user, 1 trusted, 2 security
    pub fn prefix(&self) -> u16 {
        self.xattr_type & Self::PREFIX_MASK
    }

    /// The value is stored out of line and this entry's value is a reference to it
    pub fn is_out_of_line(&self) -> bool {
        self.xattr_type & Self::VALUE_OOL != 0
    }
}

impl WireFormat for XattrEntry {
    const LAYOUT: &'static [FieldWidth] = &[W16, W16];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            xattr_type: r.read_u16::<LittleEndian>()?,
            size: r.read_u16::<LittleEndian>()?,
        })
    }
}

/// Xattr value header, followed on disk by `vsize` value bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrVal {
    pub vsize: u32,
}

impl WireFormat for XattrVal {
    const LAYOUT: &'static [FieldWidth] = &[W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            vsize: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Entry of the xattr id table: where an inode's key/value pairs live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrId {
    pub xattr: u64,
    pub count: u32,
    pub size: u32,
}

impl WireFormat for XattrId {
    const LAYOUT: &'static [FieldWidth] = &[W64, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            xattr: r.read_u64::<LittleEndian>()?,
            count: r.read_u32::<LittleEndian>()?,
            size: r.read_u32::<LittleEndian>()?,
        })
    }
}

/// Header of the xattr id table, at the superblock's xattr table offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrIdTable {
    pub xattr_table_start: u64,
    pub xattr_ids: u32,
    pub unused: u32,
}

impl WireFormat for XattrIdTable {
    const LAYOUT: &'static [FieldWidth] = &[W64, W32, W32];

    fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self {
            xattr_table_start: r.read_u64::<LittleEndian>()?,
            xattr_ids: r.read_u32::<LittleEndian>()?,
            unused: r.read_u32::<LittleEndian>()?,
        })
    }
}

const _: () = {
    assert!(InodeHeader::BYTE_SIZE == 16);
    assert!(IpcInode::BYTE_SIZE == 20);
    assert!(LongIpcInode::BYTE_SIZE == 24);
    assert!(DevInode::BYTE_SIZE == 24);
    assert!(LongDevInode::BYTE_SIZE == 28);
    assert!(SymlinkInode::BYTE_SIZE == 24);
    assert!(RegInode::BYTE_SIZE == 32);
    assert!(LongRegInode::BYTE_SIZE == 56);
    assert!(DirInode::BYTE_SIZE == 32);
    assert!(LongDirInode::BYTE_SIZE == 40);
    assert!(DirIndex::BYTE_SIZE == 12);
    assert!(DirEntry::BYTE_SIZE == 8);
    assert!(DirHeader::BYTE_SIZE == 12);
    assert!(FragmentEntry::BYTE_SIZE == 16);
    assert!(XattrEntry::BYTE_SIZE == 4);
    assert!(XattrVal::BYTE_SIZE == 4);
    assert!(XattrId::BYTE_SIZE == 16);
    assert!(XattrIdTable::BYTE_SIZE == 16);
};

pub fn normalize_base_inode(buf: &mut [u8]) { InodeHeader::normalize(buf) }
pub fn normalize_ipc_inode(buf: &mut [u8]) { IpcInode::normalize(buf) }
pub fn normalize_lipc_inode(buf: &mut [u8]) { LongIpcInode::normalize(buf) }
pub fn normalize_dev_inode(buf: &mut [u8]) { DevInode::normalize(buf) }
pub fn normalize_ldev_inode(buf: &mut [u8]) { LongDevInode::normalize(buf) }
pub fn normalize_symlink_inode(buf: &mut [u8]) { SymlinkInode::normalize(buf) }
pub fn normalize_reg_inode(buf: &mut [u8]) { RegInode::normalize(buf) }
pub fn normalize_lreg_inode(buf: &mut [u8]) { LongRegInode::normalize(buf) }
pub fn normalize_dir_inode(buf: &mut [u8]) { DirInode::normalize(buf) }
pub fn normalize_ldir_inode(buf: &mut [u8]) { LongDirInode::normalize(buf) }
pub fn normalize_dir_index(buf: &mut [u8]) { DirIndex::normalize(buf) }
pub fn normalize_dir_entry(buf: &mut [u8]) { DirEntry::normalize(buf) }
pub fn normalize_dir_header(buf: &mut [u8]) { DirHeader::normalize(buf) }
pub fn normalize_fragment_entry(buf: &mut [u8]) { FragmentEntry::normalize(buf) }
pub fn normalize_xattr_entry(buf: &mut [u8]) { XattrEntry::normalize(buf) }
pub fn normalize_xattr_val(buf: &mut [u8]) { XattrVal::normalize(buf) }
pub fn normalize_xattr_id(buf: &mut [u8]) { XattrId::normalize(buf) }
pub fn normalize_xattr_id_table(buf: &mut [u8]) { XattrIdTable::normalize(buf) }
