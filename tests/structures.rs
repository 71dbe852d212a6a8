use std::io;

use proptest::prelude::*;

use sqfs_decode::squashfs::metadata::*;
use sqfs_decode::squashfs::superblock::{normalize_superblock, SuperblockFlags, INVALID_TABLE};
use sqfs_decode::squashfs::swap::HostOrder;
use sqfs_decode::squashfs::{Compressor, Inode, Superblock, WireFormat, MAGIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    H(u16),
    W(u32),
    D(u64),
}

fn le(fields: &[Field]) -> Vec<u8> {
    let mut b = Vec::new();
    for f in fields {
        match *f {
            Field::H(v) => b.extend_from_slice(&v.to_le_bytes()),
            Field::W(v) => b.extend_from_slice(&v.to_le_bytes()),
            Field::D(v) => b.extend_from_slice(&v.to_le_bytes()),
        }
    }
    b
}

fn be(fields: &[Field]) -> Vec<u8> {
    let mut b = Vec::new();
    for f in fields {
        match *f {
            Field::H(v) => b.extend_from_slice(&v.to_be_bytes()),
            Field::W(v) => b.extend_from_slice(&v.to_be_bytes()),
            Field::D(v) => b.extend_from_slice(&v.to_be_bytes()),
        }
    }
    b
}

// Read a normalized buffer back the way C code would: as native integers at fixed offsets
fn native(buf: &[u8], shape: &[Field]) -> Vec<Field> {
    let mut off = 0;
    shape.iter().map(|f| match f {
        Field::H(_) => {
            off += 2;
            Field::H(u16::from_ne_bytes(buf[off - 2..off].try_into().unwrap()))
        },
        Field::W(_) => {
            off += 4;
            Field::W(u32::from_ne_bytes(buf[off - 4..off].try_into().unwrap()))
        },
        Field::D(_) => {
            off += 8;
            Field::D(u64::from_ne_bytes(buf[off - 8..off].try_into().unwrap()))
        },
    }).collect()
}

fn superblock_fields() -> Vec<Field> {
    use Field::*;
    vec![
        W(MAGIC), W(1021), W(1_690_000_000), W(1 << 17), W(12),
        H(4), H(17), H(0x00C0), H(3), H(4), H(0),
        D((0x2e0 << 16) | 0x1a4), D(0x0026_5000), D(0x0026_4f80), D(INVALID_TABLE),
        D(0x0025_0000), D(0x0025_e000), D(0x0026_4000), D(0x0026_4f00),
    ]
}

#[test]
fn test_superblock_decode_and_normalize() -> io::Result<()> {
    let fields = superblock_fields();
    let raw = le(&fields);
    assert_eq!(raw.len(), Superblock::BYTE_SIZE);

    let sb = Superblock::from_bytes(&raw)?;
    assert!(sb.has_valid_magic());
    assert_eq!(sb.inode_count, 1021);
    assert_eq!(sb.block_size, 131072);
    assert_eq!(sb.compressor, Compressor::Xz);
    assert_eq!(sb.block_log, 17);
    assert_eq!(sb.flags, SuperblockFlags::DATA_DEDUPLICATED | SuperblockFlags::NFS_EXPORT_EXISTS);
    assert_eq!(sb.root_inode.location(), 0x2e0);
    assert_eq!(sb.root_inode.offset(), 0x1a4);
    assert!(!sb.has_xattr_table());
    assert!(sb.has_export_table());
    assert_eq!(sb.export_table, 0x0026_4f00);

    let mut buf = raw.clone();
    normalize_superblock(&mut buf);
    assert_eq!(native(&buf, &fields), fields);
    assert_eq!(u32::from_ne_bytes(buf[..4].try_into().unwrap()), 0x73717368);
    Ok(())
}

#[test]
fn test_normalize_ignores_trailing_bytes() {
    let fields = [Field::D(0x0102_0304_0506_0708), Field::W(9), Field::W(10)];
    let mut buf = le(&fields);
    buf.extend_from_slice(&[0xEE; 5]);
    normalize_xattr_id(&mut buf);
    assert_eq!(native(&buf, &fields), fields);
    assert_eq!(&buf[16..], &[0xEE; 5]);
}

#[test]
fn test_swap_strategy_on_foreign_order() {
    let fields = [Field::D(0x0000_0000_0040_0000), Field::W(7), Field::W(0)];

    let mut buf = be(&fields);
    HostOrder::Swap.normalize(&mut buf, XattrIdTable::LAYOUT);
    assert_eq!(buf, le(&fields));

    let mut buf = le(&fields);
    HostOrder::Identity.normalize(&mut buf, XattrIdTable::LAYOUT);
    assert_eq!(buf, le(&fields));
}

#[test]
#[should_panic]
fn test_normalize_short_buffer_panics() {
    let mut buf = [0u8; 15];
    normalize_fragment_entry(&mut buf);
}

#[test]
fn test_short_reads_are_eof() {
    fn check<T: WireFormat + std::fmt::Debug>() {
        let buf = vec![0u8; T::BYTE_SIZE - 1];
        let err = T::from_bytes(&buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
    check::<Superblock>();
    check::<InodeHeader>();
    check::<LongRegInode>();
    check::<LongDirInode>();
    check::<DirHeader>();
    check::<DirEntry>();
    check::<FragmentEntry>();
    check::<XattrIdTable>();
}

#[test]
fn test_inode_sequence() -> io::Result<()> {
    use Field::*;
    let dir = [
        H(1), H(0o755), H(0), H(0), W(1_690_000_000), W(1),
        W(0), W(3), H(35), H(0), W(4),
    ];
    let file = [
        H(2), H(0o644), H(1), H(1), W(1_690_000_001), W(2),
        W(96), W(INVALID_FRAG), W(0), W(300_000),
    ];
    let link = [
        H(3), H(0o777), H(0), H(0), W(1_690_000_002), W(3),
        W(1), W(11),
    ];
    let mut table = le(&dir);
    table.extend(le(&file));
    table.extend(le(&link));
    table.extend_from_slice(b"/etc/passwd");

    let mut r = &table[..];
    let inode = Inode::read(&mut r)?;
    assert!(inode.is_dir());
    assert_eq!(inode.mode(), 0o40755);
    assert_eq!(inode.nlink(), 3);
    assert_eq!(r.len(), table.len() - DirInode::BYTE_SIZE);

    let inode = Inode::read(&mut r)?;
    assert!(inode.is_file());
    assert_eq!(inode.file_size(), Some(300_000));
    match inode {
        Inode::File(f) => assert_eq!(f.block_count(131072), Some(3)),
        other => panic!("expected a regular file, got {:?}", other),
    }

    let inode = Inode::read(&mut r)?;
    assert_eq!(inode.file_size(), Some(11));
    assert_eq!(r, b"/etc/passwd");
    Ok(())
}

#[test]
fn test_unknown_inode_type() {
    use Field::*;
    let raw = le(&[H(0x42), H(0), H(0), H(0), W(0), W(0), W(0)]);
    let err = Inode::from_bytes(&raw).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_directory_run() -> io::Result<()> {
    use Field::*;
    let mut table = le(&[W(1), W(0x2000), W(100)]);
    table.extend(le(&[H(0x40), H(5), H(2), H(2)]));
    table.extend_from_slice(b"bin");
    table.extend(le(&[H(0x80), H(0xFFFEu16), H(1), H(3)]));
    table.extend_from_slice(b"boot");

    let mut r = &table[..];
    let header = DirHeader::read(&mut r)?;
    assert_eq!(header.entry_count(), 2);

    let mut names = Vec::new();
    for _ in 0..header.entry_count() {
        let entry = DirEntry::read(&mut r)?;
        let (name, rest) = r.split_at(entry.name_len());
        r = rest;
        names.push((
            String::from_utf8_lossy(name).into_owned(),
            header.entry_inode_number(&entry),
            header.entry_ref(&entry),
        ));
    }
    assert!(r.is_empty());
    assert_eq!(names[0].0, "bin");
    assert_eq!(names[0].1, 105);
    assert_eq!(names[0].2, EntryReference::new(0x2000, 0x40));
    assert_eq!(names[1].0, "boot");
    assert_eq!(names[1].1, 98);
    Ok(())
}

#[test]
fn test_xattr_records() -> io::Result<()> {
    use Field::*;
    let entry = XattrEntry::from_bytes(&le(&[H(0x0101), H(8)]))?;
    assert_eq!(entry.prefix(), 1);
    assert!(entry.is_out_of_line());
    assert_eq!(XattrVal::from_bytes(&le(&[W(24)]))?.vsize, 24);
    let table = XattrIdTable::from_bytes(&le(&[D(0x9000), W(2), W(0)]))?;
    assert_eq!((table.xattr_table_start, table.xattr_ids), (0x9000, 2));
    Ok(())
}

fn long_reg_fields(
    (mode, uid, gid, mtime, inode_number): (u16, u16, u16, u32, u32),
    (start, size, sparse): (u64, u64, u64),
    (nlink, fragment, offset, xattr): (u32, u32, u32, u32),
) -> Vec<Field> {
    use Field::*;
    vec![
        H(9), H(mode), H(uid), H(gid), W(mtime), W(inode_number),
        D(start), D(size), D(sparse), W(nlink), W(fragment), W(offset), W(xattr),
    ]
}

proptest! {
    #[test]
    fn prop_long_file_decode(
        head in any::<(u16, u16, u16, u32, u32)>(),
        sizes in any::<(u64, u64, u64)>(),
        tail in any::<(u32, u32, u32, u32)>(),
    ) {
        let fields = long_reg_fields(head, sizes, tail);
        let raw = le(&fields);
        prop_assert_eq!(raw.len(), LongRegInode::BYTE_SIZE);

        let inode = LongRegInode::from_bytes(&raw).unwrap();
        prop_assert_eq!(inode.header.mode, head.0);
        prop_assert_eq!(inode.header.inode_number, head.4);
        prop_assert_eq!(inode.file_size, sizes.1);
        prop_assert_eq!(inode.sparse, sizes.2);
        prop_assert_eq!(inode.xattr, tail.3);

        let mut buf = raw.clone();
        normalize_lreg_inode(&mut buf);
        prop_assert_eq!(native(&buf, &fields), fields);
    }

    #[test]
    fn prop_fragment_entry_normalize(start in any::<u64>(), size in any::<u32>(), unused in any::<u32>()) {
        let fields = [Field::D(start), Field::W(size), Field::W(unused)];
        let mut buf = le(&fields);
        let entry = FragmentEntry::from_bytes(&buf).unwrap();
        prop_assert_eq!((entry.start_block, entry.size, entry.unused), (start, size, unused));

        normalize_fragment_entry(&mut buf);
        prop_assert_eq!(native(&buf, &fields), fields.to_vec());
    }

    #[test]
    fn prop_swap_matches_wire(values in prop::collection::vec(any::<u32>(), 1..8)) {
        let fields: Vec<Field> = values.iter().map(|&v| Field::W(v)).collect();
        let layout = vec![sqfs_decode::squashfs::swap::FieldWidth::W32; values.len()];
        let mut buf = be(&fields);
        HostOrder::Swap.normalize(&mut buf, &layout);
        prop_assert_eq!(buf, le(&fields));
    }
}
