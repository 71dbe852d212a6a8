use std::cmp::min;
use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use super::compressed::Decoder;

// Metadata blocks never decompress to more than this
pub const METADATA_BLOCK_SIZE: usize = 8192;

/// The 16-bit word in front of every metadata block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataHeader {
    size: u16,
    compressed: bool,
}

impl MetadataHeader {
    const UNCOMPRESSED: u16 = 0x8000;

    pub fn from_raw(raw: u16) -> Self {
        Self {
            size: raw & !Self::UNCOMPRESSED,
            compressed: raw & Self::UNCOMPRESSED == 0,
        }
    }

    pub fn read<R>(r: &mut R) -> io::Result<Self>
    where R: Read
    {
        Ok(Self::from_raw(r.read_u16::<LittleEndian>()?))
    }

    /// Size of the block as stored on disk, excluding this header
    pub fn size(&self) -> usize {
        self.size.into()
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

/// The 32-bit size word of a data block or fragment block. A size of zero marks a sparse block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBlockSize {
    size: u32,
    compressed: bool,
}

impl DataBlockSize {
    const UNCOMPRESSED: u32 = 1 << 24;
    const SIZE_MASK: u32 = Self::UNCOMPRESSED - 1;

    pub fn from_raw(raw: u32) -> Self {
        Self {
            size: raw & Self::SIZE_MASK,
            compressed: raw & Self::UNCOMPRESSED == 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn is_sparse(&self) -> bool {
        self.size == 0
    }
}

/// Read and decompress a single metadata block from the provided Reader into the provided buffer.
/// Metadata blocks decompress to at most 8KB; a smaller buffer caps the output and a block that
/// does not fit fails. Returns the number of bytes consumed from the reader (header included) and
/// the number of bytes written to `buf`.
///
/// `decoder` may be `None` for images whose metadata is stored uncompressed; meeting a compressed
/// block without one is `Unsupported`.
pub fn read_metadata_block<R>(r: &mut R, decoder: Option<&Decoder>, buf: &mut [u8]) -> io::Result<(usize, usize)>
    where R: Read
{
    let header = MetadataHeader::read(r)?;
    let size = header.size();

    if size > METADATA_BLOCK_SIZE {
        debug!(size, "metadata block size too big");
        return Err(io::Error::from(io::ErrorKind::InvalidData));
    }

    let mut raw = [0u8; METADATA_BLOCK_SIZE];
    let raw = &mut raw[..size];
    r.read_exact(raw)?;
    let consumed = size + 2;

    if !header.is_compressed() {
        let target = buf.get_mut(..size)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "buffer too small for metadata block"))?;
        target.copy_from_slice(raw);
        return Ok((consumed, size));
    }

    let decoder = decoder
        .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "compressed metadata block without a decoder"))?;
    let max_out = min(buf.len(), METADATA_BLOCK_SIZE);
    let total = decoder.decode(raw, &mut buf[..max_out])?;

    Ok((consumed, total))
}

/// Read a data or fragment block whose size word is `size` and decompress it into `buf`. Sparse
/// blocks fill `buf` with zeros. Returns the number of bytes written to `buf`.
pub fn read_data_block<R>(r: &mut R, decoder: Option<&Decoder>, size: DataBlockSize, buf: &mut [u8]) -> io::Result<usize>
    where R: Read
{
    if size.is_sparse() {
        buf.fill(0);
        return Ok(buf.len());
    }

    if !size.is_compressed() {
        let target = buf.get_mut(..size.size())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "buffer too small for data block"))?;
        r.read_exact(target)?;
        return Ok(size.size());
    }

    let decoder = decoder
        .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "compressed data block without a decoder"))?;
    let mut raw = vec![0; size.size()];
    r.read_exact(&mut raw)?;
    Ok(decoder.decode(&raw, buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_header() {
        let h = MetadataHeader::from_raw(0x8000 | 100);
        assert_eq!(h.size(), 100);
        assert!(!h.is_compressed());
        let h = MetadataHeader::from_raw(8192);
        assert_eq!(h.size(), 8192);
        assert!(h.is_compressed());
    }

    #[test]
    fn test_data_block_size() {
        let s = DataBlockSize::from_raw((1 << 24) | 4096);
        assert_eq!(s.size(), 4096);
        assert!(!s.is_compressed());
        let s = DataBlockSize::from_raw(1234);
        assert_eq!(s.size(), 1234);
        assert!(s.is_compressed());
        assert!(DataBlockSize::from_raw(0).is_sparse());
    }

    #[test]
    fn test_uncompressed_metadata_block() -> io::Result<()> {
        let mut data = (0x8000u16 | 5).to_le_bytes().to_vec();
        data.extend_from_slice(b"hello trailing");
        let mut buf = [0u8; METADATA_BLOCK_SIZE];
        let mut r = &data[..];
        let (consumed, size) = read_metadata_block(&mut r, None, &mut buf)?;
        assert_eq!((consumed, size), (7, 5));
        assert_eq!(&buf[..5], b"hello");
        assert_eq!(r, b" trailing");
        Ok(())
    }

    #[test]
    fn test_oversized_metadata_block() {
        let data = 8193u16.to_le_bytes();
        let mut buf = [0u8; METADATA_BLOCK_SIZE];
        let err = read_metadata_block(&mut &data[..], None, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_compressed_metadata_block_without_decoder() {
        let mut data = 3u16.to_le_bytes().to_vec();
        data.extend_from_slice(&[1, 2, 3]);
        let mut buf = [0u8; METADATA_BLOCK_SIZE];
        let err = read_metadata_block(&mut &data[..], None, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn test_sparse_data_block() -> io::Result<()> {
        let mut buf = [0xAAu8; 16];
        let n = read_data_block(&mut io::empty(), None, DataBlockSize::from_raw(0), &mut buf)?;
        assert_eq!(n, 16);
        assert!(buf.iter().all(|&b| b == 0));
        Ok(())
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_compressed_metadata_block() -> io::Result<()> {
        use flate2::write::ZlibEncoder;
        use flate2::Compression;
        use std::io::Write;

        let payload: Vec<u8> = (0..METADATA_BLOCK_SIZE).map(|i| (i % 251) as u8).collect();
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(&payload)?;
        let compressed = enc.finish()?;

        let mut data = (compressed.len() as u16).to_le_bytes().to_vec();
        data.extend_from_slice(&compressed);

        let decoder = Decoder::Gzip;
        let mut buf = [0u8; METADATA_BLOCK_SIZE];
        let (consumed, size) = read_metadata_block(&mut &data[..], Some(&decoder), &mut buf)?;
        assert_eq!(consumed, compressed.len() + 2);
        assert_eq!(size, METADATA_BLOCK_SIZE);
        assert_eq!(&buf[..], &payload[..]);

        // A block that does not fit the caller's buffer is a decompression failure
        let mut small = [0u8; 100];
        let err = read_metadata_block(&mut &data[..], Some(&decoder), &mut small).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        Ok(())
    }
}
