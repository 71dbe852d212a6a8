//! Byte-order primitives for the SquashFS wire format.
//!
//! Every multi-byte field on disk is little-endian. The [`HostOrder`] strategy describes what it
//! takes to turn such a field into a host-native value and is chosen once for the target as
//! [`HOST_ORDER`]. On little-endian targets it is [`HostOrder::Identity`] and normalization does
//! no work at all.

/// Reverse the bytes of a 16-bit value
#[inline]
pub const fn swap16(v: u16) -> u16 {
    v.swap_bytes()
}

/// Reverse the bytes of a 32-bit value
#[inline]
pub const fn swap32(v: u32) -> u32 {
    v.swap_bytes()
}

/// Reverse the bytes of a 64-bit value
#[inline]
pub const fn swap64(v: u64) -> u64 {
    v.swap_bytes()
}

/// Width of a single multi-byte field in an on-disk structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    W16,
    W32,
    W64,
}

impl FieldWidth {
    pub const fn bytes(self) -> usize {
        match self {
            FieldWidth::W16 => 2,
            FieldWidth::W32 => 4,
            FieldWidth::W64 => 8,
        }
    }
}

/// Total size in bytes of a structure described by `layout`
pub const fn layout_size(layout: &[FieldWidth]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < layout.len() {
        total += layout[i].bytes();
        i += 1;
    }
    total
}

/// How wire-order fields are converted to host order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOrder {
    /// The host is little-endian; wire bytes are already host bytes.
    Identity,
    /// The host is big-endian; every field must be byte-reversed.
    Swap,
}

/// The strategy for the target this crate was built for
pub const HOST_ORDER: HostOrder = if cfg!(target_endian = "little") {
    HostOrder::Identity
} else {
    HostOrder::Swap
};

impl HostOrder {
    #[inline]
    pub fn to_host16(self, v: u16) -> u16 {
        match self {
            HostOrder::Identity => v,
            HostOrder::Swap => swap16(v),
        }
    }

    #[inline]
    pub fn to_host32(self, v: u32) -> u32 {
        match self {
            HostOrder::Identity => v,
            HostOrder::Swap => swap32(v),
        }
    }

    #[inline]
    pub fn to_host64(self, v: u64) -> u64 {
        match self {
            HostOrder::Identity => v,
            HostOrder::Swap => swap64(v),
        }
    }

    /// Rewrite every field described by `layout` at the front of `buf` in place.
    ///
    /// This is a one-way conversion: applying it twice to the same buffer under
    /// [`HostOrder::Swap`] restores the wire bytes, which is not a host-order structure.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than the layout.
    pub fn normalize(self, buf: &mut [u8], layout: &[FieldWidth]) {
        let size = layout_size(layout);
        assert!(buf.len() >= size, "buffer of {} bytes is too short for a {} byte structure", buf.len(), size);

        if self == HostOrder::Identity {
            return;
        }

        let mut offset = 0;
        for width in layout {
            let n = width.bytes();
            buf[offset..offset + n].reverse();
            offset += n;
        }
    }
}
