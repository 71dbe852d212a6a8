use super::compressed::{DecodeOptions, Decoder};
use super::error::UnsupportedCompressor;
use super::superblock::Compressor;

// The compressors this build can decode, in the order they are reported
const COMPILED: &[Compressor] = &[
    #[cfg(feature = "lzo")]
    Compressor::Lzo,
    #[cfg(feature = "xz")]
    Compressor::Xz,
    #[cfg(feature = "lzma")]
    Compressor::Lzma,
    #[cfg(feature = "gzip")]
    Compressor::Gzip,
    #[cfg(feature = "lz4")]
    Compressor::Lz4,
    #[cfg(feature = "zstd")]
    Compressor::Zstd,
];

/// Every compressor compiled into this build, in canonical order
pub fn supported_compressors() -> &'static [Compressor] {
    COMPILED
}

/// Select a decoder for `compressor` from every backend compiled into this build
pub fn select_decoder(compressor: Compressor) -> Option<Decoder> {
    Decoder::new(compressor, &DecodeOptions::default())
}

/// The set of decoders available to an image reader.
///
/// A registry starts from the compiled-in backends and can be narrowed at runtime; it never
/// grows beyond what the build provides. Selection is a pure lookup.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    enabled: Vec<Compressor>,
    options: DecodeOptions,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecRegistry {
    /// A registry with every compiled-in backend enabled
    pub fn new() -> Self {
        Self {
            enabled: COMPILED.to_vec(),
            options: DecodeOptions::default(),
        }
    }

    /// A registry with only the given backends enabled. Compressors that are not compiled in,
    /// duplicates, and `Unknown` are ignored; the result keeps canonical order.
    pub fn with_codecs<I>(codecs: I) -> Self
    where I: IntoIterator<Item = Compressor>
    {
        let wanted: Vec<Compressor> = codecs.into_iter().collect();
        Self {
            enabled: COMPILED.iter().copied().filter(|c| wanted.contains(c)).collect(),
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// The enabled compressors in canonical order
    pub fn supported(&self) -> &[Compressor] {
        &self.enabled
    }

    pub fn is_supported(&self, compressor: Compressor) -> bool {
        self.enabled.contains(&compressor)
    }

    /// The decoder for `compressor`, or `None` if it is not enabled here
    pub fn select(&self, compressor: Compressor) -> Option<Decoder> {
        if !self.is_supported(compressor) {
            return None;
        }
        Decoder::new(compressor, &self.options)
    }

    /// Like [`select`](Self::select), for callers that treat a missing decoder as an error
    pub fn require(&self, compressor: Compressor) -> Result<Decoder, UnsupportedCompressor> {
        self.select(compressor).ok_or(UnsupportedCompressor(compressor))
    }
}
