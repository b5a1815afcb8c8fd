use std::path::Path;

use tracing::debug;

use crate::error::{GeoRasterError, Result};
use crate::raster::Raster;

/// Turns the raw bytes of one container format into a [`Raster`].
///
/// Framed formats yield a raster with a [`GeoFrame`](crate::frame::GeoFrame);
/// tabular formats yield a frameless one. Malformed input must surface as
/// [`GeoRasterError::Format`].
pub trait RasterDecoder: Send + Sync {
    /// File extensions handled, without the leading dot.
    fn extensions(&self) -> &[&str];

    fn decode(&self, bytes: &[u8]) -> Result<Raster>;
}

/// Dispatches files to decoders by extension.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn RasterDecoder>>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder. Later registrations take precedence for shared
    /// extensions.
    pub fn register(&mut self, decoder: Box<dyn RasterDecoder>) -> &mut Self {
        self.decoders.push(decoder);
        self
    }

    pub fn decoder_for(&self, path: &Path) -> Option<&dyn RasterDecoder> {
        let ext = path.extension()?.to_str()?;
        self.decoders
            .iter()
            .rev()
            .find(|d| d.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|d| d.as_ref())
    }

    /// Decode `bytes` with the decoder registered for `path`'s extension.
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<Raster> {
        self.require_decoder(path)?.decode(bytes)
    }

    /// Read `path` from disk and decode it.
    pub fn open(&self, path: &Path) -> Result<Raster> {
        // Unknown formats fail before touching disk.
        let decoder = self.require_decoder(path)?;
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Decoding raster file");
        decoder.decode(&bytes)
    }

    fn require_decoder(&self, path: &Path) -> Result<&dyn RasterDecoder> {
        self.decoder_for(path).ok_or_else(|| {
            GeoRasterError::UnsupportedFormat(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })
    }
}
