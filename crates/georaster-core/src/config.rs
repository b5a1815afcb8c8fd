use serde::{Deserialize, Serialize};

use crate::error::{GeoRasterError, Result};

/// Options for [`mosaic`](crate::algebra::mosaic).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicOptions {
    /// Output resolution. `None` uses the finer of the two operands.
    pub resolution: Option<u32>,
    /// Keep the full union extent (zero-filled gaps). When false the result
    /// is cropped to the largest candidate region.
    pub padding: bool,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            resolution: None,
            padding: true,
        }
    }
}

impl MosaicOptions {
    pub fn at_resolution(resolution: u32) -> Self {
        Self {
            resolution: Some(resolution),
            ..Self::default()
        }
    }

    pub fn cropped(self) -> Self {
        Self {
            padding: false,
            ..self
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GeoRasterError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GeoRasterError::Config(e.to_string()))
    }
}

impl std::fmt::Display for MosaicOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resolution {
            Some(r) => write!(f, "{r} m/px")?,
            None => write!(f, "native")?,
        }
        if self.padding {
            write!(f, ", padded")
        } else {
            write!(f, ", cropped")
        }
    }
}
