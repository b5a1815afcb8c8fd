use crate::consts::OUTPUT_NAME_STRIPPED_CHARS;
use crate::error::Result;
use crate::frame::{GeoFrame, Operation};
use crate::raster::Raster;

/// Draws a raster to some output (an image buffer, a file, a plot window).
pub trait RasterRenderer {
    type Output;

    fn render(&self, raster: &Raster) -> Result<Self::Output>;
}

/// Colour map family a renderer should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScale {
    Sequential,
    /// Centred on zero. Used for differences, where sign matters.
    Diverging,
}

impl ColorScale {
    pub fn for_frame(frame: &GeoFrame) -> Self {
        match frame.operation {
            Some(Operation::Subtract) => ColorScale::Diverging,
            _ => ColorScale::Sequential,
        }
    }
}

/// File name a renderer writes `frame` to by default:
/// `observatory_instrument_date_time[_operation].extension`, with dashes and
/// colons removed from the stem.
pub fn default_output_name(frame: &GeoFrame, extension: &str) -> String {
    let mut stem = format!(
        "{}_{}_{}_{}",
        frame.observatory, frame.instrument, frame.date, frame.time
    );
    if let Some(op) = frame.operation {
        stem.push('_');
        stem.push_str(&op.to_string());
    }
    stem.retain(|c| !OUTPUT_NAME_STRIPPED_CHARS.contains(&c));

    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        stem
    } else {
        format!("{stem}.{extension}")
    }
}
