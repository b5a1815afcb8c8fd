use ndarray::Array2;

use crate::coords::{self, EarthCoord, PixelCoord};
use crate::error::{GeoRasterError, Result};
use crate::frame::GeoFrame;

/// A 2-D numeric grid, optionally bound to a real-world frame.
///
/// Row 0 is the northernmost row and column 0 the westernmost column.
/// Rasters are immutable once built; every combinator returns a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    grid: Array2<f64>,
    frame: Option<GeoFrame>,
}

impl Raster {
    /// Bind a grid to a frame, checking the frame with
    /// [`GeoFrame::validate`] and that the grid shape matches the frame's
    /// extent at its resolution.
    pub fn new(grid: Array2<f64>, frame: GeoFrame) -> Result<Self> {
        frame.validate()?;
        let expected = frame.expected_shape();
        if grid.dim() != expected {
            return Err(GeoRasterError::InvalidArgument(format!(
                "grid shape {:?} does not match frame extent, expected {:?} at {} per pixel",
                grid.dim(),
                expected,
                frame.resolution
            )));
        }

        Ok(Self {
            grid,
            frame: Some(frame),
        })
    }

    /// Tabular data with no real-world placement.
    pub fn frameless(grid: Array2<f64>) -> Self {
        Self { grid, frame: None }
    }

    /// Combinator and resampler output, where rounding may leave the grid a
    /// pixel off the frame's nominal extent.
    pub(crate) fn from_parts(grid: Array2<f64>, frame: GeoFrame) -> Self {
        Self {
            grid,
            frame: Some(frame),
        }
    }

    pub fn grid(&self) -> &Array2<f64> {
        &self.grid
    }

    pub fn frame(&self) -> Option<&GeoFrame> {
        self.frame.as_ref()
    }

    pub fn is_framed(&self) -> bool {
        self.frame.is_some()
    }

    pub fn into_parts(self) -> (Array2<f64>, Option<GeoFrame>) {
        (self.grid, self.frame)
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.grid.dim()
    }

    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// The frame, or [`GeoRasterError::MissingFrame`] for tabular data.
    pub fn meta(&self) -> Result<&GeoFrame> {
        self.frame.as_ref().ok_or(GeoRasterError::MissingFrame)
    }

    /// Real-world field of view as `(width, height)`.
    pub fn fov(&self) -> Result<(f64, f64)> {
        let frame = self.meta()?;
        Ok((frame.bbox.width(), frame.bbox.height()))
    }

    /// Real-world centre of the grid as `(x, y)`.
    pub fn centre(&self) -> Result<(f64, f64)> {
        let frame = self.meta()?;
        let (rows, cols) = self.shape();
        Ok((
            frame.bbox.xmin + (cols as f64 / 2.0) * frame.resolution,
            frame.bbox.ymax - (rows as f64 / 2.0) * frame.resolution,
        ))
    }

    /// Easting of every column's pixel centre, west to east.
    pub fn column_centres(&self) -> Result<Vec<f64>> {
        let frame = self.meta()?;
        Ok((0..self.cols())
            .map(|c| frame.bbox.xmin + (c as f64 + 0.5) * frame.resolution)
            .collect())
    }

    /// Northing of every row's pixel centre, north to south.
    pub fn row_centres(&self) -> Result<Vec<f64>> {
        let frame = self.meta()?;
        Ok((0..self.rows())
            .map(|r| frame.bbox.ymax - (r as f64 + 0.5) * frame.resolution)
            .collect())
    }

    pub fn pixel_to_earth(&self, pixel: impl Into<PixelCoord>) -> Result<EarthCoord> {
        coords::pixel_to_earth(self.meta()?, self.shape(), pixel.into())
    }

    pub fn earth_to_pixel(&self, earth: impl Into<EarthCoord>) -> Result<PixelCoord> {
        coords::earth_to_pixel(self.meta()?, self.shape(), earth.into())
    }
}

impl std::fmt::Display for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.frame {
            Some(frame) => write!(
                f,
                "<{}/{}: ({:?}, {:?}) - ({:?}, {:?}) {} m/px>",
                frame.observatory,
                frame.instrument,
                frame.bbox.xmin,
                frame.bbox.ymin,
                frame.bbox.xmax,
                frame.bbox.ymax,
                frame.resolution
            ),
            None => write!(f, "<frameless {}x{}>", self.rows(), self.cols()),
        }
    }
}
