use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GeoRasterError, Result};

/// Axis-aligned real-world extent of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Build a bounding box from `(xmin, xmax)` and `(ymin, ymax)` pairs.
    ///
    /// Fails with [`GeoRasterError::InvalidValue`] unless both pairs are
    /// finite and strictly increasing.
    pub fn new(xcoords: (f64, f64), ycoords: (f64, f64)) -> Result<Self> {
        let (xmin, xmax) = xcoords;
        let (ymin, ymax) = ycoords;

        if ![xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite()) {
            return Err(GeoRasterError::InvalidValue(format!(
                "bounding box coordinates must be finite: x=({xmin}, {xmax}) y=({ymin}, {ymax})"
            )));
        }
        if xmin >= xmax || ymin >= ymax {
            return Err(GeoRasterError::InvalidValue(format!(
                "bounding box must satisfy xmin < xmax and ymin < ymax: x=({xmin}, {xmax}) y=({ymin}, {ymax})"
            )));
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    pub fn xcoords(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    pub fn ycoords(&self) -> (f64, f64) {
        (self.ymin, self.ymax)
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// Region covered by both boxes, or `None` when they only touch or are
    /// disjoint.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let xmin = self.xmin.max(other.xmin);
        let xmax = self.xmax.min(other.xmax);
        let ymin = self.ymin.max(other.ymin);
        let ymax = self.ymax.min(other.ymax);

        if xmin >= xmax || ymin >= ymax {
            return None;
        }

        Some(BoundingBox {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }
}

/// Provenance tag set by the raster combinators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Mosaic,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Mosaic => write!(f, "mosaic"),
        }
    }
}

/// Real-world placement and acquisition identity of a raster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoFrame {
    pub bbox: BoundingBox,
    /// Real-world distance spanned by one pixel edge, identical on both axes.
    pub resolution: f64,
    pub observatory: String,
    pub instrument: String,
    pub date: NaiveDate,
    /// Clock time of acquisition; combined rasters carry a composite string.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

impl GeoFrame {
    pub fn new(
        bbox: BoundingBox,
        resolution: f64,
        observatory: impl Into<String>,
        instrument: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Result<Self> {
        let frame = Self {
            bbox,
            resolution,
            observatory: observatory.into(),
            instrument: instrument.into(),
            date,
            time: time.into(),
            operation: None,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Check that the bbox is finite and strictly ordered and the resolution
    /// positive and finite. Also run by [`Raster::new`](crate::raster::Raster::new)
    /// and the coordinate conversions.
    pub fn validate(&self) -> Result<()> {
        BoundingBox::new(self.bbox.xcoords(), self.bbox.ycoords())?;
        validate_resolution(self.resolution)
    }

    /// Grid shape `(rows, cols)` implied by the bbox extent and resolution.
    pub fn expected_shape(&self) -> (usize, usize) {
        (
            (self.bbox.height() / self.resolution).round_ties_even() as usize,
            (self.bbox.width() / self.resolution).round_ties_even() as usize,
        )
    }
}

pub(crate) fn validate_resolution(resolution: f64) -> Result<()> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(())
    } else {
        Err(GeoRasterError::InvalidValue(format!(
            "resolution must be a positive finite number, got {resolution}"
        )))
    }
}
