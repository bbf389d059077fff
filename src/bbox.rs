use crate::{crs::Crs, error::ProjectionError, reproject::Transformer};
use std::fmt;

/// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BBox {
        BBox { min_x, min_y, max_x, max_y }
    }

    /// Transform the lower-left and upper-right corners independently.
    pub fn reproject(&self, transformer: &Transformer) -> Result<BBox, ProjectionError> {
        let (min_x, min_y) = transformer.transform(self.min_x, self.min_y)?;
        let (max_x, max_y) = transformer.transform(self.max_x, self.max_y)?;
        Ok(BBox { min_x, min_y, max_x, max_y })
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl From<[f64; 4]> for BBox {
    fn from(b: [f64; 4]) -> BBox {
        BBox::new(b[0], b[1], b[2], b[3])
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{:?}, {:?}, {:?}, {:?}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

pub fn reproject_bbox(bbox: &BBox, source: &Crs, target: &Crs) -> Result<BBox, ProjectionError> {
    let transformer = Transformer::from_crs(source, target)?;
    bbox.reproject(&transformer)
}
