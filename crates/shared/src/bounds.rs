//! Axis-aligned boxes in longitude/latitude space.
//!
//! Boxes are `[min_x, min_y, max_x, max_y]` with x = longitude and
//! y = latitude, in degrees.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Inverted box that every real box widens away from.
    pub const EMPTY: BoundingBox = BoundingBox {
        min_x: 180.0,
        min_y: 180.0,
        max_x: -180.0,
        max_y: -180.0,
    };

    pub fn from_bounds(bounds: [f64; 4]) -> Self {
        BoundingBox {
            min_x: bounds[0],
            min_y: bounds[1],
            max_x: bounds[2],
            max_y: bounds[3],
        }
    }

    pub fn to_bounds(self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Smallest box covering both `self` and `other`.
    pub fn widen(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// South-west then north-east corner, each as `[lat, lng]`.
    pub fn fit_corners(&self) -> [[f64; 2]; 2] {
        [[self.min_y, self.min_x], [self.max_y, self.max_x]]
    }
}

/// Fold boxes into one, starting from [`BoundingBox::EMPTY`].
///
/// With no input the result is `EMPTY` itself, which is not a valid box.
pub fn aggregate<I>(boxes: I) -> BoundingBox
where
    I: IntoIterator<Item = BoundingBox>,
{
    boxes
        .into_iter()
        .fold(BoundingBox::EMPTY, |acc, b| acc.widen(&b))
}

/// Union of all boxes, or `None` when there are none.
pub fn union_of<I>(boxes: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = BoundingBox>,
{
    boxes.into_iter().reduce(|acc, b| acc.widen(&b))
}
