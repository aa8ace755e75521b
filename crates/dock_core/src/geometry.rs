//! Drop geometry
//!
//! Maps a pointer position and the bounding boxes of a group's item containers
//! to the index where a dragged item should land.

use serde::{Deserialize, Serialize};

/// A point in the coordinate space of the group's item container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounding box of one item container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Resolve the insertion index for a drop at `pointer`.
///
/// Picks the candidate whose center is nearest to the pointer (first one wins
/// on equal distance) and inserts after it when the pointer is right of its
/// center, at it otherwise. Indexes refer to positions in `item_bounds`; the
/// result is at most `item_bounds.len()`. No candidates yields 0.
pub fn resolve_insertion_index(pointer: Point, item_bounds: &[Rect]) -> usize {
    let mut closest_distance = f64::MAX;
    let mut closest_index = 0;
    let mut insert_after = false;

    for (index, bounds) in item_bounds.iter().enumerate() {
        let center = bounds.center();
        let distance = pointer.distance_to(center);
        if distance < closest_distance {
            closest_distance = distance;
            closest_index = index;
            insert_after = pointer.x > center.x;
        }
    }

    if insert_after {
        (closest_index + 1).min(item_bounds.len())
    } else {
        closest_index
    }
}
