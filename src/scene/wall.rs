use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};
use crate::scene::opening::OpeningId;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the scene store.
    pub struct WallId;
}

/// Endpoint distance (per axis) below which a wall counts as axis-aligned.
pub const AXIS_TOLERANCE: f64 = 5.0;

/// Which end of a wall an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallEnd {
    Start,
    End,
}

/// Axis classification of a wall, used by the constrained corner mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallAxis {
    Horizontal,
    Vertical,
    Diagonal,
}

/// A wall segment: centerline endpoints plus cross-section dimensions.
///
/// Coordinates are in plan units (inches). A wall owns the IDs of the
/// openings placed on it; openings are cascaded when the wall is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub height: f64,
    pub openings: Vec<OpeningId>,
}

impl Wall {
    /// Creates a wall with no openings.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64, height: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            height,
            openings: Vec::new(),
        }
    }

    /// Returns the centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the endpoint selected by `end`.
    #[must_use]
    pub fn endpoint(&self, end: WallEnd) -> Point2 {
        match end {
            WallEnd::Start => self.start,
            WallEnd::End => self.end,
        }
    }

    /// Returns the endpoint opposite to `end`.
    #[must_use]
    pub fn opposite_endpoint(&self, end: WallEnd) -> Point2 {
        match end {
            WallEnd::Start => self.end,
            WallEnd::End => self.start,
        }
    }

    /// Returns the normalized centerline direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a zero-length wall.
    pub fn direction(&self) -> Result<Vector2> {
        segment_direction(&self.start, &self.end)
    }

    /// Returns the centerline angle in radians, measured from the x-axis.
    #[must_use]
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// Returns the point at normalized parameter `t` along the centerline.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        Point2::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }

    /// Classifies the wall as horizontal, vertical, or diagonal within
    /// [`AXIS_TOLERANCE`].
    #[must_use]
    pub fn axis(&self) -> WallAxis {
        if (self.start.y - self.end.y).abs() < AXIS_TOLERANCE {
            WallAxis::Horizontal
        } else if (self.start.x - self.end.x).abs() < AXIS_TOLERANCE {
            WallAxis::Vertical
        } else {
            WallAxis::Diagonal
        }
    }

    /// Returns the flat plan-view rectangle of the wall as 4 corner points
    /// in counter-clockwise order, derived directly from the centerline and
    /// thickness without going through the chain pipeline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a zero-length wall.
    pub fn footprint(&self) -> Result<[Point2; 4]> {
        let dir = self.direction()?;
        let n = left_normal(&dir) * (self.thickness * 0.5);
        Ok([
            Point2::new(self.start.x - n.x, self.start.y - n.y),
            Point2::new(self.end.x - n.x, self.end.y - n.y),
            Point2::new(self.end.x + n.x, self.end.y + n.y),
            Point2::new(self.start.x + n.x, self.start.y + n.y),
        ])
    }

    /// `true` when the wall's endpoints coincide within `tolerance`.
    #[must_use]
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.length() < tolerance
    }
}
