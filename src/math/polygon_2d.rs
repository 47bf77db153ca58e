use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Tests whether `p` lies inside (or on the boundary of) the axis-aligned
/// rectangle spanned by `min` and `max`.
#[must_use]
pub fn point_in_rect(p: &Point2, min: &Point2, max: &Point2) -> bool {
    p.x >= min.x - TOLERANCE
        && p.x <= max.x + TOLERANCE
        && p.y >= min.y - TOLERANCE
        && p.y <= max.y + TOLERANCE
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(Vector2::new(d.x / len, d.y / len))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let area = signed_area_2d(&pts);
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn point_in_rect_inside_and_outside() {
        let min = Point2::new(0.0, 0.0);
        let max = Point2::new(2.0, 1.0);
        assert!(point_in_rect(&Point2::new(1.0, 0.5), &min, &max));
        assert!(point_in_rect(&Point2::new(0.0, 0.0), &min, &max)); // corner
        assert!(!point_in_rect(&Point2::new(2.5, 0.5), &min, &max));
        assert!(!point_in_rect(&Point2::new(1.0, -0.5), &min, &max));
    }

    #[test]
    fn segment_direction_normalized() {
        let d = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)).unwrap();
        assert!((d.norm() - 1.0).abs() < TOLERANCE);
        assert!((d.x - 0.6).abs() < TOLERANCE);
        assert!((d.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_degenerate_fails() {
        let result = segment_direction(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn left_normal_rotates_ccw() {
        let n = left_normal(&Vector2::new(1.0, 0.0));
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
