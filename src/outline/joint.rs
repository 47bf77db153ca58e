use std::f64::consts::PI;

use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Signed turn angle below which no corner arc is emitted.
const ARC_EPSILON: f64 = 1e-3;

/// Angular step (≈22.5°) used when rounding a convex corner.
const ARC_STEP: f64 = PI / 8.0;

/// Offset corner geometry at an interior chain joint.
///
/// `outer` sits on the left of the traversal direction, `inner` on the
/// right, each at the miter distance from the joint. When the corner is
/// convex on a side, the matching arc list carries a rounded replacement
/// for the single miter point: the offset endpoints of the two adjoining
/// segments with intermediate points on the half-thickness circle between
/// them. Concave sides keep the plain miter point and an empty arc.
#[derive(Debug, Clone)]
pub struct MiterJoint {
    pub outer: Point2,
    pub inner: Point2,
    pub outer_arc: Vec<Point2>,
    pub inner_arc: Vec<Point2>,
}

impl MiterJoint {
    /// Points to emit on the outer boundary, in traversal order.
    #[must_use]
    pub fn outer_points(&self) -> &[Point2] {
        if self.outer_arc.is_empty() {
            std::slice::from_ref(&self.outer)
        } else {
            &self.outer_arc
        }
    }

    /// Points to emit on the inner boundary, in traversal order.
    #[must_use]
    pub fn inner_points(&self) -> &[Point2] {
        if self.inner_arc.is_empty() {
            std::slice::from_ref(&self.inner)
        } else {
            &self.inner_arc
        }
    }
}

/// Computes the miter joint where two consecutive oriented segments meet.
///
/// `dir_in` points into the joint, `dir_out` out of it; both unit length.
/// The miter direction is the average of the two left perpendiculars,
/// scaled by `half / cos(half turn)` and clamped to `2 × half` — the clamp
/// is a deliberate anti-spike approximation for near-180° turns, not an
/// exact miter-limit law. A full 180° reversal falls back to the incoming
/// perpendicular.
#[must_use]
pub fn miter_joint(
    joint: &Point2,
    dir_in: &Vector2,
    dir_out: &Vector2,
    half_thickness: f64,
) -> MiterJoint {
    let perp_in = left_normal(dir_in);
    let perp_out = left_normal(dir_out);

    let sum = perp_in + perp_out;
    let sum_len = sum.norm();

    let offset = if sum_len < TOLERANCE {
        // 180° reversal: no bisector exists.
        perp_in * half_thickness
    } else {
        let dir = sum / sum_len;
        // cos of half the turn angle; bounded away from zero by the
        // reversal guard above.
        let cos_half = dir.dot(&perp_in);
        let length = if cos_half.abs() < TOLERANCE {
            2.0 * half_thickness
        } else {
            (half_thickness / cos_half).min(2.0 * half_thickness)
        };
        dir * length
    };

    // Signed turn: positive = left turn (convex on the right/inner side),
    // negative = right turn (convex on the left/outer side).
    let cross = dir_in.x * dir_out.y - dir_in.y * dir_out.x;
    let dot = dir_in.dot(dir_out);
    let turn = cross.atan2(dot);

    let outer_arc = if turn < -ARC_EPSILON {
        corner_arc(joint, &perp_in, turn, half_thickness)
    } else {
        Vec::new()
    };
    let inner_arc = if turn > ARC_EPSILON {
        corner_arc(joint, &(-perp_in), turn, half_thickness)
    } else {
        Vec::new()
    };

    MiterJoint {
        outer: joint + offset,
        inner: joint - offset,
        outer_arc,
        inner_arc,
    }
}

/// Flat perpendicular cap at an open chain end: `(outer, inner)` offset
/// points on the left/right of `dir`.
#[must_use]
pub fn flat_cap(point: &Point2, dir: &Vector2, half_thickness: f64) -> (Point2, Point2) {
    let n = left_normal(dir) * half_thickness;
    (point + n, point - n)
}

/// Points on the `radius` circle around `joint`, sweeping the `from` offset
/// direction through the turn angle in ≈22.5° steps, endpoints included.
/// Rotating the incoming perpendicular by the turn yields the outgoing one,
/// so the sweep ends exactly on the next segment's offset line.
fn corner_arc(joint: &Point2, from: &Vector2, turn: f64, radius: f64) -> Vec<Point2> {
    let start = from.y.atan2(from.x);
    let sweep = turn;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (sweep.abs() / ARC_STEP).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        #[allow(clippy::cast_precision_loss)]
        let angle = start + sweep * (i as f64 / steps as f64);
        points.push(Point2::new(
            joint.x + radius * angle.cos(),
            joint.y + radius * angle.sin(),
        ));
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SQRT_2: f64 = std::f64::consts::SQRT_2;

    #[test]
    fn right_angle_miter_distance() {
        // East then north, half thickness 3: the offset corner sits at
        // 3·√2 from the joint, at 45° from both wall directions.
        let joint = Point2::new(10.0, 0.0);
        let m = miter_joint(
            &joint,
            &Vector2::new(1.0, 0.0),
            &Vector2::new(0.0, 1.0),
            3.0,
        );
        assert_relative_eq!((m.outer - joint).norm(), 3.0 * SQRT_2, epsilon = 1e-10);
        assert_relative_eq!((m.inner - joint).norm(), 3.0 * SQRT_2, epsilon = 1e-10);

        // Left turn: outer (left) side is concave, inner side convex.
        assert!(m.outer_arc.is_empty());
        assert!(!m.inner_arc.is_empty());

        // Outer point bisects the two left perpendiculars (0,1) and (-1,0).
        assert_relative_eq!(m.outer.x, 10.0 - 3.0, epsilon = 1e-10);
        assert_relative_eq!(m.outer.y, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn straight_joint_is_plain_offset() {
        let joint = Point2::new(5.0, 5.0);
        let m = miter_joint(
            &joint,
            &Vector2::new(1.0, 0.0),
            &Vector2::new(1.0, 0.0),
            2.0,
        );
        assert_relative_eq!(m.outer.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(m.outer.y, 7.0, epsilon = 1e-10);
        assert_relative_eq!(m.inner.y, 3.0, epsilon = 1e-10);
        assert!(m.outer_arc.is_empty());
        assert!(m.inner_arc.is_empty());
    }

    #[test]
    fn near_reversal_is_clamped() {
        // 170° turn: unclamped miter would be huge.
        let angle = 170.0_f64.to_radians();
        let dir_out = Vector2::new(angle.cos(), angle.sin());
        let joint = Point2::new(0.0, 0.0);
        let m = miter_joint(&joint, &Vector2::new(1.0, 0.0), &dir_out, 3.0);
        assert!(
            (m.outer - joint).norm() <= 6.0 + 1e-9,
            "miter length {} exceeds clamp",
            (m.outer - joint).norm()
        );
    }

    #[test]
    fn full_reversal_falls_back_to_perpendicular() {
        let joint = Point2::new(0.0, 0.0);
        let m = miter_joint(
            &joint,
            &Vector2::new(1.0, 0.0),
            &Vector2::new(-1.0, 0.0),
            3.0,
        );
        // Fallback: incoming left perpendicular (0, 1) scaled by 3.
        assert_relative_eq!(m.outer.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(m.outer.y, 3.0, epsilon = 1e-10);
        assert_relative_eq!(m.inner.y, -3.0, epsilon = 1e-10);
    }

    #[test]
    fn convex_arc_lies_on_half_thickness_circle() {
        // Right turn: east then south. Outer (left) side is convex.
        let joint = Point2::new(0.0, 0.0);
        let m = miter_joint(
            &joint,
            &Vector2::new(1.0, 0.0),
            &Vector2::new(0.0, -1.0),
            3.0,
        );
        assert!(!m.outer_arc.is_empty());
        assert!(m.inner_arc.is_empty());
        for p in &m.outer_arc {
            assert_relative_eq!((p - joint).norm(), 3.0, epsilon = 1e-10);
        }
        // 90° sweep in 22.5° steps: 4 steps, 5 points.
        assert_eq!(m.outer_arc.len(), 5);

        // Arc endpoints are the adjoining segments' offset points.
        let first = m.outer_arc[0];
        let last = m.outer_arc[m.outer_arc.len() - 1];
        assert_relative_eq!(first.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(first.y, 3.0, epsilon = 1e-10);
        assert_relative_eq!(last.x, 3.0, epsilon = 1e-10);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn outer_points_prefer_arc() {
        let joint = Point2::new(0.0, 0.0);
        let m = miter_joint(
            &joint,
            &Vector2::new(1.0, 0.0),
            &Vector2::new(0.0, -1.0),
            3.0,
        );
        assert_eq!(m.outer_points().len(), m.outer_arc.len());
        assert_eq!(m.inner_points().len(), 1);
    }

    #[test]
    fn flat_cap_offsets() {
        let (outer, inner) = flat_cap(&Point2::new(0.0, 0.0), &Vector2::new(1.0, 0.0), 2.0);
        assert_relative_eq!(outer.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(inner.y, -2.0, epsilon = 1e-10);
    }
}
