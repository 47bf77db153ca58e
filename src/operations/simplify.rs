use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;

/// Minimum spacing between consecutive simplified points. Anything closer
/// would produce a zero-length wall downstream.
const MIN_SEGMENT: f64 = 2.0;

/// Reduces a freehand stroke to a small ordered set of corner points.
///
/// Runs classic Douglas-Peucker reduction, snaps the retained points to the
/// active grid, then drops consecutive points closer than [`MIN_SEGMENT`].
/// Runs once, at the end of a stroke, before walls are created from it.
#[derive(Debug)]
pub struct SimplifyPath {
    points: Vec<Point2>,
    tolerance: f64,
    grid_size: f64,
}

impl SimplifyPath {
    /// Creates a new simplification operation.
    ///
    /// A `grid_size` of 0 (or less) disables the grid-snap pass.
    #[must_use]
    pub fn new(points: Vec<Point2>, tolerance: f64, grid_size: f64) -> Self {
        Self {
            points,
            tolerance,
            grid_size,
        }
    }

    /// Executes the simplification.
    ///
    /// Inputs with fewer than 2 points are returned unchanged; otherwise the
    /// output keeps both stroke endpoints and has at least 2 points. Every
    /// point of the input lies within `tolerance` of the output polyline
    /// (before grid snapping).
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if self.points.len() < 2 {
            return self.points.clone();
        }

        let mut kept = Vec::with_capacity(self.points.len() / 4 + 2);
        kept.push(self.points[0]);
        douglas_peucker(&self.points, self.tolerance, &mut kept);
        kept.push(self.points[self.points.len() - 1]);

        for p in &mut kept {
            *p = snap_to_grid(*p, self.grid_size);
        }

        drop_short_segments(&kept)
    }
}

/// Recursively keeps the interior points of `points` that deviate from the
/// chord by more than `tolerance`, appending them to `kept` in order.
/// Endpoints are the caller's responsibility.
fn douglas_peucker(points: &[Point2], tolerance: f64, kept: &mut Vec<Point2>) {
    let n = points.len();
    if n < 3 {
        return;
    }

    let first = &points[0];
    let last = &points[n - 1];

    // Farthest interior point from the chord. A degenerate chord
    // (first == last) falls back to plain point distance inside
    // point_to_segment_dist.
    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, p) in points.iter().enumerate().take(n - 1).skip(1) {
        let d = point_to_segment_dist(p, first, last);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        douglas_peucker(&points[..=max_idx], tolerance, kept);
        kept.push(points[max_idx]);
        douglas_peucker(&points[max_idx..], tolerance, kept);
    }
}

/// Rounds each axis to the nearest grid multiple. No-op when `grid <= 0`.
fn snap_to_grid(p: Point2, grid: f64) -> Point2 {
    if grid <= 0.0 {
        return p;
    }
    Point2::new((p.x / grid).round() * grid, (p.y / grid).round() * grid)
}

/// Drops consecutive points closer than [`MIN_SEGMENT`], keeping the final
/// endpoint. Collapses that would leave fewer than 2 points fall back to
/// the two endpoints.
fn drop_short_segments(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    let mut out: Vec<Point2> = Vec::with_capacity(n);

    for (i, p) in points.iter().enumerate() {
        match out.last() {
            Some(prev) if (p - prev).norm() < MIN_SEGMENT => {
                // Too close to the previous kept point. The stroke's final
                // endpoint still wins over an interior point.
                if i == n - 1 && out.len() > 1 {
                    let last = out.len() - 1;
                    out[last] = *p;
                }
            }
            _ => out.push(*p),
        }
    }

    if out.len() < 2 {
        return vec![points[0], points[n - 1]];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::distance_2d::point_to_segment_dist;

    fn max_deviation(original: &[Point2], simplified: &[Point2]) -> f64 {
        original
            .iter()
            .map(|p| {
                simplified
                    .windows(2)
                    .map(|w| point_to_segment_dist(p, &w[0], &w[1]))
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn collinear_points_collapse_to_endpoints() {
        let stroke: Vec<Point2> = (0..=20).map(|i| Point2::new(f64::from(i) * 5.0, 0.0)).collect();
        let out = SimplifyPath::new(stroke, 1.0, 0.0).execute();
        assert_eq!(out.len(), 2);
        assert!((out[0].x).abs() < 1e-10);
        assert!((out[1].x - 100.0).abs() < 1e-10);
    }

    #[test]
    fn corner_is_retained() {
        // L-shaped stroke with slight jitter.
        let mut stroke: Vec<Point2> = (0..=10)
            .map(|i| Point2::new(f64::from(i) * 10.0, 0.3 * f64::from(i % 2)))
            .collect();
        stroke.extend((1..=10).map(|i| Point2::new(100.0, f64::from(i) * 8.0)));

        let out = SimplifyPath::new(stroke, 2.0, 0.0).execute();
        assert_eq!(out.len(), 3, "expected endpoints plus corner, got {out:?}");
        assert!((out[1].x - 100.0).abs() < 1.0);
        assert!(out[1].y.abs() < 9.0);
    }

    #[test]
    fn error_bound_holds() {
        // Noisy sine-ish stroke.
        let stroke: Vec<Point2> = (0..=50)
            .map(|i| {
                let x = f64::from(i) * 4.0;
                Point2::new(x, 20.0 * (x * 0.05).sin())
            })
            .collect();
        let tolerance = 3.0;
        let out = SimplifyPath::new(stroke.clone(), tolerance, 0.0).execute();
        assert!(out.len() >= 2);
        let dev = max_deviation(&stroke, &out);
        assert!(dev <= tolerance + 1e-9, "deviation {dev} exceeds tolerance");
    }

    #[test]
    fn idempotent() {
        let stroke: Vec<Point2> = (0..=50)
            .map(|i| {
                let x = f64::from(i) * 4.0;
                Point2::new(x, 15.0 * (x * 0.07).sin())
            })
            .collect();
        let once = SimplifyPath::new(stroke, 2.5, 0.0).execute();
        let twice = SimplifyPath::new(once.clone(), 2.5, 0.0).execute();
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).norm() < 1e-10);
        }
    }

    #[test]
    fn grid_snap_applied() {
        let stroke = vec![Point2::new(1.0, 1.0), Point2::new(97.0, 2.0)];
        let out = SimplifyPath::new(stroke, 1.0, 6.0).execute();
        assert!((out[0].x).abs() < 1e-10);
        assert!((out[0].y).abs() < 1e-10);
        assert!((out[1].x - 96.0).abs() < 1e-10);
        assert!((out[1].y).abs() < 1e-10);
    }

    #[test]
    fn close_points_deduplicated() {
        let stroke = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(50.0, 0.0),
        ];
        let out = SimplifyPath::new(stroke, 0.1, 0.0).execute();
        for w in out.windows(2) {
            assert!((w[1] - w[0]).norm() >= MIN_SEGMENT);
        }
        assert!((out.last().map_or(0.0, |p| p.x) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn short_input_returned_unchanged() {
        let one = vec![Point2::new(3.0, 4.0)];
        let out = SimplifyPath::new(one.clone(), 1.0, 6.0).execute();
        assert_eq!(out.len(), 1);
        assert!((out[0] - one[0]).norm() < 1e-10);

        let empty: Vec<Point2> = Vec::new();
        assert!(SimplifyPath::new(empty, 1.0, 6.0).execute().is_empty());
    }

    #[test]
    fn degenerate_chord_does_not_panic() {
        // Loop stroke: first and last points coincide.
        let stroke = vec![
            Point2::new(0.0, 0.0),
            Point2::new(40.0, 0.0),
            Point2::new(40.0, 40.0),
            Point2::new(0.0, 0.0),
        ];
        let out = SimplifyPath::new(stroke, 1.0, 0.0).execute();
        assert!(out.len() >= 2);
    }
}
