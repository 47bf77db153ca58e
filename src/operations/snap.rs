use crate::math::Point2;
use crate::scene::{Scene, WallId};

/// Maximum per-axis distance for snapping to an existing wall endpoint.
const ALIGN_THRESHOLD: f64 = 8.0;

/// Resolves a raw pointer position to a snapped plan position.
///
/// Two snaps compose: per-axis grid rounding, and horizontal/vertical
/// alignment to existing wall endpoints. Alignment overrides grid on the
/// axis it triggers — aligning to an existing wall expresses intent to
/// match it exactly, which grid rounding could otherwise defeat.
#[derive(Debug)]
pub struct SnapPoint {
    point: Point2,
    grid_size: f64,
}

impl SnapPoint {
    /// Creates a new snap operation. A `grid_size` of 0 (or less) disables
    /// grid snapping.
    #[must_use]
    pub fn new(point: Point2, grid_size: f64) -> Self {
        Self { point, grid_size }
    }

    /// Executes the snap against the scene's wall endpoints.
    ///
    /// Walls in `exclude` (typically the wall being edited, or walls
    /// already joined at the point) are skipped by the alignment scan,
    /// which visits walls in insertion order — the first endpoint within
    /// [`ALIGN_THRESHOLD`] on an axis wins that axis.
    #[must_use]
    pub fn execute(&self, scene: &Scene, exclude: &[WallId]) -> Point2 {
        let mut aligned_x: Option<f64> = None;
        let mut aligned_y: Option<f64> = None;

        for (id, wall) in scene.walls() {
            if exclude.contains(&id) {
                continue;
            }
            for ep in [wall.start, wall.end] {
                if aligned_x.is_none() && (ep.x - self.point.x).abs() < ALIGN_THRESHOLD {
                    aligned_x = Some(ep.x);
                }
                if aligned_y.is_none() && (ep.y - self.point.y).abs() < ALIGN_THRESHOLD {
                    aligned_y = Some(ep.y);
                }
            }
            if aligned_x.is_some() && aligned_y.is_some() {
                break;
            }
        }

        Point2::new(
            aligned_x.unwrap_or_else(|| grid_round(self.point.x, self.grid_size)),
            aligned_y.unwrap_or_else(|| grid_round(self.point.y, self.grid_size)),
        )
    }
}

/// Rounds a coordinate to the nearest grid multiple. No-op when `grid <= 0`.
fn grid_round(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scene_with_wall(x0: f64, y0: f64, x1: f64, y1: f64) -> (Scene, WallId) {
        let mut scene = Scene::new();
        let id = scene
            .add_wall(Point2::new(x0, y0), Point2::new(x1, y1), 6.0, 96.0)
            .unwrap();
        (scene, id)
    }

    #[test]
    fn grid_snap_without_walls() {
        let scene = Scene::new();
        let p = SnapPoint::new(Point2::new(7.0, 10.0), 6.0).execute(&scene, &[]);
        assert!((p.x - 6.0).abs() < 1e-10);
        assert!((p.y - 12.0).abs() < 1e-10);
    }

    #[test]
    fn zero_grid_disables_grid_snap() {
        let scene = Scene::new();
        let p = SnapPoint::new(Point2::new(7.5, 10.1), 0.0).execute(&scene, &[]);
        assert!((p.x - 7.5).abs() < 1e-10);
        assert!((p.y - 10.1).abs() < 1e-10);
    }

    #[test]
    fn alignment_overrides_grid() {
        // Endpoint at (100, 0); candidate (97, 3) with grid 6 would round to
        // (96, 6) but alignment wins both axes.
        let (scene, _) = scene_with_wall(100.0, 0.0, 100.0, 80.0);
        let p = SnapPoint::new(Point2::new(97.0, 3.0), 6.0).execute(&scene, &[]);
        assert!((p.x - 100.0).abs() < 1e-10);
        assert!(p.y.abs() < 1e-10);
    }

    #[test]
    fn alignment_per_axis_is_independent() {
        // Only y is within threshold: x falls back to grid.
        let (scene, _) = scene_with_wall(200.0, 40.0, 300.0, 40.0);
        let p = SnapPoint::new(Point2::new(7.0, 44.0), 6.0).execute(&scene, &[]);
        assert!((p.x - 6.0).abs() < 1e-10, "x should grid-snap, got {}", p.x);
        assert!((p.y - 40.0).abs() < 1e-10, "y should align, got {}", p.y);
    }

    #[test]
    fn excluded_wall_is_ignored() {
        let (scene, id) = scene_with_wall(100.0, 0.0, 100.0, 80.0);
        let p = SnapPoint::new(Point2::new(97.0, 3.0), 6.0).execute(&scene, &[id]);
        assert!((p.x - 96.0).abs() < 1e-10);
        assert!((p.y - 6.0).abs() < 1e-10);
    }

    #[test]
    fn first_wall_in_insertion_order_wins() {
        let mut scene = Scene::new();
        scene
            .add_wall(Point2::new(101.0, 0.0), Point2::new(101.0, 80.0), 6.0, 96.0)
            .unwrap();
        scene
            .add_wall(Point2::new(99.0, 0.0), Point2::new(99.0, 80.0), 6.0, 96.0)
            .unwrap();
        let p = SnapPoint::new(Point2::new(97.0, 200.0), 0.0).execute(&scene, &[]);
        assert!((p.x - 101.0).abs() < 1e-10, "expected first match, got {}", p.x);
    }
}
