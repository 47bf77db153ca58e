use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{segment_direction, signed_area_2d};
use crate::math::{Point2, Vector2};
use crate::outline::chain::WallChain;
use crate::outline::joint::{flat_cap, miter_joint};
use crate::scene::Scene;

/// Extrudable solid description for one wall chain: two offset boundaries
/// and an extrusion height. Openings are never subtracted here — they are
/// composited by the opening placer as separate volumes.
#[derive(Debug, Clone)]
pub struct WallVolume {
    /// Offset boundary enclosing the chain, in traversal order.
    pub outer: Vec<Point2>,
    /// Opposite offset boundary, in traversal order.
    pub inner: Vec<Point2>,
    /// Extrusion height handed to the rendering collaborator.
    pub height: f64,
}

impl WallVolume {
    /// The closed outline polygon: outer points forward, inner points
    /// backward, first point repeated to close.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2> {
        let mut pts = Vec::with_capacity(self.outer.len() + self.inner.len() + 1);
        pts.extend_from_slice(&self.outer);
        pts.extend(self.inner.iter().rev());
        if let Some(&first) = pts.first() {
            pts.push(first);
        }
        pts
    }
}

/// Builds the offset outline volume for a single chain.
///
/// Open chains get a flat perpendicular cap at each end and a miter (or
/// rounded corner arc) at each interior joint. Closed chains miter every
/// joint, including the wrap-around between the last and first segments.
/// Joints between walls of differing thickness use the mean of the two
/// half-thicknesses; caps use the owning wall's own.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for a closed chain of fewer than
/// three walls (a loop whose thickness exceeds its segment lengths — the
/// degenerate case is reported, not silently repaired), or if chain points
/// coincide so no segment direction exists.
pub fn build_volume(scene: &Scene, chain: &WallChain) -> Result<WallVolume> {
    let points = chain.points(scene)?;
    if chain.closed && points.len() < 3 {
        return Err(GeometryError::Degenerate(
            "closed chain has fewer than 3 distinct joints".to_owned(),
        )
        .into());
    }

    let mut halves = Vec::with_capacity(chain.walls.len());
    let mut height = 0.0_f64;
    for ow in &chain.walls {
        let wall = scene.wall(ow.wall)?;
        halves.push(wall.thickness * 0.5);
        height = height.max(wall.height);
    }

    let n = points.len();
    let seg_count = if chain.closed { n } else { n - 1 };
    let mut dirs: Vec<Vector2> = Vec::with_capacity(seg_count);
    for i in 0..seg_count {
        dirs.push(segment_direction(&points[i], &points[(i + 1) % n])?);
    }

    let mut outer = Vec::new();
    let mut inner = Vec::new();

    if chain.closed {
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let half = f64::midpoint(halves[prev], halves[i]);
            let joint = miter_joint(&points[i], &dirs[prev], &dirs[i], half);
            outer.extend_from_slice(joint.outer_points());
            inner.extend_from_slice(joint.inner_points());
        }
        // Label the enclosing ring as the outer boundary.
        if signed_area_2d(&inner).abs() > signed_area_2d(&outer).abs() {
            std::mem::swap(&mut outer, &mut inner);
        }
    } else {
        let (start_outer, start_inner) = flat_cap(&points[0], &dirs[0], halves[0]);
        outer.push(start_outer);
        inner.push(start_inner);

        for i in 1..n - 1 {
            let half = f64::midpoint(halves[i - 1], halves[i]);
            let joint = miter_joint(&points[i], &dirs[i - 1], &dirs[i], half);
            outer.extend_from_slice(joint.outer_points());
            inner.extend_from_slice(joint.inner_points());
        }

        let last = halves.len() - 1;
        let (end_outer, end_inner) = flat_cap(&points[n - 1], &dirs[n - 2], halves[last]);
        outer.push(end_outer);
        inner.push(end_inner);
    }

    Ok(WallVolume {
        outer,
        inner,
        height,
    })
}
