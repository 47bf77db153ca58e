use crate::error::Result;
use crate::math::{Point2, JOIN_TOLERANCE, TOLERANCE};
use crate::scene::{Scene, WallAxis, WallEnd, WallId};

/// Wall length below which a post-move wall is reported for deletion.
const COLLAPSE_TOLERANCE: f64 = 1e-6;

/// How endpoint movement treats walls joined at the corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveMode {
    /// Every coincident endpoint follows the drag directly.
    Free,
    /// Axis-aligned walls stay axis-aligned; the default editing mode.
    #[default]
    Constrained,
}

/// What the move left behind for the caller to act on.
///
/// The engine never deletes entities it was not asked to mutate: walls
/// collapsed to (near) zero length by the move are reported here and the
/// caller decides whether to delete them.
#[derive(Debug, Default)]
pub struct MoveOutcome {
    pub degenerate: Vec<WallId>,
}

/// Moves a shared wall corner, dragging every wall joined there.
///
/// Constrained mode classifies each joined wall (by its pre-move
/// endpoints) as horizontal, vertical, or diagonal within the axis
/// tolerance. All joined endpoints follow the drag to the new corner;
/// then each horizontal wall's far endpoint is re-aligned in `y` (resp.
/// vertical in `x`) so the wall stays axis-aligned, and endpoints of
/// walls joined at those far corners follow them. The propagation is
/// exactly two hops — enough to keep a rectangular room rectangular when
/// one corner is dragged, and deliberately not a general constraint
/// solver.
///
/// The whole update is applied before control returns; callers treat one
/// move as an atomic unit.
#[derive(Debug)]
pub struct MoveCorner {
    wall: WallId,
    end: WallEnd,
    new_pos: Point2,
    mode: MoveMode,
}

impl MoveCorner {
    /// Creates a new corner move.
    #[must_use]
    pub fn new(wall: WallId, end: WallEnd, new_pos: Point2, mode: MoveMode) -> Self {
        Self {
            wall,
            end,
            new_pos,
            mode,
        }
    }

    /// Executes the move, mutating the scene in place.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::EntityNotFound` if the dragged wall does not
    /// exist. The scene is untouched in that case.
    pub fn execute(&self, scene: &mut Scene) -> Result<MoveOutcome> {
        let old_pos = scene.wall(self.wall)?.endpoint(self.end);

        let joined = joined_endpoints(scene, &old_pos);
        match self.mode {
            MoveMode::Free => {
                for (id, end, _) in &joined {
                    set_endpoint(scene, *id, *end, self.new_pos)?;
                }
            }
            MoveMode::Constrained => {
                // Far-endpoint re-alignments collected first, applied after
                // the corner itself, so classification sees pre-move state.
                let mut hops: Vec<(WallId, WallEnd, Point2, Point2)> = Vec::new();

                for (id, end, axis) in &joined {
                    set_endpoint(scene, *id, *end, self.new_pos)?;

                    let far_end = opposite(*end);
                    let far_old = scene.wall(*id)?.endpoint(far_end);
                    let far_new = match axis {
                        WallAxis::Horizontal => Point2::new(far_old.x, self.new_pos.y),
                        WallAxis::Vertical => Point2::new(self.new_pos.x, far_old.y),
                        WallAxis::Diagonal => continue,
                    };
                    if (far_new - far_old).norm() > TOLERANCE {
                        hops.push((*id, far_end, far_old, far_new));
                    }
                }

                for (id, far_end, far_old, far_new) in hops {
                    // Second hop: walls joined at the far corner follow it.
                    for (other_id, other_end, _) in joined_endpoints(scene, &far_old) {
                        if other_id != id || other_end != far_end {
                            set_endpoint(scene, other_id, other_end, far_new)?;
                        }
                    }
                    set_endpoint(scene, id, far_end, far_new)?;
                }
            }
        }

        let mut outcome = MoveOutcome::default();
        for (id, _, _) in &joined {
            if scene.wall(*id)?.is_degenerate(COLLAPSE_TOLERANCE) {
                outcome.degenerate.push(*id);
            }
        }
        Ok(outcome)
    }
}

/// Every wall endpoint within [`JOIN_TOLERANCE`] of `corner`, with the
/// wall's pre-move axis classification.
fn joined_endpoints(scene: &Scene, corner: &Point2) -> Vec<(WallId, WallEnd, WallAxis)> {
    let mut found = Vec::new();
    for (id, wall) in scene.walls() {
        for end in [WallEnd::Start, WallEnd::End] {
            if (wall.endpoint(end) - corner).norm() < JOIN_TOLERANCE {
                found.push((id, end, wall.axis()));
            }
        }
    }
    found
}

fn set_endpoint(scene: &mut Scene, id: WallId, end: WallEnd, pos: Point2) -> Result<()> {
    let wall = scene.wall_mut(id)?;
    match end {
        WallEnd::Start => wall.start = pos,
        WallEnd::End => wall.end = pos,
    }
    Ok(())
}

fn opposite(end: WallEnd) -> WallEnd {
    match end {
        WallEnd::Start => WallEnd::End,
        WallEnd::End => WallEnd::Start,
    }
}
