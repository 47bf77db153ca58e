use slotmap::SecondaryMap;
use tracing::debug;

use crate::math::{Point2, JOIN_TOLERANCE};
use crate::scene::{Scene, WallEnd, WallId};

/// A wall as traversed by a chain: the underlying wall plus the traversal
/// orientation (a wall may be walked start→end or reversed).
#[derive(Debug, Clone, Copy)]
pub struct OrientedWall {
    pub wall: WallId,
    pub reversed: bool,
}

impl OrientedWall {
    /// The endpoint the chain enters this wall through.
    #[must_use]
    pub fn leading_end(&self) -> WallEnd {
        if self.reversed {
            WallEnd::End
        } else {
            WallEnd::Start
        }
    }

    /// The endpoint the chain leaves this wall through.
    #[must_use]
    pub fn trailing_end(&self) -> WallEnd {
        if self.reversed {
            WallEnd::Start
        } else {
            WallEnd::End
        }
    }
}

/// A maximal run of walls connected end-to-end within [`JOIN_TOLERANCE`].
///
/// Derived data — rebuilt from the scene on demand, never persisted.
#[derive(Debug, Clone)]
pub struct WallChain {
    pub walls: Vec<OrientedWall>,
    pub closed: bool,
}

impl WallChain {
    /// The chain's leading point (effective start of its first wall).
    ///
    /// # Errors
    ///
    /// Returns `SceneError::EntityNotFound` if a chain wall has been
    /// deleted since discovery.
    pub fn head(&self, scene: &Scene) -> crate::Result<Point2> {
        let ow = self.walls[0];
        Ok(scene.wall(ow.wall)?.endpoint(ow.leading_end()))
    }

    /// The chain's trailing point (effective end of its last wall).
    ///
    /// # Errors
    ///
    /// Returns `SceneError::EntityNotFound` if a chain wall has been
    /// deleted since discovery.
    pub fn tail(&self, scene: &Scene) -> crate::Result<Point2> {
        let ow = self.walls[self.walls.len() - 1];
        Ok(scene.wall(ow.wall)?.endpoint(ow.trailing_end()))
    }

    /// The ordered centerline points of the chain. Open chains yield one
    /// point per joint plus both ends; closed chains omit the repeated
    /// wrap-around point.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::EntityNotFound` if a chain wall has been
    /// deleted since discovery.
    pub fn points(&self, scene: &Scene) -> crate::Result<Vec<Point2>> {
        let mut pts = Vec::with_capacity(self.walls.len() + 1);
        pts.push(self.head(scene)?);
        for (i, ow) in self.walls.iter().enumerate() {
            if self.closed && i == self.walls.len() - 1 {
                break;
            }
            pts.push(scene.wall(ow.wall)?.endpoint(ow.trailing_end()));
        }
        Ok(pts)
    }
}

/// Discovers maximal wall chains by shared endpoints.
///
/// Walls are scanned in insertion order; at each chain end the first unused
/// wall with a matching endpoint is consumed (first-match policy — no
/// geometric tie-break). Every wall lands in exactly one chain. A vertex
/// with more than two incident walls therefore splits into separate,
/// visually overlapping chains rather than a merged junction; that is a
/// documented boundary of the algorithm, not an error.
#[must_use]
pub fn find_chains(scene: &Scene) -> Vec<WallChain> {
    let mut used: SecondaryMap<WallId, ()> = SecondaryMap::new();
    let mut chains = Vec::new();

    for (seed_id, seed) in scene.walls() {
        if used.contains_key(seed_id) {
            continue;
        }
        used.insert(seed_id, ());

        let mut walls = vec![OrientedWall {
            wall: seed_id,
            reversed: false,
        }];
        let mut head = seed.start;
        let mut tail = seed.end;
        let mut closed = false;

        // Extend forward from the tail.
        loop {
            let Some((next, next_tail)) = next_link(scene, &used, &tail) else {
                break;
            };
            used.insert(next.wall, ());
            walls.push(next);
            tail = next_tail;
            if (tail - head).norm() < JOIN_TOLERANCE {
                closed = true;
                break;
            }
        }

        // Extend backward from the head.
        if !closed {
            while let Some((prev, new_head)) = prev_link(scene, &used, &head) {
                used.insert(prev.wall, ());
                walls.insert(0, prev);
                head = new_head;
            }
        }

        chains.push(WallChain { walls, closed });
    }

    debug!(
        chains = chains.len(),
        walls = scene.wall_count(),
        "wall chains rebuilt"
    );
    chains
}

/// First unused wall with an endpoint within tolerance of `point`, oriented
/// so the chain enters through that endpoint. Also returns the wall's other
/// endpoint — the chain's new tail.
fn next_link(
    scene: &Scene,
    used: &SecondaryMap<WallId, ()>,
    point: &Point2,
) -> Option<(OrientedWall, Point2)> {
    for (id, wall) in scene.walls() {
        if used.contains_key(id) {
            continue;
        }
        if (wall.start - point).norm() < JOIN_TOLERANCE {
            return Some((
                OrientedWall {
                    wall: id,
                    reversed: false,
                },
                wall.end,
            ));
        }
        if (wall.end - point).norm() < JOIN_TOLERANCE {
            return Some((
                OrientedWall {
                    wall: id,
                    reversed: true,
                },
                wall.start,
            ));
        }
    }
    None
}

/// First unused wall with an endpoint within tolerance of `point`, oriented
/// so the chain leaves through that endpoint. Also returns the wall's other
/// endpoint — the chain's new head.
fn prev_link(
    scene: &Scene,
    used: &SecondaryMap<WallId, ()>,
    point: &Point2,
) -> Option<(OrientedWall, Point2)> {
    next_link(scene, used, point).map(|(ow, far)| {
        (
            OrientedWall {
                wall: ow.wall,
                reversed: !ow.reversed,
            },
            far,
        )
    })
}
