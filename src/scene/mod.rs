pub mod opening;
pub mod wall;

pub use opening::{Opening, OpeningId, OpeningKind};
pub use wall::{Wall, WallAxis, WallEnd, WallId, AXIS_TOLERANCE};

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::math::{Point2, TOLERANCE};

/// The wall/opening scene store.
///
/// Owns all persisted entities; callers pass it by reference into every
/// kernel operation. Derived geometry (chains, miters, volumes) is never
/// cached here — it is recomputed from the current entity set on demand.
///
/// Wall insertion order is tracked explicitly because snapping and chain
/// discovery are specified as first-match scans in insertion order, which
/// slot reuse after deletions would otherwise disturb.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    walls: SlotMap<WallId, Wall>,
    openings: SlotMap<OpeningId, Opening>,
    wall_order: Vec<WallId>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DegenerateWall`] when `start` and `end`
    /// coincide — zero-length walls are never persisted.
    pub fn add_wall(
        &mut self,
        start: Point2,
        end: Point2,
        thickness: f64,
        height: f64,
    ) -> Result<WallId> {
        if (end - start).norm() < TOLERANCE {
            return Err(SceneError::DegenerateWall {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        let id = self.walls.insert(Wall::new(start, end, thickness, height));
        self.wall_order.push(id);
        Ok(id)
    }

    /// Adds an opening on `wall` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the wall does not exist.
    pub fn add_opening(
        &mut self,
        wall: WallId,
        kind: OpeningKind,
        position: f64,
        width: f64,
        height: f64,
        sill_height: f64,
    ) -> Result<OpeningId> {
        if !self.walls.contains_key(wall) {
            return Err(SceneError::EntityNotFound("wall".into()).into());
        }
        let id = self.openings.insert(Opening {
            kind,
            wall,
            position,
            width,
            height,
            sill_height,
        });
        if let Some(w) = self.walls.get_mut(wall) {
            w.openings.push(id);
        }
        Ok(id)
    }

    /// Deletes a wall and cascades every opening placed on it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the wall does not exist.
    pub fn delete_wall(&mut self, id: WallId) -> Result<()> {
        let wall = self
            .walls
            .remove(id)
            .ok_or_else(|| SceneError::EntityNotFound("wall".into()))?;
        for opening_id in wall.openings {
            self.openings.remove(opening_id);
        }
        self.wall_order.retain(|&w| w != id);
        Ok(())
    }

    /// Deletes an opening and unlinks it from its wall.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the opening does not exist.
    pub fn delete_opening(&mut self, id: OpeningId) -> Result<()> {
        let opening = self
            .openings
            .remove(id)
            .ok_or_else(|| SceneError::EntityNotFound("opening".into()))?;
        if let Some(wall) = self.walls.get_mut(opening.wall) {
            wall.openings.retain(|&o| o != id);
        }
        Ok(())
    }

    /// Returns a reference to a wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the wall does not exist.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("wall".into()).into())
    }

    /// Returns a mutable reference to a wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the wall does not exist.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut Wall> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("wall".into()).into())
    }

    /// Returns a reference to an opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the opening does not exist.
    pub fn opening(&self, id: OpeningId) -> Result<&Opening> {
        self.openings
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("opening".into()).into())
    }

    /// Returns a mutable reference to an opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EntityNotFound`] if the opening does not exist.
    pub fn opening_mut(&mut self, id: OpeningId) -> Result<&mut Opening> {
        self.openings
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("opening".into()).into())
    }

    /// Iterates walls in insertion order.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall)> {
        self.wall_order
            .iter()
            .filter_map(|&id| self.walls.get(id).map(|w| (id, w)))
    }

    /// Iterates all openings.
    pub fn openings(&self) -> impl Iterator<Item = (OpeningId, &Opening)> {
        self.openings.iter()
    }

    /// Number of walls in the scene.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Number of openings in the scene.
    #[must_use]
    pub fn opening_count(&self) -> usize {
        self.openings.len()
    }
}
