use serde::{Deserialize, Serialize};

use crate::scene::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for an opening in the scene store.
    pub struct OpeningId;
}

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window placed on a wall.
///
/// `position` is a normalized offset along the wall's centerline from its
/// start, pre-clamped by the caller to `[0.05, 0.95]` during drags. The
/// `wall` reference is non-owning; the opening is destroyed with its wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    pub kind: OpeningKind,
    pub wall: WallId,
    pub position: f64,
    pub width: f64,
    pub height: f64,
    pub sill_height: f64,
}

impl Opening {
    /// Creates a door: no sill, full-height void from the floor.
    #[must_use]
    pub fn door(wall: WallId, position: f64, width: f64, height: f64) -> Self {
        Self {
            kind: OpeningKind::Door,
            wall,
            position,
            width,
            height,
            sill_height: 0.0,
        }
    }

    /// Creates a window with the given sill height.
    #[must_use]
    pub fn window(wall: WallId, position: f64, width: f64, height: f64, sill_height: f64) -> Self {
        Self {
            kind: OpeningKind::Window,
            wall,
            position,
            width,
            height,
            sill_height,
        }
    }

    /// Top elevation of the void (sill plus opening height).
    #[must_use]
    pub fn head_height(&self) -> f64 {
        self.sill_height + self.height
    }
}
