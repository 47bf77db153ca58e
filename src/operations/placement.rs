use crate::error::Result;
use crate::math::Point2;
use crate::scene::{OpeningId, OpeningKind, Scene};

/// Visual inset of the void region relative to the opening dimensions.
const VOID_INSET: f64 = 4.0;

/// Cross-section of door/window frame members.
const FRAME_DEPTH: f64 = 1.5;

/// An oriented box along a wall: a centerline point, the wall angle, an
/// extent along the wall and across it, and a base/top elevation pair.
/// This is the solid description the rendering collaborator extrudes.
#[derive(Debug, Clone, Copy)]
pub struct Slab {
    pub center: Point2,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
    pub base: f64,
    pub top: f64,
}

impl Slab {
    /// Vertical extent of the slab.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.base
    }
}

/// Role of a frame member within an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRole {
    JambLeft,
    JambRight,
    Head,
    SillRail,
}

/// One piece of door/window frame furniture.
#[derive(Debug, Clone, Copy)]
pub struct FrameMember {
    pub role: FrameRole,
    pub slab: Slab,
}

/// The composited volumes standing in for a real boolean cut.
///
/// Subtracting the opening from the extruded wall at full height would
/// leave seam artifacts on the extrusion's top and bottom caps; instead
/// the wall keeps its outline and the placer emits independent sill,
/// header, and void volumes that the renderer composites over it. Nothing
/// downstream needs volume queries through the wall, so the missing
/// topological hole is acceptable.
#[derive(Debug, Clone)]
pub struct OpeningPlacement {
    /// Fill below the void; present when the opening has a sill height.
    pub sill: Option<Slab>,
    /// Fill between the opening head and the top of the wall.
    pub header: Option<Slab>,
    /// Inset hole volume rendered for visual contrast, not a real cut.
    pub void_region: Slab,
    /// Jambs, head, and (for windows) sill rail.
    pub frame: Vec<FrameMember>,
}

/// Computes the sill/header/void/frame volumes for one opening.
///
/// Assumes the opening's `position` was pre-clamped by the caller; the
/// placer does not re-validate it.
#[derive(Debug)]
pub struct OpeningVolumes {
    opening: OpeningId,
}

impl OpeningVolumes {
    /// Creates a placement computation for `opening`.
    #[must_use]
    pub fn new(opening: OpeningId) -> Self {
        Self { opening }
    }

    /// Executes the placement against the current scene.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::EntityNotFound` if the opening or its wall has
    /// been deleted.
    pub fn execute(&self, scene: &Scene) -> Result<OpeningPlacement> {
        let opening = scene.opening(self.opening)?;
        let wall = scene.wall(opening.wall)?;

        let center = wall.point_at(opening.position);
        let angle = wall.angle();
        let at = |length: f64, thickness: f64, base: f64, top: f64| Slab {
            center,
            angle,
            length,
            thickness,
            base,
            top,
        };

        let sill = (opening.sill_height > 0.0)
            .then(|| at(opening.width, wall.thickness, 0.0, opening.sill_height));

        let head = opening.head_height();
        let header = (wall.height - head > 0.0)
            .then(|| at(opening.width, wall.thickness, head, wall.height));

        // Doors keep full width down to the floor; windows inset both axes.
        let void_region = match opening.kind {
            OpeningKind::Door => at(
                opening.width,
                wall.thickness + 1.0,
                0.0,
                opening.height - VOID_INSET,
            ),
            OpeningKind::Window => at(
                opening.width - VOID_INSET,
                wall.thickness + 1.0,
                opening.sill_height + VOID_INSET * 0.5,
                head - VOID_INSET * 0.5,
            ),
        };

        let frame = frame_members(opening, wall.thickness, &at);

        Ok(OpeningPlacement {
            sill,
            header,
            void_region,
            frame,
        })
    }
}

fn frame_members(
    opening: &crate::scene::Opening,
    wall_thickness: f64,
    at: &dyn Fn(f64, f64, f64, f64) -> Slab,
) -> Vec<FrameMember> {
    let base = opening.sill_height;
    let head = opening.head_height();
    let half_span = (opening.width - FRAME_DEPTH) * 0.5;

    let jamb = |role: FrameRole, offset_sign: f64| {
        let mut slab = at(FRAME_DEPTH, wall_thickness, base, head);
        // Shift the jamb to the opening edge along the wall direction.
        let (sin, cos) = slab.angle.sin_cos();
        slab.center = Point2::new(
            slab.center.x + cos * half_span * offset_sign,
            slab.center.y + sin * half_span * offset_sign,
        );
        FrameMember { role, slab }
    };

    let mut members = vec![
        jamb(FrameRole::JambLeft, -1.0),
        jamb(FrameRole::JambRight, 1.0),
        FrameMember {
            role: FrameRole::Head,
            slab: at(opening.width, wall_thickness, head - FRAME_DEPTH, head),
        },
    ];

    if opening.kind == OpeningKind::Window {
        members.push(FrameMember {
            role: FrameRole::SillRail,
            slab: at(opening.width, wall_thickness, base, base + FRAME_DEPTH),
        });
    }

    members
}
