pub mod chain;
pub mod joint;
pub mod volume;

pub use chain::{find_chains, OrientedWall, WallChain};
pub use joint::{flat_cap, miter_joint, MiterJoint};
pub use volume::{build_volume, WallVolume};

use tracing::debug;

use crate::error::Result;
use crate::scene::Scene;

/// Rebuilds every wall volume in the scene from scratch.
///
/// Chain discovery, miter computation, and outline assembly all run on
/// each call; derived geometry is never cached, so the result always
/// reflects the current wall set. Plans hold tens to low hundreds of
/// walls, so a full rebuild stays cheap and cannot go stale.
#[derive(Debug, Default)]
pub struct BuildWallVolumes;

impl BuildWallVolumes {
    /// Creates the rebuild operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the rebuild: one [`WallVolume`] per discovered chain.
    ///
    /// # Errors
    ///
    /// Propagates `GeometryError::Degenerate` from any chain whose outline
    /// cannot be constructed (for example a closed loop shorter than three
    /// walls).
    pub fn execute(&self, scene: &Scene) -> Result<Vec<WallVolume>> {
        let chains = find_chains(scene);
        let mut volumes = Vec::with_capacity(chains.len());
        for chain in &chains {
            volumes.push(build_volume(scene, chain)?);
        }
        debug!(volumes = volumes.len(), "wall volumes rebuilt");
        Ok(volumes)
    }
}
