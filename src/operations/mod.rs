pub mod move_corner;
pub mod placement;
pub mod simplify;
pub mod snap;

pub use move_corner::{MoveCorner, MoveMode, MoveOutcome};
pub use placement::{FrameMember, FrameRole, OpeningPlacement, OpeningVolumes, Slab};
pub use simplify::SimplifyPath;
pub use snap::SnapPoint;
