pub mod error;
pub mod math;
pub mod operations;
pub mod outline;
pub mod scene;
pub mod units;

pub use error::{PlankitError, Result};
