pub mod docs;
pub mod planner;

pub use docs::*;
pub use planner::*;
