mod planner;
mod types;

pub use planner::plan;
pub use types::{Extent, Placement, Row, SheetLayout};
