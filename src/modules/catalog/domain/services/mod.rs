mod query_planner;

pub use query_planner::*;
