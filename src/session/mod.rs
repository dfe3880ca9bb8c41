pub(crate) mod config;
pub(crate) mod plan_file;
pub(crate) mod planner;
