pub mod common;
pub mod matches;
