//! Command execution for citygraph

pub mod dispatch;
pub mod input;
