pub mod action;
pub mod metric;
