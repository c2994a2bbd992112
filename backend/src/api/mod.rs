//! Endpoint wrappers, grouped by area.

pub mod search;
pub mod catalog;
