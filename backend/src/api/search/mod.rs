//! Branch search endpoint.

mod search_branch_services;
pub use search_branch_services::{fetch_search_results, search_branch_services};
