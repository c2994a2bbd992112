//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod sort_by;
pub mod filter_state;
pub mod search_payload;
pub mod search_result;
pub mod search_coordinator;
pub mod catalog;
pub mod date_chips;
pub mod form_field;
pub mod sidebar;
