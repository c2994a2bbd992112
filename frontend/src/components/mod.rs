pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod form_field;
pub mod search_components;
