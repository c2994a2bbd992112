//! Server-side client for the external VehicleOps backend.

pub mod api;
pub mod api_utils;
