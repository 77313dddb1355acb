//! Endpoint handlers for the Atlas REST API

pub mod directory;
pub mod logs;
pub mod pois;
pub mod predict;
pub mod status;
