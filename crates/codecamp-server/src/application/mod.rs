//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the camp repository and the wire models.

mod camp_service;
mod error;

pub use camp_service::CampService;
pub use error::CampError;
