//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod camp_repository;

pub use camp_repository::*;
