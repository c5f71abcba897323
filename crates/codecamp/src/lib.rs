//! CodeCamp Domain Library
//!
//! Core domain types and interfaces for the CoreCode camp registry.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Camp, Location, Talk, Speaker)
//!   - `value_objects/`: Immutable value types (Moniker)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces and the per-request unit of work
//!
//! # Usage
//!
//! ```rust,ignore
//! use codecamp::domain::{Camp, Moniker};
//! use codecamp::ports::{CampRepository, CampUnitOfWork};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Camp, DomainError, Location, Moniker, Speaker, Talk};
pub use ports::{CampChange, CampRepository, CampUnitOfWork};
