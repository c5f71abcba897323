//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod moniker;

pub use moniker::*;
