//! CodeCamp Wire Models
//!
//! Externally facing projections of the domain entities and the
//! mapping between the two.
//!
//! - Camp: flattened location, no internal ids
//! - Talk / Speaker: nested under a camp when talks are requested

mod camp;
mod speaker;
mod talk;

pub use camp::*;
pub use speaker::*;
pub use talk::*;
