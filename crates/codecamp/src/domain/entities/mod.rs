//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Camp: Conference event keyed by moniker, owns its Talks
//! - Location: Venue and address embedded in a Camp
//! - Talk: Scheduled session belonging to a Camp
//! - Speaker: Person giving one or more Talks

mod camp;
mod speaker;
mod talk;

pub use camp::*;
pub use speaker::*;
pub use talk::*;
