//! Core types and logic for the calgrid ecosystem.
//!
//! This crate provides everything calgrid-server needs that is not HTTP or
//! storage plumbing:
//! - `EventDefinition` and `Occurrence` types for calendar events
//! - `recurrence` module for expanding definitions into calendar-day occurrences
//! - `window` module for computing inclusive month bounds
//! - `ics` module for exporting a definition as an iCalendar text block

pub mod error;
pub mod event;
pub mod format;
pub mod ics;
pub mod recurrence;
pub mod weekday;
pub mod window;

// Re-export the main types at crate root for convenience
pub use error::{CalGridError, CalGridResult};
pub use event::{EventDefinition, Frequency, Occurrence};
pub use weekday::WeekdaySet;
