//! Result records
//!
//! One fixed shape per tool, each wrapped in [`Grounded`] together with the
//! citations the service attached. Records are built whole by
//! [`adapter::adapt`] and stored in [`ResultSlots`](slots::ResultSlots).

pub mod adapter;
pub mod branch;
pub mod company;
pub mod grounding;
pub mod profile;
pub mod slots;
pub mod trend;
pub mod visual;

/// Placeholder for optional fields the source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";
