//! Selection and filter state
//!
//! The dashboard keeps exactly one mutable record, [`DashboardState`]. The
//! ranking chart and the detail list are pure functions of it and only
//! request changes through [`DashboardEvent`]s.

mod events;
mod state;

pub use events::DashboardEvent;
pub use state::DashboardState;
