//! UI Components
//!
//! Presentational pieces of the dashboard. None of them own state: they
//! render their props and report interactions through event handlers.

pub mod clinic_card;
pub mod footer;
pub mod header;
pub mod rating_chart;

pub use clinic_card::ClinicCard;
pub use footer::Footer;
pub use header::Header;
pub use rating_chart::RatingChart;
