//! Pure dashboard logic for the clinic UX-audit report
//!
//! Everything here is UI-agnostic and natively testable: metric resolution,
//! star scales, ranking order, the selection state machine and the view
//! models the frontend renders.

pub mod config;
pub mod dataset;
pub mod metrics;
pub mod selection;
pub mod sort;
pub mod stars;
pub mod view;

// Re-exports for convenience
pub use clinic_audit_types::*;
pub use config::{ConfigError, load_dashboard_config, load_dashboard_config_or_default};
pub use dataset::{Dataset, DatasetError};
pub use metrics::{color_of, metric_value};
pub use selection::{DashboardEvent, DashboardState};
pub use sort::{sort_by_metric, sorted_by_metric};
pub use stars::{DimensionStars, dimension_stars, integrated_stars};
pub use view::{ProfileAxis, RankingRow, clinic_profile, dimension_rows, ranking_rows};
