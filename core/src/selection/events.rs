use clinic_audit_types::{Metric, ViewTab};

/// User interactions that mutate [`super::DashboardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Metric selector changed; affects ordering and bar values only
    MetricChanged(Metric),
    /// Bar or row label clicked in the ranking chart
    ChartClicked(String),
    /// Detail card header clicked
    CardClicked(String),
    /// "Show all" button in the detail list
    ResetSelection,
    /// Mobile tab button
    TabSelected(ViewTab),
}
