use clinic_audit_types::{ClinicRecord, Metric, ViewTab};

use super::DashboardEvent;

/// Session-scoped UI state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_metric: Metric,
    /// Clinic picked in the chart; filters the detail list down to it
    pub selected_clinic_id: Option<String>,
    /// Card showing its expanded panel (at most one)
    pub expanded_clinic_id: Option<String>,
    pub active_tab: ViewTab,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one interaction
    pub fn apply(&mut self, event: DashboardEvent) {
        tracing::debug!(?event, "dashboard event");
        match event {
            DashboardEvent::MetricChanged(metric) => self.set_metric(metric),
            DashboardEvent::ChartClicked(id) => self.chart_click(id),
            DashboardEvent::CardClicked(id) => self.card_click(id),
            DashboardEvent::ResetSelection => self.reset_selection(),
            DashboardEvent::TabSelected(tab) => self.active_tab = tab,
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.active_metric = metric;
    }

    /// Toggle chart selection. Selecting also expands the card; clicking the
    /// selected clinic again clears both. Either way the list tab opens.
    pub fn chart_click(&mut self, id: String) {
        if self.selected_clinic_id.as_deref() == Some(id.as_str()) {
            self.reset_selection();
        } else {
            self.selected_clinic_id = Some(id.clone());
            self.expanded_clinic_id = Some(id);
        }
        self.active_tab = ViewTab::List;
    }

    /// Accordion toggle: expanding one card replaces any other
    pub fn card_click(&mut self, id: String) {
        if self.expanded_clinic_id.as_deref() == Some(id.as_str()) {
            self.expanded_clinic_id = None;
        } else {
            self.expanded_clinic_id = Some(id);
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_clinic_id = None;
        self.expanded_clinic_id = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selected_clinic_id.is_some()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_clinic_id.as_deref() == Some(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_clinic_id.as_deref() == Some(id)
    }

    /// Detail list entries: only the selected clinic while a selection
    /// exists (possibly none), otherwise everything in `sorted` order.
    pub fn visible_clinics<'a>(&self, sorted: &'a [ClinicRecord]) -> Vec<&'a ClinicRecord> {
        match self.selected_clinic_id.as_deref() {
            Some(id) => sorted.iter().filter(|c| c.id == id).collect(),
            None => sorted.iter().collect(),
        }
    }
}
