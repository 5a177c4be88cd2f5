//! Shared data types for the clinic UX-audit dashboard
//!
//! This crate contains the serializable audit records and presentation
//! constants shared between the pure logic crate (clinic-audit-core) and the
//! WASM frontend (clinic-audit-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Audit Records
// ─────────────────────────────────────────────────────────────────────────────

/// Country of the audited clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Ru,
    Us,
    De,
}

/// SEO audit verdict, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoStatus {
    Good,
    Warning,
    Bad,
}

impl SeoStatus {
    /// Human-readable verdict shown in the detail card
    pub fn label(&self) -> &'static str {
        match self {
            SeoStatus::Good => "Хорошо",
            SeoStatus::Warning => "Проблемы",
            SeoStatus::Bad => "Критично",
        }
    }

    /// CSS modifier matching the JSON value
    pub fn css_key(&self) -> &'static str {
        match self {
            SeoStatus::Good => "good",
            SeoStatus::Warning => "warning",
            SeoStatus::Bad => "bad",
        }
    }
}

/// Store the mobile app was rated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppStore {
    GooglePlay,
    AppStore,
}

impl AppStore {
    pub fn label(&self) -> &'static str {
        match self {
            AppStore::GooglePlay => "Google Play",
            AppStore::AppStore => "App Store",
        }
    }
}

/// Mobile app rating summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicApp {
    /// Store rating, 0-5
    pub rating: f64,
    pub reviews_count: u32,
    /// Share of negative reviews, 0-100
    pub negative_percent: f64,
    pub store: AppStore,
}

/// Functionality checklist outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionalityDetails {
    pub yes: u32,
    pub warning: u32,
    pub no: u32,
}

impl FunctionalityDetails {
    pub fn total(&self) -> u32 {
        self.yes + self.warning + self.no
    }
}

/// Free-text findings per audit dimension. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClinicIssues {
    #[serde(default)]
    pub functionality: Vec<String>,
    #[serde(default)]
    pub wcag: Vec<String>,
    #[serde(default)]
    pub flesch: Vec<String>,
    #[serde(default)]
    pub seo: Vec<String>,
}

impl ClinicIssues {
    pub fn is_empty(&self) -> bool {
        self.functionality.is_empty()
            && self.wcag.is_empty()
            && self.flesch.is_empty()
            && self.seo.is_empty()
    }
}

/// One audited clinic website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRecord {
    /// Unique across the dataset; doubles as the site hostname
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: Country,
    /// Reference/competitor entry (styling only)
    #[serde(default)]
    pub is_benchmark: bool,
    /// Checklist coverage, 0-100
    pub functionality: f64,
    #[serde(default)]
    pub functionality_details: FunctionalityDetails,
    /// Flesch reading-ease score
    pub flesch: f64,
    /// WCAG error count (lower is better)
    pub wcag: u32,
    pub seo: SeoStatus,
    /// Precomputed composite score, 0-100
    pub integrated: f64,
    #[serde(default)]
    pub stars: u8,
    #[serde(default)]
    pub issues: ClinicIssues,
    #[serde(default)]
    pub app: Option<ClinicApp>,
}

impl ClinicRecord {
    /// Outbound link to the audited site
    pub fn site_url(&self) -> String {
        format!("https://{}", self.id)
    }
}

/// Dataset-level counts shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub total_clinics: u32,
    pub total_reviews: u32,
    pub checklist_items: u32,
    pub audit_date: String,
}

/// Root of the static dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicsData {
    pub clinics: Vec<ClinicRecord>,
    pub meta: AuditMeta,
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Ranking metric selectable in the chart header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Integrated,
    Functionality,
    Wcag,
    Flesch,
    Seo,
    App,
}

impl Metric {
    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Integrated => "Интегральный балл",
            Metric::Functionality => "Функциональность",
            Metric::Wcag => "Доступность (WCAG)",
            Metric::Flesch => "Читабельность",
            Metric::Seo => "SEO",
            Metric::App => "Мобильное приложение",
        }
    }

    /// Tooltip label describing how the bar value is derived
    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Integrated => "Интегральный балл",
            Metric::Functionality => "Функциональность (%)",
            Metric::Wcag => "Доступность (100 - ошибки×2)",
            Metric::Flesch => "Читабельность (Flesch)",
            Metric::Seo => "SEO (good=100, warning=50, bad=0)",
            Metric::App => "Рейтинг приложения (×20)",
        }
    }

    /// Stable key used as the `<select>` option value
    pub fn config_key(&self) -> &'static str {
        match self {
            Metric::Integrated => "integrated",
            Metric::Functionality => "functionality",
            Metric::Wcag => "wcag",
            Metric::Flesch => "flesch",
            Metric::Seo => "seo",
            Metric::App => "app",
        }
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.config_key() == key)
    }

    /// All metrics in selector order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Integrated,
            Metric::Functionality,
            Metric::Wcag,
            Metric::Flesch,
            Metric::Seo,
            Metric::App,
        ]
    }

    /// True for the one metric where a smaller raw value ranks higher
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Metric::Wcag)
    }
}

/// Colour band for a resolved (0-100) metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ColorBucket {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorBucket::Excellent => "#00d084",
            ColorBucket::Good => "#0693e3",
            ColorBucket::Fair => "#ff6900",
            ColorBucket::Poor => "#cf2e2e",
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            ColorBucket::Excellent => "Отлично (70+)",
            ColorBucket::Good => "Хорошо (50-69)",
            ColorBucket::Fair => "Средне (30-49)",
            ColorBucket::Poor => "Плохо (<30)",
        }
    }

    /// Buckets in legend order, best first
    pub fn all() -> &'static [ColorBucket] {
        &[
            ColorBucket::Excellent,
            ColorBucket::Good,
            ColorBucket::Fair,
            ColorBucket::Poor,
        ]
    }
}

/// Which pane is visible on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    #[default]
    Chart,
    List,
}

impl ViewTab {
    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Chart => "Диаграмма",
            ViewTab::List => "Список",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Presentation Config
// ─────────────────────────────────────────────────────────────────────────────

/// Static layout settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Viewports narrower than this use the tabbed mobile layout
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: u32,
    /// Opacity of unselected ranking rows while a clinic is selected
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f32,
    #[serde(default = "default_bar_row_height")]
    pub bar_row_height_px: u32,
    #[serde(default = "default_chart_padding")]
    pub chart_padding_px: u32,
    #[serde(default = "default_label_width")]
    pub label_width_px: u32,
    #[serde(default = "default_mobile_label_width")]
    pub mobile_label_width_px: u32,
}

fn default_mobile_breakpoint() -> u32 { 768 }
fn default_dimmed_opacity() -> f32 { 0.4 }
fn default_bar_row_height() -> u32 { 32 }
fn default_chart_padding() -> u32 { 40 }
fn default_label_width() -> u32 { 120 }
fn default_mobile_label_width() -> u32 { 110 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
            dimmed_opacity: default_dimmed_opacity(),
            bar_row_height_px: default_bar_row_height(),
            chart_padding_px: default_chart_padding(),
            label_width_px: default_label_width(),
            mobile_label_width_px: default_mobile_label_width(),
        }
    }
}

impl DashboardConfig {
    /// Ranking chart height for `rows` entries
    pub fn chart_height_px(&self, rows: usize) -> u32 {
        rows as u32 * self.bar_row_height_px + self.chart_padding_px
    }

    /// Width of the clinic-name column
    pub fn label_width(&self, is_mobile: bool) -> u32 {
        if is_mobile {
            self.mobile_label_width_px
        } else {
            self.label_width_px
        }
    }
}
