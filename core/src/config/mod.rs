//! Dashboard layout configuration
//!
//! Re-exports the shared [`DashboardConfig`] and reads it from TOML. Every
//! field has a default, so a partial (or empty) file is valid.

mod error;

pub use clinic_audit_types::DashboardConfig;
pub use error::ConfigError;

/// Parse a TOML document into a config
pub fn load_dashboard_config(toml_src: &str) -> Result<DashboardConfig, ConfigError> {
    Ok(toml::from_str(toml_src)?)
}

/// Parse a TOML document, falling back to defaults when it is malformed
pub fn load_dashboard_config_or_default(toml_src: &str) -> DashboardConfig {
    load_dashboard_config(toml_src).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid dashboard config, using defaults");
        DashboardConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(load_dashboard_config("").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = load_dashboard_config("mobile_breakpoint_px = 640\ndimmed_opacity = 0.25\n").unwrap();
        assert_eq!(config.mobile_breakpoint_px, 640);
        assert_eq!(config.dimmed_opacity, 0.25);
        assert_eq!(config.bar_row_height_px, 32);
        assert_eq!(config.label_width_px, 120);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            load_dashboard_config("mobile_breakpoint_px = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn fallback_uses_defaults() {
        let config = load_dashboard_config_or_default("not = [valid");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn bundled_config_parses() {
        let config = load_dashboard_config(include_str!("../../../app/assets/dashboard.toml")).unwrap();
        assert_eq!(config.mobile_breakpoint_px, 768);
    }
}
