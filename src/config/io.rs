use super::models::PageConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Encoding of an embedded configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a `<script type="...">` value. Anything that is not
    /// JSON is treated as TOML.
    pub fn from_script_type(script_type: Option<&str>) -> Self {
        match script_type.map(|value| value.trim().to_ascii_lowercase()) {
            Some(value) if value == "application/json" || value.ends_with("+json") => {
                ConfigFormat::Json
            }
            _ => ConfigFormat::Toml,
        }
    }

    /// Guess the format of a bare string handed to `mount`.
    pub fn sniff(contents: &str) -> Self {
        if contents.trim_start().starts_with('{') {
            ConfigFormat::Json
        } else {
            ConfigFormat::Toml
        }
    }
}

pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<PageConfig> {
    let tables: ConfigTables = match format {
        ConfigFormat::Toml => toml::from_str(contents).context("invalid TOML page config")?,
        ConfigFormat::Json => {
            if contents.trim().is_empty() {
                ConfigTables::default()
            } else {
                serde_json::from_str(contents).context("invalid JSON page config")?
            }
        }
    };
    let mut config: PageConfig = tables.into();
    for key in config.sanitize() {
        warn!(key, "Out-of-range page config value replaced");
    }
    Ok(config)
}

pub fn serialize_config(config: &PageConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("failed to serialize page config")
}

/// Load configuration from an embedded block, falling back to defaults on error.
pub fn load_config(source: Option<(&str, ConfigFormat)>) -> PageConfig {
    let Some((contents, format)) = source else {
        info!("No embedded page config; using defaults");
        return PageConfig::default();
    };

    match parse_config(contents, format) {
        Ok(config) => {
            debug!(?format, "Parsed embedded page config");
            config
        }
        Err(err) => {
            warn!(?format, "Falling back to default page config: {err:#}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("", ConfigFormat::Toml).expect("empty toml");
        assert_eq!(config, PageConfig::default());
        let config = parse_config("  ", ConfigFormat::Json).expect("empty json");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_tables_override_only_their_keys() {
        let config = parse_config(
            r#"
            [navigation]
            header_offset_px = 64.0

            [classes]
            active = "is-current"
            "#,
            ConfigFormat::Toml,
        )
        .expect("partial toml");

        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.active_class, "is-current");
        assert_eq!(config.scrolled_class, "scrolled");
        assert_eq!(config.highlight_lookahead_px, 100.0);
        assert_eq!(config.selectors.navbar, "#mainNav");
    }

    #[test]
    fn json_blocks_are_accepted() {
        let config = parse_config(
            r#"{"scroll": {"navbar_scrolled_after_px": 10.0}, "logging": {"log_level": "warn"}}"#,
            ConfigFormat::Json,
        )
        .expect("json config");
        assert_eq!(config.navbar_scrolled_after_px, 10.0);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn invalid_document_falls_back_to_defaults() {
        let config = load_config(Some(("[scroll\nbroken", ConfigFormat::Toml)));
        assert_eq!(config, PageConfig::default());
        assert!(parse_config("[scroll\nbroken", ConfigFormat::Toml).is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = PageConfig::default();
        config.typing_enabled = false;
        config.selectors.fade_in = vec![".card".to_string()];
        let text = serialize_config(&config).expect("serialize");
        let parsed = parse_config(&text, ConfigFormat::Toml).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn script_type_selects_format() {
        assert_eq!(
            ConfigFormat::from_script_type(Some("application/json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_script_type(Some("application/ld+json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_script_type(Some("text/toml")),
            ConfigFormat::Toml
        );
        assert_eq!(ConfigFormat::from_script_type(None), ConfigFormat::Toml);
    }

    #[test]
    fn sample_config_matches_defaults() {
        let sample = include_str!("../../conf/config.toml");
        let config = parse_config(sample, ConfigFormat::Toml).expect("sample config");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn out_of_range_reveal_values_are_corrected() {
        let config = parse_config(
            "[reveal]\nfade_threshold = 1.5\nfade_bottom_margin_px = nan\n",
            ConfigFormat::Toml,
        )
        .expect("reveal config");
        assert_eq!(config.fade_threshold, 1.0);
        assert_eq!(config.fade_bottom_margin_px, 100.0);
        assert_eq!(config.fade_root_margin(), "0px 0px -100px 0px");

        let config = parse_config(
            "[reveal]\nfade_threshold = -0.2\nprogress_trigger_divisor = 0.0\n",
            ConfigFormat::Toml,
        )
        .expect("reveal config");
        assert_eq!(config.fade_threshold, 0.0);
        assert_eq!(config.progress_trigger_divisor, 1.3);
    }

    #[test]
    fn defaults_need_no_correction() {
        assert!(PageConfig::default().sanitize().is_empty());
    }

    #[test]
    fn bare_strings_are_sniffed() {
        assert_eq!(ConfigFormat::sniff("  {\"typing\": {}}"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::sniff("[typing]\nenabled = false"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::sniff(""), ConfigFormat::Toml);
    }
}
