//! Target-width extraction for progress bars.
//!
//! A bar declares how full it should end up either through a structured
//! `data-target-width="75"` attribute or, in older markup, through its inline
//! style (`style="width: 75%"`). The attribute wins when both are present.

use crate::error::{PageError, PageResult};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_WIDTH_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*(\d{1,3})\s*%").unwrap());

/// Raw declaration read off a progress bar element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressDeclaration {
    pub data_target: Option<String>,
    pub style: Option<String>,
}

impl ProgressDeclaration {
    pub fn from_style(style: &str) -> Self {
        ProgressDeclaration {
            data_target: None,
            style: Some(style.to_string()),
        }
    }

    pub fn from_data_target(value: &str) -> Self {
        ProgressDeclaration {
            data_target: Some(value.to_string()),
            style: None,
        }
    }

    /// Resolve the target percentage for the bar at `index`.
    pub fn target_percent(&self, index: usize) -> PageResult<u8> {
        if let Some(raw) = self.data_target.as_deref() {
            return parse_percent(raw.trim().trim_end_matches('%').trim())
                .ok_or_else(|| self.malformed(index));
        }

        self.style
            .as_deref()
            .and_then(|style| RE_WIDTH_DECLARATION.captures(style))
            .and_then(|caps| caps.get(1))
            .and_then(|value| parse_percent(value.as_str()))
            .ok_or_else(|| self.malformed(index))
    }

    fn malformed(&self, index: usize) -> PageError {
        let declaration = match (&self.data_target, &self.style) {
            (Some(data), _) => format!("data-target-width=\"{data}\""),
            (None, Some(style)) => format!("style=\"{style}\""),
            (None, None) => String::new(),
        };
        PageError::MalformedProgress { index, declaration }
    }
}

fn parse_percent(raw: &str) -> Option<u8> {
    raw.parse::<u8>().ok().filter(|value| *value <= 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_width_from_inline_style() {
        let decl = ProgressDeclaration::from_style("width: 75%");
        assert_eq!(decl.target_percent(0), Ok(75));
        let decl = ProgressDeclaration::from_style("height: 6px;width:90%;");
        assert_eq!(decl.target_percent(0), Ok(90));
    }

    #[test]
    fn ignores_prefixed_width_properties() {
        let decl = ProgressDeclaration::from_style("max-width: 40%; width: 60%");
        assert_eq!(decl.target_percent(0), Ok(60));
        let decl = ProgressDeclaration::from_style("max-width: 40%");
        assert!(decl.target_percent(0).is_err());
    }

    #[test]
    fn data_attribute_takes_precedence() {
        let decl = ProgressDeclaration {
            data_target: Some("85".to_string()),
            style: Some("width: 10%".to_string()),
        };
        assert_eq!(decl.target_percent(0), Ok(85));
        assert_eq!(
            ProgressDeclaration::from_data_target(" 42% ").target_percent(0),
            Ok(42)
        );
    }

    #[test]
    fn malformed_declarations_report_index_and_source() {
        let err = ProgressDeclaration::from_style("width: wide")
            .target_percent(3)
            .unwrap_err();
        assert_eq!(
            err,
            PageError::MalformedProgress {
                index: 3,
                declaration: "style=\"width: wide\"".to_string(),
            }
        );
        assert!(
            ProgressDeclaration::from_data_target("150")
                .target_percent(0)
                .is_err()
        );
        assert!(ProgressDeclaration::default().target_percent(0).is_err());
    }
}
