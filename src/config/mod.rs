//! Configuration loading for the page behavior layer.
//!
//! Every tunable (selectors, scroll thresholds, class names, typing cadence)
//! is centralized here. The page may embed a TOML or JSON block; any missing
//! or invalid entries fall back to defaults so the behaviors still attach.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{ConfigFormat, load_config, parse_config, serialize_config};
pub use models::{LogLevel, PageConfig, SelectorConfig};
