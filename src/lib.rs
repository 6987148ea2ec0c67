//! Scroll-driven behaviors for a single-page portfolio.
//!
//! Responsibilities are split so that the logic can be tested off-browser:
//! - `config` loads selectors, thresholds, and class names.
//! - `page` owns behavior state and turns events into DOM effects.
//! - `web` (wasm32 only) wires the real document to the controller.

pub mod config;
pub mod declaration;
pub mod error;
pub mod logging;
pub mod page;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{PageHandle, mount};
