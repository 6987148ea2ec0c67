//! Error types for the page behavior layer.
//!
//! None of these are fatal: each is reported through `tracing` by whichever
//! handler hit it, and every other handler keeps running.

use thiserror::Error;

/// Browser features the page degrades without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    IntersectionObserver,
    SmoothScroll,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Capability::IntersectionObserver => "IntersectionObserver",
            Capability::SmoothScroll => "smooth scrolling",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    /// Anchor link points at a fragment with no matching element
    #[error("No element matches fragment {fragment}")]
    MissingTarget { fragment: String },

    /// Progress bar declaration has no parsable target percentage
    #[error("Progress bar {index} has no parsable target width in {declaration:?}")]
    MalformedProgress { index: usize, declaration: String },

    /// Browser lacks a capability; the page falls back
    #[error("{capability} not supported")]
    Unsupported { capability: Capability },

    /// A single required element is absent from the markup
    #[error("No element matches selector {selector}")]
    MissingElement { selector: String },

    /// A DOM call threw
    #[error("DOM operation {operation} failed: {detail}")]
    Dom {
        operation: &'static str,
        detail: String,
    },
}

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;
