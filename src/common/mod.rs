//! Common utilities shared across the crate

pub mod config;
pub mod error;
pub mod logging;

pub use config::RunnerConfig;
pub use error::{Error, Result};

/// Returns `true` when a settings string carries no usable content.
///
/// Settings records come from an external store that may hand back either
/// empty strings or whitespace padding; both count as blank.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank("com.example.Sut"));
        assert!(!is_blank(" x "));
    }
}
