//! Utility modules.

/// Log sanitization helpers so bodies and tokens never land in logs verbatim.
pub mod log_sanitizer;
