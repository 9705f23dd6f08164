//! Utility modules.

/// Log sanitization for message and response bodies.
pub mod log_sanitizer;
