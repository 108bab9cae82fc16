//! Utility modules.

/// Single-line, length-capped previews of response bodies for logs and errors.
pub mod body_preview;
