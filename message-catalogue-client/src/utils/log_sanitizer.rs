//! Log sanitization utilities
//!
//! Message bodies can be long multi-line markup; logs get a bounded, single-line summary.

/// Maximum number of characters kept in a log summary.
const SUMMARY_LIMIT: usize = 120;

/// Summarize a message body or response body for logging.
///
/// Line breaks are flattened to `⏎` so one log record stays on one line, and anything
/// past `SUMMARY_LIMIT` characters is cut with a suffix giving the full length in bytes.
pub fn summarize_for_log(s: &str) -> String {
    let flattened: String = s
        .chars()
        .map(|c| if matches!(c, '\n' | '\r') { '⏎' } else { c })
        .collect();

    match flattened.char_indices().nth(SUMMARY_LIMIT) {
        None => flattened,
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &flattened[..cut],
            s.len()
        ),
    }
}
