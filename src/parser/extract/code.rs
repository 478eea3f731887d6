use std::sync::LazyLock;

use regex::Regex;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z.]*\d+)\s+").unwrap());

/// Take the leading directory code ("A1 ", "C184 ", ".12 ", "2 ") off the
/// entry. Returns the raw token and the remainder after the separator.
pub fn take_code(entry: &str) -> (Option<String>, String) {
    match CODE_RE.captures(entry) {
        Some(caps) => {
            let end = caps.get(0).unwrap().end();
            (Some(caps[1].to_string()), entry[end..].to_string())
        }
        None => (None, entry.to_string()),
    }
}

// ── Tests ──
