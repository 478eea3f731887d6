use std::sync::LazyLock;

use regex::Regex;

// "Indus-\ntrial" → "Industrial": a hyphen between letters across a line
// break is a typesetter's word wrap, not content.
static WORD_WRAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])-\s*\n\s*([A-Za-z])").unwrap());

// "555-\n1234" → "555-1234": between digits the hyphen is a real separator
// and must survive the join.
static DIGIT_WRAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)-\s*\n\s*(\d)").unwrap());

static NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());

// Fax and telex runs are noise on these pages; no field wants them.
static FAX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)FAX:\s*[\d\-\s]+").unwrap());
static TELEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Telex:\s*[\d\-\s,]+").unwrap());

/// Collapse a multi-line entry block into one normalized line, repairing
/// OCR line-wrap artifacts. Pure function.
pub fn flatten(block: &str) -> String {
    let joined = WORD_WRAP_RE.replace_all(block, "${1}${2}");
    let joined = DIGIT_WRAP_RE.replace_all(&joined, "${1}-${2}");
    let joined = NEWLINE_RE.replace_all(&joined, " ");
    let joined = joined
        .replace('\t', "")
        .replace(",*", ",")
        .replace(",  ", ", ");
    let joined = FAX_RE.replace_all(&joined, "");
    let joined = TELEX_RE.replace_all(&joined, "");
    joined.trim().to_string()
}

// ── Tests ──
