use std::sync::LazyLock;

use regex::Regex;

/// Closed vocabulary of classification tags: ordered permutations of up to
/// four letters from {p, g, i, c}. Earlier entries win ties, so the listed
/// order is load-bearing.
pub const TAGS: &[&str] = &[
    "p", "g", "i", "c",
    "pg", "pi", "pc", "gp", "gi", "gc", "ip", "ig", "ic", "cp", "cg", "ci",
    "pgi", "pgc", "pig", "pic", "pcg", "pci", "gpi", "gpc", "gip", "gic", "gcp", "gci",
    "ipg", "ipc", "igp", "igc", "icp", "icg", "cpg", "cpi", "cgp", "cgi", "cip", "cig",
    "pgic", "pgci", "pigc", "picg", "pcgi", "pcig", "gpic", "gpci", "gipc", "gicp",
    "gcpi", "gcip", "ipgc", "ipcg", "igpc", "igcp", "icpg", "icgp", "cpgi", "cpig",
    "cgpi", "cgip", "cipg", "cigp",
];

static TAG_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TAGS.iter()
        .map(|tag| Regex::new(&format!(r"(?i)\(\s*{}\s*\)", tag)).unwrap())
        .collect()
});

/// Find the first vocabulary tag occurring parenthesized anywhere in the
/// entry, e.g. "(pg)". The stored value drops the parentheses; the matched
/// span (parens included) is removed from the remainder.
pub fn take_tag(entry: &str) -> (Option<String>, String) {
    for re in TAG_RES.iter() {
        if let Some(m) = re.find(entry) {
            let value = m
                .as_str()
                .trim_matches(|c: char| c == '(' || c == ')')
                .trim()
                .to_string();
            let rest = entry.replacen(m.as_str(), "", 1);
            return (Some(value), rest);
        }
    }
    (None, entry.to_string())
}

// ── Tests ──
