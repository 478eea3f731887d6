use std::sync::LazyLock;

use regex::Regex;

// Page-number/header line at the top of a scan, e.g. "314  INDUSTRIAL ...".
static PAGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+.*?\n").unwrap());

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

// An entry opens with a directory code: optional capital/dot prefix, digits,
// whitespace ("A1 ", "C184 ", "2 ").
static ENTRY_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z.]*\d+\s+").unwrap());

/// Split one document's raw OCR text into candidate entry blocks: strip the
/// page header, split on blank lines, then lazily walk the blocks merging
/// continuations that an OCR page break severed from their entry. Finite,
/// single forward pass.
pub fn entries(text: &str) -> Entries {
    let body = PAGE_HEADER_RE.replacen(text, 1, "");
    let blocks = BLANK_LINE_RE
        .split(&body)
        .map(str::to_string)
        .collect::<Vec<_>>();
    Entries { blocks, idx: 0 }
}

pub struct Entries {
    blocks: Vec<String>,
    idx: usize,
}

impl Iterator for Entries {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.idx < self.blocks.len() {
            let mut entry = self.blocks[self.idx].clone();
            self.idx += 1;

            // Lookahead merge: a following block that has more than two
            // lines but no opening code is the severed tail of this entry.
            // Two-line blocks stay separate; they may be pointer entries.
            while let Some(next) = self.blocks.get(self.idx) {
                let first_line = next.lines().next().unwrap_or("");
                if next.lines().count() <= 2 || ENTRY_START_RE.is_match(first_line) {
                    break;
                }
                entry.push('\n');
                entry.push_str(next);
                self.idx += 1;
            }

            if !entry.trim().is_empty() {
                return Some(entry);
            }
        }
        None
    }
}

// ── Tests ──
