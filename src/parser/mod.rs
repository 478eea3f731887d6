pub mod extract;
pub mod join;
pub mod segment;

use std::sync::LazyLock;

use regex::Regex;

use crate::emit::Record;

// Pointer check: the first line of a real entry opens with a code.
static CODE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z.]*\d+").unwrap());

// A bare numeric token (optional leading dot) marks a sub-entry that
// extends the current parent code.
static SUB_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.?\d+$").unwrap());

/// Parent code/title carried across successive entries of one document.
/// One instance per parse run; never shared between documents.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    pub parent_code: Option<String>,
    pub parent_title: Option<String>,
}

/// Parse a whole document's OCR text into records, in entry order. The
/// parser never fails on data: a hopeless entry degrades to an empty record
/// whose `leftover` holds the full text, and an empty document yields no
/// records at all.
pub fn parse_document(text: &str, year: &str) -> Vec<Record> {
    let mut ctx = ParseContext::default();
    segment::entries(text)
        .map(|entry| parse_entry(&entry, year, &mut ctx))
        .collect()
}

/// Parse one segmented entry block into a record, updating the parent
/// context for the entries that follow.
fn parse_entry(block: &str, year: &str, ctx: &mut ParseContext) -> Record {
    let mut record = Record::with_year(year);

    // Pointer entries ("BAXTER INSTRUMENT CO." / "see ACME ...") carry no
    // structured data: title + note only, context untouched.
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() == 2 && !CODE_OPEN_RE.is_match(lines[0]) {
        record.title = lines[0].to_string();
        record.note = lines[1].to_string();
        return record;
    }

    let flat = join::flatten(block);
    let extracted = extract::extract_fields(&flat);

    record.title = extracted.title.clone().unwrap_or_default();
    record.street = extracted.street.unwrap_or_default();
    record.city = extracted.city.unwrap_or_default();
    record.state = extracted.state.unwrap_or_default();
    record.zip = extracted.zip.unwrap_or_default();
    record.phone = extracted.phone.unwrap_or_default();
    record.tag = extracted.tag.unwrap_or_default();
    record.staff = extracted.staff.unwrap_or_default();
    record.doctorates = extracted.doctorates.unwrap_or_default();
    record.num_techs_and_auxs = extracted.techs.unwrap_or_default();
    record.fields = extracted.fields.unwrap_or_default();
    record.leftover = extracted.leftover;

    if let Some(raw) = extracted.code {
        record.code = resolve_code(&raw, extracted.title.as_deref(), ctx);
    }

    record
}

/// Apply code inheritance: a bare numeric token under a live parent becomes
/// "parent.token" and leaves the context alone; anything else becomes the
/// new parent along with its title.
fn resolve_code(raw: &str, title: Option<&str>, ctx: &mut ParseContext) -> String {
    if SUB_CODE_RE.is_match(raw) {
        if let Some(parent) = &ctx.parent_code {
            return format!("{}.{}", parent, raw.trim_start_matches('.'));
        }
    }
    ctx.parent_code = Some(raw.to_string());
    ctx.parent_title = title.map(str::to_string);
    raw.to_string()
}

// ── Tests ──
