use std::sync::LazyLock;

use regex::Regex;

static STAFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Professional Staff:\s*(\d+)").unwrap());
static DOCTORATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Doctorates:\s*(\d+)").unwrap());
static TECHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Technicians\s*&\s*Auxiliaries:\s*(\d+)").unwrap());

const FIELDS_LABEL: &str = "Fields of R&D:";
const STAFF_LABEL: &str = "Professional Staff:";

pub fn take_staff(entry: &str) -> (Option<String>, String) {
    take_count(&STAFF_RE, entry)
}

pub fn take_doctorates(entry: &str) -> (Option<String>, String) {
    take_count(&DOCTORATES_RE, entry)
}

pub fn take_techs(entry: &str) -> (Option<String>, String) {
    take_count(&TECHS_RE, entry)
}

fn take_count(re: &Regex, entry: &str) -> (Option<String>, String) {
    match re.captures(entry) {
        Some(caps) => {
            let whole = caps.get(0).unwrap().as_str();
            (Some(caps[1].to_string()), entry.replacen(whole, "", 1))
        }
        None => (None, entry.to_string()),
    }
}

/// Take the "Fields of R&D:" free-text value, running up to a following
/// "Professional Staff:" label or the end of the entry. Internal whitespace
/// collapses to single spaces.
pub fn take_fields(entry: &str) -> (Option<String>, String) {
    let start = match entry.find(FIELDS_LABEL) {
        Some(idx) => idx,
        None => return (None, entry.to_string()),
    };
    let body_start = start + FIELDS_LABEL.len();
    let end = entry[body_start..]
        .find(STAFF_LABEL)
        .map(|idx| body_start + idx)
        .unwrap_or(entry.len());

    let value = entry[body_start..end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let rest = format!("{}{}", &entry[..start], &entry[end..]);
    (Some(value), rest)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_count() {
        let (staff, rest) = take_staff("Professional Staff: 12 (Doctorates: 4)");
        assert_eq!(staff.as_deref(), Some("12"));
        assert_eq!(rest, " (Doctorates: 4)");
    }

    #[test]
    fn doctorates_inside_parens() {
        let (docs, rest) = take_doctorates(" (Doctorates: 4) Technicians & Auxiliaries: 7");
        assert_eq!(docs.as_deref(), Some("4"));
        assert_eq!(rest, " () Technicians & Auxiliaries: 7");
    }

    #[test]
    fn techs_label_with_loose_ampersand() {
        let (techs, _) = take_techs("Technicians  &  Auxiliaries: 30 Fields of R&D: x");
        assert_eq!(techs.as_deref(), Some("30"));
    }

    #[test]
    fn fields_run_to_end() {
        let (fields, rest) = take_fields("() Fields of R&D: Polymer   chemistry, coatings");
        assert_eq!(fields.as_deref(), Some("Polymer chemistry, coatings"));
        assert_eq!(rest, "() ");
    }

    #[test]
    fn fields_stop_at_staff_label() {
        let (fields, rest) =
            take_fields("Fields of R&D: Catalysis Professional Staff: 9 tail");
        assert_eq!(fields.as_deref(), Some("Catalysis"));
        assert_eq!(rest, "Professional Staff: 9 tail");
    }

    #[test]
    fn missing_labels_leave_remainder_untouched() {
        let entry = "no labeled counts here";
        assert_eq!(take_staff(entry), (None, entry.to_string()));
        assert_eq!(take_doctorates(entry), (None, entry.to_string()));
        assert_eq!(take_techs(entry), (None, entry.to_string()));
        assert_eq!(take_fields(entry), (None, entry.to_string()));
    }
}
