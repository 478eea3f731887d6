use std::sync::LazyLock;

use regex::Regex;

static TEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Tel:\s*([\d\-]+)").unwrap());
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([\d\-]+)").unwrap());

/// Take the phone number: a labeled "Tel: 555-1234" if present, otherwise
/// the first bare digit-hyphen run.
pub fn take_phone(entry: &str) -> (Option<String>, String) {
    for re in [&*TEL_RE, &*BARE_RE] {
        if let Some(caps) = re.captures(entry) {
            let m = caps.get(0).unwrap();
            let phone = caps[1].trim().to_string();
            let rest = consume_with_separator_skip(entry, m.start(), m.end());
            return (Some(phone), rest);
        }
    }
    (None, entry.to_string())
}

/// Remove the matched span. Scanned pages sometimes render a stray
/// semicolon artifact right after the number ("Tel: 555-1234 ;x"); when the
/// character immediately after the match is ';', that semicolon and the one
/// character following it are dropped along with the match. Bounds-checked:
/// a match at the end of the string just gets removed.
fn consume_with_separator_skip(entry: &str, start: usize, end: usize) -> String {
    let tail = &entry[end..];
    let mut chars = tail.chars();
    if chars.next() == Some(';') {
        let skip = ';'.len_utf8() + chars.next().map_or(0, char::len_utf8);
        return format!("{}{}", &entry[..start], &tail[skip..]);
    }
    format!("{}{}", &entry[..start], tail).trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_phone() {
        let (phone, rest) = take_phone("Tel: 555-1234 Professional Staff: 5");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert_eq!(rest, "Professional Staff: 5");
    }

    #[test]
    fn bare_fallback() {
        let (phone, _) = take_phone("Call 555-1234 for details");
        assert_eq!(phone.as_deref(), Some("555-1234"));
    }

    #[test]
    fn labeled_preferred_over_earlier_bare_run() {
        let (phone, rest) = take_phone("Suite 300 Tel: 555-1234");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert!(rest.contains("Suite 300"));
    }

    #[test]
    fn no_digits_no_phone() {
        let (phone, rest) = take_phone("no numbers here");
        assert!(phone.is_none());
        assert_eq!(rest, "no numbers here");
    }

    // Pinned behavior of the separator-skip artifact repair.

    #[test]
    fn semicolon_after_match_is_skipped_with_one_trailing_char() {
        let (phone, rest) = take_phone("Tel: 555-1234;x rest");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert_eq!(rest, " rest");
    }

    #[test]
    fn semicolon_at_end_of_string_is_safe() {
        let (phone, rest) = take_phone("Tel: 555-1234;");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert_eq!(rest, "");
    }

    #[test]
    fn match_at_end_of_string_is_safe() {
        let (phone, rest) = take_phone("Tel: 555-1234");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert_eq!(rest, "");
    }

    #[test]
    fn other_trailing_punctuation_left_alone() {
        let (phone, rest) = take_phone("Tel: 555-1234. Staff follows");
        assert_eq!(phone.as_deref(), Some("555-1234"));
        assert_eq!(rest, ". Staff follows");
    }
}
