use std::sync::LazyLock;

use regex::Regex;

// Title is everything up to the first comma that precedes a digit-led
// remainder, i.e. the house number of the street address.
static TITLE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?),\s*([0-9].*)$").unwrap());

static STREET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.*?),\s*([A-Za-z\s]+),\s*([A-Z]{2})\s*([\w\-]{5,10})\.").unwrap()
});

// Variant with the zip tucked into a "(Mailing add: PO Box N, ZIP)" clause.
static MAILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(.*?),\s*([A-Za-z\s]+),\s*([A-Z]{2})\s*\(Mailing add:\s*(PO Box \d+),\s*([\w\-]{5,10})\)\.")
        .unwrap()
});

#[derive(Debug, Default)]
pub struct TitleAddress {
    pub title: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// Split off the title, then parse the US-form street address from the
/// digit-led rest. The title is consumed even when the address portion
/// fails to parse; the unparsed address text stays in the remainder.
pub fn take_title_address(entry: &str) -> (TitleAddress, String) {
    let mut out = TitleAddress::default();

    let caps = match TITLE_SPLIT_RE.captures(entry) {
        Some(caps) => caps,
        None => return (out, entry.to_string()),
    };
    out.title = Some(caps[1].trim().to_string());
    let rest = caps[2].trim().to_string();

    if let Some(caps) = STREET_RE.captures(&rest) {
        out.street = Some(caps[1].trim().to_string());
        out.city = Some(caps[2].trim().to_string());
        out.state = Some(caps[3].trim().to_string());
        out.zip = Some(caps[4].trim().to_string());
        let end = caps.get(0).unwrap().end();
        return (out, rest[end..].to_string());
    }

    if let Some(caps) = MAILING_RE.captures(&rest) {
        out.street = Some(format!("{} {}", caps[1].trim(), caps[4].trim()));
        out.city = Some(caps[2].trim().to_string());
        out.state = Some(caps[3].trim().to_string());
        out.zip = Some(caps[5].trim().to_string());
        let end = caps.get(0).unwrap().end();
        return (out, rest[end..].to_string());
    }

    (out, rest)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_us_address() {
        let (ta, rest) =
            take_title_address("WIDGET CO., 123 Main St, Springfield, IL 62701. Tel: 555-1234");
        assert_eq!(ta.title.as_deref(), Some("WIDGET CO."));
        assert_eq!(ta.street.as_deref(), Some("123 Main St"));
        assert_eq!(ta.city.as_deref(), Some("Springfield"));
        assert_eq!(ta.state.as_deref(), Some("IL"));
        assert_eq!(ta.zip.as_deref(), Some("62701"));
        assert_eq!(rest.trim(), "Tel: 555-1234");
    }

    #[test]
    fn mailing_address_merges_po_box_into_street() {
        let (ta, _) = take_title_address(
            "GULF LABS, 900 Harbor Rd, Houston, TX (Mailing add: PO Box 1450, 77002). Tel: 1",
        );
        assert_eq!(ta.street.as_deref(), Some("900 Harbor Rd PO Box 1450"));
        assert_eq!(ta.city.as_deref(), Some("Houston"));
        assert_eq!(ta.state.as_deref(), Some("TX"));
        assert_eq!(ta.zip.as_deref(), Some("77002"));
    }

    #[test]
    fn zip_with_extension() {
        let (ta, _) =
            take_title_address("FOO INC, 1 Elm St, Dayton, OH 45401-0001. Tel: 555");
        assert_eq!(ta.zip.as_deref(), Some("45401-0001"));
    }

    #[test]
    fn no_digit_led_rest_means_no_title() {
        let (ta, rest) = take_title_address("SOME HEADING, NO ADDRESS HERE");
        assert!(ta.title.is_none());
        assert_eq!(rest, "SOME HEADING, NO ADDRESS HERE");
    }

    #[test]
    fn title_consumed_even_when_address_fails() {
        // Digit-led rest that matches neither address form: the title is
        // still taken and the rest is left for later rules / leftover.
        let (ta, rest) = take_title_address("FOO LABS, 123 Somewhere Unparseable");
        assert_eq!(ta.title.as_deref(), Some("FOO LABS"));
        assert!(ta.street.is_none());
        assert_eq!(rest, "123 Somewhere Unparseable");
    }
}
