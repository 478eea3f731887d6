pub mod address;
pub mod code;
pub mod counts;
pub mod phone;
pub mod tag;

/// Raw field values pulled out of one normalized entry line. `code` is the
/// token as written on the page; parent inheritance happens later.
#[derive(Debug, Default)]
pub struct Extracted {
    pub code: Option<String>,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub staff: Option<String>,
    pub doctorates: Option<String>,
    pub techs: Option<String>,
    pub fields: Option<String>,
    pub leftover: String,
}

/// Run the extraction rules over a normalized entry, in fixed order. Each
/// rule takes the current remainder and hands back the value it claimed plus
/// the remainder with that span removed, so no later rule can re-match
/// consumed text. Rules never fail the entry: an unmatched rule returns the
/// remainder unchanged. Whatever survives the whole chain is the leftover.
pub fn extract_fields(entry: &str) -> Extracted {
    let mut out = Extracted::default();

    let (code, rest) = code::take_code(entry);
    out.code = code;

    let (tag, rest) = tag::take_tag(&rest);
    out.tag = tag;

    let (ta, rest) = address::take_title_address(&rest);
    out.title = ta.title;
    out.street = ta.street;
    out.city = ta.city;
    out.state = ta.state;
    out.zip = ta.zip;

    let (phone, rest) = phone::take_phone(&rest);
    out.phone = phone;

    let (staff, rest) = counts::take_staff(&rest);
    out.staff = staff;

    let (doctorates, rest) = counts::take_doctorates(&rest);
    out.doctorates = doctorates;

    let (techs, rest) = counts::take_techs(&rest);
    out.techs = techs;

    let (fields, rest) = counts::take_fields(&rest);
    out.fields = fields;

    out.leftover = rest;
    out
}

// ── Tests ──
