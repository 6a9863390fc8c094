//! Rendering contract of the help glyph.

use help_glyph::HelpGlyph;

/// Reads an attribute value out of rendered markup and decodes the HTML
/// entities a browser would decode before showing the tooltip.
fn attribute(html: &str, name: &str) -> String {
    let marker = format!(r#" {name}=""#);
    let start = html.find(&marker).expect("attribute present") + marker.len();
    let len = html[start..].find('"').expect("attribute closed");
    decode_entities(&html[start..start + len])
}

fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let semi = rest[amp..].find(';').expect("entity terminated") + amp;
        let entity = &rest[amp + 1..semi];
        let decoded = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .expect("known entity")
                    .expect("numeric entity");
                char::from_u32(code).expect("valid code point")
            }
        };
        out.push(decoded);
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    out
}

const INPUTS: &[&str] = &[
    "",
    " ",
    "Plain help text",
    "Use <b>bold</b> & \"quotes\"",
    "It's a path: /var/lib/app",
    "multi\nline\ttext",
    "Ünïcödé ✓ 漢字 🦀",
    "&amp; already escaped",
];

#[test]
fn tooltip_text_round_trips_for_every_input() {
    for input in INPUTS {
        let html = HelpGlyph::new(*input).to_html();
        assert_eq!(attribute(&html, "title"), *input, "title for {input:?}");
        assert_eq!(attribute(&html, "aria-label"), *input, "label for {input:?}");
    }
}

#[test]
fn markup_characters_never_leak_into_attributes() {
    let html = HelpGlyph::new(r#""><script>alert(1)</script>"#).to_html();

    assert!(!html.contains("<script>"));
    assert_eq!(html.matches('<').count(), 2, "only the span tags: {html}");
    assert!(html.ends_with(">?</span>"));
}

#[test]
fn rendering_is_deterministic() {
    for input in INPUTS {
        let glyph = HelpGlyph::new(*input);
        assert_eq!(glyph.to_html(), glyph.to_html());
        assert_eq!(glyph.to_html(), HelpGlyph::new(*input).to_html());
    }
}

#[test]
fn only_the_text_varies_between_renders() {
    let a = HelpGlyph::new("first").to_html();
    let b = HelpGlyph::new("second").to_html();

    assert_eq!(a.replace("first", "X"), b.replace("second", "X"));
}

#[test]
fn embeds_in_surrounding_markup() {
    let glyph = HelpGlyph::new("Required field");
    let label = format!("<label>Email {glyph}</label>");

    assert!(label.starts_with("<label>Email <span "));
    assert!(label.ends_with("?</span></label>"));
}
