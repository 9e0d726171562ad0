//! Integration tests for the rendered views.

use nitf::{parse_str, to_json, to_text, JsonFormat, NitfDocument};

const ARTICLE: &str = "<nitf><body><body.head>\
    <hedline><hl1>Storm Hits Coast</hl1></hedline>\
    <byline>By Jane Doe</byline>\
    <dateline><location>MIAMI</location></dateline>\
    </body.head><body.content>\
    <p lede=\"true\">Rescue underway.</p><p>Officials respond.</p>\
    </body.content><body.end><tagline>Jo Bloggs contributed.</tagline></body.end>\
    </body></nitf>";

#[test]
fn test_text_rendering_with_default_separator() {
    let doc = parse_str(ARTICLE).unwrap();
    let text = to_text(&doc, "\n");

    assert_eq!(
        text,
        "Storm Hits Coast\nBy Jane Doe\nMIAMI - Rescue underway.\nOfficials respond.\nJo Bloggs contributed."
    );
}

#[test]
fn test_text_rendering_with_custom_separator() {
    let doc = parse_str(ARTICLE).unwrap();
    let text = to_text(&doc, "\r\n");

    assert!(text.starts_with("Storm Hits Coast\r\n"));
    assert!(text.ends_with("Jo Bloggs contributed."));
}

#[test]
fn test_json_rendering_contains_model_fields() {
    let doc = parse_str(ARTICLE).unwrap();
    let json = to_json(&doc, JsonFormat::Pretty).unwrap();

    assert!(json.contains("Storm Hits Coast"));
    assert!(json.contains("Rescue underway."));
    assert!(json.contains("\"key-list\""));
}

#[test]
fn test_json_round_trip() {
    let doc = parse_str(ARTICLE).unwrap();
    let json = to_json(&doc, JsonFormat::Compact).unwrap();
    let back: NitfDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(doc, back);
    assert_eq!(back.headline(1).unwrap(), "Storm Hits Coast");
}
