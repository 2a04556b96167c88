// Unit tests for the Markup type
use safemark::Markup;

#[test]
fn test_escape_constructor() {
    let markup = Markup::escape("<script>alert('x')</script>");
    assert_eq!(
        markup.as_str(),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
    );
}

#[test]
fn test_raw_constructor_trusts_caller() {
    let markup = Markup::raw("<em>verbatim</em>");
    assert_eq!(markup.as_str(), "<em>verbatim</em>");
}

#[test]
fn test_default_is_empty() {
    let markup = Markup::default();
    assert!(markup.is_empty());
    assert_eq!(markup.len(), 0);
}

#[test]
fn test_push_text_escapes() {
    let mut markup = Markup::raw("<p>");
    markup.push_text("R&D");
    markup.push_markup(&Markup::raw("</p>"));
    assert_eq!(markup.as_str(), "<p>R&amp;D</p>");
}

#[test]
fn test_push_value_applies_policy() {
    let mut markup = Markup::default();
    markup.push_value(&"x < ").unwrap();
    markup.push_value(&10).unwrap();
    assert_eq!(markup.as_str(), "x &lt; 10");
}

#[test]
fn test_display_and_deref() {
    let markup = Markup::escape("1 < 2");
    assert_eq!(format!("{markup}"), "1 &lt; 2");
    // Deref exposes the str API.
    assert!(markup.contains("&lt;"));
    assert!(markup.starts_with("1 "));
}

#[test]
fn test_into_string_drops_the_tag() {
    let markup = Markup::escape("a & b");
    let plain: String = markup.into_string();
    assert_eq!(plain, "a &amp; b");
}

#[test]
fn test_serde_is_transparent() {
    let markup = Markup::escape("a < b");
    let json = serde_json::to_string(&markup).unwrap();
    assert_eq!(json, "\"a &lt; b\"");

    let back: Markup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, markup);
}
