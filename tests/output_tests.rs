// tests/output_tests.rs

use gq::output::{format_html, format_text, highlight};
use gq::{ContentKind, Language, Output, Presenter};
use pretty_assertions::assert_eq;

fn render_all(presenter: Presenter, outputs: &[Output]) -> String {
    let mut buffer = Vec::new();
    presenter.write_all(&mut buffer, outputs).unwrap();
    String::from_utf8(buffer).unwrap()
}

// ============================================================================
// format_html
// ============================================================================

#[test]
fn test_nested_elements_are_indented() {
    let html = r#"<div id="a"><section><p>hi</p></section></div>"#;
    assert_eq!(
        format_html(html),
        "<div id=\"a\">\n  <section>\n    <p>hi</p>\n  </section>\n</div>"
    );
}

#[test]
fn test_void_elements_do_not_indent() {
    let html = r#"<div><br><img src="x.png"><p>after</p></div>"#;
    assert_eq!(
        format_html(html),
        "<div>\n  <br>\n  <img src=\"x.png\">\n  <p>after</p>\n</div>"
    );
}

#[test]
fn test_empty_element_is_condensed() {
    assert_eq!(format_html("<ul><li></li></ul>"), "<ul>\n  <li></li>\n</ul>");
}

#[test]
fn test_long_text_gets_its_own_line() {
    let long = "word ".repeat(30);
    let formatted = format_html(&format!("<p>{}</p>", long));
    assert_eq!(formatted, format!("<p>\n  {}\n</p>", long.trim()));
}

#[test]
fn test_mixed_content_is_split() {
    assert_eq!(
        format_html("<p>Total: <b>3</b> items</p>"),
        "<p>\n  Total:\n  <b>3</b>\n  items\n</p>"
    );
}

#[test]
fn test_doctype_and_comments_are_kept() {
    let html = "<!DOCTYPE html><html><!-- note --><body></body></html>";
    assert_eq!(
        format_html(html),
        "<!DOCTYPE html>\n<html>\n  <!-- note -->\n  <body></body>\n</html>"
    );
}

#[test]
fn test_script_body_lines_are_indented() {
    let html = "<script>\n  var a = 1;\n  if (a < 2) {}\n</script>";
    assert_eq!(
        format_html(html),
        "<script>\n  var a = 1;\n  if (a < 2) {}\n</script>"
    );
}

#[test]
fn test_plain_text_is_collapsed() {
    assert_eq!(format_html("  just   some\n text "), "just some text");
    assert_eq!(format_html(""), "");
}

// ============================================================================
// format_text
// ============================================================================

#[test]
fn test_format_text_trims_lines() {
    assert_eq!(format_text("\n   Apple  \n\n   Banana\n  "), "Apple\nBanana");
    assert_eq!(format_text("one line"), "one line");
    assert_eq!(format_text(""), "");
}

// ============================================================================
// Presenter
// ============================================================================

#[test]
fn test_plain_presenter_keeps_values() {
    let outputs = vec![
        Output::Index(1),
        Output::Text("  spaced  ".to_string()),
        Output::Html("<p><b>x</b></p>".to_string()),
    ];
    assert_eq!(render_all(Presenter::plain(), &outputs), "1:   spaced  \n<p><b>x</b></p>\n");
}

#[test]
fn test_default_presenter_formats_values() {
    let outputs = vec![
        Output::Text("\n  Apple\n".to_string()),
        Output::Html("<p><b>x</b></p>".to_string()),
    ];
    assert_eq!(
        render_all(Presenter::default(), &outputs),
        "Apple\n<p>\n  <b>x</b>\n</p>\n"
    );
}

#[test]
fn test_empty_text_still_ends_line() {
    assert_eq!(render_all(Presenter::default(), &[Output::Text(String::new())]), "\n");
}

#[test]
fn test_render_without_color_has_no_escapes() {
    let presenter = Presenter::new(false, true);
    let rendered = presenter.render("<a href=\"x\">hi</a>", ContentKind::Html);
    assert_eq!(rendered, "<a href=\"x\">hi</a>");
    assert!(!rendered.contains('\x1b'));
}

#[test]
fn test_write_code_is_not_reformatted() {
    let code = "package main\n\nfunc main() {\n\tfmt.Println(doc)\n}";
    let mut buffer = Vec::new();
    Presenter::default().write_code(&mut buffer, code, Language::Go).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", code));
}

#[test]
fn test_highlight_leaves_text_alone() {
    assert_eq!(highlight("plain <b>words</b>", ContentKind::Text), "plain <b>words</b>");
}

#[test]
fn test_content_kind_from_language() {
    assert_eq!(ContentKind::from(Language::Go), ContentKind::Go);
    assert_eq!(ContentKind::from(Language::Rust), ContentKind::Rust);
}
