// tests/lexer_tests.rs

use gq::lexer::{Lexer, parse_parts};

fn parts(query: &str) -> Vec<String> {
    parse_parts(query)
}

// ============================================================================
// Top-level splitting
// ============================================================================

#[test]
fn test_single_step() {
    assert_eq!(parts("Text"), vec!["Text"]);
}

#[test]
fn test_pipeline() {
    assert_eq!(parts("Find a|First|Attrib href"), vec!["Find a", "First", "Attrib href"]);
}

#[test]
fn test_spaces_are_preserved() {
    assert_eq!(parts("Find div > p| Text"), vec!["Find div > p", " Text"]);
}

#[test]
fn test_empty_query() {
    assert!(parts("").is_empty());
    assert!(parts("|||").is_empty());
}

#[test]
fn test_double_pipe_dropped() {
    assert_eq!(parts("Find a||Text"), vec!["Find a", "Text"]);
}

#[test]
fn test_leading_and_trailing_pipes() {
    assert_eq!(parts("|Find a|Text|"), vec!["Find a", "Text"]);
}

// ============================================================================
// Braces
// ============================================================================

#[test]
fn test_each_keeps_inner_pipes() {
    assert_eq!(
        parts("Find a|Each{Find b|Text}"),
        vec!["Find a", "Each{Find b|Text}"]
    );
}

#[test]
fn test_nested_each() {
    assert_eq!(
        parts("Find ul|Each{Find li|Each{Find a|Attrib href}}|Text"),
        vec!["Find ul", "Each{Find li|Each{Find a|Attrib href}}", "Text"]
    );
}

#[test]
fn test_closing_brace_ends_token() {
    // no pipe needed after the closing brace
    assert_eq!(parts("Each{Text}Html"), vec!["Each{Text}", "Html"]);
}

#[test]
fn test_unclosed_brace_runs_to_end() {
    let mut lexer = Lexer::new("Find a|Each{Find b|Text");
    assert_eq!(lexer.next_token().as_deref(), Some("Find a"));
    assert_eq!(lexer.next_token().as_deref(), Some("Each{Find b|Text"));
    assert_eq!(lexer.next_token(), None);
    assert!(lexer.is_at_end());
    assert_eq!(lexer.depth(), 1);
}

#[test]
fn test_stray_closing_brace_swallows_rest() {
    let mut lexer = Lexer::new("Text}|Find a|Html");
    assert_eq!(lexer.next_token().as_deref(), Some("Text}|Find a|Html"));
    assert_eq!(lexer.depth(), -1);
}

#[test]
fn test_balanced_query_ends_at_depth_zero() {
    let mut lexer = Lexer::new("Find a|Each{Each{Text}}");
    while lexer.next_token().is_some() {}
    assert_eq!(lexer.depth(), 0);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_join_reconstructs_depth_zero_structure() {
    let queries = [
        "Find a|Each{Find b|Text}",
        "Find table|Find tr|Each{Children|Each{Text}}",
        "Find p|Text",
        "Each{Attrib href}",
    ];

    for query in queries {
        assert_eq!(parts(query).join("|"), query, "Failed for query: {}", query);
    }
}

#[test]
fn test_input_is_kept() {
    let lexer = Lexer::new("Find a|Text");
    assert_eq!(lexer.input(), "Find a|Text");
}
