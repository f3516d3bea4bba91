// tests/cli_tests.rs

use std::io::Write;

use gq::cli::{self, CliError, DocTopic, RunOptions};
use gq::{Language, ParseError, Presenter, Source};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const LINKS: &str = r#"<html><body><a href="x">hi</a><a href="y">bye</a></body></html>"#;

fn html_file(html: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(html.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn options(query: &str, source: Option<Source>) -> RunOptions {
    RunOptions {
        query: query.to_string(),
        source,
        ..RunOptions::default()
    }
}

fn execute(options: &RunOptions) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    cli::execute_run(options, &Presenter::plain(), &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap())
}

// ============================================================================
// Running queries
// ============================================================================

#[test]
fn test_run_against_file() {
    let file = html_file(LINKS);
    let source = Some(Source::File(file.path().to_path_buf()));
    let output = execute(&options("Find a|Each{Attrib href}", source)).unwrap();
    assert_eq!(output, "1: x\n2: y\n");
}

#[test]
fn test_run_text_query() {
    let file = html_file(LINKS);
    let source = Some(Source::File(file.path().to_path_buf()));
    assert_eq!(execute(&options("Find a|Last|Text", source)).unwrap(), "bye\n");
}

#[test]
fn test_run_without_source_fails() {
    let err = execute(&options("Find a|Text", None)).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_missing_file_is_fetch_error() {
    let source = Some(Source::File("/no/such/page.html".into()));
    let err = execute(&options("Text", source)).unwrap_err();
    assert!(matches!(err, CliError::Fetch(_)));
    assert!(err.to_string().contains("/no/such/page.html"));
}

#[test]
fn test_strict_parse_error() {
    let file = html_file(LINKS);
    let mut options = options("Find a|Txet", Some(Source::File(file.path().to_path_buf())));
    options.strict = true;

    match execute(&options).unwrap_err() {
        CliError::Parse(ParseError::UnknownStep { token }) => assert_eq!(token, "Txet"),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_strict_selector_error_after_partial_output() {
    let file = html_file(LINKS);
    let mut options = options("Find a|Each{Find [[|Text}", Some(Source::File(file.path().to_path_buf())));
    options.strict = true;

    let mut buffer = Vec::new();
    let err = cli::execute_run(&options, &Presenter::plain(), &mut buffer).unwrap_err();
    assert!(matches!(err, CliError::Eval(_)));
    assert_eq!(String::from_utf8(buffer).unwrap(), "1: ");
}

#[test]
fn test_lenient_run_skips_unknown_steps() {
    let file = html_file(LINKS);
    let source = Some(Source::File(file.path().to_path_buf()));
    assert_eq!(execute(&options("Find a|Bogus|First|Text", source)).unwrap(), "hi\n");
}

// ============================================================================
// Code generation
// ============================================================================

#[test]
fn test_gencode_without_source_uses_placeholder() {
    let mut options = options("Find a|Each{Attrib href}", None);
    options.gencode = true;
    let code = execute(&options).unwrap();
    assert!(code.starts_with("package main\n"));
    assert!(code.contains("fileName := \"page.html\""));
    assert!(code.ends_with("}\n"));
}

#[test]
fn test_gencode_uses_url_source() {
    let mut options = options("Find title|Text", Some(Source::Url("https://example.com".to_string())));
    options.gencode = true;
    let code = execute(&options).unwrap();
    assert!(code.contains("fileName := \"https://example.com\""));
    assert!(code.contains("http.Get(fileName)"));
}

#[test]
fn test_gencode_does_not_read_source() {
    let mut options = options("Text", Some(Source::File("/no/such/page.html".into())));
    options.gencode = true;
    options.language = Language::Rust;
    let code = execute(&options).unwrap();
    assert!(code.contains("gq::load(\"/no/such/page.html\")?"));
}

// ============================================================================
// Documentation
// ============================================================================

#[test]
fn test_doc_topics() {
    assert_eq!(DocTopic::from_name("Each"), Some(DocTopic::Each));
    assert_eq!(DocTopic::from_name("gencode"), Some(DocTopic::Codegen));
    assert!(cli::get_doc_topic("syntax").unwrap().contains("GRAMMAR"));
    assert!(cli::get_docs_overview().contains("Find a|Each{Attrib href}"));
}

#[test]
fn test_unknown_doc_topic() {
    let err = cli::get_doc_topic("xpath").unwrap_err();
    assert!(matches!(err, CliError::UnknownTopic(ref name) if name == "xpath"));
}

#[test]
fn test_language_names() {
    assert_eq!("go".parse::<Language>(), Ok(Language::Go));
    assert_eq!("rs".parse::<Language>(), Ok(Language::Rust));
    assert!("python".parse::<Language>().is_err());
    assert_eq!(Language::Rust.to_string(), "rust");
}
