//! Go programs built on goquery.

use super::{Emitter, write_query};
use crate::{
    ast::{Query, Step},
    fetch::is_url,
};

pub struct Go;

/// Variable holding the `*goquery.Document` in generated programs.
const DOCUMENT: &str = "doc";

/// `goquery.OuterHtml` takes a `*Selection`, which a `*Document` only embeds.
fn as_selection(selection: &str) -> String {
    if selection == DOCUMENT {
        format!("{}.Selection", DOCUMENT)
    } else {
        selection.to_string()
    }
}

impl Emitter for Go {
    fn indent(&self) -> &'static str {
        "\t"
    }

    fn transform(&self, selection: &str, step: &Step) -> String {
        match step {
            Step::Find(css) => format!("{}.Find({})", selection, quote(css)),
            other => format!("{}.{}()", selection, other.keyword()),
        }
    }

    fn each_open(&self, selection: &str, index: &str, node: &str) -> Vec<String> {
        vec![
            format!("{}.Each(func({} int, {} *goquery.Selection) {{", selection, index, node),
            format!("\tfmt.Printf(\"%d: \", {}+1)", index),
        ]
    }

    fn each_close(&self) -> Vec<String> {
        vec!["})".to_string()]
    }

    fn attrib(&self, selection: &str, name: &str) -> Vec<String> {
        vec![
            format!("if val, exists := {}.Attr({}); exists {{", selection, quote(name)),
            "\tfmt.Println(val)".to_string(),
            "}".to_string(),
        ]
    }

    fn text(&self, selection: &str) -> Vec<String> {
        vec![format!("fmt.Println({}.Text())", selection)]
    }

    fn html(&self, selection: &str, outer: bool) -> Vec<String> {
        let call = if outer {
            format!("goquery.OuterHtml({})", as_selection(selection))
        } else {
            format!("{}.Html()", selection)
        };
        vec![
            format!("if html, err := {}; err == nil {{", call),
            "\tfmt.Println(strings.Trim(html, \" \\n\"))".to_string(),
            "}".to_string(),
        ]
    }

    fn print_selection(&self, selection: &str) -> Vec<String> {
        vec![format!("fmt.Println({})", selection)]
    }
}

/// A complete `package main` that runs `query` against `location`.
pub fn program(query: &Query, location: &str) -> String {
    let remote = is_url(location);
    let uses_strings = query.any_step(&|step| matches!(step, Step::Html | Step::OuterHtml));

    let mut imports = vec!["fmt", "log"];
    imports.push(if remote { "net/http" } else { "os" });
    if uses_strings {
        imports.push("strings");
    }
    imports.sort_unstable();

    let mut code = String::from("package main\n\nimport (\n");
    for import in imports {
        code.push_str(&format!("\t{}\n", quote(import)));
    }
    code.push_str("\n\t\"github.com/PuerkitoBio/goquery\"\n)\n\n");

    code.push_str("func main() {\n");
    code.push_str(&format!("\tfileName := {}\n", quote(location)));
    code.push_str("\tvar doc *goquery.Document\n\tvar err error\n\n");

    if remote {
        code.push_str(
            "\tresp, err := http.Get(fileName)\n\
             \tif err != nil {\n\
             \t\tlog.Fatal(err)\n\
             \t}\n\
             \tdefer resp.Body.Close()\n\
             \tdoc, err = goquery.NewDocumentFromReader(resp.Body)\n",
        );
    } else {
        code.push_str(
            "\tfile, err := os.Open(fileName)\n\
             \tif err != nil {\n\
             \t\tlog.Fatal(err)\n\
             \t}\n\
             \tdefer file.Close()\n\
             \tdoc, err = goquery.NewDocumentFromReader(file)\n",
        );
    }
    code.push_str("\tif err != nil {\n\t\tlog.Fatal(err)\n\t}\n\n");

    write_query(&Go, &mut code, query, DOCUMENT.to_string(), 1, 0);
    code.push('}');
    code
}

/// Quote a string as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x100 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_like_go() {
        assert_eq!(quote(r#"a[href="x"]"#), r#""a[href=\"x\"]""#);
        assert_eq!(quote("tab\there"), r#""tab\there""#);
        assert_eq!(quote("\u{1}"), r#""\x01""#);
        assert_eq!(quote("é"), "\"é\"");
    }
}
