//! Rust programs built on this crate.

use super::{Emitter, write_query};
use crate::ast::{Query, Step};

pub struct Rust;

fn quote(s: &str) -> String {
    format!("{:?}", s)
}

impl Emitter for Rust {
    fn indent(&self) -> &'static str {
        "    "
    }

    fn transform(&self, selection: &str, step: &Step) -> String {
        match step {
            Step::Find(css) => format!("{}.find({})", selection, quote(css)),
            other => format!("{}.{}()", selection, other.keyword().to_lowercase()),
        }
    }

    fn each_open(&self, selection: &str, index: &str, node: &str) -> Vec<String> {
        vec![
            format!("for ({}, {}) in {}.iter().enumerate() {{", index, node, selection),
            format!("    print!(\"{{}}: \", {} + 1);", index),
        ]
    }

    fn each_close(&self) -> Vec<String> {
        vec!["}".to_string()]
    }

    fn attrib(&self, selection: &str, name: &str) -> Vec<String> {
        vec![
            format!("if let Some(val) = {}.attr({}) {{", selection, quote(name)),
            "    println!(\"{}\", val);".to_string(),
            "}".to_string(),
        ]
    }

    fn text(&self, selection: &str) -> Vec<String> {
        vec![format!("println!(\"{{}}\", {}.text());", selection)]
    }

    fn html(&self, selection: &str, outer: bool) -> Vec<String> {
        let method = if outer { "outer_html" } else { "inner_html" };
        vec![format!(
            "println!(\"{{}}\", gq::trim_space_and_newline(&{}.{}()));",
            selection, method
        )]
    }

    fn print_selection(&self, selection: &str) -> Vec<String> {
        vec![format!("println!(\"{{:?}}\", {});", selection)]
    }
}

/// A complete `main.rs` that runs `query` against `location`.
pub fn program(query: &Query, location: &str) -> String {
    let mut code = String::from("fn main() -> Result<(), Box<dyn std::error::Error>> {\n");
    code.push_str(&format!("    let doc = gq::load({})?;\n", quote(location)));
    code.push_str("    let root = doc.root();\n\n");
    write_query(&Rust, &mut code, query, "root".to_string(), 1, 0);
    code.push_str("\n    Ok(())\n}");
    code
}
