//! Turning an interface body into a declaration.
//!
//! The transformer emits one field per line with no indentation. This module
//! wraps the body as `interface Name { ... }` and indents nested blocks. It
//! only re-indents lines; it is not a general TypeScript formatter.

use crate::config::OutputConfig;

/// Wrap `body` as a named interface declaration, ending with a newline.
pub fn render_interface(name: &str, body: &str, output: &OutputConfig) -> String {
    let keyword = if output.export() {
        "export interface"
    } else {
        "interface"
    };
    format!("{keyword} {name} {}\n", indent(body, output.indent()))
}

/// Indent each line by `width` spaces per open brace.
pub fn indent(body: &str, width: usize) -> String {
    let mut depth = 0usize;
    let mut lines = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.starts_with('}') {
            depth = depth.saturating_sub(1);
        }
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{line}", " ".repeat(depth * width)));
        }
        if line.ends_with('{') {
            depth += 1;
        }
    }
    lines.join("\n")
}
