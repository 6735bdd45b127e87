//! Pretty printing of nested data: one element per line, trailing commas, stable output.

mod value;


use std::io::{self, Write};

pub use value::Value;

/// Layout options for [`pretty_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// A container stays on one line only if it fits within this many columns.
    /// `1` expands every non-empty container.
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            width: 1,
        }
    }
}

/// Render `data` as deterministic, indented text.
pub fn pretty_format(data: &Value, options: &FormatOptions) -> String {
    let mut out = String::new();
    Layout { options }.write(&mut out, data, 0, 0, 0);
    out
}

/// Write the [`pretty_format`] rendering plus a newline to stdout.
pub fn pretty_print(data: &Value, options: &FormatOptions) -> io::Result<()> {
    pretty_print_to(&mut io::stdout().lock(), data, options)
}

/// Write the [`pretty_format`] rendering plus a newline to `stream` in one `write_all`.
pub fn pretty_print_to<W: Write + ?Sized>(
    stream: &mut W,
    data: &Value,
    options: &FormatOptions,
) -> io::Result<()> {
    let mut rendered = pretty_format(data, options);
    rendered.push('\n');
    stream.write_all(rendered.as_bytes())
}

struct Layout<'a> {
    options: &'a FormatOptions,
}

impl Layout<'_> {
    /// `column` is where the value starts on its first line; `suffix` is the width of
    /// what follows it on that line (the element comma).
    fn write(&self, out: &mut String, value: &Value, depth: usize, column: usize, suffix: usize) {
        if !value.is_expandable() || self.fits(value, column + suffix) {
            out.push_str(&value.to_string());
            return;
        }

        let pad = " ".repeat(self.options.indent * (depth + 1));
        match value {
            Value::Seq(items) => {
                out.push_str("[\n");
                for item in items {
                    out.push_str(&pad);
                    self.write(out, item, depth + 1, pad.len(), 1);
                    out.push_str(",\n");
                }
                self.close(out, depth, ']');
            }
            Value::Map(entries) => {
                out.push_str("{\n");
                for (key, item) in entries {
                    let key = format!("{}: ", key);
                    out.push_str(&pad);
                    out.push_str(&key);
                    self.write(out, item, depth + 1, pad.len() + key.chars().count(), 1);
                    out.push_str(",\n");
                }
                self.close(out, depth, '}');
            }
            _ => out.push_str(&value.to_string()),
        }
    }

    fn close(&self, out: &mut String, depth: usize, bracket: char) {
        out.push_str(&" ".repeat(self.options.indent * depth));
        out.push(bracket);
    }

    fn fits(&self, value: &Value, column: usize) -> bool {
        if column >= self.options.width {
            return false;
        }
        column + value.to_string().chars().count() <= self.options.width
    }
}
