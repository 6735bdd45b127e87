//! Whitespace normalization: dedent, indent, and whitespace/escape stripping.

use std::sync::OnceLock;

use regex::Regex;

/// Prefix used by [`indent`] callers that have no preference.
pub const DEFAULT_INDENT: &str = "    ";

/// CSI sequences (colours, cursor movement), OSC sequences terminated by BEL or ST,
/// then any remaining two-character `ESC x` sequence.
const ANSI_ESCAPE_PATTERN: &str =
    r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]";

static ANSI_ESCAPE: OnceLock<Regex> = OnceLock::new();

fn ansi_escape() -> &'static Regex {
    ANSI_ESCAPE.get_or_init(|| {
        Regex::new(ANSI_ESCAPE_PATTERN).expect("ANSI escape pattern is valid")
    })
}

/// Remove the longest leading whitespace run shared by every non-blank line.
///
/// Whitespace-only lines do not take part in finding the margin and come out
/// empty, so blank lines never carry trailing whitespace. With `should_strip`,
/// leading and trailing whitespace of the whole result is trimmed, so text can
/// start on the line after an opening delimiter.
pub fn dedent(text: &str, should_strip: bool) -> String {
    let margin = common_margin(text);
    let dedented = text
        .split('\n')
        .map(|line| {
            if line.trim_start_matches([' ', '\t']).is_empty() {
                ""
            } else {
                &line[common_prefix(line, margin).len()..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    if should_strip {
        dedented.trim().to_string()
    } else {
        dedented
    }
}

/// Prepend `prefix` to every line that has non-whitespace content.
/// Blank lines stay blank. With `skip_first_line`, the first line is left untouched
/// (for text embedded after existing content on the same line).
pub fn indent(text: &str, prefix: &str, skip_first_line: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let skip = idx == 0 && skip_first_line;
        if !skip && !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}

/// Remove every whitespace character, wherever it appears.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove ANSI escape sequences (colours, hyperlinks, titles) and keep the printable text.
pub fn strip_ansi_escape_sequences(text: &str) -> String {
    ansi_escape().replace_all(text, "").into_owned()
}

/// Leading spaces and tabs of a line.
fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

/// Longest common string prefix of the leading runs of all non-blank lines.
fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;
    for line in text.split('\n').filter(|line| !line.trim().is_empty()) {
        let lead = leading_whitespace(line);
        let next = match margin {
            None => lead,
            Some(current) => common_prefix(current, lead),
        };
        if next.is_empty() {
            return "";
        }
        margin = Some(next);
    }
    margin.unwrap_or("")
}

/// Byte-wise common prefix. One side is always a run of ASCII spaces/tabs,
/// so the cut lands on a char boundary of `a`.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedent_removes_common_margin_and_strips() {
        assert_eq!(dedent("\n    a\n    b\n", true), "a\nb");
    }

    #[test]
    fn dedent_triple_quoted_block() {
        let text = "
            this is indented text
            it looks nice.
            I would like to remove
            leading space
            when I print it out
        ";
        assert_eq!(
            dedent(text, true),
            "this is indented text\nit looks nice.\nI would like to remove\nleading space\nwhen I print it out"
        );
    }

    #[test]
    fn dedent_without_strip_keeps_outer_newlines() {
        let text = "\n        first\n        second\n    ";
        assert_eq!(dedent(text, false), "\nfirst\nsecond\n");
    }

    #[test]
    fn dedent_keeps_relative_indentation() {
        assert_eq!(dedent("  a\n    b\n  c", true), "a\n  b\nc");
    }

    #[test]
    fn dedent_no_common_margin_is_unchanged() {
        let text = "a\n    b";
        assert_eq!(dedent(text, false), text);
    }

    #[test]
    fn dedent_blank_lines_do_not_limit_margin() {
        assert_eq!(dedent("    a\n\n  \n    b", false), "a\n\n\nb");
    }

    #[test]
    fn dedent_empties_whitespace_only_lines() {
        assert_eq!(dedent("  a\n      \n  b", false), "a\n\nb");
        assert_eq!(dedent("  a\n      \nb", false), "  a\n\nb");
        assert_eq!(dedent("x\n \t \ny", false), "x\n\ny");
    }

    #[test]
    fn dedent_tab_does_not_match_space() {
        let text = "\tx\n    y";
        assert_eq!(dedent(text, false), text);
    }

    #[test]
    fn dedent_is_idempotent() {
        let text = "\n      one\n        two\n      three\n";
        let once = dedent(text, true);
        assert_eq!(dedent(&once, true), once);
    }

    #[test]
    fn indent_skips_blank_lines() {
        let text = "this is non-indented text\nit looks nice.\n\nbut it has blank lines\n\nthose should not be indented";
        assert_eq!(
            indent(text, DEFAULT_INDENT, false),
            "    this is non-indented text\n    it looks nice.\n\n    but it has blank lines\n\n    those should not be indented"
        );
    }

    #[test]
    fn indent_leaves_whitespace_only_lines_alone() {
        assert_eq!(indent("a\n  \nb\n", "> ", false), "> a\n  \n> b\n");
    }

    #[test]
    fn indent_skip_first_line() {
        let text = "    this is partially-indented text.\nthe first line is already indented.\nonly the remaining lines.";
        assert_eq!(
            indent(text, DEFAULT_INDENT, true),
            "    this is partially-indented text.\n    the first line is already indented.\n    only the remaining lines."
        );
    }

    #[test]
    fn indent_skip_first_line_single_line() {
        assert_eq!(indent("only", "--", true), "only");
    }

    #[test]
    fn indent_then_dedent_round_trips() {
        let text = "alpha\nbeta\n\ngamma";
        assert_eq!(dedent(&indent(text, "\t", false), false), text);
    }

    #[test]
    fn strip_whitespace_all_kinds() {
        assert_eq!(strip_whitespace("a b\tc\nd"), "abcd");
        let text = "
            here is a string with a bundle of
            different \t kinds of whitespace.
        ";
        assert_eq!(
            strip_whitespace(text),
            "hereisastringwithabundleofdifferentkindsofwhitespace."
        );
    }

    #[test]
    fn strip_ansi_colour_codes() {
        assert_eq!(
            strip_ansi_escape_sequences("\x1b[1;31mred\x1b[0m plain"),
            "red plain"
        );
    }

    #[test]
    fn strip_ansi_hyperlink_and_title() {
        let text = "\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\ \x1b]0;title\x07done";
        assert_eq!(strip_ansi_escape_sequences(text), "link done");
    }

    #[test]
    fn strip_ansi_leaves_plain_text() {
        assert_eq!(strip_ansi_escape_sequences("no [escapes] here"), "no [escapes] here");
    }
}
