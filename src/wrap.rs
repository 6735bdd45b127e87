//! Word wrapping that keeps the first line's indentation on continuation lines.

use std::sync::OnceLock;

use regex::Regex;
use textwrap::{WordSeparator, WordSplitter, WrapAlgorithm};

/// Column width used when the caller does not pick one.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

static LEADING_INDENT: OnceLock<Regex> = OnceLock::new();

fn leading_indent() -> &'static Regex {
    LEADING_INDENT.get_or_init(|| Regex::new(r"^[ \t]+").expect("indent pattern is valid"))
}

/// Fill options passed through to the wrapping engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum line width in columns.
    pub width: usize,
    /// Prepended to the first output line.
    pub initial_indent: String,
    /// Prepended to every other line. Replaced by the first line's own indent when it has one.
    pub subsequent_indent: String,
    /// Split words longer than the width.
    pub break_long_words: bool,
    /// Allow breaks after hyphens inside words.
    pub break_on_hyphens: bool,
    /// Turn every whitespace character (newlines included) into a space before filling.
    pub replace_whitespace: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WRAP_WIDTH,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            break_long_words: true,
            break_on_hyphens: true,
            replace_whitespace: true,
        }
    }
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Wrap `text` to `options.width`, indenting continuation lines like the first line.
pub fn indent_wrap(text: &str, options: &WrapOptions) -> String {
    if options.width == 0 {
        log::debug!("indent_wrap called with width 0, returning text unwrapped");
        return text.to_string();
    }

    let detected = leading_indent().find(text).map(|m| m.as_str());
    if let Some(indent) = detected {
        log::trace!("indent_wrap: continuation indent {:?} from first line", indent);
    }
    let subsequent_indent = detected.unwrap_or(&options.subsequent_indent);

    let splitter = if options.break_on_hyphens {
        WordSplitter::HyphenSplitter
    } else {
        WordSplitter::NoHyphenation
    };
    let wrap_options = textwrap::Options::new(options.width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .initial_indent(&options.initial_indent)
        .subsequent_indent(subsequent_indent)
        .break_words(options.break_long_words)
        .word_splitter(splitter);

    if options.replace_whitespace {
        // The detected indent is kept verbatim so the first line matches the others.
        let (indent, body) = text.split_at(detected.map_or(0, str::len));
        let flattened: String = indent
            .chars()
            .chain(body.chars().map(|c| if c.is_whitespace() { ' ' } else { c }))
            .collect();
        textwrap::fill(&flattened, wrap_options)
    } else {
        textwrap::fill(text, wrap_options)
    }
}
