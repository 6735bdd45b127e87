//! Draw a rectangular border around a block of text.

use crate::error::TextError;
use crate::whitespace::dedent;

/// Border and padding settings for [`enboxify`].
///
/// Padding is signed so that a negative request can be reported instead of wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Exactly one character used for every border cell.
    pub boxchar: String,
    /// Spaces between the side borders and the text.
    pub hspace: i32,
    /// Blank rows between the top/bottom borders and the text.
    pub vspace: i32,
    /// Trim leading and trailing whitespace before boxing.
    pub should_strip: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            boxchar: "*".to_string(),
            hspace: 1,
            vspace: 0,
            should_strip: true,
        }
    }
}

/// Dedent `text` and surround it with a border of `options.boxchar`.
///
/// Every row of the result has the same width in chars: the longest line plus the two
/// borders plus `hspace` on each side. Wide characters are counted as one column.
pub fn enboxify(text: &str, options: &BoxOptions) -> Result<String, TextError> {
    let (boxchar, hspace, vspace) = validate(options)?;

    let text = dedent(text, options.should_strip);
    let mut lines: Vec<&str> = Vec::with_capacity(text.lines().count() + 2 * vspace);
    lines.extend(std::iter::repeat_n("", vspace));
    lines.extend(text.split('\n'));
    lines.extend(std::iter::repeat_n("", vspace));

    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = longest + 2 + 2 * hspace;

    let border: String = std::iter::repeat_n(boxchar, box_width).collect();
    let side = " ".repeat(hspace);
    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(border.clone());
    for line in lines {
        let spacer = " ".repeat(longest - line.chars().count());
        rows.push(format!("{boxchar}{side}{line}{spacer}{side}{boxchar}"));
    }
    rows.push(border);
    Ok(rows.join("\n"))
}

fn validate(options: &BoxOptions) -> Result<(char, usize, usize), TextError> {
    let mut chars = options.boxchar.chars();
    let boxchar = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            log::debug!("enboxify rejected boxchar {:?}", options.boxchar);
            return Err(TextError::invalid("boxchar", "must be a single character"));
        }
    };
    let hspace = usize::try_from(options.hspace)
        .map_err(|_| TextError::invalid("hspace", "must be 0 or greater"))?;
    let vspace = usize::try_from(options.vspace)
        .map_err(|_| TextError::invalid("vspace", "must be 0 or greater"))?;
    Ok((boxchar, hspace, vspace))
}
