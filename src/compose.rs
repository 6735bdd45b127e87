//! Composition helpers built on top of [`dedent`](crate::dedent).

use crate::whitespace::dedent;

/// Join `items` with `join_str`.
pub fn conjoin<I, S>(items: I, join_str: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(join_str);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Dedent each blob on its own, then [`conjoin`] the results.
/// Each blob's indentation is measured independently of the others.
pub fn dedent_all<I, S>(texts: I, should_strip: bool, join_str: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    conjoin(
        texts
            .into_iter()
            .map(|text| dedent(text.as_ref(), should_strip)),
        join_str,
    )
}

/// Collapse an indented, wrapped paragraph into a single line.
/// Every line break becomes exactly one space.
pub fn unwrap(text: &str, should_strip: bool) -> String {
    dedent(text, should_strip).replace('\n', " ")
}

/// Variadic form of [`conjoin`](fn@crate::conjoin). Joins with a newline unless
/// `; join_str = ...` is given.
///
/// ```
/// assert_eq!(snick::conjoin!("a", "b"), "a\nb");
/// assert_eq!(snick::conjoin!("x", "y"; join_str = "-"), "x-y");
/// ```
#[macro_export]
macro_rules! conjoin {
    ($($item:expr),+ $(,)? ; join_str = $join:expr $(,)?) => {
        $crate::conjoin([$(::core::convert::AsRef::<str>::as_ref(&$item)),+], $join)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::conjoin([$(::core::convert::AsRef::<str>::as_ref(&$item)),+], "\n")
    };
}

/// Variadic form of [`dedent_all`](fn@crate::dedent_all). Strips and joins with a
/// newline unless `; should_strip = ...` and/or `join_str = ...` are given.
#[macro_export]
macro_rules! dedent_all {
    ($($text:expr),+ $(,)? ; should_strip = $strip:expr, join_str = $join:expr $(,)?) => {
        $crate::dedent_all([$(::core::convert::AsRef::<str>::as_ref(&$text)),+], $strip, $join)
    };
    ($($text:expr),+ $(,)? ; should_strip = $strip:expr $(,)?) => {
        $crate::dedent_all([$(::core::convert::AsRef::<str>::as_ref(&$text)),+], $strip, "\n")
    };
    ($($text:expr),+ $(,)? ; join_str = $join:expr $(,)?) => {
        $crate::dedent_all([$(::core::convert::AsRef::<str>::as_ref(&$text)),+], true, $join)
    };
    ($($text:expr),+ $(,)?) => {
        $crate::dedent_all([$(::core::convert::AsRef::<str>::as_ref(&$text)),+], true, "\n")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjoin_default_newline() {
        let joined = conjoin(
            [
                "Here are some lines",
                "that should be joined",
                "into a single multi-line string",
            ],
            "\n",
        );
        assert_eq!(
            joined,
            dedent(
                "
                Here are some lines
                that should be joined
                into a single multi-line string
                ",
                true
            )
        );
    }

    #[test]
    fn conjoin_custom_separator() {
        assert_eq!(conjoin(["x", "y"], "-"), "x-y");
        assert_eq!(
            conjoin(["Here are some lines", "that should be joined", "with a separator"], " -- "),
            "Here are some lines -- that should be joined -- with a separator"
        );
    }

    #[test]
    fn conjoin_empty_and_single() {
        assert_eq!(conjoin(Vec::<String>::new(), ", "), "");
        assert_eq!(conjoin(["solo"], ", "), "solo");
    }

    #[test]
    fn conjoin_macro_mixes_owned_and_borrowed() {
        let owned = String::from("b");
        assert_eq!(crate::conjoin!("a", owned, format!("c{}", 1)), "a\nb\nc1");
        assert_eq!(crate::conjoin!("x", "y"; join_str = "-"), "x-y");
    }

    #[test]
    fn dedent_all_measures_each_blob() {
        let joined = dedent_all(
            [
                "
                Here is the first blob
                with 16 spaces of indentation
                ",
                "  Here is another single line with 2 spaces of indent.",
                "This line has no indentation.",
            ],
            true,
            "\n",
        );
        assert_eq!(
            joined,
            "Here is the first blob\nwith 16 spaces of indentation\nHere is another single line with 2 spaces of indent.\nThis line has no indentation."
        );
    }

    #[test]
    fn dedent_all_without_strip() {
        let joined = crate::dedent_all!(
            "\n    first\n    blob\n",
            "  second",
            "third\n";
            should_strip = false,
            join_str = "\n\n"
        );
        assert_eq!(joined, "\nfirst\nblob\n\n\nsecond\n\nthird\n");
    }

    #[test]
    fn dedent_all_macro_defaults() {
        assert_eq!(crate::dedent_all!("  a", "\n    b\n"), "a\nb");
        assert_eq!(crate::dedent_all!("  a", "  b"; join_str = "|"), "a|b");
    }

    #[test]
    fn unwrap_paragraph() {
        let text = "
            this is indented text
            it looks nice.
            I would like to remove
            leading space
            when I print it out
        ";
        assert_eq!(
            unwrap(text, true),
            "this is indented text it looks nice. I would like to remove leading space when I print it out"
        );
    }

    #[test]
    fn unwrap_never_leaves_newlines() {
        let out = unwrap("\n  a\n\n  b\n", false);
        assert!(!out.contains('\n'));
        assert_eq!(out, " a  b ");
    }
}
