//! # snick
//!
//! Small, independent helpers for shaping text:
//! - [`dedent`], [`indent`], [`strip_whitespace`], [`strip_ansi_escape_sequences`]
//! - [`conjoin`](fn@conjoin), [`dedent_all`](fn@dedent_all), [`unwrap`] (and the variadic `conjoin!` / `dedent_all!` macros)
//! - [`indent_wrap`] for wrapping that keeps the first line's indentation
//! - [`pretty_format`] / [`pretty_print`] for nested [`Value`] data
//! - [`enboxify`] for drawing a border around a block of text
//!
//! Every helper is pure except the print functions, which write once to their sink.

mod boxed;
mod compose;
mod error;
mod pretty;
mod whitespace;
mod wrap;

pub use boxed::{BoxOptions, enboxify};
pub use compose::{conjoin, dedent_all, unwrap};
pub use error::TextError;
pub use pretty::{FormatOptions, Value, pretty_format, pretty_print, pretty_print_to};
pub use whitespace::{DEFAULT_INDENT, dedent, indent, strip_ansi_escape_sequences, strip_whitespace};
pub use wrap::{DEFAULT_WRAP_WIDTH, WrapOptions, indent_wrap};
