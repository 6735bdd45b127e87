//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  snick dedent notes.txt              Remove common indentation
  cat para.txt | snick unwrap         Collapse a wrapped paragraph to one line
  snick wrap --width 40 long.txt      Wrap, keeping the first line's indent
  snick box --boxchar '#' msg.txt     Draw a border around the text
  echo '{\"a\": 1}' | snick pretty    Pretty-print JSON data
  snick completions bash              Generate bash completions

ENVIRONMENT:
  SNICK_WRAP_WIDTH     Default width for `wrap` (70)
  SNICK_BOXCHAR        Default border character for `box` (*)
  SNICK_PRETTY_INDENT  Default indent for `pretty` (2)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Dedent, indent, wrap, box and pretty-print text",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Where a command reads its text from.
#[derive(ClapArgs, Debug)]
pub struct Input {
    /// File to read; omit or use '-' for stdin
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove the common leading whitespace from every line
    Dedent {
        /// Keep leading and trailing blank lines
        #[arg(long)]
        no_strip: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Prefix every non-blank line
    Indent {
        /// Text to put in front of each line
        #[arg(short, long, default_value = snick::DEFAULT_INDENT)]
        prefix: String,
        /// Leave the first line as it is
        #[arg(long)]
        skip_first_line: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Dedent, then join all lines with single spaces
    Unwrap {
        /// Keep leading and trailing blank lines
        #[arg(long)]
        no_strip: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Remove every whitespace character
    Strip {
        #[command(flatten)]
        input: Input,
    },
    /// Remove ANSI escape sequences
    StripAnsi {
        #[command(flatten)]
        input: Input,
    },
    /// Wrap text, indenting continuation lines like the first line
    Wrap {
        /// Maximum line width (defaults to SNICK_WRAP_WIDTH or 70)
        #[arg(short, long)]
        width: Option<usize>,
        #[command(flatten)]
        input: Input,
    },
    /// Draw a box around the text
    #[command(name = "box")]
    Enbox {
        /// Border character (defaults to SNICK_BOXCHAR or '*')
        #[arg(long)]
        boxchar: Option<String>,
        /// Spaces between the side borders and the text
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        hspace: i32,
        /// Blank rows between the top/bottom borders and the text
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        vspace: i32,
        /// Keep leading and trailing blank lines
        #[arg(long)]
        no_strip: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Pretty-print JSON, one element per line with trailing commas
    Pretty {
        /// Spaces per nesting level (defaults to SNICK_PRETTY_INDENT or 2)
        #[arg(long)]
        indent: Option<usize>,
        /// Keep containers on one line when they fit this width
        #[arg(long, default_value_t = 1)]
        width: usize,
        #[command(flatten)]
        input: Input,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
