//! Command dispatch: logger init, input reading, and one handler per subcommand.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use snick::{BoxOptions, FormatOptions, Value, WrapOptions};

use crate::cli::{self, Args, Commands, Input};
use crate::config::Config;

/// Initialize env_logger on stderr so it never mixes with command output.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the selected subcommand, writing its result to stdout.
pub fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match &args.command {
        Commands::Dedent { no_strip, input } => {
            emit(&snick::dedent(&read_input(input)?, !no_strip))?;
        }
        Commands::Indent {
            prefix,
            skip_first_line,
            input,
        } => {
            emit(&snick::indent(&read_input(input)?, prefix, *skip_first_line))?;
        }
        Commands::Unwrap { no_strip, input } => {
            emit(&snick::unwrap(&read_input(input)?, !no_strip))?;
        }
        Commands::Strip { input } => {
            emit(&snick::strip_whitespace(&read_input(input)?))?;
        }
        Commands::StripAnsi { input } => {
            emit(&snick::strip_ansi_escape_sequences(&read_input(input)?))?;
        }
        Commands::Wrap { width, input } => {
            let options = WrapOptions::new(width.unwrap_or(config.wrap_width));
            emit(&snick::indent_wrap(&read_input(input)?, &options))?;
        }
        Commands::Enbox {
            boxchar,
            hspace,
            vspace,
            no_strip,
            input,
        } => {
            let options = BoxOptions {
                boxchar: boxchar.clone().unwrap_or_else(|| config.boxchar.clone()),
                hspace: *hspace,
                vspace: *vspace,
                should_strip: !no_strip,
            };
            emit(&snick::enboxify(&read_input(input)?, &options)?)?;
        }
        Commands::Pretty {
            indent,
            width,
            input,
        } => {
            let json: serde_json::Value = serde_json::from_str(&read_input(input)?)?;
            let options = FormatOptions {
                indent: indent.unwrap_or(config.pretty_indent),
                width: *width,
            };
            snick::pretty_print(&Value::from(json), &options)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(*shell, &mut cmd, name, &mut io::stdout());
        }
    }
    Ok(())
}

/// Read the whole input from the named file, or stdin for none / "-".
fn read_input(input: &Input) -> io::Result<String> {
    match input.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading input from {}", path.display());
            fs::read_to_string(path)
        }
        _ => io::read_to_string(io::stdin()),
    }
}

/// Write `text` to stdout, newline-terminated.
fn emit(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
