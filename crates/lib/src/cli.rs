//! CLI helpers.

pub(crate) mod error;
mod output;
mod stderr_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

pub use self::error::{CliError, LineCol};
pub(self) use self::output::{Output, OutputKind};
use crate::input::IStr;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Name of the program, used in usage messages.
    program: String,
    /// Path to the input file.
    path: PathBuf,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
}

impl Opts {
    /// Parse CLI options from the arguments of the current process.
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(std::env::args_os())
    }

    /// Parse CLI options from the given arguments, the first one being the
    /// name of the program.
    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut it = args.into_iter().map(Into::<OsString>::into);

        let program = it
            .next()
            .as_deref()
            .and_then(program_name)
            .unwrap_or_else(|| String::from("aoc"));

        let mut opts = Self {
            program,
            ..Self::default()
        };

        let mut path = None;
        let mut flags = true;

        for arg in it {
            if flags {
                match arg.to_str() {
                    Some("--") => {
                        flags = false;
                        continue;
                    }
                    Some("--json") => {
                        opts.json = true;
                        continue;
                    }
                    Some("-v" | "--verbose") => {
                        opts.verbose = true;
                        continue;
                    }
                    Some(other) if other.starts_with('-') && other != "-" => {
                        return Err(CliError::Unsupported {
                            program: opts.program,
                            arg: other.to_owned(),
                        });
                    }
                    _ => {}
                }
            }

            if path.is_some() {
                return Err(CliError::Unsupported {
                    program: opts.program,
                    arg: arg.to_string_lossy().into_owned(),
                });
            }

            path = Some(PathBuf::from(arg));
        }

        let Some(path) = path else {
            return Err(CliError::Usage {
                program: opts.program,
            });
        };

        opts.path = path;
        Ok(opts)
    }

    /// The path of the input file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Test if options are verbose.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Test if `--json` appears among the flags of the given arguments, used to
/// report option errors in the requested format.
fn json_requested<I>(args: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    for arg in args.into_iter().skip(1) {
        let arg = arg.as_ref();

        if arg == "--" {
            break;
        }

        if arg == "--json" {
            return true;
        }
    }

    false
}

fn program_name(arg: &OsStr) -> Option<String> {
    let stem = Path::new(arg).file_stem()?;
    Some(stem.to_string_lossy().into_owned())
}

/// Run a solver as the main function of a binary.
///
/// This parses options, reads the input file, solves it and prints the
/// answers to both parts. Errors are reported with the path and position of
/// the input which caused them and result in a non-zero exit status.
pub fn main<F, A, B, E>(solve: F) -> ExitCode
where
    F: FnOnce(IStr) -> Result<(A, B), E>,
    A: fmt::Display + Serialize,
    B: fmt::Display + Serialize,
    anyhow::Error: From<E>,
{
    let opts = match Opts::parse() {
        Ok(opts) => opts,
        Err(error) => {
            if json_requested(std::env::args_os()) {
                let stdout = std::io::stdout();
                let stderr = std::io::stderr();
                let mut o = Output::new(stdout.lock(), stderr.lock(), OutputKind::Json);

                if let Err(e) = o.error(&error) {
                    eprintln!("error: {e}");
                }
            } else {
                eprintln!("{error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if !opts.json {
        if let Err(error) = log::set_logger(&STDERR_LOGGER) {
            eprintln!("failed to set log: {error}");
        }

        log::set_max_level(if opts.is_verbose() {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut o = Output::new(stdout.lock(), stderr.lock(), opts.output_kind());

    let result = match run(&opts, solve) {
        Ok((part1, part2)) => o.answer(&part1, &part2),
        Err(error) => {
            if let Err(e) = o.error(format_args!("{error:#}")) {
                eprintln!("error: {e}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run<F, O, E>(opts: &Opts, solve: F) -> Result<O>
where
    F: FnOnce(IStr) -> Result<O, E>,
    anyhow::Error: From<E>,
{
    let input = crate::source::input(&opts.path)?;

    log::debug!(
        "{path}: read {len} bytes",
        path = opts.path.display(),
        len = input.len()
    );

    let start = Instant::now();

    let output = match solve(input) {
        Ok(output) => output,
        Err(error) => return Err(error::error_context(&opts.path, input, error)),
    };

    log::debug!("solved in {:?}", start.elapsed());
    Ok(output)
}
