#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `hmacgen` command-line front-end. It signs a message
//! with a secret key, prints the plain MD5 digest of a message, or verifies a
//! previously produced signature.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error. [`run_with_input`] additionally takes the reader used when
//! the message comes from standard input, which keeps the whole flow testable
//! in memory. A [`clap`](https://docs.rs/clap/) builder definition performs
//! parsing; signing is delegated to the [`signature`] crate.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Results are written to stdout followed by a newline. Diagnostics go to
//!   stderr prefixed with `hmacgen: `.
//!
//! # Errors
//!
//! | Exit code | Meaning |
//! |-----------|---------|
//! | [`EXIT_SUCCESS`] | result printed, or the signature matched |
//! | [`EXIT_USAGE`] | invalid arguments |
//! | [`EXIT_FAILURE`] | unreadable input or a signing error |
//! | [`EXIT_MISMATCH`] | the supplied signature did not match |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["hmacgen", "--digest", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"900150983cd24fb0d6963f7d28e17f72\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Read, Write};

use logging::VerbosityConfig;

mod arguments;
mod execution;

use arguments::parse_args;
use execution::{CliError, execute};

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for invalid command-line usage.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for input or signing failures.
pub const EXIT_FAILURE: i32 = 2;
/// Exit code for a verification mismatch.
pub const EXIT_MISMATCH: i32 = 3;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Prefix for every diagnostic written to stderr.
const DIAGNOSTIC_PREFIX: &str = "hmacgen: ";

const VERSION_TEXT: &str = concat!("hmacgen ", env!("CARGO_PKG_VERSION"), "\n");

const HELP_TEXT: &str = concat!(
    "hmacgen ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: hmacgen [OPTIONS] [MESSAGE]\n",
    "\n",
    "Computes an HMAC signature of MESSAGE, or of standard input when MESSAGE\n",
    "is '-' or omitted.\n",
    "\n",
    "Options:\n",
    "  -a, --algorithm ALG     sha1, sha256 (default), sha384, sha512 or md5.\n",
    "  -k, --key KEY           Secret key as UTF-8 text.\n",
    "      --key-file FILE     Read the secret key bytes from FILE.\n",
    "  -f, --message-file FILE Read the message bytes from FILE.\n",
    "  -e, --encoding ENC      Output encoding: hex (default) or base64.\n",
    "      --digest            Print the plain MD5 digest; no key is needed.\n",
    "      --verify SIG        Compare against SIG instead of printing.\n",
    "      --allow-md5-fallback\n",
    "                          Permit downgrading to HMAC-MD5 when the primary\n",
    "                          backend is unavailable.\n",
    "  -v, --verbose           Increase log verbosity (repeatable).\n",
    "  -q, --quiet             Report errors only.\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
    "\n",
    "Exit status: 0 success, 1 usage error, 2 input or signing error,\n",
    "3 signature mismatch. Set HMACGEN_LOG to override the log filter.\n",
);

/// Runs the CLI, reading the message from the process's standard input when
/// required.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    run_with_input(arguments, &mut handle, stdout, stderr)
}

/// Runs the CLI with an explicit standard input reader.
///
/// Returns the process exit code that should be used by the caller.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let rendered = error.to_string();
            let text = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            write_diagnostic(stderr, text.trim_end());
            return EXIT_USAGE;
        }
    };

    if parsed.show_help {
        return write_text(stdout, stderr, HELP_TEXT);
    }
    if parsed.show_version {
        return write_text(stdout, stderr, VERSION_TEXT);
    }

    let verbosity = VerbosityConfig {
        verbose: parsed.verbose,
        quiet: parsed.quiet,
    };
    logging::init_tracing(verbosity);

    match execute(parsed, stdin, stdout) {
        Ok(code) => code,
        Err(error) => report(&error, stderr),
    }
}

/// Converts a numeric exit status into an [`ExitCode`](std::process::ExitCode).
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn report<Err: Write>(error: &CliError, stderr: &mut Err) -> i32 {
    tracing::debug!(target: "cli", ?error, "run failed");
    write_diagnostic(stderr, &error.to_string());
    error.exit_code()
}

fn write_diagnostic<Err: Write>(stderr: &mut Err, text: &str) {
    // Nothing sensible remains if stderr itself is broken.
    let _ = writeln!(stderr, "{DIAGNOSTIC_PREFIX}{text}");
}

fn write_text<Out: Write, Err: Write>(stdout: &mut Out, stderr: &mut Err, text: &str) -> i32 {
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => report(&CliError::WriteOutput(error), stderr),
    }
}
