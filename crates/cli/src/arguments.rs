//! crates/cli/src/arguments.rs
//!
//! Command-line definition and the parsed form consumed by execution.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) algorithm: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) key_file: Option<PathBuf>,
    pub(crate) message: Option<String>,
    pub(crate) message_file: Option<PathBuf>,
    pub(crate) encoding: Option<String>,
    pub(crate) digest: bool,
    pub(crate) verify: Option<String>,
    pub(crate) allow_md5_fallback: bool,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("hmacgen")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("ALG")
                .help("Hash function keying the HMAC.")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .value_name("KEY")
                .help("Secret key as UTF-8 text.")
                .value_parser(value_parser!(String))
                .conflicts_with("key-file"),
        )
        .arg(
            Arg::new("key-file")
                .long("key-file")
                .value_name("FILE")
                .help("Read the secret key bytes from FILE.")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("message-file")
                .long("message-file")
                .short('f')
                .value_name("FILE")
                .help("Read the message bytes from FILE.")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("message"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .value_name("ENC")
                .help("Output encoding: hex or base64.")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("digest")
                .long("digest")
                .help("Print the plain MD5 digest of the message.")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["key", "key-file", "algorithm", "allow-md5-fallback"]),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .value_name("SIG")
                .help("Compare against SIG instead of printing.")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("allow-md5-fallback")
                .long("allow-md5-fallback")
                .help("Permit downgrading to HMAC-MD5 when the primary backend is unavailable.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Report errors only.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Message text, or '-' for standard input.")
                .value_parser(value_parser!(String))
                .index(1),
        )
}

/// Parses `arguments`, the first of which is the program name.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("hmacgen"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        algorithm: matches.remove_one::<String>("algorithm"),
        key: matches.remove_one::<String>("key"),
        key_file: matches.remove_one::<PathBuf>("key-file"),
        message: matches.remove_one::<String>("message"),
        message_file: matches.remove_one::<PathBuf>("message-file"),
        encoding: matches.remove_one::<String>("encoding"),
        digest: matches.get_flag("digest"),
        verify: matches.remove_one::<String>("verify"),
        allow_md5_fallback: matches.get_flag("allow-md5-fallback"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
    })
}
