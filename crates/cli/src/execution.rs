//! crates/cli/src/execution.rs
//!
//! Turns parsed arguments into a signing, digest or verification run.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use checksums::strong::Md5;
use signature::{
    HmacAlgorithm, OutputEncoding, SignRequest, SignatureError, constant_time_eq, sign, verify,
};
use thiserror::Error;

use crate::arguments::ParsedArgs;
use crate::{EXIT_FAILURE, EXIT_MISMATCH, EXIT_SUCCESS, EXIT_USAGE};

/// Failures reported by a run, each mapped to an exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Arguments were well formed but semantically unusable.
    #[error("{0}")]
    Usage(String),
    /// A key or message file could not be read.
    #[error("failed to read {what} from '{}': {source}", path.display())]
    ReadFile {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read message from standard input: {0}")]
    ReadStdin(#[source] io::Error),
    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
    /// Signing or verification failed.
    #[error(transparent)]
    Signature(#[from] SignatureError),
    /// The supplied signature differs from the computed one.
    #[error("signature mismatch")]
    Mismatch,
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_)
            | Self::Signature(
                SignatureError::UnknownAlgorithm(_) | SignatureError::UnknownEncoding(_),
            ) => EXIT_USAGE,
            Self::Mismatch => EXIT_MISMATCH,
            Self::ReadFile { .. }
            | Self::ReadStdin(_)
            | Self::WriteOutput(_)
            | Self::Signature(_) => EXIT_FAILURE,
        }
    }
}

/// Runs the operation described by `parsed`.
pub(crate) fn execute<In, Out>(
    parsed: ParsedArgs,
    stdin: &mut In,
    stdout: &mut Out,
) -> Result<i32, CliError>
where
    In: Read,
    Out: Write,
{
    let algorithm = match parsed.algorithm.as_deref() {
        Some(name) => name.parse::<HmacAlgorithm>()?,
        None => HmacAlgorithm::default(),
    };
    let encoding = match parsed.encoding.as_deref() {
        Some(name) => name.parse::<OutputEncoding>()?,
        None => OutputEncoding::default(),
    };

    if parsed.digest {
        let message = read_message(&parsed, stdin)?;
        let digest = Md5::digest(&message);
        tracing::debug!(target: "cli", message_len = message.len(), "computed MD5 digest");
        return match parsed.verify.as_deref() {
            Some(expected) => {
                let expected = encoding.decode(expected)?;
                report_match(constant_time_eq(&expected, &digest), stdout)
            }
            None => emit(&encoding.encode(&digest), stdout),
        };
    }

    let key = read_key(&parsed)?;
    let message = read_message(&parsed, stdin)?;
    let request = SignRequest::new(&message, &key, algorithm)
        .allow_md5_fallback(parsed.allow_md5_fallback);

    match parsed.verify.as_deref() {
        Some(expected) => report_match(verify(&request, expected, encoding)?, stdout),
        None => {
            let signature = sign(&request)?;
            tracing::info!(
                target: "cli",
                algorithm = %signature.algorithm(),
                backend = %signature.backend(),
                "signed message"
            );
            emit(&signature.encode(encoding), stdout)
        }
    }
}

fn read_message<In: Read>(parsed: &ParsedArgs, stdin: &mut In) -> Result<Vec<u8>, CliError> {
    if let Some(path) = &parsed.message_file {
        return read_file("message", path);
    }
    match parsed.message.as_deref() {
        Some("-") | None => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .map_err(CliError::ReadStdin)?;
            tracing::debug!(target: "cli", len = buffer.len(), "read message from standard input");
            Ok(buffer)
        }
        Some(text) => Ok(text.as_bytes().to_vec()),
    }
}

fn read_key(parsed: &ParsedArgs) -> Result<Vec<u8>, CliError> {
    if let Some(path) = &parsed.key_file {
        return read_file("key", path);
    }
    parsed
        .key
        .as_ref()
        .map(|key| key.as_bytes().to_vec())
        .ok_or_else(|| CliError::Usage("a secret key is required (use --key or --key-file)".into()))
}

fn read_file(what: &'static str, path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::ReadFile {
        what,
        path: path.to_path_buf(),
        source,
    })
}

fn emit<Out: Write>(text: &str, stdout: &mut Out) -> Result<i32, CliError> {
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .map_err(CliError::WriteOutput)?;
    Ok(EXIT_SUCCESS)
}

fn report_match<Out: Write>(matched: bool, stdout: &mut Out) -> Result<i32, CliError> {
    if matched {
        emit("OK", stdout)
    } else {
        Err(CliError::Mismatch)
    }
}
