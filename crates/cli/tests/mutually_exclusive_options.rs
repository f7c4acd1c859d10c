//! Tests for mutually exclusive option validation.
//!
//! Conflicting sources for the key or the message, and signing options used
//! together with `--digest`, are usage errors.

use cli::{EXIT_USAGE, run_with_input};

fn usage_error(args: &[&str]) -> String {
    let mut stdin: &[u8] = b"";
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut stdout, &mut stderr);
    assert_eq!(code, EXIT_USAGE, "{args:?} should be rejected");
    assert!(stdout.is_empty());
    String::from_utf8(stderr).expect("utf-8 stderr")
}

#[test]
fn test_key_and_key_file_conflict() {
    let stderr = usage_error(&["hmacgen", "--key", "k", "--key-file", "path", "msg"]);
    assert!(stderr.starts_with("hmacgen: "));
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn test_message_operand_and_message_file_conflict() {
    let stderr = usage_error(&["hmacgen", "-k", "k", "--message-file", "path", "msg"]);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn test_digest_and_key_conflict() {
    usage_error(&["hmacgen", "--digest", "--key", "k", "msg"]);
}

#[test]
fn test_digest_and_algorithm_conflict() {
    usage_error(&["hmacgen", "--digest", "-a", "sha1", "msg"]);
}

#[test]
fn test_digest_and_fallback_conflict() {
    usage_error(&["hmacgen", "--digest", "--allow-md5-fallback", "msg"]);
}
