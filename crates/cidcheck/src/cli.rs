use std::io::Write;

use anyhow::{Context, Result};
use cidcheck_verify::{ContentId, ErrorKind, Verdict, Verifier, algorithms};
use clap::Parser;

use crate::input::Input;

#[derive(Clone, Debug, Parser)]
#[command(name = "cidcheck", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Content identifier the input must hash to
    #[arg(required_unless_present = "list")]
    pub cid: Option<String>,

    /// File to verify, or `-` for standard input
    #[arg(required_unless_present = "list")]
    pub input: Option<Input>,

    /// Do not print anything on success
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the supported hash functions and exit
    #[arg(long, exclusive = true)]
    pub list: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("hash mismatch")]
pub struct HashMismatch {
    pub expected: Vec<u8>,
    pub actual: Vec<u8>,
}

impl App {
    /// Run the command, writing success output to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        if self.list {
            return list(out);
        }

        let (Some(cid), Some(input)) = (&self.cid, &self.input) else {
            anyhow::bail!("usage: cidcheck [-q] <cid> {{<file>|-}}");
        };

        let content_id = ContentId::parse(cid).map_err(|err| match err.kind() {
            ErrorKind::UnresolvedMultihash => anyhow::Error::new(err).context("error decoding multihash"),
            _ => anyhow::Error::new(err).context(format!("error decoding cid {cid}")),
        })?;
        let verifier = Verifier::new(content_id).context("error creating hash")?;

        let reader = input.open()?;
        let verification = verifier.verify(reader).context("error hashing input")?;
        tracing::info!(
            %input,
            algorithm = verification.algorithm,
            bytes = verification.bytes_read,
            matched = verification.is_match(),
            "checked"
        );

        if let Verdict::Mismatch { expected, actual } = verification.verdict {
            return Err(HashMismatch { expected, actual }.into());
        }

        if !self.quiet {
            writeln!(out, "OK")?;
        }
        Ok(())
    }
}

fn list(out: &mut dyn Write) -> Result<()> {
    for algorithm in algorithms() {
        writeln!(out, "{:#06x} {:<12} {}", algorithm.code(), algorithm.name(), algorithm.digest_len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidcheck_verify::VerifyError;

    const HELLO: &str = "bafkreibm6jg3ux5qumhcn2b3flc3tyu6dmlb4xa7u5bf44yegnrjhc4yeq";

    fn app(args: &[&str]) -> App { App::try_parse_from(std::iter::once("cidcheck").chain(args.iter().copied())).unwrap() }

    fn write_file(dir: &tempfile::TempDir, contents: &[u8]) -> String {
        let path = dir.path().join("input.bin");
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn parses_positionals_and_quiet() {
        let parsed = app(&["-q", HELLO, "-"]);
        assert!(parsed.quiet);
        assert_eq!(parsed.cid.as_deref(), Some(HELLO));
        assert_eq!(parsed.input, Some(Input::Stdin));
    }

    #[test]
    fn requires_both_positionals() {
        let args = ["cidcheck", HELLO];
        assert!(App::try_parse_from(args).is_err());
    }

    #[test]
    fn list_excludes_positionals() {
        assert!(App::try_parse_from(["cidcheck", "--list", HELLO, "-"]).is_err());
        assert!(app(&["--list"]).list);
    }

    #[test]
    fn match_prints_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, b"hello");

        let mut out = Vec::new();
        app(&[HELLO, &path]).run(&mut out).unwrap();
        assert_eq!(out, b"OK\n");
    }

    #[test]
    fn quiet_match_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, b"hello");

        let mut out = Vec::new();
        app(&["-q", HELLO, &path]).run(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn mismatch_is_reported_as_hash_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, b"hello\n");

        let mut out = Vec::new();
        let err = app(&[HELLO, &path]).run(&mut out).unwrap_err();
        assert!(err.downcast_ref::<HashMismatch>().is_some());
        assert_eq!(format!("{err:#}"), "hash mismatch");
        assert!(out.is_empty());
    }

    #[test]
    fn decode_errors_carry_the_cid() {
        let mut out = Vec::new();
        let err = app(&["!nope", "-"]).run(&mut out).unwrap_err();
        assert!(format!("{err:#}").starts_with("error decoding cid !nope: "));
        assert_eq!(err.downcast_ref::<VerifyError>().unwrap().kind(), ErrorKind::MalformedIdentifier);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let mut out = Vec::new();
        let err = app(&[HELLO, &path.to_string_lossy()]).run(&mut out).unwrap_err();
        assert_eq!(err.downcast_ref::<VerifyError>().unwrap().kind(), ErrorKind::InputRead);
        assert!(err.downcast_ref::<HashMismatch>().is_none());
    }

    #[test]
    fn list_prints_bound_algorithms() {
        let mut out = Vec::new();
        app(&["--list"]).run(&mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        assert_eq!(listing.lines().count(), algorithms().len());
        assert!(listing.contains("0x0012 sha2-256"));
    }
}
