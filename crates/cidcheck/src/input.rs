use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use cidcheck_verify::VerifyError;

/// Sentinel argument selecting standard input.
pub const STDIN: &str = "-";

/// Where the bytes to verify come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Open the source. A file that cannot be opened is an input read failure.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path)
                    .map_err(VerifyError::from)
                    .with_context(|| format!("error opening {}", path.display()))?;
                tracing::debug!(path = %path.display(), "opened input");
                Ok(Box::new(file))
            }
        }
    }
}

impl FromStr for Input {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == STDIN { Input::Stdin } else { Input::File(PathBuf::from(s)) })
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidcheck_verify::ErrorKind;

    #[test]
    fn dash_selects_stdin() {
        assert_eq!("-".parse::<Input>().unwrap(), Input::Stdin);
        assert_eq!("./-".parse::<Input>().unwrap(), Input::File(PathBuf::from("./-")));
    }

    #[test]
    fn missing_file_is_input_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.bin");

        let err = Input::File(path.clone()).open().err().unwrap();
        let cause = err.downcast_ref::<VerifyError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::InputRead);
        assert!(format!("{err:#}").starts_with(&format!("error opening {}: ", path.display())));
    }

    #[test]
    fn existing_file_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"hello").unwrap();

        let mut buf = Vec::new();
        Input::File(path).open().unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"hello");
    }
}
