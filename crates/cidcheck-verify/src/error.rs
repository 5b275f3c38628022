use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("{reason}")]
    MalformedIdentifier { reason: String },

    #[error("{0}")]
    UnresolvedMultihash(#[source] multihash::Error),

    #[error("{}", describe_unsupported(.code, .name))]
    UnsupportedAlgorithm { code: u64, name: Option<String> },

    #[error(transparent)]
    InputRead(#[from] io::Error),
}

/// Fieldless mirror of [`VerifyError`] for matching on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedIdentifier,
    UnresolvedMultihash,
    UnsupportedAlgorithm,
    InputRead,
}

impl VerifyError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedIdentifier { .. } => ErrorKind::MalformedIdentifier,
            Self::UnresolvedMultihash(_) => ErrorKind::UnresolvedMultihash,
            Self::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            Self::InputRead(_) => ErrorKind::InputRead,
        }
    }
}

fn describe_unsupported(code: &u64, name: &Option<String>) -> String {
    match name {
        Some(name) => format!("unsupported hash function: {name}"),
        None => format!("unknown multihash code: {code:#x}"),
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
