use std::io::{self, Read};

use crate::registry::{self, Algorithm};
use crate::{ContentId, Result, Verdict, VerifiedReader};

/// A decoded identifier with its hash function resolved, ready to check input.
#[derive(Debug, Clone)]
pub struct Verifier {
    cid: ContentId,
    algorithm: &'static Algorithm,
}

/// Result of one completed verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub verdict: Verdict,
    pub algorithm: &'static str,
    pub bytes_read: u64,
}

impl Verification {
    pub fn is_match(&self) -> bool { self.verdict.is_match() }
}

impl Verifier {
    /// Resolve the identifier's hash function. Fails before any input is read.
    pub fn new(cid: ContentId) -> Result<Self> {
        let algorithm = registry::resolve(cid.hash_code())?;
        if cid.digest().len() != algorithm.digest_len() {
            tracing::debug!(
                algorithm = algorithm.name(),
                expected = algorithm.digest_len(),
                actual = cid.digest().len(),
                "embedded digest length differs from algorithm output"
            );
        }
        Ok(Self { cid, algorithm })
    }

    pub fn parse(identifier: &str) -> Result<Self> {
        let cid = ContentId::parse(identifier)?;
        tracing::debug!(
            version = ?cid.version(),
            codec = cid.codec_name().unwrap_or("unknown"),
            hash_code = cid.hash_code(),
            "decoded identifier"
        );
        Self::new(cid)
    }

    pub fn cid(&self) -> &ContentId { &self.cid }

    pub fn algorithm(&self) -> &'static Algorithm { self.algorithm }

    /// Hash `input` to exhaustion and compare with the embedded digest.
    pub fn verify<R: Read>(&self, input: R) -> Result<Verification> {
        let mut reader = VerifiedReader::new(input, self.algorithm.hasher());
        io::copy(&mut reader, &mut io::sink())?;

        let bytes_read = reader.bytes_read();
        let verdict = reader.finish(self.cid.digest());
        tracing::debug!(
            algorithm = self.algorithm.name(),
            bytes_read,
            matched = verdict.is_match(),
            "verification finished"
        );

        Ok(Verification {
            verdict,
            algorithm: self.algorithm.name(),
            bytes_read,
        })
    }
}

/// Decode `identifier`, resolve its hash function and check `input` against it.
pub fn verify<R: Read>(identifier: &str, input: R) -> Result<Verification> {
    Verifier::parse(identifier)?.verify(input)
}
