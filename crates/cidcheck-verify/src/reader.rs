use std::io::{self, Read};

use subtle::ConstantTimeEq;

use crate::Hasher;

/// Outcome of comparing a computed digest against the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch { expected: Vec<u8>, actual: Vec<u8> },
}

impl Verdict {
    /// Constant-time over equal lengths; a length difference is a mismatch.
    pub fn compare(expected: &[u8], actual: Vec<u8>) -> Self {
        if bool::from(expected.ct_eq(actual.as_slice())) {
            Verdict::Match
        } else {
            Verdict::Mismatch {
                expected: expected.to_vec(),
                actual,
            }
        }
    }

    pub fn is_match(&self) -> bool { matches!(self, Verdict::Match) }
}

/// Streaming reader that hashes data as it passes through.
/// Wraps any `Read` source.
pub struct VerifiedReader<R> {
    reader: R,
    hasher: Box<dyn Hasher>,
    bytes_read: u64,
}

impl<R> VerifiedReader<R> {
    pub fn new(reader: R, hasher: Box<dyn Hasher>) -> Self {
        Self {
            reader,
            hasher,
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 { self.bytes_read }

    /// Finalize the accumulator and compare against `expected`.
    pub fn finish(self, expected: &[u8]) -> Verdict {
        Verdict::compare(expected, self.hasher.finalize())
    }
}

impl<R: Read> Read for VerifiedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes_read += n as u64;
            tracing::trace!(n, total = self.bytes_read, "hashed chunk");
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[cfg(feature = "sha2")]
    use crate::DigestHasher;

    #[cfg(feature = "sha2")]
    #[test]
    fn test_verified_reader_success() {
        let data = b"test data for verification";
        let expected = DigestHasher::<sha2::Sha256>::digest(data);

        let mut verified = VerifiedReader::new(Cursor::new(data), DigestHasher::<sha2::Sha256>::boxed());
        io::copy(&mut verified, &mut io::sink()).unwrap();

        assert_eq!(verified.bytes_read(), data.len() as u64);
        assert!(verified.finish(&expected).is_match());
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_verified_reader_hash_mismatch() {
        let mut verified = VerifiedReader::new(Cursor::new(b"test data"), DigestHasher::<sha2::Sha256>::boxed());
        io::copy(&mut verified, &mut io::sink()).unwrap();

        let wrong_hash = vec![0; 32];
        match verified.finish(&wrong_hash) {
            Verdict::Mismatch { expected, actual } => {
                assert_eq!(expected, vec![0; 32]);
                assert_ne!(actual, vec![0; 32]);
            }
            Verdict::Match => panic!("Expected Mismatch verdict"),
        }
    }

    #[test]
    fn test_length_difference_is_mismatch() {
        assert!(!Verdict::compare(&[1, 2, 3], vec![1, 2, 3, 4]).is_match());
        assert!(!Verdict::compare(&[], vec![0]).is_match());
        assert!(Verdict::compare(&[7, 7], vec![7, 7]).is_match());
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_read_errors_propagate() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream abandoned"))
            }
        }

        let mut verified = VerifiedReader::new(Broken, DigestHasher::<sha2::Sha256>::boxed());
        let err = io::copy(&mut verified, &mut io::sink()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(verified.bytes_read(), 0);
    }
}
