use std::fmt;

use crate::codes;
use crate::hasher::Hasher;
use crate::{Result, VerifyError};

#[cfg(any(feature = "sha1", feature = "sha2", feature = "sha3", feature = "blake2"))]
use crate::hasher::DigestHasher;

#[cfg(feature = "blake2")]
type Blake2b256 = blake2::Blake2b<blake2::digest::consts::U32>;

/// One bound hash function: multihash code, name, natural digest length and
/// a constructor for a fresh accumulator.
#[derive(Clone, Copy)]
pub struct Algorithm {
    code: u64,
    name: &'static str,
    digest_len: usize,
    new: fn() -> Box<dyn Hasher>,
}

impl Algorithm {
    pub fn code(&self) -> u64 { self.code }

    pub fn name(&self) -> &'static str { self.name }

    pub fn digest_len(&self) -> usize { self.digest_len }

    /// Fresh accumulator, owned by a single verification run.
    pub fn hasher(&self) -> Box<dyn Hasher> { (self.new)() }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("code", &format_args!("{:#x}", self.code))
            .field("name", &self.name)
            .field("digest_len", &self.digest_len)
            .finish()
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool { self.code == other.code }
}

impl Eq for Algorithm {}

static ALGORITHMS: &[Algorithm] = &[
    #[cfg(feature = "sha1")]
    Algorithm { code: 0x11, name: "sha1", digest_len: 20, new: DigestHasher::<sha1::Sha1>::boxed },
    #[cfg(feature = "sha2")]
    Algorithm { code: 0x12, name: "sha2-256", digest_len: 32, new: DigestHasher::<sha2::Sha256>::boxed },
    #[cfg(feature = "sha2")]
    Algorithm { code: 0x13, name: "sha2-512", digest_len: 64, new: DigestHasher::<sha2::Sha512>::boxed },
    #[cfg(feature = "sha2")]
    Algorithm { code: 0x20, name: "sha2-384", digest_len: 48, new: DigestHasher::<sha2::Sha384>::boxed },
    #[cfg(feature = "sha3")]
    Algorithm { code: 0x17, name: "sha3-224", digest_len: 28, new: DigestHasher::<sha3::Sha3_224>::boxed },
    #[cfg(feature = "sha3")]
    Algorithm { code: 0x16, name: "sha3-256", digest_len: 32, new: DigestHasher::<sha3::Sha3_256>::boxed },
    #[cfg(feature = "sha3")]
    Algorithm { code: 0x15, name: "sha3-384", digest_len: 48, new: DigestHasher::<sha3::Sha3_384>::boxed },
    #[cfg(feature = "sha3")]
    Algorithm { code: 0x14, name: "sha3-512", digest_len: 64, new: DigestHasher::<sha3::Sha3_512>::boxed },
    #[cfg(feature = "blake2")]
    Algorithm { code: 0xb220, name: "blake2b-256", digest_len: 32, new: DigestHasher::<Blake2b256>::boxed },
    #[cfg(feature = "blake2")]
    Algorithm { code: 0xb240, name: "blake2b-512", digest_len: 64, new: DigestHasher::<blake2::Blake2b512>::boxed },
    #[cfg(feature = "blake3")]
    Algorithm { code: 0x1e, name: "blake3", digest_len: 32, new: crate::hasher::Blake3Hasher::boxed },
];

/// Every algorithm bound in this build.
pub fn algorithms() -> &'static [Algorithm] { ALGORITHMS }

/// Resolve a multihash code to its bound algorithm.
///
/// Codes outside the table fail with [`VerifyError::UnsupportedAlgorithm`];
/// there is no fallback algorithm.
pub fn resolve(code: u64) -> Result<&'static Algorithm> {
    ALGORITHMS
        .iter()
        .find(|algorithm| algorithm.code == code)
        .ok_or_else(|| VerifyError::UnsupportedAlgorithm {
            code,
            name: codes::multihash_name(code).map(|name| name.into_owned()),
        })
}
