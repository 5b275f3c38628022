//! Content identifier decoding.
//!
//! Accepts CIDv0 (bare base58btc multihash, `Qm...`) and CIDv1
//! (`<multibase>(varint version, varint codec, multihash)`). Decoding is
//! all-or-nothing: a [`ContentId`] only exists once the embedded multihash
//! has been fully read.

use std::str::FromStr;

use multibase::Base;
use multihash::Multihash;

use crate::codes;
use crate::{Result, VerifyError};

/// Largest digest a multihash may carry here; covers every 512-bit function.
pub const MAX_DIGEST_LEN: usize = 64;

const CIDV0_STR_LEN: usize = 46;
const CIDV0_BIN_LEN: usize = 34;
const SHA2_256: u64 = 0x12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V0,
    V1,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentId {
    version: Version,
    codec: u64,
    hash: Multihash<MAX_DIGEST_LEN>,
}

impl ContentId {
    /// Decode the string form of a content identifier.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VerifyError::malformed("empty identifier"));
        }

        if s.len() == CIDV0_STR_LEN && s.starts_with("Qm") {
            let bytes = Base::Base58Btc
                .decode(s)
                .map_err(|e| VerifyError::malformed(format!("invalid base58btc: {e}")))?;
            return Self::v0(&bytes);
        }

        let (base, bytes) =
            multibase::decode(s).map_err(|e| VerifyError::malformed(e.to_string()))?;
        tracing::trace!(?base, len = bytes.len(), "multibase decoded");
        Self::from_bytes(&bytes)
    }

    /// Decode the binary form of a content identifier.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() == CIDV0_BIN_LEN && bytes[0] == SHA2_256 as u8 && bytes[1] == 0x20 {
            return Self::v0(bytes);
        }

        let (version, rest) = read_varint(bytes, "version")?;
        match version {
            1 => {}
            0 => return Err(VerifyError::malformed("explicit version 0 is not allowed")),
            v => return Err(VerifyError::malformed(format!("invalid cid version {v}"))),
        }

        let (codec, rest) = read_varint(rest, "codec")?;
        if rest.is_empty() {
            return Err(VerifyError::malformed("missing multihash"));
        }

        Ok(Self {
            version: Version::V1,
            codec,
            hash: read_multihash(rest)?,
        })
    }

    fn v0(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            version: Version::V0,
            codec: codes::DAG_PB,
            hash: read_multihash(bytes)?,
        })
    }

    pub fn version(&self) -> Version { self.version }

    pub fn codec(&self) -> u64 { self.codec }

    pub fn codec_name(&self) -> Option<&'static str> { codes::codec_name(self.codec) }

    pub fn hash(&self) -> &Multihash<MAX_DIGEST_LEN> { &self.hash }

    /// Multihash function code of the embedded digest.
    pub fn hash_code(&self) -> u64 { self.hash.code() }

    /// Digest bytes the content must hash to.
    pub fn digest(&self) -> &[u8] { self.hash.digest() }
}

impl FromStr for ContentId {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

fn read_varint<'a>(bytes: &'a [u8], field: &str) -> Result<(u64, &'a [u8])> {
    unsigned_varint::decode::u64(bytes)
        .map_err(|e| VerifyError::malformed(format!("invalid {field} varint: {e}")))
}

fn read_multihash(bytes: &[u8]) -> Result<Multihash<MAX_DIGEST_LEN>> {
    Multihash::from_bytes(bytes).map_err(VerifyError::UnresolvedMultihash)
}
