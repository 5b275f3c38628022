//! Well-known multiformats code names.
//!
//! Naming only: resolving a code to a working hash happens in
//! [`crate::registry`], which binds a subset of these.

use std::borrow::Cow;

pub const DAG_PB: u64 = 0x70;

/// Name of a multihash function code from the multiformats table.
pub fn multihash_name(code: u64) -> Option<Cow<'static, str>> {
    let name = match code {
        0x00 => "identity",
        0x11 => "sha1",
        0x12 => "sha2-256",
        0x13 => "sha2-512",
        0x14 => "sha3-512",
        0x15 => "sha3-384",
        0x16 => "sha3-256",
        0x17 => "sha3-224",
        0x18 => "shake-128",
        0x19 => "shake-256",
        0x1a => "keccak-224",
        0x1b => "keccak-256",
        0x1c => "keccak-384",
        0x1d => "keccak-512",
        0x1e => "blake3",
        0x20 => "sha2-384",
        0x22 => "murmur3-x64-64",
        0x23 => "murmur3-32",
        0x56 => "dbl-sha2-256",
        0xd4 => "md4",
        0xd5 => "md5",
        0x1012 => "sha2-256-trunc254-padded",
        0x1013 => "sha2-224",
        0x1014 => "sha2-512-224",
        0x1015 => "sha2-512-256",
        0x1052 => "ripemd-128",
        0x1053 => "ripemd-160",
        0x1054 => "ripemd-256",
        0x1055 => "ripemd-320",
        0x1100 => "x11",
        0x1d01 => "kangarootwelve",
        0x534d => "sm3-256",
        // blake2b-8 ..= blake2b-512 and blake2s-8 ..= blake2s-256, one code per output byte
        0xb201..=0xb240 => return Some(format!("blake2b-{}", (code - 0xb200) * 8).into()),
        0xb241..=0xb260 => return Some(format!("blake2s-{}", (code - 0xb240) * 8).into()),
        0xb301..=0xb320 => return Some(format!("skein256-{}", (code - 0xb300) * 8).into()),
        0xb321..=0xb360 => return Some(format!("skein512-{}", (code - 0xb320) * 8).into()),
        _ => return None,
    };
    Some(Cow::Borrowed(name))
}

/// Name of a content codec, for diagnostics.
pub fn codec_name(code: u64) -> Option<&'static str> {
    Some(match code {
        0x51 => "cbor",
        0x55 => "raw",
        DAG_PB => "dag-pb",
        0x71 => "dag-cbor",
        0x72 => "libp2p-key",
        0x78 => "git-raw",
        0x85 => "dag-jose",
        0x0129 => "dag-json",
        0x0200 => "json",
        _ => return None,
    })
}
