//! Verify byte streams against self-describing content identifiers.
//!
//! A CID names its content by a multihash: a hash function code plus the
//! digest that function produced. Verification decodes the identifier,
//! resolves the code against a static registry of hash implementations,
//! streams the input through a fresh accumulator and compares digests.
//!
//! # Pipeline
//!
//! Decode ([`ContentId`]) → Resolve ([`registry::resolve`]) → Stream
//! ([`VerifiedReader`]) → Compare ([`Verdict`]). Each step fails fast with a
//! distinct [`VerifyError`]; a digest mismatch is a [`Verdict`], not an error.
//!
//! # Example
//!
//! ```
//! use cidcheck_verify::verify;
//!
//! let cid = "bafkreibm6jg3ux5qumhcn2b3flc3tyu6dmlb4xa7u5bf44yegnrjhc4yeq";
//!
//! assert!(verify(cid, &b"hello"[..]).unwrap().is_match());
//! assert!(!verify(cid, &b"hello\n"[..]).unwrap().is_match());
//! ```

pub use self::error::{ErrorKind, Result, VerifyError};
pub use self::hasher::{DigestHasher, Hasher};
pub use self::identifier::{ContentId, MAX_DIGEST_LEN, Version};
pub use self::reader::{Verdict, VerifiedReader};
pub use self::registry::{Algorithm, algorithms, resolve};
pub use self::verify::{Verification, Verifier, verify};

#[cfg(feature = "blake3")]
pub use self::hasher::Blake3Hasher;

pub mod codes;
pub mod registry;

mod error;
mod hasher;
mod identifier;
mod reader;
mod verify;
