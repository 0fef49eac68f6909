//! Hash-algorithm dispatch.
//!
//! The signature verification engine needs to hash arbitrary byte
//! sequences with whichever algorithm a signature names. The teacher this
//! crate is derived from solves the same problem by boxing a trait
//! object (`Box<dyn nettle::Hash>`) selected at runtime by
//! `HashAlgorithm::context()`; this crate does the same thing, but
//! selects among concrete RustCrypto hashers (its `crypto-rust` backend)
//! instead of linking against nettle, since this crate has no other need
//! for a C FFI boundary.

use digest::Digest;
use sha1collisiondetection::Sha1CD;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::{Error, Result};
use crate::types::HashAlgorithm;

/// A hash computation in progress, over one of the five hash algorithms
/// this crate supports.
pub enum HashContext {
    /// SHA-1 (collision-detecting implementation).
    Sha1(Box<Sha1CD>),
    /// SHA-224.
    Sha224(Box<Sha224>),
    /// SHA-256.
    Sha256(Box<Sha256>),
    /// SHA-384.
    Sha384(Box<Sha384>),
    /// SHA-512.
    Sha512(Box<Sha512>),
}

impl HashContext {
    /// Builds a context for `algo`. Fails with
    /// [`Error::UnsupportedHashAlgorithm`] for anything other than the
    /// five algorithms named above.
    pub fn new(algo: HashAlgorithm) -> Result<Self> {
        Ok(match algo {
            HashAlgorithm::SHA1 => HashContext::Sha1(Box::new(Sha1CD::new())),
            HashAlgorithm::SHA224 => HashContext::Sha224(Box::new(Sha224::new())),
            HashAlgorithm::SHA256 => HashContext::Sha256(Box::new(Sha256::new())),
            HashAlgorithm::SHA384 => HashContext::Sha384(Box::new(Sha384::new())),
            HashAlgorithm::SHA512 => HashContext::Sha512(Box::new(Sha512::new())),
            other => return Err(Error::UnsupportedHashAlgorithm(other)),
        })
    }

    /// Feeds more bytes into the hash.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            HashContext::Sha1(ctx) => ctx.update(data),
            HashContext::Sha224(ctx) => ctx.update(data),
            HashContext::Sha256(ctx) => ctx.update(data),
            HashContext::Sha384(ctx) => ctx.update(data),
            HashContext::Sha512(ctx) => ctx.update(data),
        }
    }

    /// Consumes the context, producing the final digest.
    pub fn finalize(self) -> Vec<u8> {
        match self {
            HashContext::Sha1(ctx) => ctx.finalize().to_vec(),
            HashContext::Sha224(ctx) => ctx.finalize().to_vec(),
            HashContext::Sha256(ctx) => ctx.finalize().to_vec(),
            HashContext::Sha384(ctx) => ctx.finalize().to_vec(),
            HashContext::Sha512(ctx) => ctx.finalize().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_string() {
        let ctx = HashContext::new(HashAlgorithm::SHA256).unwrap();
        let digest = ctx.finalize();
        assert_eq!(
            hex(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85"
        );
    }

    #[test]
    fn unsupported_algorithm_is_rejected() {
        assert!(matches!(
            HashContext::new(HashAlgorithm::MD5),
            Err(Error::UnsupportedHashAlgorithm(HashAlgorithm::MD5))
        ));
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
