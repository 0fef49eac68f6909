//! Error types.

use std::fmt;

use crate::packet::Tag;
use crate::types::{HashAlgorithm, PublicKeyAlgorithm};

/// The error type for this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A packet header is malformed: the continuation bit is unset, or a
    /// length field claims more bytes than are available to decode it.
    #[error("Invalid header at offset {0}")]
    InvalidHeader(Offset),

    /// The buffer ran out while decoding a packet header's length field.
    #[error("Packet header length truncated at offset {0}")]
    PacketHeaderLength(Offset),

    /// A packet's declared length exceeds the number of bytes remaining
    /// in the buffer.
    #[error("Packet at offset {offset} claims {claimed} bytes, but only \
             {actual} remain")]
    PacketLength {
        /// Offset of the packet header.
        offset: Offset,
        /// The length claimed by the header.
        claimed: u64,
        /// The number of bytes actually available.
        actual: u64,
    },

    /// A recognized but unimplemented feature was encountered, e.g. a
    /// partial body length, a non-v4 key, or a non-v3/v4 signature.
    #[error("Unsupported feature at offset {offset}: {feature}")]
    UnsupportedFeature {
        /// Offset at which the unsupported feature was detected.
        offset: Offset,
        /// Short, stable name of the unsupported feature.
        feature: &'static str,
    },

    /// An obsolete packet form was encountered. Reserved: the decoders in
    /// this crate never raise it themselves.
    #[error("Old packet encountered at offset {0}")]
    OldPacket(Offset),

    /// A packet body is structurally well-framed but semantically
    /// malformed (e.g. an issuer subpacket of the wrong length).
    #[error("Invalid packet at offset {0}: {1}")]
    InvalidPacket(Offset, String),

    /// An RSA-family key used an algorithm code other than
    /// RSA-Encrypt-or-Sign, which this crate refuses to verify with.
    #[error("Key uses algorithm {0:?}, which cannot verify this signature")]
    WrongAlgorithm(PublicKeyAlgorithm),

    /// A key's public-key algorithm is not one this crate can build a
    /// verification key from at all.
    #[error("No verification key can be built for algorithm {0:?}")]
    UnsupportedPublicKeyAlgorithm(PublicKeyAlgorithm),

    /// The signature's hash algorithm is not one of the five supported
    /// by this crate.
    #[error("Unsupported hash algorithm: {0:?}")]
    UnsupportedHashAlgorithm(HashAlgorithm),

    /// A top-level packet carries a tag this crate does not decode into
    /// a typed variant.
    #[error("Unsupported packet type: {0:?}")]
    UnsupportedPacketType(Tag),
}

/// A byte offset into the buffer being parsed, or "unknown".
///
/// The original parser used `-1` as a sentinel for "no offset available"
/// (e.g. while parsing a nested subpacket list). We use `Option<usize>`
/// instead so that "no offset" can't be mistaken for a real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(pub Option<usize>);

impl From<usize> for Offset {
    fn from(offset: usize) -> Self {
        Offset(Some(offset))
    }
}

impl From<Option<usize>> for Offset {
    fn from(offset: Option<usize>) -> Self {
        Offset(offset)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(offset) => write!(f, "{}", offset),
            None => write!(f, "<unknown>"),
        }
    }
}

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
