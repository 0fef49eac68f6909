//! Signature subpacket tag constants.
//!
//! Subpackets are never promoted to typed packet variants (see
//! [`crate::packet::Tag`]); this crate only needs to recognize two of
//! them by number while walking a signature's subpacket list.

/// Issuer Key ID (RFC 4880 §5.2.3.5).
pub const ISSUER: u8 = 16;

/// Embedded Signature (RFC 4880 §5.2.3.26): a nested signature carried in
/// a parent signature's unhashed area, used for primary-key-by-subkey
/// cross-certifications.
pub const EMBEDDED_SIGNATURE: u8 = 32;
