//! A small, RSA-only OpenPGP implementation: a streaming binary packet
//! parser (RFC 4880 §4) and a signature verification engine for the two
//! certification bindings web-of-trust tooling cares about — a primary
//! key to a User ID, and a primary key to a subkey.
//!
//! This crate does not de-armor, does not acquire bytes from disk or the
//! network, and does not implement any trust model: callers hand it a
//! fully-materialised byte buffer and decide for themselves what a
//! verified binding means. See [`parse`] for the packet framer and
//! [`crypto::verify`] for the verification engine.
//!
//! # Non-goals
//!
//! - Partial body lengths ([`error::Error::UnsupportedFeature`]).
//! - Non-RSA signing algorithms (DSA, ElGamal, ECDSA, EdDSA).
//! - Symmetric encryption, literal/compressed/marker/secret-key packets,
//!   key generation, signing.
//! - Trust-model or revocation-policy decisions of any kind.

pub mod crypto;
pub mod error;
pub mod fingerprint;
pub mod keyid;
pub mod packet;
pub mod parse;
pub mod types;

pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use keyid::KeyID;
pub use packet::{Packet, Tag};
pub use parse::{parse, parse_subpackets, parse_with_sink, read_int, write_int};
