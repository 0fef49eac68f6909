//! Key fingerprints.

use std::fmt;

use crate::keyid::KeyID;

/// The fingerprint of a version 4 public key: the 20-byte SHA-1 digest of
/// `0x99 || len(body) || body` (see [`crate::packet::key`]).
///
/// Non-v4 keys are out of scope for this crate, so unlike the format this
/// crate is derived from, there is no `Invalid` variant: every
/// `Fingerprint` in circulation was computed from a v4 key body.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 20]);

impl Fingerprint {
    pub(crate) fn new(bytes: [u8; 20]) -> Self {
        Fingerprint(bytes)
    }

    /// The raw fingerprint bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// The key-id, i.e. the low 8 bytes of the fingerprint.
    pub fn key_id(&self) -> KeyID {
        let mut id = [0u8; 8];
        id.copy_from_slice(&self.0[12..20]);
        KeyID::new(id)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}
