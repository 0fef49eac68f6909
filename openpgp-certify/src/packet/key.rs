//! Public-Key and Public-Subkey packets.

use sha1collisiondetection::Sha1CD;
use digest::Digest;

use crate::error::{Error, Offset, Result};
use crate::fingerprint::Fingerprint;
use crate::keyid::KeyID;
use crate::packet::{Common, Tag};
use crate::parse::write_int;
use crate::types::PublicKeyAlgorithm;

/// A Public-Key or Public-Subkey packet.
///
/// The two packet types share an identical body layout and are
/// distinguished only by their outer tag (see [`Common::tag`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPacket {
    common: Common,
    version: u8,
    creation_time: u32,
    pk_algo: PublicKeyAlgorithm,
    key_material: Vec<u8>,
    fingerprint: Fingerprint,
}

impl KeyPacket {
    pub(crate) fn decode(tag: Tag, body: &[u8]) -> Result<Self> {
        if body.len() < 6 {
            return Err(Error::InvalidHeader(Offset(None)));
        }
        let version = body[0];
        if version != 4 {
            return Err(Error::UnsupportedFeature {
                offset: Offset(None),
                feature: "non-v4 public key",
            });
        }
        let creation_time = u32::from_be_bytes([body[1], body[2], body[3], body[4]]);
        let pk_algo = PublicKeyAlgorithm::from(body[5]);
        let key_material = body[6..].to_vec();

        let fingerprint = compute_fingerprint(body);

        Ok(KeyPacket {
            common: Common::new(tag, body.to_vec(), Vec::new()),
            version,
            creation_time,
            pk_algo,
            key_material,
            fingerprint,
        })
    }

    pub(crate) fn common(&self) -> &Common {
        &self.common
    }

    /// The key version; always 4, since non-v4 keys are rejected at
    /// decode time.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Seconds since the Unix epoch at which the key claims to have been
    /// created.
    pub fn creation_time(&self) -> u32 {
        self.creation_time
    }

    /// The key's public-key algorithm code.
    pub fn pk_algo(&self) -> PublicKeyAlgorithm {
        self.pk_algo
    }

    /// The algorithm-specific key material that follows the fixed
    /// header fields.
    pub fn key_material(&self) -> &[u8] {
        &self.key_material
    }

    /// The fingerprint derived from this key's raw body.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// The key-id, i.e. the low 8 bytes of [`KeyPacket::fingerprint`].
    pub fn key_id(&self) -> KeyID {
        self.fingerprint.key_id()
    }

    pub(crate) fn description(&self, label: &str) -> String {
        format!("{}: {}", label, self.fingerprint)
    }
}

fn compute_fingerprint(body: &[u8]) -> Fingerprint {
    let mut ctx = Sha1CD::new();
    ctx.update([0x99]);
    ctx.update(write_int(body.len() as u64, 2));
    ctx.update(body);
    let digest = ctx.finalize();
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest);
    Fingerprint::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rsa_key_body() -> Vec<u8> {
        let mut body = vec![4u8]; // version
        body.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // ctime = 1
        body.push(1); // RSA-Encrypt-or-Sign
        body.extend_from_slice(&[0x00, 0x08, 0xAB]); // n, bit_len 8
        body.extend_from_slice(&[0x00, 0x02, 0x03]); // e = 3
        body
    }

    #[test]
    fn decodes_fixed_fields() {
        let body = sample_rsa_key_body();
        let key = KeyPacket::decode(Tag::PublicKey, &body).unwrap();
        assert_eq!(key.version(), 4);
        assert_eq!(key.creation_time(), 1);
        assert_eq!(key.pk_algo(), PublicKeyAlgorithm::RSAEncryptOrSign);
        assert_eq!(key.key_material(), &body[6..]);
    }

    #[test]
    fn fingerprint_is_deterministic_and_sensitive_to_body() {
        let body = sample_rsa_key_body();
        let key_a = KeyPacket::decode(Tag::PublicKey, &body).unwrap();
        let key_b = KeyPacket::decode(Tag::PublicKey, &body).unwrap();
        assert_eq!(key_a.fingerprint(), key_b.fingerprint());

        let mut other_body = body.clone();
        *other_body.last_mut().unwrap() ^= 0xFF;
        let key_c = KeyPacket::decode(Tag::PublicKey, &other_body).unwrap();
        assert_ne!(key_a.fingerprint(), key_c.fingerprint());
    }

    #[test]
    fn key_id_is_low_eight_bytes_of_fingerprint() {
        let body = sample_rsa_key_body();
        let key = KeyPacket::decode(Tag::PublicKey, &body).unwrap();
        assert_eq!(key.key_id().as_bytes(), &key.fingerprint().as_bytes()[12..20]);
    }

    #[test]
    fn rejects_non_v4_keys() {
        let mut body = sample_rsa_key_body();
        body[0] = 3;
        assert!(matches!(
            KeyPacket::decode(Tag::PublicKey, &body),
            Err(Error::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn rejects_truncated_body() {
        let body = vec![4u8, 0, 0, 0, 1];
        assert!(KeyPacket::decode(Tag::PublicKey, &body).is_err());
    }
}
