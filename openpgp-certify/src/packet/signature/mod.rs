//! Signature packets.

pub mod subpacket;

use crate::error::{Error, Offset, Result};
use crate::packet::{Common, Packet, Tag};
use crate::parse::{parse_subpackets, read_int};
use crate::types::{HashAlgorithm, PublicKeyAlgorithm, SignatureType};

/// A Signature packet (tag 2), version 3 or 4.
///
/// Every field below is read straight off the wire; the one exception is
/// [`Signature::key_id`], which starts out as the wire's explicit key-id
/// field (v3) or all-zero (v4, absent an issuer subpacket) and is then
/// overridden by the last tag-16 subpacket found while walking the
/// concatenated hashed-then-unhashed subpacket list, per
/// `SetSignaturePropertiesFromSubpackets` in the implementation this
/// crate is grounded on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    common: Common,
    version: u8,
    sig_type: SignatureType,
    pk_algo: PublicKeyAlgorithm,
    hash_algo: HashAlgorithm,
    key_id: [u8; 8],
    hashed_data: Vec<u8>,
    sig_value: Vec<u8>,
}

impl Signature {
    pub(crate) fn decode(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(Error::InvalidHeader(Offset(None)));
        }

        let mut sig = match body[0] {
            3 => decode_v3(body)?,
            4 => decode_v4(body)?,
            _ => {
                return Err(Error::UnsupportedFeature {
                    offset: Offset(None),
                    feature: "non-v3/v4 signature",
                })
            }
        };

        apply_issuer_subpacket(&mut sig)?;
        sig.common = Common::new(Tag::Signature, body.to_vec(), sig.common.subpackets().to_vec());
        Ok(sig)
    }

    pub(crate) fn common(&self) -> &Common {
        &self.common
    }

    /// The signature version, 3 or 4.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The signature type, describing what kind of binding or document
    /// this signature covers.
    pub fn sig_type(&self) -> SignatureType {
        self.sig_type
    }

    /// The public-key algorithm the signer's key uses.
    pub fn pk_algo(&self) -> PublicKeyAlgorithm {
        self.pk_algo
    }

    /// The hash algorithm used to compute this signature.
    pub fn hash_algo(&self) -> HashAlgorithm {
        self.hash_algo
    }

    /// The issuer key-id: either the v3 wire field, or the last tag-16
    /// subpacket encountered (hashed area first, then unhashed).
    pub fn key_id(&self) -> &[u8; 8] {
        &self.key_id
    }

    /// The subpackets of this signature, hashed area first, in file
    /// order within each area.
    pub fn subpackets(&self) -> &[Packet] {
        self.common.subpackets()
    }

    /// The exact prefix of the packet body that the signer hashed,
    /// before the trailer described in the engine's message-assembly
    /// rules (see [`crate::crypto::verify`]).
    pub fn hashed_data(&self) -> &[u8] {
        &self.hashed_data
    }

    /// The raw signature value: a 2-byte MPI bit-length prefix followed
    /// by the signature bytes.
    pub fn sig_value(&self) -> &[u8] {
        &self.sig_value
    }

    /// The embedded tag-32 cross-signature in this signature's
    /// subpackets, if any, reparsed as a [`Signature`].
    ///
    /// Returns `None` both when no such subpacket exists and when one
    /// exists but fails to parse as a signature — the caller
    /// ([`crate::crypto::verify::verify_subkey_binding`]) treats both
    /// cases the same way: fall back to the primary-only result.
    pub fn embedded_signature(&self) -> Option<Signature> {
        self.common
            .subpackets()
            .iter()
            .find_map(|p| match p {
                Packet::Unknown(common)
                    if u8::from(common.tag()) == subpacket::EMBEDDED_SIGNATURE =>
                {
                    Signature::decode(common.raw_contents()).ok()
                }
                _ => None,
            })
    }

    pub(crate) fn description(&self) -> String {
        format!(
            "Signature, version {}, type {}, key id {}",
            self.version,
            self.sig_type,
            hex(&self.key_id)
        )
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// `[ver=3 | hashed_len=5 | sig_type | ctime(4) | key_id(8) | pk_alg |
/// hash_alg | quick(2) | sig(*)]`
fn decode_v3(body: &[u8]) -> Result<Signature> {
    if body.len() < 19 {
        return Err(Error::InvalidHeader(Offset(None)));
    }
    if body[1] != 5 {
        return Err(Error::InvalidHeader(Offset(None)));
    }

    let sig_type = SignatureType::from(body[2]);
    let mut key_id = [0u8; 8];
    key_id.copy_from_slice(&body[7..15]);
    let pk_algo = PublicKeyAlgorithm::from(body[15]);
    let hash_algo = HashAlgorithm::from(body[16]);
    let sig_value = body[19..].to_vec();
    let hashed_data = body[2..7].to_vec();

    Ok(Signature {
        common: Common::new(Tag::Signature, Vec::new(), Vec::new()),
        version: 3,
        sig_type,
        pk_algo,
        hash_algo,
        key_id,
        hashed_data,
        sig_value,
    })
}

/// `[ver=4 | sig_type | pk_alg | hash_alg | hashed_sub_len(2) |
/// hashed_sub(*) | unhashed_sub_len(2) | unhashed_sub(*) | quick(2) |
/// sig(*)]`
fn decode_v4(body: &[u8]) -> Result<Signature> {
    if body.len() < 10 {
        return Err(Error::InvalidHeader(Offset(None)));
    }

    let sig_type = SignatureType::from(body[1]);
    let pk_algo = PublicKeyAlgorithm::from(body[2]);
    let hash_algo = HashAlgorithm::from(body[3]);

    let hashed_len = read_int(&body[4..6]) as usize;
    if body.len() < 10 + hashed_len {
        return Err(Error::InvalidHeader(Offset(None)));
    }
    let hashed_region = &body[6..6 + hashed_len];
    let hashed_data = body[0..6 + hashed_len].to_vec();

    let unhashed_len_offset = 6 + hashed_len;
    let unhashed_len =
        read_int(&body[unhashed_len_offset..unhashed_len_offset + 2]) as usize;
    if body.len() < 10 + hashed_len + unhashed_len {
        return Err(Error::InvalidHeader(Offset(None)));
    }
    let unhashed_start = unhashed_len_offset + 2;
    let unhashed_region = &body[unhashed_start..unhashed_start + unhashed_len];

    let quick_start = unhashed_start + unhashed_len;
    let sig_value = body[quick_start + 2..].to_vec();

    let mut subpackets = parse_subpackets(hashed_region)?;
    subpackets.extend(parse_subpackets(unhashed_region)?);

    Ok(Signature {
        common: Common::new(Tag::Signature, Vec::new(), subpackets),
        version: 4,
        sig_type,
        pk_algo,
        hash_algo,
        key_id: [0u8; 8],
        hashed_data,
        sig_value,
    })
}

/// Walks the concatenated hashed-then-unhashed subpacket list and
/// installs the *last* tag-16 (issuer key-id) subpacket's contents as
/// this signature's key-id, last-wins across the whole list.
fn apply_issuer_subpacket(sig: &mut Signature) -> Result<()> {
    for subpacket in sig.common.subpackets() {
        if let Packet::Unknown(common) = subpacket {
            if u8::from(common.tag()) == subpacket::ISSUER {
                let body = common.raw_contents();
                if body.len() != 8 {
                    return Err(Error::InvalidPacket(
                        Offset(None),
                        "issuer subpacket has wrong length".to_string(),
                    ));
                }
                sig.key_id.copy_from_slice(body);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4_body_with_issuer(key_id: &[u8; 8]) -> Vec<u8> {
        let mut hashed = vec![16u8]; // subpacket tag = issuer
        hashed.extend_from_slice(key_id);
        let mut hashed_sub = vec![hashed.len() as u8]; // length byte (< 192)
        hashed_sub.extend_from_slice(&hashed);

        let mut body = vec![4u8, 0x10, 1, 8]; // v4, GenericCertification, RSA, SHA256
        body.extend_from_slice(&(hashed_sub.len() as u16).to_be_bytes());
        body.extend_from_slice(&hashed_sub);
        body.extend_from_slice(&0u16.to_be_bytes()); // empty unhashed area
        body.extend_from_slice(&[0xAB, 0xCD]); // quick-check
        body.extend_from_slice(&[0x00, 0x08, 0xFF]); // sig value MPI
        body
    }

    #[test]
    fn v4_issuer_subpacket_sets_key_id() {
        let key_id = [1, 2, 3, 4, 5, 6, 7, 8];
        let body = v4_body_with_issuer(&key_id);
        let sig = Signature::decode(&body).unwrap();
        assert_eq!(sig.key_id(), &key_id);
        assert_eq!(sig.version(), 4);
        assert_eq!(sig.hash_algo(), HashAlgorithm::SHA256);
    }

    #[test]
    fn v4_hashed_data_is_prefix_through_hashed_subpackets() {
        let key_id = [0u8; 8];
        let body = v4_body_with_issuer(&key_id);
        let sig = Signature::decode(&body).unwrap();
        let hashed_sub_len = read_int(&body[4..6]) as usize;
        assert_eq!(sig.hashed_data(), &body[0..6 + hashed_sub_len]);
    }

    #[test]
    fn v3_signature_decodes_fixed_layout() {
        let mut body = vec![3u8, 5, 0x10]; // v3, hashed_len=5, sig_type
        body.extend_from_slice(&[0, 0, 0, 1]); // ctime
        body.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]); // key id
        body.push(1); // pk_algo RSA
        body.push(2); // hash_algo SHA1
        body.extend_from_slice(&[0xAB, 0xCD]); // quick-check
        body.extend_from_slice(&[0x00, 0x08, 0xFF]); // sig value

        let sig = Signature::decode(&body).unwrap();
        assert_eq!(sig.version(), 3);
        assert_eq!(sig.key_id(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(sig.hashed_data(), &body[2..7]);
        assert_eq!(sig.hash_algo(), HashAlgorithm::SHA1);
    }

    #[test]
    fn rejects_non_v3_v4_signature() {
        let body = vec![5u8, 0, 0, 0];
        assert!(matches!(
            Signature::decode(&body),
            Err(Error::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn rejects_wrong_length_issuer_subpacket() {
        let mut hashed = vec![16u8];
        hashed.extend_from_slice(&[1, 2, 3]); // only 3 bytes, not 8
        let mut hashed_sub = vec![hashed.len() as u8];
        hashed_sub.extend_from_slice(&hashed);

        let mut body = vec![4u8, 0x10, 1, 8];
        body.extend_from_slice(&(hashed_sub.len() as u16).to_be_bytes());
        body.extend_from_slice(&hashed_sub);
        body.extend_from_slice(&0u16.to_be_bytes());
        body.extend_from_slice(&[0xAB, 0xCD]);
        body.extend_from_slice(&[0x00, 0x08, 0xFF]);

        assert!(matches!(
            Signature::decode(&body),
            Err(Error::InvalidPacket(_, _))
        ));
    }

    #[test]
    fn embedded_signature_subpacket_reparses() {
        let embedded_key_id = [9u8; 8];
        let embedded = v4_body_with_issuer(&embedded_key_id);

        let mut unhashed = vec![32u8]; // embedded signature tag
        unhashed.extend_from_slice(&embedded);
        let mut unhashed_sub = vec![255u8]; // five-byte length form
        unhashed_sub.extend_from_slice(&(unhashed.len() as u32).to_be_bytes());
        unhashed_sub.extend_from_slice(&unhashed);

        let mut body = vec![4u8, 0x18, 1, 8];
        body.extend_from_slice(&0u16.to_be_bytes()); // empty hashed area
        body.extend_from_slice(&(unhashed_sub.len() as u16).to_be_bytes());
        body.extend_from_slice(&unhashed_sub);
        body.extend_from_slice(&[0xAB, 0xCD]);
        body.extend_from_slice(&[0x00, 0x08, 0xFF]);

        let sig = Signature::decode(&body).unwrap();
        let cross = sig.embedded_signature().expect("embedded signature");
        assert_eq!(cross.key_id(), &embedded_key_id);
    }

    #[test]
    fn no_embedded_signature_subpacket_returns_none() {
        let key_id = [0u8; 8];
        let body = v4_body_with_issuer(&key_id);
        let sig = Signature::decode(&body).unwrap();
        assert!(sig.embedded_signature().is_none());
    }
}
