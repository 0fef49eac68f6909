//! RFC 4880 algorithm and signature-type identifiers.
//!
//! These mirror the numeric constant tables of the format rather than a
//! dense `0..N` range, so each is a typed enum with an explicit
//! `Unknown(u8)` catch-all instead of a bare `u8`.

use std::fmt;

/// The public-key algorithm identifier of a key or signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKeyAlgorithm {
    /// RSA (Encrypt or Sign), the only algorithm this crate can verify.
    RSAEncryptOrSign,
    /// RSA Encrypt-Only. Parsed, but rejected for verification.
    RSAEncryptOnly,
    /// RSA Sign-Only. Parsed, but rejected for verification.
    RSASignOnly,
    /// ElGamal (Encrypt-Only).
    ElGamal,
    /// DSA.
    DSA,
    /// Any other algorithm identifier.
    Unknown(u8),
}

impl From<u8> for PublicKeyAlgorithm {
    fn from(code: u8) -> Self {
        match code {
            1 => PublicKeyAlgorithm::RSAEncryptOrSign,
            2 => PublicKeyAlgorithm::RSAEncryptOnly,
            3 => PublicKeyAlgorithm::RSASignOnly,
            16 => PublicKeyAlgorithm::ElGamal,
            17 => PublicKeyAlgorithm::DSA,
            other => PublicKeyAlgorithm::Unknown(other),
        }
    }
}

impl From<PublicKeyAlgorithm> for u8 {
    fn from(algo: PublicKeyAlgorithm) -> Self {
        match algo {
            PublicKeyAlgorithm::RSAEncryptOrSign => 1,
            PublicKeyAlgorithm::RSAEncryptOnly => 2,
            PublicKeyAlgorithm::RSASignOnly => 3,
            PublicKeyAlgorithm::ElGamal => 16,
            PublicKeyAlgorithm::DSA => 17,
            PublicKeyAlgorithm::Unknown(code) => code,
        }
    }
}

impl fmt::Display for PublicKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PublicKeyAlgorithm::RSAEncryptOrSign => write!(f, "RSA (Encrypt or Sign)"),
            PublicKeyAlgorithm::RSAEncryptOnly => write!(f, "RSA (Encrypt-Only)"),
            PublicKeyAlgorithm::RSASignOnly => write!(f, "RSA (Sign-Only)"),
            PublicKeyAlgorithm::ElGamal => write!(f, "ElGamal (Encrypt-Only)"),
            PublicKeyAlgorithm::DSA => write!(f, "DSA"),
            PublicKeyAlgorithm::Unknown(code) => write!(f, "Unknown({})", code),
        }
    }
}

/// The hash algorithm identifier of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5. Parsed, but not supported for verification.
    MD5,
    /// SHA-1.
    SHA1,
    /// RIPEMD-160. Parsed, but not supported for verification.
    RIPEMD160,
    /// SHA-256.
    SHA256,
    /// SHA-384.
    SHA384,
    /// SHA-512.
    SHA512,
    /// SHA-224.
    SHA224,
    /// Any other algorithm identifier.
    Unknown(u8),
}

impl From<u8> for HashAlgorithm {
    fn from(code: u8) -> Self {
        match code {
            1 => HashAlgorithm::MD5,
            2 => HashAlgorithm::SHA1,
            3 => HashAlgorithm::RIPEMD160,
            8 => HashAlgorithm::SHA256,
            9 => HashAlgorithm::SHA384,
            10 => HashAlgorithm::SHA512,
            11 => HashAlgorithm::SHA224,
            other => HashAlgorithm::Unknown(other),
        }
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(algo: HashAlgorithm) -> Self {
        match algo {
            HashAlgorithm::MD5 => 1,
            HashAlgorithm::SHA1 => 2,
            HashAlgorithm::RIPEMD160 => 3,
            HashAlgorithm::SHA256 => 8,
            HashAlgorithm::SHA384 => 9,
            HashAlgorithm::SHA512 => 10,
            HashAlgorithm::SHA224 => 11,
            HashAlgorithm::Unknown(code) => code,
        }
    }
}

impl HashAlgorithm {
    /// Whether this crate's [`crate::crypto::hash`] module can build a
    /// hasher for this algorithm.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            HashAlgorithm::SHA1
                | HashAlgorithm::SHA224
                | HashAlgorithm::SHA256
                | HashAlgorithm::SHA384
                | HashAlgorithm::SHA512
        )
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashAlgorithm::MD5 => write!(f, "MD5"),
            HashAlgorithm::SHA1 => write!(f, "SHA1"),
            HashAlgorithm::RIPEMD160 => write!(f, "RIPEMD160"),
            HashAlgorithm::SHA256 => write!(f, "SHA256"),
            HashAlgorithm::SHA384 => write!(f, "SHA384"),
            HashAlgorithm::SHA512 => write!(f, "SHA512"),
            HashAlgorithm::SHA224 => write!(f, "SHA224"),
            HashAlgorithm::Unknown(code) => write!(f, "Unknown({})", code),
        }
    }
}

/// The signature-type code of a signature packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureType {
    /// Signature of a binary document.
    Binary,
    /// Signature of a canonical text document.
    Text,
    /// Standalone signature.
    Standalone,
    /// Generic certification of a User ID and Public-Key packet.
    GenericCertification,
    /// Persona certification of a User ID and Public-Key packet.
    PersonaCertification,
    /// Casual certification of a User ID and Public-Key packet.
    CasualCertification,
    /// Positive certification of a User ID and Public-Key packet.
    PositiveCertification,
    /// Subkey Binding Signature.
    SubkeyBinding,
    /// Primary Key Binding Signature (an embedded cross-signature).
    PrimaryKeyBinding,
    /// Signature directly on a key.
    DirectKey,
    /// Key revocation signature.
    KeyRevocation,
    /// Subkey revocation signature.
    SubkeyRevocation,
    /// Certification revocation signature.
    CertificationRevocation,
    /// Timestamp signature.
    Timestamp,
    /// Third-Party Confirmation signature.
    ThirdPartyConfirmation,
    /// Any other signature-type code.
    Unknown(u8),
}

impl From<u8> for SignatureType {
    fn from(code: u8) -> Self {
        match code {
            0x00 => SignatureType::Binary,
            0x01 => SignatureType::Text,
            0x02 => SignatureType::Standalone,
            0x10 => SignatureType::GenericCertification,
            0x11 => SignatureType::PersonaCertification,
            0x12 => SignatureType::CasualCertification,
            0x13 => SignatureType::PositiveCertification,
            0x18 => SignatureType::SubkeyBinding,
            0x19 => SignatureType::PrimaryKeyBinding,
            0x1F => SignatureType::DirectKey,
            0x20 => SignatureType::KeyRevocation,
            0x28 => SignatureType::SubkeyRevocation,
            0x30 => SignatureType::CertificationRevocation,
            0x40 => SignatureType::Timestamp,
            0x50 => SignatureType::ThirdPartyConfirmation,
            other => SignatureType::Unknown(other),
        }
    }
}

impl From<SignatureType> for u8 {
    fn from(sigtype: SignatureType) -> Self {
        match sigtype {
            SignatureType::Binary => 0x00,
            SignatureType::Text => 0x01,
            SignatureType::Standalone => 0x02,
            SignatureType::GenericCertification => 0x10,
            SignatureType::PersonaCertification => 0x11,
            SignatureType::CasualCertification => 0x12,
            SignatureType::PositiveCertification => 0x13,
            SignatureType::SubkeyBinding => 0x18,
            SignatureType::PrimaryKeyBinding => 0x19,
            SignatureType::DirectKey => 0x1F,
            SignatureType::KeyRevocation => 0x20,
            SignatureType::SubkeyRevocation => 0x28,
            SignatureType::CertificationRevocation => 0x30,
            SignatureType::Timestamp => 0x40,
            SignatureType::ThirdPartyConfirmation => 0x50,
            SignatureType::Unknown(code) => code,
        }
    }
}

impl SignatureType {
    /// Whether this signature type certifies a binding between a primary
    /// key and a User ID.
    pub fn is_uid_certification(self) -> bool {
        matches!(
            self,
            SignatureType::GenericCertification
                | SignatureType::PersonaCertification
                | SignatureType::CasualCertification
                | SignatureType::PositiveCertification
        )
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", u8::from(*self))
    }
}
