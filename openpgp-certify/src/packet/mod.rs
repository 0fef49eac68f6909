//! The packet tree: tags, the shared packet fields, and the top-level
//! [`Packet`] sum type.

pub mod key;
pub mod signature;
pub mod userid;

use key::KeyPacket;
use signature::Signature;
use userid::UserIdPacket;

/// The OpenPGP packet-type tag (RFC 4880 §4.3).
///
/// Subpacket tags (a disjoint numbering space used only inside a
/// signature's hashed/unhashed areas) are represented with the same
/// `Unknown(u8)` variant, since subpackets are never promoted to typed
/// packet variants at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Signature packet (tag 2).
    Signature,
    /// Public-Key packet (tag 6).
    PublicKey,
    /// User ID packet (tag 13).
    UserID,
    /// Public-Subkey packet (tag 14).
    PublicSubkey,
    /// Any other packet tag, or a subpacket tag.
    Unknown(u8),
}

impl From<u8> for Tag {
    fn from(code: u8) -> Self {
        match code {
            2 => Tag::Signature,
            6 => Tag::PublicKey,
            13 => Tag::UserID,
            14 => Tag::PublicSubkey,
            other => Tag::Unknown(other),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Signature => 2,
            Tag::PublicKey => 6,
            Tag::UserID => 13,
            Tag::PublicSubkey => 14,
            Tag::Unknown(code) => code,
        }
    }
}

/// Fields shared by every packet: its tag, raw body, and ordered list of
/// subpackets (always empty except for [`Packet::Signature`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Common {
    tag: Tag,
    body: Vec<u8>,
    subpackets: Vec<Packet>,
}

impl Common {
    pub(crate) fn new(tag: Tag, body: Vec<u8>, subpackets: Vec<Packet>) -> Self {
        Common { tag, body, subpackets }
    }

    /// This packet's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// This packet's raw body, with framing stripped.
    pub fn raw_contents(&self) -> &[u8] {
        &self.body
    }

    /// This packet's subpackets, in file order. Empty for every packet
    /// except a Signature, whose hashed subpackets precede its unhashed
    /// subpackets.
    pub fn subpackets(&self) -> &[Packet] {
        &self.subpackets
    }
}

/// A decoded OpenPGP packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// A signature over a document, user-id binding, or key binding.
    Signature(Signature),
    /// A version-4 primary public key.
    PublicKey(KeyPacket),
    /// A version-4 public subkey.
    PublicSubkey(KeyPacket),
    /// A textual identity bound to a key by a certification signature.
    UserID(UserIdPacket),
    /// A packet (or subpacket) this crate does not decode further.
    Unknown(Common),
}

impl Packet {
    /// This packet's tag.
    pub fn tag(&self) -> Tag {
        self.common().tag()
    }

    /// This packet's raw body, with framing stripped.
    pub fn raw_contents(&self) -> &[u8] {
        self.common().raw_contents()
    }

    /// This packet's subpackets, in file order.
    pub fn subpackets(&self) -> &[Packet] {
        self.common().subpackets()
    }

    fn common(&self) -> &Common {
        match self {
            Packet::Signature(sig) => sig.common(),
            Packet::PublicKey(key) => key.common(),
            Packet::PublicSubkey(key) => key.common(),
            Packet::UserID(uid) => uid.common(),
            Packet::Unknown(common) => common,
        }
    }

    /// A short human-readable description, in the style of `parsepgp`'s
    /// tree dump.
    pub fn description(&self) -> String {
        match self {
            Packet::Signature(sig) => sig.description(),
            Packet::PublicKey(key) => key.description("Public key"),
            Packet::PublicSubkey(key) => key.description("Public subkey"),
            Packet::UserID(uid) => format!("User ID: {}", uid.value()),
            Packet::Unknown(common) => {
                format!("Unknown packet, tag {}", u8::from(common.tag()))
            }
        }
    }
}
