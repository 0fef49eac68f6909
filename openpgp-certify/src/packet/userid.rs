//! User ID packets.

use crate::error::Result;
use crate::packet::{Common, Tag};

/// A User ID packet: an opaque textual identity bound to a key by a
/// certification signature.
///
/// RFC 4880 suggests (but does not require) an RFC 2822 `name (comment)
/// <email>` structure; this crate does not parse that structure, since
/// verification only needs the raw bytes that were hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdPacket {
    common: Common,
    value: String,
}

impl UserIdPacket {
    pub(crate) fn decode(body: &[u8]) -> Result<Self> {
        let value = String::from_utf8_lossy(body).into_owned();
        Ok(UserIdPacket {
            common: Common::new(Tag::UserID, body.to_vec(), Vec::new()),
            value,
        })
    }

    pub(crate) fn common(&self) -> &Common {
        &self.common
    }

    /// The User ID's text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8_text() {
        let uid = UserIdPacket::decode(b"Alice <alice@example.com>").unwrap();
        assert_eq!(uid.value(), "Alice <alice@example.com>");
    }
}
