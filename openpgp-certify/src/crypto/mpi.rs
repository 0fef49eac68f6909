//! OpenPGP multi-precision integers.

use num_bigint_dig::BigUint;

use crate::error::{Error, Offset, Result};
use crate::parse::read_int;

/// An OpenPGP multi-precision integer: a 2-byte big-endian bit count
/// followed by `ceil(bits/8)` bytes holding the value, most-significant
/// byte first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mpi {
    bytes: Vec<u8>,
}

impl Mpi {
    /// The integer's raw big-endian bytes (no bit-count prefix).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Converts to a [`BigUint`] for use with the `rsa` crate.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Decodes one MPI starting at `data[pos]`, returning the value and
    /// the offset of the byte following it.
    pub(crate) fn decode(data: &[u8], pos: usize) -> Result<(Mpi, usize)> {
        if pos + 2 > data.len() {
            return Err(Error::InvalidHeader(Offset::from(pos)));
        }
        let bit_len = read_int(&data[pos..pos + 2]) as usize;
        let byte_len = (bit_len + 7) / 8;
        let start = pos + 2;
        let end = start + byte_len;
        if end > data.len() {
            return Err(Error::InvalidHeader(Offset::from(pos)));
        }
        Ok((
            Mpi {
                bytes: data[start..end].to_vec(),
            },
            end,
        ))
    }
}

/// An RSA public key extracted from a key packet's key material: the
/// modulus `n` followed by the public exponent `e`, each an [`Mpi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyMaterial {
    /// The modulus.
    pub n: Mpi,
    /// The public exponent.
    pub e: Mpi,
}

impl RsaKeyMaterial {
    /// Decodes `n` and `e` from `key_material`, requiring that the whole
    /// buffer be consumed by exactly those two MPIs.
    pub(crate) fn decode(key_material: &[u8]) -> Result<Self> {
        let (n, pos) = Mpi::decode(key_material, 0)?;
        let (e, pos) = Mpi::decode(key_material, pos)?;
        if pos != key_material.len() {
            return Err(Error::InvalidPacket(
                Offset(None),
                "trailing bytes after RSA key material".to_string(),
            ));
        }
        Ok(RsaKeyMaterial { n, e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_single_byte_mpi() {
        // bit-length 8, value 0xFF
        let data = [0x00, 0x08, 0xFF];
        let (mpi, pos) = Mpi::decode(&data, 0).unwrap();
        assert_eq!(mpi.as_bytes(), &[0xFF]);
        assert_eq!(pos, 3);
    }

    #[test]
    fn decodes_a_multi_byte_mpi_with_nonaligned_bit_length() {
        // bit-length 9 -> 2 bytes
        let data = [0x00, 0x09, 0x01, 0xFF];
        let (mpi, pos) = Mpi::decode(&data, 0).unwrap();
        assert_eq!(mpi.as_bytes(), &[0x01, 0xFF]);
        assert_eq!(pos, 4);
    }

    #[test]
    fn rejects_truncated_mpi() {
        let data = [0x00, 0x10, 0xFF]; // claims 2 bytes, only 1 present
        assert!(Mpi::decode(&data, 0).is_err());
    }

    #[test]
    fn rsa_key_material_roundtrips() {
        let mut data = vec![0x00, 0x08, 0xAB]; // n
        data.extend_from_slice(&[0x00, 0x02, 0x03]); // e = 3, bit_len 2
        let key = RsaKeyMaterial::decode(&data).unwrap();
        assert_eq!(key.n.as_bytes(), &[0xAB]);
        assert_eq!(key.e.as_bytes(), &[0x03]);
    }

    #[test]
    fn rsa_key_material_rejects_trailing_garbage() {
        let mut data = vec![0x00, 0x08, 0xAB];
        data.extend_from_slice(&[0x00, 0x02, 0x03]);
        data.push(0xFF);
        assert!(RsaKeyMaterial::decode(&data).is_err());
    }
}
