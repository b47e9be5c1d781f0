//! Canonical big-endian encodings.
//!
//! Prime field elements are written as fixed-width big-endian integers.
//! Extension field elements are written coefficient by coefficient, highest
//! degree first. Curve points reserve the top bits of their first byte for
//! [`PointFlags`].
mod flags;
pub use flags::*;

use crate::{biginteger::BigInteger, AlgebraError};
use std::io::{Read, Write};

/// Serializer in big endian format.
pub trait CanonicalSerialize {
    /// Serializes `self` into `writer`.
    fn serialize<W: Write>(&self, writer: W) -> Result<(), AlgebraError>;

    fn serialized_size(&self) -> usize;

    /// Serializes `self` into `writer` without compression.
    fn serialize_uncompressed<W: Write>(&self, writer: W) -> Result<(), AlgebraError> {
        self.serialize(writer)
    }

    fn uncompressed_size(&self) -> usize {
        self.serialized_size()
    }

    /// Returns the canonical encoding as an owned buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, AlgebraError> {
        let mut bytes = Vec::with_capacity(self.serialized_size());
        self.serialize(&mut bytes)?;
        Ok(bytes)
    }

    /// Returns the uncompressed encoding as an owned buffer.
    fn to_bytes_uncompressed(&self) -> Result<Vec<u8>, AlgebraError> {
        let mut bytes = Vec::with_capacity(self.uncompressed_size());
        self.serialize_uncompressed(&mut bytes)?;
        Ok(bytes)
    }
}

/// Serializer in big endian format allowing to encode flags.
pub trait CanonicalSerializeWithFlags: CanonicalSerialize {
    /// Serializes `self` and `flags` into `writer`.
    fn serialize_with_flags<W: Write, F: Flags>(
        &self,
        writer: W,
        flags: F,
    ) -> Result<(), AlgebraError>;

    /// Number of bytes written by `serialize_with_flags` with flags `F`.
    fn serialized_size_with_flags<F: Flags>(&self) -> usize;
}

/// Deserializer in big endian format.
pub trait CanonicalDeserialize: Sized {
    /// Reads `Self` from `reader`.
    fn deserialize<R: Read>(reader: R) -> Result<Self, AlgebraError>;

    /// Reads `Self` from `reader` without compression.
    fn deserialize_uncompressed<R: Read>(reader: R) -> Result<Self, AlgebraError> {
        Self::deserialize(reader)
    }

    /// Decodes `bytes`, which must hold exactly one canonical encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let mut reader = bytes;
        let value = Self::deserialize(&mut reader)?;
        ensure_consumed(reader)?;
        Ok(value)
    }

    /// Decodes `bytes`, which must hold exactly one uncompressed encoding.
    fn from_bytes_uncompressed(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let mut reader = bytes;
        let value = Self::deserialize_uncompressed(&mut reader)?;
        ensure_consumed(reader)?;
        Ok(value)
    }
}

/// Deserializer in big endian format allowing flags to be encoded.
pub trait CanonicalDeserializeWithFlags: Sized {
    /// Reads `Self` and `Flags` from `reader`.
    fn deserialize_with_flags<R: Read, F: Flags>(reader: R) -> Result<(Self, F), AlgebraError>;
}

fn ensure_consumed(rest: &[u8]) -> Result<(), AlgebraError> {
    if rest.is_empty() {
        Ok(())
    } else {
        trace!(trailing = rest.len(), "encoding has trailing bytes");
        Err(AlgebraError::InvalidEncoding)
    }
}

/// Number of bytes needed to hold `bits` bits.
pub fn buffer_byte_size(bits: usize) -> usize {
    (bits + 7) / 8
}

/// Writes the low `num_bytes` bytes of `repr` in big-endian order, with
/// `flags` or-ed into the first byte.
pub(crate) fn serialize_repr_be<W: Write, B: BigInteger, F: Flags>(
    mut writer: W,
    repr: &B,
    num_bytes: usize,
    flags: F,
) -> Result<(), AlgebraError> {
    let limbs = repr.to_bytes_be();
    let mut bytes = vec![0u8; num_bytes];
    if num_bytes >= limbs.len() {
        bytes[num_bytes - limbs.len()..].copy_from_slice(&limbs);
    } else {
        bytes.copy_from_slice(&limbs[limbs.len() - num_bytes..]);
    }
    bytes[0] |= flags.u8_bitmask();
    writer.write_all(&bytes)?;
    Ok(())
}

/// Reads `num_bytes` big-endian bytes, stripping the flags of the first byte.
/// Fails when the flags are malformed or when the value does not fit in `B`.
pub(crate) fn deserialize_repr_be<R: Read, B: BigInteger, F: Flags>(
    mut reader: R,
    num_bytes: usize,
) -> Result<(B, F), AlgebraError> {
    let mut bytes = vec![0u8; num_bytes];
    reader.read_exact(&mut bytes)?;

    let flags = F::from_u8_remove_flags(&mut bytes[0]).ok_or_else(|| {
        trace!(byte = bytes[0], "malformed flag bits");
        AlgebraError::InvalidEncoding
    })?;

    let capacity = B::NUM_LIMBS * 8;
    let digits = if num_bytes > capacity {
        let (padding, digits) = bytes.split_at(num_bytes - capacity);
        if padding.iter().any(|b| *b != 0) {
            return Err(AlgebraError::InvalidEncoding);
        }
        digits
    } else {
        &bytes[..]
    };

    let repr = B::from_bytes_be(digits).ok_or(AlgebraError::InvalidEncoding)?;
    Ok((repr, flags))
}
