/// Metadata bits packed into the most significant bits of the first byte of
/// a big-endian encoding.
pub trait Flags: Default + Clone + Copy + Sized {
    /// Number of bits required for these flags.
    const BIT_SIZE: usize;

    /// Returns the flag bits already positioned at the top of a byte.
    fn u8_bitmask(&self) -> u8;

    /// Parses the flag bits of `value`, or returns `None` for a combination
    /// that is never produced by an encoder.
    fn from_u8(value: u8) -> Option<Self>;

    /// Parses the flag bits of `value` and clears them.
    fn from_u8_remove_flags(value: &mut u8) -> Option<Self> {
        let flags = Self::from_u8(*value)?;
        *value &= 0xFF >> Self::BIT_SIZE;
        Some(flags)
    }
}

/// Flags to be encoded into the serialization.
/// The default flags (empty) should not change the binary representation.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyFlags;

impl Flags for EmptyFlags {
    const BIT_SIZE: usize = 0;

    #[inline]
    fn u8_bitmask(&self) -> u8 {
        0
    }

    #[inline]
    fn from_u8(_value: u8) -> Option<Self> {
        Some(EmptyFlags)
    }

    #[inline]
    fn from_u8_remove_flags(_value: &mut u8) -> Option<Self> {
        Some(EmptyFlags)
    }
}

/// The three point-encoding bits: `C` (0x80) marks a compressed encoding,
/// `I` (0x40) the point at infinity and `S` (0x20) the sign of the
/// y-coordinate of a compressed, finite point.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointFlags {
    pub compressed: bool,
    pub is_infinity: bool,
    pub y_sign: bool,
}

impl PointFlags {
    const COMPRESSION: u8 = 1 << 7;
    const INFINITY: u8 = 1 << 6;
    const SIGN: u8 = 1 << 5;

    pub fn infinity(compressed: bool) -> Self {
        PointFlags {
            compressed,
            is_infinity: true,
            y_sign: false,
        }
    }

    pub fn compressed(y_sign: bool) -> Self {
        PointFlags {
            compressed: true,
            is_infinity: false,
            y_sign,
        }
    }

    pub fn uncompressed() -> Self {
        PointFlags::default()
    }
}

impl Flags for PointFlags {
    const BIT_SIZE: usize = 3;

    fn u8_bitmask(&self) -> u8 {
        let mut mask = 0;
        if self.compressed {
            mask |= Self::COMPRESSION;
        }
        if self.is_infinity {
            mask |= Self::INFINITY;
        }
        if self.y_sign {
            mask |= Self::SIGN;
        }
        mask
    }

    fn from_u8(value: u8) -> Option<Self> {
        let compressed = value & Self::COMPRESSION != 0;
        let is_infinity = value & Self::INFINITY != 0;
        let y_sign = value & Self::SIGN != 0;
        // The sign bit only carries meaning for compressed, finite points.
        if y_sign && (is_infinity || !compressed) {
            return None;
        }
        Some(PointFlags {
            compressed,
            is_infinity,
            y_sign,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_flags_bit_positions() {
        assert_eq!(PointFlags::compressed(true).u8_bitmask(), 0xA0);
        assert_eq!(PointFlags::compressed(false).u8_bitmask(), 0x80);
        assert_eq!(PointFlags::infinity(true).u8_bitmask(), 0xC0);
        assert_eq!(PointFlags::infinity(false).u8_bitmask(), 0x40);
        assert_eq!(PointFlags::uncompressed().u8_bitmask(), 0x00);
    }

    #[test]
    fn point_flags_removal() {
        let mut byte = 0xA0 | 0x1F;
        let flags = PointFlags::from_u8_remove_flags(&mut byte).unwrap();
        assert_eq!(flags, PointFlags::compressed(true));
        assert_eq!(byte, 0x1F);

        // A sign on an uncompressed or infinite encoding is malformed.
        assert!(PointFlags::from_u8(0x20).is_none());
        assert!(PointFlags::from_u8(0xE0).is_none());
    }
}
