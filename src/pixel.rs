/// A pixel that can be sent to an LED strip by this driver.
pub trait Pixel {
    /// The return type of the [into_strip_bytes()](Pixel::into_strip_bytes) function.
    type BytesIter: Iterator<Item = u8>;

    /// Returns the bytes in the order the strip expects on the wire.
    ///
    /// Most WS2812 strips take their channels green-first (GRB), so
    /// implementations must reorder, not just flatten.
    fn into_strip_bytes(self) -> Self::BytesIter;
}

/// An `[r, g, b]` triple, reordered to GRB on the wire.
impl Pixel for [u8; 3] {
    type BytesIter = core::array::IntoIter<u8, 3>;

    fn into_strip_bytes(self) -> Self::BytesIter {
        [self[1], self[0], self[2]].into_iter()
    }
}

/// Four raw channel bytes, sent as-is. RGBW strips differ in channel
/// order, so the caller arranges the bytes for their strip.
impl Pixel for [u8; 4] {
    type BytesIter = core::array::IntoIter<u8, 4>;

    fn into_strip_bytes(self) -> Self::BytesIter {
        self.into_iter()
    }
}

/// 8-bit linear sRGB from the [palette] crate.
///
/// Strips interpret their channel values linearly, so gamma-corrected
/// sRGB has to be converted to [palette::LinSrgb] first; palette provides
/// `into_linear` for that.
impl Pixel for palette::LinSrgb<u8> {
    type BytesIter = core::array::IntoIter<u8, 3>;

    fn into_strip_bytes(self) -> Self::BytesIter {
        [self.green, self.red, self.blue].into_iter()
    }
}

impl<'a, P> Pixel for &'a P
where
    P: Pixel + Clone,
{
    type BytesIter = <P as Pixel>::BytesIter;
    fn into_strip_bytes(self) -> Self::BytesIter {
        self.clone().into_strip_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn rgb_is_reordered_to_grb() {
        let bytes: Vec<u8> = [10u8, 20, 30].into_strip_bytes().collect();
        assert_eq!(bytes, [20, 10, 30]);
    }

    #[test]
    fn rgbw_is_passed_through() {
        let bytes: Vec<u8> = [1u8, 2, 3, 4].into_strip_bytes().collect();
        assert_eq!(bytes, [1, 2, 3, 4]);
    }

    #[test]
    fn linsrgb_is_reordered_to_grb() {
        let bytes: Vec<u8> = palette::LinSrgb::new(10u8, 20, 30)
            .into_strip_bytes()
            .collect();
        assert_eq!(bytes, [20, 10, 30]);
    }
}
