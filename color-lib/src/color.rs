#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub const fn from_hex(hex: u32) -> sRGB {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

pub fn as_index(c: &sRGB) -> usize {
    // RGB order, same as the hex literal.
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!("#000000", to_string(&[0x00, 0x00, 0x00]));
        assert_eq!("#FFFFFF", to_string(&[0xFF, 0xFF, 0xFF]));
        assert_eq!("#6E2C90", to_string(&[0x6E, 0x2C, 0x90]));
        // Leading zeros are kept.
        assert_eq!("#0D0D0D", to_string(&[0x0D, 0x0D, 0x0D]));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!([0x39, 0xFF, 0x14], from_hex(0x39FF14));
        assert_eq!(0xFF6B00, as_index(&from_hex(0xFF6B00)));
    }
}
