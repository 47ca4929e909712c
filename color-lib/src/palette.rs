//! The EVA Unit-01 palette used by the Memora icon.

use crate::color::{from_hex, sRGB};

/// Named colors of the icon. One field per name, so every color the
/// document asks for is known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Unit-01 purple, main armor color.
    pub purple: sRGB,
    /// Unit-01 green, glow highlights.
    pub green: sRGB,
    /// EVA orange, accents and the letter mark.
    pub orange: sRGB,
    /// Deep space black, background.
    pub black: sRGB,
    /// Armor shadow.
    pub dark_purple: sRGB,
    /// Hex grid lines.
    pub grid: sRGB,
}

impl Palette {
    pub const EVA: Palette = Palette {
        purple: from_hex(0x6E2C90),
        green: from_hex(0x39FF14),
        orange: from_hex(0xFF6B00),
        black: from_hex(0x0D0D0D),
        dark_purple: from_hex(0x501870),
        grid: from_hex(0x1A1A1A),
    };

    /// Semantic name to color, in declaration order.
    pub fn entries(&self) -> [(&'static str, sRGB); 6] {
        [
            ("purple", self.purple),
            ("green", self.green),
            ("orange", self.orange),
            ("black", self.black),
            ("dark_purple", self.dark_purple),
            ("grid", self.grid),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_string;
    use itertools::Itertools;

    #[test]
    fn test_eva_hex_values() {
        let hex: Vec<(&str, String)> = Palette::EVA
            .entries()
            .iter()
            .map(|(name, c)| (*name, to_string(c)))
            .collect();
        assert_eq!(
            vec![
                ("purple", "#6E2C90".to_string()),
                ("green", "#39FF14".to_string()),
                ("orange", "#FF6B00".to_string()),
                ("black", "#0D0D0D".to_string()),
                ("dark_purple", "#501870".to_string()),
                ("grid", "#1A1A1A".to_string()),
            ],
            hex
        );
    }

    #[test]
    fn test_entries_are_distinct() {
        let entries = Palette::EVA.entries();
        assert!(entries.iter().map(|(n, _)| n).all_unique());
        assert!(entries.iter().map(|(_, c)| c).all_unique());
    }
}
