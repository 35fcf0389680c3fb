//! Read-only color tables for the palette-driven effects.

use palette::Srgb;

/// Entries per diffuse palette.
pub const PALETTE_LEN: usize = 12;

/// Palette selector for [`Strip::diffuse`](crate::strip::Strip::diffuse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shade {
    /// Full-spectrum rainbow.
    Rainbow,
    /// Light to dark blue and back.
    Blue,
    /// Light to saturated red and back.
    Red,
}

impl Shade {
    /// The color table this selector names.
    pub fn palette(self) -> &'static [Srgb<u8>; PALETTE_LEN] {
        match self {
            Shade::Rainbow => &RAINBOW,
            Shade::Blue => &BLUE_SHADES,
            Shade::Red => &RED_SHADES,
        }
    }
}

/// Twelve hues stepping red -> green -> blue -> back toward red.
pub static RAINBOW: [Srgb<u8>; PALETTE_LEN] = [
    Srgb::new(0xFF, 0x00, 0x00),
    Srgb::new(0xD5, 0x2A, 0x00),
    Srgb::new(0xAB, 0x7F, 0x00),
    Srgb::new(0xAB, 0xAB, 0x00),
    Srgb::new(0x56, 0xD5, 0x00),
    Srgb::new(0x00, 0xFF, 0x00),
    Srgb::new(0x00, 0xAB, 0x55),
    Srgb::new(0x00, 0x56, 0xAA),
    Srgb::new(0x00, 0x00, 0xFF),
    Srgb::new(0x55, 0x00, 0xAB),
    Srgb::new(0x7F, 0x00, 0x81),
    Srgb::new(0xAB, 0x00, 0x55),
];

/// Sky blue down to navy and back, symmetric around the middle.
pub static BLUE_SHADES: [Srgb<u8>; PALETTE_LEN] = [
    Srgb::new(0x87, 0xCE, 0xFA),
    Srgb::new(0x00, 0xBF, 0xFF),
    Srgb::new(0x1E, 0x90, 0xFF),
    Srgb::new(0x00, 0x00, 0xFF),
    Srgb::new(0x00, 0x00, 0xCD),
    Srgb::new(0x00, 0x00, 0x8B),
    Srgb::new(0x00, 0x00, 0x8B),
    Srgb::new(0x00, 0x00, 0xCD),
    Srgb::new(0x00, 0x00, 0xFF),
    Srgb::new(0x1E, 0x90, 0xFF),
    Srgb::new(0x00, 0xBF, 0xFF),
    Srgb::new(0x87, 0xCE, 0xFA),
];

/// Soft red down to pure red and back, symmetric around the middle.
pub static RED_SHADES: [Srgb<u8>; PALETTE_LEN] = [
    Srgb::new(0xFF, 0x40, 0x40),
    Srgb::new(0xFF, 0x33, 0x33),
    Srgb::new(0xFF, 0x26, 0x26),
    Srgb::new(0xFF, 0x19, 0x19),
    Srgb::new(0xFF, 0x0D, 0x0D),
    Srgb::new(0xFF, 0x00, 0x00),
    Srgb::new(0xFF, 0x00, 0x00),
    Srgb::new(0xFF, 0x0D, 0x0D),
    Srgb::new(0xFF, 0x19, 0x19),
    Srgb::new(0xFF, 0x26, 0x26),
    Srgb::new(0xFF, 0x33, 0x33),
    Srgb::new(0xFF, 0x40, 0x40),
];

/// Charge-level bands for the level indicator, full charge (green) down
/// to critical (dark red).
pub static BATTERY_COLORS: [Srgb<u8>; 5] = [
    Srgb::new(0x00, 0xFF, 0x00),
    Srgb::new(0xFF, 0xFF, 0x00),
    Srgb::new(0xFF, 0x80, 0x00),
    Srgb::new(0xFF, 0x00, 0x00),
    Srgb::new(0xCC, 0x00, 0x00),
];
