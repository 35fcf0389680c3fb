//! Shared test infrastructure for ws2812-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use ws2812_strip::{ProtocolTiming, PwmOutput};

// ============================================================================
// Colors
// ============================================================================

pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);

// ============================================================================
// Timing
// ============================================================================

/// Timing used across tests: 72 MHz timer clock, no prescaler, 800 kHz.
/// Period 90, duty 60/30.
pub fn test_timing() -> ProtocolTiming {
    ProtocolTiming::ws2812b(72_000_000, 0).unwrap()
}

// ============================================================================
// Mock PWM output
// ============================================================================

/// Mock transmission adapter that records every frame handed to it.
///
/// Recover it with `Strip::release` to inspect what was transmitted.
pub struct RecordingPwm {
    pub frames: Vec<Vec<u16>>,
}

impl RecordingPwm {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn last_frame(&self) -> &[u16] {
        self.frames.last().expect("no frame transmitted")
    }
}

impl PwmOutput for RecordingPwm {
    fn transmit(&mut self, duty: &[u16]) {
        self.frames.push(duty.to_vec());
    }
}

// ============================================================================
// Frame decoding
// ============================================================================

/// Decodes the data slots of a frame back into packed 24-bit colors.
///
/// Panics if a data slot carries anything but the two duty levels.
pub fn decode_colors(duty: &[u16], timing: &ProtocolTiming, pixel_count: usize) -> Vec<u32> {
    (0..pixel_count)
        .map(|p| {
            let mut packed = 0_u32;
            for bit in 0..24 {
                let slot = duty[p * 24 + bit];
                packed <<= 1;
                if slot == timing.duty_one() {
                    packed |= 1;
                } else {
                    assert_eq!(slot, timing.duty_zero(), "unexpected duty value in data slot");
                }
            }
            packed
        })
        .collect()
}
