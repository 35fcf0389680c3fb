#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Strip`**: owns one strip's pixel buffer, timing and animation cursor
//! - **`Pixel`**: one LED's color + brightness percentage
//! - **`ProtocolTiming`**: bit period and duty levels derived from the timer clock
//! - **`Effect`**: the animation frame generators with their parameters
//! - **`Shade`**: palette selector for the diffuse effect
//! - **`PwmOutput`**: trait to implement for your PWM/DMA hardware
//!
//! Colors are `Srgb<u8>` (re-exported from `palette`); brightness is an
//! integer percentage 0-100 applied by truncating integer scaling. The
//! encoded frame is a sequence of `u16` compare values, one per PWM
//! period, ready for a memory-to-peripheral DMA transfer.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod effects;
pub mod encoder;
pub mod pixel;
pub mod shades;
pub mod strip;
pub mod timing;

pub use effects::{Effect, PULSE_STEP};
pub use pixel::Pixel;
pub use shades::{BATTERY_COLORS, BLUE_SHADES, PALETTE_LEN, RAINBOW, RED_SHADES, Shade};
pub use strip::{MAX_PIXELS, PwmOutput, Strip, StripError};
pub use timing::{
    BITS_PER_PIXEL, ProtocolTiming, RESET_SLOTS, TimingError, WS2812B_BIT_RATE_HZ,
};
