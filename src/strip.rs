//! Strip state, lifecycle and rendering.
//!
//! Provides [`Strip`] which owns one LED strip's pixel buffer, protocol
//! timing and animation cursor, and the [`PwmOutput`] trait abstracting
//! the timer/DMA glue that shifts an encoded frame onto the wire.

use crate::encoder;
use crate::pixel::Pixel;
use crate::timing::{BITS_PER_PIXEL, ProtocolTiming, RESET_SLOTS};
use heapless::Vec;
use palette::Srgb;

/// Maximum number of pixels a strip can drive.
pub const MAX_PIXELS: usize = 30;

/// Duty buffer capacity: a full-length frame plus the reset gap.
const DUTY_CAPACITY: usize = MAX_PIXELS * BITS_PER_PIXEL + RESET_SLOTS;

/// Initial pixel brightness; the color is zero so the strip shows off.
const NEUTRAL_BRIGHTNESS: u8 = 100;

/// Trait for abstracting the PWM transmission hardware.
///
/// Implement this for your timer/DMA combination. The strip calls
/// [`transmit`](Self::transmit) with the fully encoded frame; the
/// implementation starts shifting it out and returns without waiting
/// for completion. Handle any hardware errors internally - this method
/// cannot fail.
pub trait PwmOutput {
    /// Emits one encoded frame.
    ///
    /// `duty` holds one compare value per PWM period: 24 slots per
    /// pixel followed by the zero-duty reset gap. The slice is only
    /// valid for the duration of the call; copy it or point the DMA
    /// engine at stable storage before returning.
    fn transmit(&mut self, duty: &[u16]);
}

/// Errors that can occur when constructing a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// A strip needs at least one pixel.
    ZeroLength,

    /// Requested length exceeds [`MAX_PIXELS`].
    LengthExceedsCapacity {
        /// The requested pixel count.
        requested: usize,
        /// The supported maximum.
        capacity: usize,
    },
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::ZeroLength => {
                write!(f, "strip length must be at least one pixel")
            }
            StripError::LengthExceedsCapacity {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "strip length {} exceeds the supported maximum of {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

/// Drives a single WS2812B-class LED strip.
///
/// Owns the pixel buffer, the duty-cycle output buffer and the progress
/// cursor the animation effects advance. Exactly one call site mutates
/// a strip between renders; the borrow checker enforces the single
/// logical owner the protocol requires.
///
/// A strip starts displayed-off: construction encodes and transmits one
/// all-off frame.
///
/// # Type Parameters
/// * `O` - PWM transmission implementation
pub struct Strip<O: PwmOutput> {
    output: O,
    timing: ProtocolTiming,
    pub(crate) pixels: Vec<Pixel, MAX_PIXELS>,
    duty: [u16; DUTY_CAPACITY],
    pub(crate) progress: i32,
    pub(crate) direction: i32,
}

impl<O: PwmOutput> Strip<O> {
    /// Creates a strip of `length` pixels and renders it off.
    ///
    /// # Errors
    /// * `ZeroLength` - `length` is zero
    /// * `LengthExceedsCapacity` - `length` exceeds [`MAX_PIXELS`];
    ///   lengths are rejected here, never truncated
    pub fn new(length: usize, timing: ProtocolTiming, output: O) -> Result<Self, StripError> {
        if length == 0 {
            return Err(StripError::ZeroLength);
        }

        let mut pixels = Vec::new();
        if pixels
            .resize(length, Pixel::new(Srgb::new(0, 0, 0), NEUTRAL_BRIGHTNESS))
            .is_err()
        {
            return Err(StripError::LengthExceedsCapacity {
                requested: length,
                capacity: MAX_PIXELS,
            });
        }

        let mut strip = Self {
            output,
            timing,
            pixels,
            duty: [0; DUTY_CAPACITY],
            progress: 0,
            direction: crate::effects::PULSE_STEP,
        };
        strip.render();
        Ok(strip)
    }

    /// Encodes the pixel buffer and hands the frame to the output.
    ///
    /// The transmitted slice covers `len() * 24` data slots plus the
    /// reset gap. Rendering recomputes the whole frame; the duty buffer
    /// carries no state of its own.
    pub fn render(&mut self) {
        let written = encoder::encode_frame(&self.pixels, &self.timing, &mut self.duty);
        self.output.transmit(&self.duty[..written]);
    }

    /// Sets pixel `index` to `color` and every other pixel to off.
    ///
    /// An out-of-range index turns the whole strip off.
    pub fn set_one(&mut self, color: Pixel, index: usize) {
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if j == index { color } else { Pixel::OFF };
        }
    }

    /// Sets every pixel to `color`.
    pub fn all_on(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    /// Turns every pixel off.
    pub fn all_off(&mut self) {
        self.all_on(Pixel::OFF);
    }

    /// Number of pixels on the strip.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; a strip has at least one pixel by construction.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel buffer as last written by an effect or primitive.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The animation cursor. Its meaning depends on the effect last
    /// applied: an index, a parity, a brightness percentage or a
    /// palette phase.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Resets the animation cursor for switching between effects.
    ///
    /// Returns `progress` to zero and the pulse direction to its
    /// initial upward step. Call this before handing the strip to a
    /// different effect family.
    pub fn reset_progress(&mut self) {
        self.progress = 0;
        self.direction = crate::effects::PULSE_STEP;
    }

    /// The timing parameters the strip was built with.
    pub fn timing(&self) -> &ProtocolTiming {
        &self.timing
    }

    /// The duty-cycle frame as last encoded by [`render`](Self::render).
    pub fn frame(&self) -> &[u16] {
        &self.duty[..self.frame_len()]
    }

    /// Releases the strip and hands the transmission hardware back.
    pub fn release(self) -> O {
        self.output
    }

    fn frame_len(&self) -> usize {
        self.pixels.len() * BITS_PER_PIXEL + self.timing.reset_slots()
    }
}
