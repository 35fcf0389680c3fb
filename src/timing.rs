//! Protocol timing derived from the host timer configuration.
//!
//! A WS2812B bit occupies one PWM period. A logical `1` keeps the line
//! high for roughly 2/3 of the period, a logical `0` for roughly 1/3,
//! which lands both pulse widths inside the protocol's timing windows.
//! [`ProtocolTiming`] fixes the period and the two compare values once,
//! at configuration time; the encoder only copies them into the frame.

/// Bits shifted out per pixel (8 each for green, red, blue).
pub const BITS_PER_PIXEL: usize = 24;

/// Zero-duty slots appended after the pixel data.
///
/// At the conventional 800 kHz bit rate, 50 idle periods hold the line
/// low for the >= 50 us the strip needs to latch the frame.
pub const RESET_SLOTS: usize = 50;

/// The conventional WS2812B bit rate.
pub const WS2812B_BIT_RATE_HZ: u32 = 800_000;

/// Timing derivation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Bit rate of zero was requested.
    ZeroBitRate,

    /// The timer ticks too slowly to resolve distinct duty levels.
    BitPeriodTooShort {
        /// Ticks per bit at the requested rate.
        period: u32,
    },

    /// The bit period does not fit a 16-bit timer.
    BitPeriodTooLong {
        /// Ticks per bit at the requested rate.
        period: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroBitRate => {
                write!(f, "bit rate must be non-zero")
            }
            TimingError::BitPeriodTooShort { period } => {
                write!(
                    f,
                    "timer resolves only {} tick(s) per bit, need at least 3",
                    period
                )
            }
            TimingError::BitPeriodTooLong { period } => {
                write!(f, "bit period of {} ticks exceeds the 16-bit timer range", period)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// PWM timing parameters for one strip.
///
/// Holds the bit period in timer ticks, the two compare values encoding
/// a logical `1` and `0`, and the reset-gap slot count. Build one with
/// [`ProtocolTiming::from_clock`] or [`ProtocolTiming::ws2812b`] and
/// program your timer's auto-reload register from [`period`](Self::period)
/// (typically `period - 1` on STM32-style timers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolTiming {
    period: u16,
    duty_one: u16,
    duty_zero: u16,
    reset_slots: usize,
}

impl ProtocolTiming {
    /// Derives timing from the timer clock and a protocol bit rate.
    ///
    /// `clock_hz` is the timer's input clock; the counter ticks at
    /// `clock_hz / (prescaler + 1)`. The bit period is the number of
    /// ticks per protocol bit at `bit_rate_hz`, and the duty levels are
    /// fixed at 2/3 and 1/3 of it.
    ///
    /// # Errors
    /// * `ZeroBitRate` - `bit_rate_hz` is zero
    /// * `BitPeriodTooShort` - fewer than 3 ticks per bit; the two duty
    ///   levels would collapse into the reset level
    /// * `BitPeriodTooLong` - more than `u16::MAX` ticks per bit
    pub fn from_clock(
        clock_hz: u32,
        prescaler: u32,
        bit_rate_hz: u32,
    ) -> Result<Self, TimingError> {
        if bit_rate_hz == 0 {
            return Err(TimingError::ZeroBitRate);
        }

        let tick_hz = clock_hz / (prescaler + 1);
        let period = tick_hz / bit_rate_hz;

        if period < 3 {
            return Err(TimingError::BitPeriodTooShort { period });
        }
        if period > u32::from(u16::MAX) {
            return Err(TimingError::BitPeriodTooLong { period });
        }

        Ok(Self {
            period: period as u16,
            duty_one: (period * 2 / 3) as u16,
            duty_zero: (period / 3) as u16,
            reset_slots: RESET_SLOTS,
        })
    }

    /// Derives timing for the conventional 800 kHz WS2812B bit rate.
    pub fn ws2812b(clock_hz: u32, prescaler: u32) -> Result<Self, TimingError> {
        Self::from_clock(clock_hz, prescaler, WS2812B_BIT_RATE_HZ)
    }

    /// Ticks per protocol bit.
    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Compare value transmitted for a logical `1`.
    #[inline]
    pub fn duty_one(&self) -> u16 {
        self.duty_one
    }

    /// Compare value transmitted for a logical `0`.
    #[inline]
    pub fn duty_zero(&self) -> u16 {
        self.duty_zero
    }

    /// Zero-duty slots appended after the pixel data.
    #[inline]
    pub fn reset_slots(&self) -> usize {
        self.reset_slots
    }
}
