//! Frame-by-frame animation effects.
//!
//! Every effect computes the next frame's pixel values from the current
//! pixel buffer, the strip's progress cursor and the caller-supplied
//! parameters, then advances the cursor. Calling an effect N times
//! produces the same frames as one call per cursor value; nothing here
//! reads a clock. The caller owns the cadence: invoke one effect, then
//! [`Strip::render`], once per frame interval.
//!
//! Effects only write the pixel buffer; none of them transmit.

use crate::pixel::Pixel;
use crate::shades::{BATTERY_COLORS, PALETTE_LEN, Shade};
use crate::strip::{PwmOutput, Strip};
use palette::Srgb;

/// Brightness step the pulsate effect applies each frame.
pub const PULSE_STEP: i32 = 5;

/// One animation frame's worth of effect, with its parameters.
///
/// Dispatched by [`Strip::apply`]; every variant maps to the strip
/// method of the same name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Toggle the whole strip between off and `color`.
    Blink {
        /// Color shown on the odd frames.
        color: Srgb<u8>,
    },
    /// March a single `moving` pixel toward higher indices.
    MoveLeft {
        /// Color of the moving pixel.
        moving: Pixel,
        /// Color of every other pixel.
        background: Pixel,
    },
    /// March a single `moving` pixel toward lower indices.
    MoveRight {
        /// Color of the moving pixel.
        moving: Pixel,
        /// Color of every other pixel.
        background: Pixel,
    },
    /// Two moving pixels meet in the middle.
    Converge {
        /// Color of the moving pixels.
        moving: Pixel,
        /// Color of every other pixel.
        background: Pixel,
    },
    /// Two moving pixels part from the middle outward.
    Diverge {
        /// Color of the moving pixels.
        moving: Pixel,
        /// Color of every other pixel.
        background: Pixel,
    },
    /// A pixel sweeping toward higher indices with a fading tail.
    FadeLeft {
        /// Color of the sweep.
        color: Srgb<u8>,
    },
    /// A pixel sweeping toward lower indices with a fading tail.
    FadeRight {
        /// Color of the sweep.
        color: Srgb<u8>,
    },
    /// Scroll one of the fixed twelve-entry palettes along the strip.
    Diffuse {
        /// Which palette to scroll.
        shade: Shade,
    },
    /// Alternate two colors between even and odd pixels.
    GlowAlternate {
        /// Color of the matching parity.
        first: Pixel,
        /// Color of the opposite parity.
        second: Pixel,
    },
    /// Breathe the whole strip's brightness up and down.
    Pulsate {
        /// Color being breathed.
        color: Srgb<u8>,
    },
    /// Battery-style charge gauge; stateless.
    LevelIndicator {
        /// Charge percentage, 0-100.
        level: u8,
    },
}

/// Which way a sweep's cursor travels.
#[derive(Clone, Copy)]
enum SweepDir {
    Forward,
    Backward,
}

impl<O: PwmOutput> Strip<O> {
    /// Advances one frame of `effect`.
    ///
    /// Convenience dispatch mirroring the individual effect methods, for
    /// callers that route effect selection through data.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Blink { color } => self.blink(color),
            Effect::MoveLeft { moving, background } => self.move_left(moving, background),
            Effect::MoveRight { moving, background } => self.move_right(moving, background),
            Effect::Converge { moving, background } => self.converge(moving, background),
            Effect::Diverge { moving, background } => self.diverge(moving, background),
            Effect::FadeLeft { color } => self.fade_left(color),
            Effect::FadeRight { color } => self.fade_right(color),
            Effect::Diffuse { shade } => self.diffuse(shade),
            Effect::GlowAlternate { first, second } => self.glow_alternate(first, second),
            Effect::Pulsate { color } => {
                self.pulsate(color);
            }
            Effect::LevelIndicator { level } => self.level_indicator(level),
        }
    }

    /// Toggles the whole strip between off and `color` at full
    /// brightness. Odd cursor values show the color; only parity
    /// matters, the cursor counts up indefinitely.
    pub fn blink(&mut self, color: Srgb<u8>) {
        let brightness = if self.progress % 2 != 0 { 100 } else { 0 };
        self.all_on(Pixel::new(color, brightness));
        self.progress = self.progress.wrapping_add(1);
    }

    /// One `moving` pixel walks toward higher indices, wrapping at the
    /// end of the strip; every other pixel shows `background`.
    pub fn move_left(&mut self, moving: Pixel, background: Pixel) {
        let last = self.pixels.len() as i32 - 1;
        self.sweep(moving, background, |j, p| j == p);
        self.advance(SweepDir::Forward, last);
    }

    /// Mirror of [`move_left`](Self::move_left): the pixel walks toward
    /// lower indices and wraps at index zero.
    pub fn move_right(&mut self, moving: Pixel, background: Pixel) {
        let last = self.pixels.len() as i32 - 1;
        self.sweep(moving, background, |j, p| j == p);
        self.advance(SweepDir::Backward, last);
    }

    /// Two `moving` pixels close in on the middle from both ends.
    ///
    /// Pixels `p` and `len-1-p` light up each frame; the cursor resets
    /// to zero one frame after reaching the midpoint, so the center
    /// frame shows twice per cycle on even-length strips.
    pub fn converge(&mut self, moving: Pixel, background: Pixel) {
        let last = self.pixels.len() as i32 - 1;
        let mid = self.pixels.len() as i32 / 2;
        self.sweep(moving, background, |j, p| j == p || j == last - p);
        self.advance(SweepDir::Forward, mid);
    }

    /// Mirror of [`converge`](Self::converge): the pair parts from the
    /// middle outward, the cursor wrapping back to the midpoint below
    /// zero.
    pub fn diverge(&mut self, moving: Pixel, background: Pixel) {
        let last = self.pixels.len() as i32 - 1;
        let mid = self.pixels.len() as i32 / 2;
        self.sweep(moving, background, |j, p| j == p || j == last - p);
        self.advance(SweepDir::Backward, mid);
    }

    /// A full-brightness pixel sweeps toward higher indices trailing a
    /// tail at 75%, 50% and 25% brightness behind it (wrapping across
    /// the strip ends); everything else is dark.
    pub fn fade_left(&mut self, color: Srgb<u8>) {
        let len = self.pixels.len() as i32;
        let p = self.progress;
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            let distance = (p - j as i32).rem_euclid(len);
            *pixel = Pixel::new(color, trail_brightness(distance));
        }
        self.advance(SweepDir::Forward, len - 1);
    }

    /// Mirror of [`fade_left`](Self::fade_left): the sweep runs toward
    /// lower indices with the tail on the forward side.
    pub fn fade_right(&mut self, color: Srgb<u8>) {
        let len = self.pixels.len() as i32;
        let p = self.progress;
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            let distance = (j as i32 - p).rem_euclid(len);
            *pixel = Pixel::new(color, trail_brightness(distance));
        }
        self.advance(SweepDir::Backward, len - 1);
    }

    /// Scrolls the selected twelve-entry palette along the strip at
    /// full brightness: pixel `j` shows palette entry `(p + j) mod 12`.
    pub fn diffuse(&mut self, shade: Shade) {
        let palette = shade.palette();
        let p = self.progress;
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            let index = p.wrapping_add(j as i32).rem_euclid(PALETTE_LEN as i32) as usize;
            *pixel = Pixel::new(palette[index], 100);
        }
        self.progress = self.progress.wrapping_add(1);
    }

    /// Swaps `first` and `second` between even and odd pixels each
    /// frame. The cursor toggles between 0 and 1.
    pub fn glow_alternate(&mut self, first: Pixel, second: Pixel) {
        let p = self.progress;
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if (j % 2) as i32 == p { first } else { second };
        }
        self.progress = if self.progress == 0 { 1 } else { 0 };
    }

    /// Breathes the whole strip: every pixel shows `color` at a
    /// brightness that climbs and falls in [`PULSE_STEP`] increments.
    ///
    /// The cursor is the brightness percentage. When a step carries it
    /// outside 0-100 the direction flips and the cursor is stepped back
    /// into range before use, so each endpoint holds for two frames of
    /// the triangular waveform.
    ///
    /// Returns the brightness applied this frame.
    pub fn pulsate(&mut self, color: Srgb<u8>) -> u8 {
        if self.progress > 100 || self.progress < 0 {
            self.direction = -self.direction;
            self.progress += self.direction;
        }

        let level = self.progress as u8;
        self.all_on(Pixel::new(color, level));
        self.progress += self.direction;
        level
    }

    /// Battery-style charge gauge. Not cursor-driven: the frame is a
    /// pure function of `level`.
    ///
    /// The threshold index is the smallest `j` with
    /// `level <= 100 * j / len` (integer division), counted down from
    /// the top of the strip; pixels above it light at full brightness
    /// in the [`BATTERY_COLORS`] band for their distance from the top,
    /// bucketed in groups of `ceil(len / 5)`. `level` 0 lights nothing,
    /// 100 lights the whole strip green, values above 100 light
    /// nothing.
    pub fn level_indicator(&mut self, level: u8) {
        let len = self.pixels.len();

        let mut stop = 0;
        for j in 0..=len {
            if u32::from(level) <= (100 * j as u32) / len as u32 {
                stop = j as i32;
                break;
            }
        }

        let threshold = len as i32 - 1 - stop;
        let group = (len / 5 + usize::from(len % 5 != 0)) as i32;
        let band = (threshold / group).clamp(0, 4) as usize;
        let lit = Pixel::new(BATTERY_COLORS[band], 100);

        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if j as i32 > threshold { lit } else { Pixel::OFF };
        }
    }

    /// Paints every pixel `moving` or `background` according to the
    /// index rule, evaluated against the current cursor.
    fn sweep(&mut self, moving: Pixel, background: Pixel, lit: impl Fn(i32, i32) -> bool) {
        let p = self.progress;
        for (j, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if lit(j as i32, p) { moving } else { background };
        }
    }

    /// Steps the cursor one frame in `dir`, wrapping at `edge`:
    /// forward runs 0..=edge then restarts at zero, backward runs
    /// edge..=0 then restarts at `edge`.
    fn advance(&mut self, dir: SweepDir, edge: i32) {
        self.progress = match dir {
            SweepDir::Forward => {
                if self.progress == edge {
                    0
                } else {
                    self.progress + 1
                }
            }
            SweepDir::Backward => {
                if self.progress == 0 {
                    edge
                } else {
                    self.progress - 1
                }
            }
        };
    }
}

/// Tail brightness for the fading sweeps by distance from the cursor.
fn trail_brightness(distance: i32) -> u8 {
    match distance {
        0 => 100,
        1 => 75,
        2 => 50,
        3 => 25,
        _ => 0,
    }
}
