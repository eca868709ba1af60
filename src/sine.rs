//! Quarter-wave sine table and full-period lookup.
//!
//! Only the rising quarter of one period is stored. The remaining three
//! quarters are derived by mirroring the table index and inverting the
//! sample about [`BASELINE`]:
//!
//! ```text
//! quadrant:   0        1          2        3
//! index:      r        Q-1-r      r        Q-1-r
//! sign:       +        +          -        -
//! ```
//!
//! The full period is [`TABLE_LENGTH`] samples long, which is also the
//! sample tick rate in Hz. A phase increment of `k` per tick therefore
//! produces a tone of exactly `k` Hz.

/// Number of stored samples (one quarter of a period).
pub const QUARTER_LENGTH: usize = 10_000;

/// Length of one full period in samples.
pub const TABLE_LENGTH: u32 = 4 * QUARTER_LENGTH as u32;

/// Sample tick rate in Hz. Equal to [`TABLE_LENGTH`] by construction.
pub const SAMPLE_RATE_HZ: u32 = TABLE_LENGTH;

/// Output value corresponding to zero signal.
pub const BASELINE: u16 = 2048;

/// Peak deviation from [`BASELINE`] at zero attenuation.
pub const AMPLITUDE: u16 = 2047;

/// Largest value the audio output accepts (12-bit).
pub const OUTPUT_MAX: u16 = 4095;

/// Rising quarter of a sine wave scaled to `[0, AMPLITUDE]`.
///
/// Entry `i` is `round(AMPLITUDE * sin(2π * i / TABLE_LENGTH))`, evaluated
/// at compile time.
pub static SINE_QUARTER: [u16; QUARTER_LENGTH] = {
    let mut table = [0u16; QUARTER_LENGTH];
    let mut i = 0;
    while i < QUARTER_LENGTH {
        let angle = (i as f64) * core::f64::consts::FRAC_PI_2 / (QUARTER_LENGTH as f64);
        table[i] = (quarter_sin(angle) * AMPLITUDE as f64 + 0.5) as u16;
        i += 1;
    }
    table
};

/// Taylor expansion of `sin(x)`, accurate to ~1e-7 on `[0, π/2]`.
const fn quarter_sin(x: f64) -> f64 {
    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let x9 = x7 * x2;
    let x11 = x9 * x2;

    x - x3 / 6.0 + x5 / 120.0 - x7 / 5040.0 + x9 / 362_880.0 - x11 / 39_916_800.0
}

/// Return the full-period sample at phase `x`, attenuated by `downshift`.
///
/// `x` is reduced modulo [`TABLE_LENGTH`]. Each step of `downshift` halves
/// the amplitude; once it exceeds the table's bit width the result is
/// [`BASELINE`].
///
/// # Examples
///
/// ```
/// use tonegen::sine::{sine_sample, BASELINE, QUARTER_LENGTH};
///
/// assert_eq!(sine_sample(0, 0), BASELINE);
/// // Peak of the first quadrant, then mirrored below the baseline.
/// assert_eq!(sine_sample(QUARTER_LENGTH as u32, 0), 4095);
/// assert_eq!(sine_sample(3 * QUARTER_LENGTH as u32, 0), 1);
/// ```
pub fn sine_sample(x: u32, downshift: u8) -> u16 {
    let x = (x % TABLE_LENGTH) as usize;
    let quadrant = x / QUARTER_LENGTH;
    let offset = x % QUARTER_LENGTH;

    let index = if quadrant & 1 == 0 {
        offset
    } else {
        QUARTER_LENGTH - 1 - offset
    };

    let magnitude = SINE_QUARTER[index]
        .checked_shr(downshift as u32)
        .unwrap_or(0) as i32;
    let deviation = if quadrant < 2 { magnitude } else { -magnitude };

    (BASELINE as i32 + deviation).clamp(0, OUTPUT_MAX as i32) as u16
}

// ── Tests ────────────────────────────────────────────────────────────────
