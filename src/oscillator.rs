//! Phase-accumulator oscillator state shared between the sample tick and
//! the UI pass.
//!
//! [`SharedVoice`] is the only state touched by both execution contexts:
//!
//! - The **sample tick** (highest priority) calls
//!   [`next_sample()`](SharedVoice::next_sample) once per tick. It is the
//!   only writer of the phase in steady state and reads the increment and
//!   attenuation.
//! - The **UI pass** (thread mode) writes the increment and attenuation
//!   individually, or all three fields at once through
//!   [`reset()`](SharedVoice::reset).
//!
//! Every field is an atomic, so single-field updates need no masking. The
//! multi-field reset runs inside a critical section; on a single-core target
//! the sample tick therefore sees either the old triple or the new one,
//! never a mix.

use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::sine::{sine_sample, BASELINE, TABLE_LENGTH};

/// Consistent copy of the oscillator fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoiceSnapshot {
    /// Position in the sine period, always `< TABLE_LENGTH`.
    pub phase: u32,
    /// Phase advance per sample tick (= output frequency in Hz).
    pub increment: u16,
    /// Right shift applied to the sine table (0 = loudest).
    pub attenuation: u8,
}

/// Oscillator state shared by the sample tick and the UI pass.
pub struct SharedVoice {
    phase: AtomicU32,
    increment: AtomicU16,
    attenuation: AtomicU8,
}

impl Default for SharedVoice {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedVoice {
    /// Silent voice at phase zero.
    pub const fn new() -> Self {
        Self {
            phase: AtomicU32::new(0),
            increment: AtomicU16::new(0),
            attenuation: AtomicU8::new(0),
        }
    }

    pub fn set_increment(&self, increment: u16) {
        self.increment.store(increment, Ordering::Relaxed);
    }

    pub fn set_attenuation(&self, attenuation: u8) {
        self.attenuation.store(attenuation, Ordering::Relaxed);
    }

    pub fn increment(&self) -> u16 {
        self.increment.load(Ordering::Relaxed)
    }

    pub fn attenuation(&self) -> u8 {
        self.attenuation.load(Ordering::Relaxed)
    }

    pub fn phase(&self) -> u32 {
        self.phase.load(Ordering::Relaxed)
    }

    /// Restart the waveform at phase zero with a new increment and
    /// attenuation, as one update.
    ///
    /// The sample tick is masked for the duration of the three stores.
    pub fn reset(&self, increment: u16, attenuation: u8) {
        critical_section::with(|_| {
            self.phase.store(0, Ordering::Relaxed);
            self.increment.store(increment, Ordering::Relaxed);
            self.attenuation.store(attenuation, Ordering::Relaxed);
        });
    }

    /// Read all fields as one consistent snapshot.
    pub fn snapshot(&self) -> VoiceSnapshot {
        critical_section::with(|_| VoiceSnapshot {
            phase: self.phase(),
            increment: self.increment(),
            attenuation: self.attenuation(),
        })
    }

    /// Produce the sample for the current phase, then advance the phase.
    ///
    /// This is the whole body of the sample tick. A zero increment is
    /// silence: the output holds at [`BASELINE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::oscillator::SharedVoice;
    /// use tonegen::sine::BASELINE;
    ///
    /// let voice = SharedVoice::new();
    /// voice.set_increment(440);
    /// assert_eq!(voice.next_sample(), BASELINE);
    /// assert!(voice.next_sample() > BASELINE);
    /// assert_eq!(voice.phase(), 880);
    /// ```
    pub fn next_sample(&self) -> u16 {
        let increment = self.increment.load(Ordering::Relaxed);
        let phase = self.phase.load(Ordering::Relaxed);

        let sample = if increment == 0 {
            BASELINE
        } else {
            sine_sample(phase, self.attenuation.load(Ordering::Relaxed))
        };

        self.phase
            .store((phase + increment as u32) % TABLE_LENGTH, Ordering::Relaxed);
        sample
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
