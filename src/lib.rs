//! Single-voice tone generator core.
//!
//! Everything here is hardware independent and runs on the host for tests.
//! The pieces are:
//!
//! - [`sine`]: compile-time quarter-wave table and the 12-bit sample lookup.
//! - [`oscillator`]: the phase accumulator shared with the sample interrupt.
//! - [`notes`]: the 13 × 10 note/octave frequency table.
//! - [`debounce`]: per-switch hysteresis filters.
//! - [`settings`]: note, octave and volume with their clamped edits.
//! - [`melody`]: the autoplay score and its cursor.
//! - [`heartbeat`]: pending flag and elapsed-time counter for the UI loop.
//! - [`ui`]: the state machine tying the above together.
//! - [`io`]: `embedded-hal` bindings for switches, LEDs and PWM audio.
//!
//! # Concurrency
//!
//! Three contexts share state:
//!
//! ```text
//!  sample tick (40 kHz, highest) ── SharedVoice::next_sample() ──► PwmAudio
//!  heartbeat   (100 Hz)          ── Heartbeat::tick()
//!  UI loop     (background)      ── Heartbeat::wait() → UiController::service()
//! ```
//!
//! The UI loop is the only writer of the voice's increment and attenuation;
//! the sample tick is the only writer of its phase.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).
//! - **`task`**: the [`tasks`] loops, driven by `embassy-time` tickers.

#![cfg_attr(not(test), no_std)]

pub mod debounce;
pub mod error;
pub mod heartbeat;
pub mod io;
pub mod melody;
pub mod notes;
pub mod oscillator;
pub mod settings;
pub mod sine;
#[cfg(feature = "task")]
pub mod tasks;
pub mod ui;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use debounce::{SwitchDebouncer, SwitchFilter};
pub use error::IoError;
pub use heartbeat::Heartbeat;
pub use io::{LedBar, Polarity, PwmAudio, SwitchBank};
pub use melody::MelodySequencer;
pub use notes::Note;
pub use oscillator::SharedVoice;
pub use settings::Settings;
pub use ui::UiController;
