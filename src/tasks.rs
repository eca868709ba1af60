//! Periodic loops for the three execution contexts.
//!
//! These are plain `async fn`s, **not** Embassy `#[task]`s, since Embassy
//! tasks cannot be generic over pin types. The firmware wraps each one in
//! a thin concrete task:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn audio_task(audio: PwmAudio<PwmOutput<'static>>, voice: &'static SharedVoice) {
//!     sample_task(audio, voice).await
//! }
//! ```
//!
//! Run [`sample_task`] on the highest-priority executor and
//! [`heartbeat_task`] on one above the thread-mode executor that runs
//! [`ui_task`].

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::heartbeat::{Heartbeat, HEARTBEAT_PERIOD_MS};
use crate::io::{LedBar, PwmAudio, SwitchBank};
use crate::oscillator::SharedVoice;
use crate::sine::SAMPLE_RATE_HZ;
use crate::ui::UiController;

// ── Sample tick ──────────────────────────────────────────────────────────

/// Emit one oscillator sample per period of [`SAMPLE_RATE_HZ`].
///
/// A rejected duty cycle is logged and the next sample goes out as usual.
pub async fn sample_task<P>(mut audio: PwmAudio<P>, voice: &SharedVoice)
where
    P: SetDutyCycle,
{
    let mut ticker = Ticker::every(Duration::from_hz(SAMPLE_RATE_HZ as u64));

    loop {
        ticker.next().await;

        if let Err(_e) = audio.write(voice.next_sample()) {
            #[cfg(feature = "defmt")]
            defmt::error!("{}", _e);
        }
    }
}

// ── Heartbeat ────────────────────────────────────────────────────────────

/// Tick `heartbeat` every [`HEARTBEAT_PERIOD_MS`]. Does no other work.
pub async fn heartbeat_task(heartbeat: &Heartbeat) {
    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_PERIOD_MS as u64));

    loop {
        ticker.next().await;
        heartbeat.tick();
    }
}

// ── UI loop ──────────────────────────────────────────────────────────────

/// Background UI loop.
///
/// Pushes the initial settings to `voice` and the volume bar to `leds`,
/// then runs one [`UiController::service()`] pass per heartbeat wake-up.
/// Ticks that arrive during a pass are collapsed into the next one.
pub async fn ui_task<I, O>(
    mut ui: UiController,
    mut switches: SwitchBank<I>,
    mut leds: LedBar<O>,
    heartbeat: &Heartbeat,
    voice: &SharedVoice,
)
where
    I: InputPin,
    O: OutputPin,
{
    let bar = ui.start(voice);
    if let Err(_e) = leds.write(bar) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Volume display not initialised: {}", _e);
    }

    #[cfg(feature = "defmt")]
    defmt::info!("UI ready: {}", ui.settings());

    heartbeat.restart();

    loop {
        heartbeat.wait().await;
        ui.service(&mut switches, &mut leds, heartbeat, voice);
    }
}
