//! tonegen-firmware
//!
//! Single-voice tone generator for the Raspberry Pi Pico 2. Runs the three
//! contexts of the `tonegen` core on separate executors:
//!
//! 1. **Sample tick** (`SWI_IRQ_1`, highest priority): 40 kHz ticker that
//!    pulls one sample from the shared voice and writes it to the PWM.
//! 2. **Heartbeat** (`SWI_IRQ_0`): 100 Hz ticker that marks UI work
//!    pending and advances the state timer.
//! 3. **UI loop** (thread mode): waits for the heartbeat, reads and
//!    debounces the switches, runs the state machine and refreshes the
//!    volume LEDs.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::{self, Pwm, PwmOutput};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tonegen::sine::OUTPUT_MAX;
use tonegen::tasks::{heartbeat_task, sample_task, ui_task};
use tonegen::{Heartbeat, LedBar, Polarity, PwmAudio, SharedVoice, SwitchBank, UiController};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Executors and static storage
// ---------------------------------------------------------------------------

static EXECUTOR_AUDIO: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_HEARTBEAT: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_AUDIO.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_HEARTBEAT.on_interrupt()
}

/// Oscillator state: tuned by the UI loop, advanced by the sample tick.
static VOICE: StaticCell<SharedVoice> = StaticCell::new();

/// Pending flag and state timer between the heartbeat and the UI loop.
static HEARTBEAT: StaticCell<Heartbeat> = StaticCell::new();

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

// Thin wrappers that monomorphise the generic loops so they can be spawned
// as concrete Embassy tasks.

#[embassy_executor::task]
async fn audio_task(audio: PwmAudio<PwmOutput<'static>>, voice: &'static SharedVoice) {
    sample_task(audio, voice).await
}

#[embassy_executor::task]
async fn tick_task(heartbeat: &'static Heartbeat) {
    heartbeat_task(heartbeat).await
}

#[embassy_executor::task]
async fn panel_task(
    ui: UiController,
    switches: SwitchBank<Input<'static>>,
    leds: LedBar<Output<'static>>,
    heartbeat: &'static Heartbeat,
    voice: &'static SharedVoice,
) {
    ui_task(ui, switches, leds, heartbeat, voice).await
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("tonegen-firmware starting");

    // ── Pin assignments ───────────────────────────────────────────────────────
    // AUDIO    → GP0         PWM slice 0 channel A, RC-filtered
    // SW0..SW7 → GP2..GP9    active-low, pull-up enabled
    // LED0..7  → GP10..GP17  active-low (LED sinks into the pin)
    // ──────────────────────────────────────────────────────────────────────────

    // 12-bit PWM: duty counts 0..=OUTPUT_MAX match the sample range.
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = OUTPUT_MAX;
    pwm_config.compare_a = OUTPUT_MAX / 2 + 1;
    let (audio_out, _) = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, pwm_config).split();
    let audio = PwmAudio::new(unwrap!(audio_out));

    let switches = SwitchBank::new(
        [
            Input::new(p.PIN_2, Pull::Up),
            Input::new(p.PIN_3, Pull::Up),
            Input::new(p.PIN_4, Pull::Up),
            Input::new(p.PIN_5, Pull::Up),
            Input::new(p.PIN_6, Pull::Up),
            Input::new(p.PIN_7, Pull::Up),
            Input::new(p.PIN_8, Pull::Up),
            Input::new(p.PIN_9, Pull::Up),
        ],
        Polarity::ActiveLow,
    );

    // Start dark; the UI loop lights the volume bar on its first pass.
    let leds = LedBar::new(
        [
            Output::new(p.PIN_10, Level::High),
            Output::new(p.PIN_11, Level::High),
            Output::new(p.PIN_12, Level::High),
            Output::new(p.PIN_13, Level::High),
            Output::new(p.PIN_14, Level::High),
            Output::new(p.PIN_15, Level::High),
            Output::new(p.PIN_16, Level::High),
            Output::new(p.PIN_17, Level::High),
        ],
        Polarity::ActiveLow,
    );

    let voice: &'static SharedVoice = VOICE.init(SharedVoice::new());
    let heartbeat: &'static Heartbeat = HEARTBEAT.init(Heartbeat::new());

    // ── Spawn tasks ───────────────────────────────────────────────────────────

    // The sample tick must preempt the heartbeat, which must preempt the UI.
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let audio_spawner = EXECUTOR_AUDIO.start(interrupt::SWI_IRQ_1);
    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let heartbeat_spawner = EXECUTOR_HEARTBEAT.start(interrupt::SWI_IRQ_0);

    audio_spawner.spawn(unwrap!(audio_task(audio, voice)));
    heartbeat_spawner.spawn(unwrap!(tick_task(heartbeat)));
    spawner.spawn(unwrap!(panel_task(
        UiController::default(),
        switches,
        leds,
        heartbeat,
        voice,
    )));

    info!("All tasks spawned");
}
