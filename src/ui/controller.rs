use embedded_hal::digital::{InputPin, OutputPin};

use crate::debounce::SwitchDebouncer;
use crate::heartbeat::Heartbeat;
use crate::io::{LedBar, SwitchBank};
use crate::melody::{MelodySequencer, GAP_MS, NOTE_DURATION_MS};
use crate::notes::Note;
use crate::oscillator::SharedVoice;
use crate::settings::Settings;

use super::bindings::SwitchBindings;
use super::state::{UiAction, UiState};

/// The UI state machine.
///
/// Owns the debouncer, the user settings and the melody sequencer, and is
/// the only writer of the oscillator's increment and attenuation. Driven
/// by one [`poll()`](Self::poll) per heartbeat pass.
pub struct UiController {
    state: UiState,
    settings: Settings,
    debouncer: SwitchDebouncer,
    bindings: SwitchBindings,
    melody: MelodySequencer,
}

impl Default for UiController {
    fn default() -> Self {
        Self::new(MelodySequencer::default())
    }
}

impl UiController {
    /// Controller with the default switch wiring.
    pub fn new(melody: MelodySequencer) -> Self {
        Self::with_bindings(melody, SwitchBindings::default())
    }

    pub fn with_bindings(melody: MelodySequencer, bindings: SwitchBindings) -> Self {
        Self {
            state: UiState::Idle,
            settings: Settings::default(),
            debouncer: SwitchDebouncer::new(),
            bindings,
            melody,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn debouncer(&self) -> &SwitchDebouncer {
        &self.debouncer
    }

    pub fn melody(&self) -> &MelodySequencer {
        &self.melody
    }

    /// Push the current settings to the oscillator and return the LED bar
    /// pattern to display. Call once before the first heartbeat.
    pub fn start(&self, voice: &SharedVoice) -> u8 {
        voice.set_increment(self.settings.frequency());
        voice.set_attenuation(self.settings.attenuation());
        self.settings.volume_bar()
    }

    /// Run one heartbeat pass: debounce `levels`, then evaluate the state
    /// machine against the time spent in the current state.
    ///
    /// Returns the new LED bar pattern when the volume display must be
    /// refreshed.
    pub fn poll(&mut self, levels: u8, clock: &Heartbeat, voice: &SharedVoice) -> Option<u8> {
        self.debouncer.update(levels);

        let elapsed = clock.elapsed_ms();
        let mut display = None;

        let next = match self.state {
            UiState::Idle => self
                .bindings
                .first_pressed(&self.debouncer)
                .map(UiAction::pressed_state),
            UiState::StartPressed => {
                if self.bindings.is_on(UiAction::StartStop, &self.debouncer) {
                    None
                } else {
                    self.melody.restart();
                    Some(UiState::ScoreGap)
                }
            }
            UiState::StopPressed => Some(UiState::Idle),
            UiState::ScoreGap => {
                if elapsed >= GAP_MS {
                    let next = match self.melody.next_note() {
                        Some(note) => {
                            self.settings.set_note(note);
                            UiState::ScoreNote
                        }
                        None => {
                            self.settings.set_note(Note::Rest);
                            UiState::Idle
                        }
                    };
                    voice.set_increment(self.settings.frequency());
                    Some(next)
                } else {
                    None
                }
            }
            UiState::ScoreNote => {
                if elapsed >= NOTE_DURATION_MS {
                    self.settings.set_note(Note::Rest);
                    voice.set_increment(self.settings.frequency());
                    Some(UiState::ScoreGap)
                } else {
                    None
                }
            }
            held => match held.held_action() {
                Some(action) if !self.bindings.is_on(action, &self.debouncer) => {
                    display = self.perform(action, voice);
                    Some(UiState::Idle)
                }
                _ => None,
            },
        };

        if let Some(next) = next {
            self.transition(next, clock);
        }

        display
    }

    /// Read the switches, run one [`poll()`](Self::poll) and refresh the
    /// LED bar if needed.
    ///
    /// A failed switch read skips the pass without feeding the debouncer.
    /// A failed LED write is logged and otherwise ignored.
    pub fn service<I, O>(
        &mut self,
        switches: &mut SwitchBank<I>,
        leds: &mut LedBar<O>,
        clock: &Heartbeat,
        voice: &SharedVoice,
    ) where
        I: InputPin,
        O: OutputPin,
    {
        let levels = match switches.read() {
            Ok(levels) => levels,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Skipping UI pass: {}", _e);
                return;
            }
        };

        if let Some(bar) = self.poll(levels, clock, voice) {
            if let Err(_e) = leds.write(bar) {
                #[cfg(feature = "defmt")]
                defmt::warn!("Volume display not updated: {}", _e);
            }
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn transition(&mut self, next: UiState, clock: &Heartbeat) {
        #[cfg(feature = "defmt")]
        defmt::debug!("UI {} -> {}", self.state, next);

        self.state = next;
        clock.restart();
    }

    /// Apply a released edit action. Returns the LED bar pattern when the
    /// volume display changed.
    fn perform(&mut self, action: UiAction, voice: &SharedVoice) -> Option<u8> {
        match action {
            UiAction::Reset => {
                self.settings = Settings::default();
                voice.reset(self.settings.frequency(), self.settings.attenuation());
                Some(self.settings.volume_bar())
            }
            UiAction::VolumeDown => self.set_volume(voice, Settings::volume_down),
            UiAction::VolumeUp => self.set_volume(voice, Settings::volume_up),
            UiAction::OctaveDown => self.retune(voice, Settings::octave_down),
            UiAction::OctaveUp => self.retune(voice, Settings::octave_up),
            UiAction::NotePrev => self.retune(voice, Settings::note_prev),
            UiAction::NoteNext => self.retune(voice, Settings::note_next),
            // Released start switch is handled by `StartPressed`.
            UiAction::StartStop => None,
        }
    }

    fn set_volume(&mut self, voice: &SharedVoice, edit: fn(&mut Settings)) -> Option<u8> {
        edit(&mut self.settings);
        voice.set_attenuation(self.settings.attenuation());
        Some(self.settings.volume_bar())
    }

    fn retune(&mut self, voice: &SharedVoice, edit: fn(&mut Settings)) -> Option<u8> {
        edit(&mut self.settings);
        voice.set_increment(self.settings.frequency());

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Note {} octave {} -> {} Hz",
            self.settings.note(),
            self.settings.octave(),
            self.settings.frequency()
        );

        None
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
