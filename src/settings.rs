//! User-editable note, octave and volume.

use crate::notes::{note_frequency, Note, OCTAVE_MAX};

pub const VOLUME_MIN: u8 = 9;
pub const VOLUME_MAX: u8 = 12;
pub const VOLUME_DEFAULT: u8 = VOLUME_MAX;

pub const OCTAVE_MIN: u8 = 0;
pub const OCTAVE_DEFAULT: u8 = 5;

pub const NOTE_DEFAULT: Note = Note::Rest;

/// The current note selection and volume.
///
/// Every edit saturates at the range bounds; out-of-range requests are
/// silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    note: Note,
    octave: u8,
    volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            note: NOTE_DEFAULT,
            octave: OCTAVE_DEFAULT,
            volume: VOLUME_DEFAULT,
        }
    }
}

impl Settings {
    pub fn note(&self) -> Note {
        self.note
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn set_note(&mut self, note: Note) {
        self.note = note;
    }

    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(1).max(VOLUME_MIN);
    }

    pub fn volume_up(&mut self) {
        self.volume = (self.volume + 1).min(VOLUME_MAX);
    }

    pub fn octave_down(&mut self) {
        self.octave = self.octave.saturating_sub(1).max(OCTAVE_MIN);
    }

    pub fn octave_up(&mut self) {
        self.octave = (self.octave + 1).min(OCTAVE_MAX);
    }

    pub fn note_prev(&mut self) {
        self.note = self.note.prev();
    }

    pub fn note_next(&mut self) {
        self.note = self.note.next();
    }

    /// Oscillator increment for the selected note and octave.
    pub fn frequency(&self) -> u16 {
        note_frequency(self.note, self.octave)
    }

    /// Sine table downshift for the selected volume (0 at full volume).
    pub fn attenuation(&self) -> u8 {
        VOLUME_MAX - self.volume
    }

    /// LED bar pattern for the volume display: one lit line per volume step
    /// above the minimum, plus one, filled from line 0 upwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::settings::Settings;
    ///
    /// // Default volume is the maximum: four lines lit.
    /// assert_eq!(Settings::default().volume_bar(), 0b0000_1111);
    /// ```
    pub fn volume_bar(&self) -> u8 {
        let lit = (self.volume - VOLUME_MIN + 1).min(8);
        ((1u16 << lit) - 1) as u8
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.note(), Note::Rest);
        assert_eq!(s.octave(), 5);
        assert_eq!(s.volume(), VOLUME_MAX);
        assert_eq!(s.frequency(), 0);
        assert_eq!(s.attenuation(), 0);
    }

    #[test]
    fn volume_clamps_at_both_ends() {
        let mut s = Settings::default();
        s.volume_up();
        assert_eq!(s.volume(), VOLUME_MAX);

        for _ in 0..10 {
            s.volume_down();
        }
        assert_eq!(s.volume(), VOLUME_MIN);
        assert_eq!(s.attenuation(), VOLUME_MAX - VOLUME_MIN);
    }

    #[test]
    fn octave_clamps_at_both_ends() {
        let mut s = Settings::default();
        for _ in 0..20 {
            s.octave_up();
        }
        assert_eq!(s.octave(), OCTAVE_MAX);
        for _ in 0..20 {
            s.octave_down();
        }
        assert_eq!(s.octave(), OCTAVE_MIN);
    }

    #[test]
    fn note_clamps_at_both_ends() {
        let mut s = Settings::default();
        s.note_prev();
        assert_eq!(s.note(), Note::Rest);
        for _ in 0..20 {
            s.note_next();
        }
        assert_eq!(s.note(), Note::B);
    }

    #[test]
    fn frequency_follows_note_and_octave() {
        let mut s = Settings::default();
        s.set_note(Note::A);
        assert_eq!(s.frequency(), 880);
        s.octave_down();
        assert_eq!(s.frequency(), 440);
    }

    #[test]
    fn volume_bar_grows_with_volume() {
        let mut s = Settings::default();
        let mut bars = [0u8; 4];
        for bar in bars.iter_mut() {
            *bar = s.volume_bar();
            s.volume_down();
        }
        assert_eq!(bars, [0b1111, 0b0111, 0b0011, 0b0001]);
    }
}
