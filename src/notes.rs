//! Note names and the note/octave → phase increment table.

/// Number of selectable notes (12 semitones plus [`Note::Rest`]).
pub const N_NOTES: usize = 12 + 1;

/// Number of octaves in [`NOTE_FREQ`].
pub const N_OCTAVES: usize = 10;

/// Highest selectable octave.
pub const OCTAVE_MAX: u8 = (N_OCTAVES - 1) as u8;

/// A note of the chromatic scale, or no note at all.
///
/// The discriminant is the note's index into [`NOTE_FREQ`]; `Rest` sits at
/// index 0 so stepping down from `C` lands on silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Note {
    /// No tone.
    #[default]
    Rest = 0,
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl Note {
    /// All notes in index order.
    pub const ALL: [Note; N_NOTES] = [
        Note::Rest,
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Index of this note in [`Note::ALL`] and [`NOTE_FREQ`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a note by index. Returns `None` past [`Note::B`].
    pub fn from_index(index: usize) -> Option<Note> {
        Self::ALL.get(index).copied()
    }

    /// The note one index lower, saturating at [`Note::Rest`].
    pub fn prev(self) -> Note {
        Self::ALL[self.index().saturating_sub(1)]
    }

    /// The note one index higher, saturating at [`Note::B`].
    pub fn next(self) -> Note {
        Self::ALL[(self.index() + 1).min(N_NOTES - 1)]
    }

    pub const fn is_rest(self) -> bool {
        matches!(self, Note::Rest)
    }
}

/// Phase increment per sample tick, indexed `[note][octave]`.
///
/// Because the sample rate equals the sine table length, each entry is also
/// the tone's frequency in Hz (equal temperament, A in octave 4 = 440 Hz,
/// rounded to the nearest integer). The `Rest` row is zero.
pub const NOTE_FREQ: [[u16; N_OCTAVES]; N_NOTES] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [16, 33, 65, 131, 262, 523, 1047, 2093, 4186, 8372],
    [17, 35, 69, 139, 277, 554, 1109, 2217, 4435, 8870],
    [18, 37, 73, 147, 294, 587, 1175, 2349, 4699, 9397],
    [19, 39, 78, 156, 311, 622, 1245, 2489, 4978, 9956],
    [21, 41, 82, 165, 330, 659, 1319, 2637, 5274, 10548],
    [22, 44, 87, 175, 349, 698, 1397, 2794, 5588, 11175],
    [23, 46, 92, 185, 370, 740, 1480, 2960, 5920, 11840],
    [24, 49, 98, 196, 392, 784, 1568, 3136, 6272, 12544],
    [26, 52, 104, 208, 415, 831, 1661, 3322, 6645, 13290],
    [28, 55, 110, 220, 440, 880, 1760, 3520, 7040, 14080],
    [29, 58, 117, 233, 466, 932, 1865, 3729, 7459, 14917],
    [31, 62, 123, 247, 494, 988, 1976, 3951, 7902, 15804],
];

/// Phase increment (= frequency in Hz) for `note` in `octave`.
///
/// Octaves above [`OCTAVE_MAX`] saturate.
///
/// # Examples
///
/// ```
/// use tonegen::notes::{note_frequency, Note};
///
/// assert_eq!(note_frequency(Note::A, 4), 440);
/// assert_eq!(note_frequency(Note::Rest, 4), 0);
/// ```
pub fn note_frequency(note: Note, octave: u8) -> u16 {
    let octave = (octave as usize).min(N_OCTAVES - 1);
    NOTE_FREQ[note.index()][octave]
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sine::SAMPLE_RATE_HZ;

    #[test]
    fn rest_row_is_silent() {
        for octave in 0..=OCTAVE_MAX {
            assert_eq!(note_frequency(Note::Rest, octave), 0);
        }
    }

    #[test]
    fn concert_pitch() {
        assert_eq!(note_frequency(Note::A, 4), 440);
        assert_eq!(note_frequency(Note::C, 4), 262);
        assert_eq!(note_frequency(Note::B, 5), 988);
    }

    #[test]
    fn octaves_roughly_double() {
        for note in &Note::ALL[1..] {
            for octave in 1..N_OCTAVES as u8 {
                let lower = note_frequency(*note, octave - 1) as i32;
                let upper = note_frequency(*note, octave) as i32;
                assert!((upper - 2 * lower).abs() <= 1, "{:?} octave {}", note, octave);
            }
        }
    }

    #[test]
    fn semitones_ascend_within_octave() {
        for octave in 0..N_OCTAVES {
            let column: [u16; 12] = core::array::from_fn(|n| NOTE_FREQ[n + 1][octave]);
            assert!(column.windows(2).all(|w| w[0] < w[1]), "octave {}", octave);
        }
    }

    #[test]
    fn every_tone_is_below_nyquist() {
        for row in &NOTE_FREQ {
            for &freq in row {
                assert!((freq as u32) < SAMPLE_RATE_HZ / 2);
            }
        }
    }

    #[test]
    fn octave_lookup_saturates() {
        assert_eq!(note_frequency(Note::B, 200), note_frequency(Note::B, OCTAVE_MAX));
    }

    #[test]
    fn prev_and_next_saturate() {
        assert_eq!(Note::Rest.prev(), Note::Rest);
        assert_eq!(Note::C.prev(), Note::Rest);
        assert_eq!(Note::B.next(), Note::B);
        assert_eq!(Note::Rest.next(), Note::C);
    }

    #[test]
    fn index_round_trips_through_all() {
        for (i, note) in Note::ALL.iter().enumerate() {
            assert_eq!(note.index(), i);
            assert_eq!(Note::from_index(i), Some(*note));
        }
        assert_eq!(Note::from_index(N_NOTES), None);
    }
}
