//! Fixed melody playback.
//!
//! Each melody step occupies one [`NOTE_PERIOD_MS`]: a silent gap of
//! [`GAP_MS`] followed by [`NOTE_DURATION_MS`] of tone. Steps hold a note
//! only and sound in whatever octave is selected on the UI.

use crate::notes::Note;

/// Length of one melody step (gap + note).
pub const NOTE_PERIOD_MS: u32 = 250;

/// Audible part of a melody step.
pub const NOTE_DURATION_MS: u32 = NOTE_PERIOD_MS - 50;

/// Silent part of a melody step, played before the note.
pub const GAP_MS: u32 = NOTE_PERIOD_MS - NOTE_DURATION_MS;

/// "Hot Cross Buns", the melody bundled with the instrument.
pub static HOT_CROSS_BUNS: [Note; 32] = {
    use Note::{Rest as R, A, B, G};
    [
        B, R, A, R, G, R, R, R, //
        B, R, A, R, G, R, R, R, //
        G, G, G, G, A, A, A, A, //
        B, R, A, R, G, R, R, R, //
    ]
};

/// Read-only note sequence plus a playback cursor.
#[derive(Debug, Clone)]
pub struct MelodySequencer {
    score: &'static [Note],
    cursor: usize,
}

impl Default for MelodySequencer {
    fn default() -> Self {
        Self::new(&HOT_CROSS_BUNS)
    }
}

impl MelodySequencer {
    pub const fn new(score: &'static [Note]) -> Self {
        Self { score, cursor: 0 }
    }

    /// Rewind to the first step.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Return the note at the cursor and advance, or `None` once the score
    /// is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::melody::MelodySequencer;
    /// use tonegen::notes::Note;
    ///
    /// static SCORE: [Note; 2] = [Note::C, Note::Rest];
    /// let mut seq = MelodySequencer::new(&SCORE);
    /// assert_eq!(seq.next_note(), Some(Note::C));
    /// assert_eq!(seq.next_note(), Some(Note::Rest));
    /// assert_eq!(seq.next_note(), None);
    /// ```
    pub fn next_note(&mut self) -> Option<Note> {
        let note = self.score.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(note)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.score.len()
    }

    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.score.len()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_timing_adds_up() {
        assert_eq!(GAP_MS, 50);
        assert_eq!(GAP_MS + NOTE_DURATION_MS, NOTE_PERIOD_MS);
    }

    #[test]
    fn plays_whole_score_in_order() {
        let mut seq = MelodySequencer::default();
        let mut played = [Note::Rest; 32];
        for slot in played.iter_mut() {
            *slot = seq.next_note().unwrap();
        }
        assert_eq!(played, HOT_CROSS_BUNS);
        assert!(seq.is_finished());
        assert_eq!(seq.next_note(), None);
        // Cursor does not run past the end.
        assert_eq!(seq.cursor(), 32);
    }

    #[test]
    fn restart_rewinds() {
        let mut seq = MelodySequencer::default();
        seq.next_note();
        seq.next_note();
        seq.restart();
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.next_note(), Some(Note::B));
    }

    #[test]
    fn empty_score_is_immediately_finished() {
        static EMPTY: [Note; 0] = [];
        let mut seq = MelodySequencer::new(&EMPTY);
        assert!(seq.is_empty());
        assert!(seq.is_finished());
        assert_eq!(seq.next_note(), None);
    }
}
