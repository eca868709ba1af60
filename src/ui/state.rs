/// A user action triggered by releasing a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiAction {
    /// Restore note, octave, volume and phase to their defaults.
    Reset,
    /// Start melody playback.
    StartStop,
    VolumeDown,
    VolumeUp,
    OctaveDown,
    OctaveUp,
    NotePrev,
    NoteNext,
}

impl UiAction {
    /// The state entered while this action's switch is held down.
    pub fn pressed_state(self) -> UiState {
        match self {
            UiAction::Reset => UiState::ResetPressed,
            UiAction::StartStop => UiState::StartPressed,
            UiAction::VolumeDown => UiState::VolumeDownPressed,
            UiAction::VolumeUp => UiState::VolumeUpPressed,
            UiAction::OctaveDown => UiState::OctaveDownPressed,
            UiAction::OctaveUp => UiState::OctaveUpPressed,
            UiAction::NotePrev => UiState::NotePrevPressed,
            UiAction::NoteNext => UiState::NoteNextPressed,
        }
    }
}

/// States of the UI state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    #[default]
    Idle,
    ResetPressed,
    StartPressed,
    /// No switch leads here in the current bindings; returns to `Idle`.
    StopPressed,
    /// Silent part of a melody step.
    ScoreGap,
    /// Audible part of a melody step.
    ScoreNote,
    VolumeDownPressed,
    VolumeUpPressed,
    OctaveDownPressed,
    OctaveUpPressed,
    NotePrevPressed,
    NoteNextPressed,
}

impl UiState {
    /// For edit states that fire on release, the action to perform.
    ///
    /// `StartPressed` is not included: its release starts playback instead
    /// of returning to `Idle`.
    pub fn held_action(self) -> Option<UiAction> {
        match self {
            UiState::ResetPressed => Some(UiAction::Reset),
            UiState::VolumeDownPressed => Some(UiAction::VolumeDown),
            UiState::VolumeUpPressed => Some(UiAction::VolumeUp),
            UiState::OctaveDownPressed => Some(UiAction::OctaveDown),
            UiState::OctaveUpPressed => Some(UiAction::OctaveUp),
            UiState::NotePrevPressed => Some(UiAction::NotePrev),
            UiState::NoteNextPressed => Some(UiAction::NoteNext),
            _ => None,
        }
    }

    /// Whether the melody is playing.
    pub fn is_playing(self) -> bool {
        matches!(self, UiState::ScoreGap | UiState::ScoreNote)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EDITS: [UiAction; 7] = [
        UiAction::Reset,
        UiAction::VolumeDown,
        UiAction::VolumeUp,
        UiAction::OctaveDown,
        UiAction::OctaveUp,
        UiAction::NotePrev,
        UiAction::NoteNext,
    ];

    #[test]
    fn edit_actions_round_trip_through_pressed_state() {
        for action in EDITS {
            assert_eq!(action.pressed_state().held_action(), Some(action));
        }
    }

    #[test]
    fn start_is_not_a_held_edit() {
        assert_eq!(UiAction::StartStop.pressed_state(), UiState::StartPressed);
        assert_eq!(UiState::StartPressed.held_action(), None);
        assert_eq!(UiState::StopPressed.held_action(), None);
        assert_eq!(UiState::Idle.held_action(), None);
    }

    #[test]
    fn only_score_states_are_playing() {
        assert!(UiState::ScoreGap.is_playing());
        assert!(UiState::ScoreNote.is_playing());
        assert!(!UiState::Idle.is_playing());
        assert!(!UiState::StartPressed.is_playing());
        assert_eq!(UiState::default(), UiState::Idle);
    }
}
