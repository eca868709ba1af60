use crate::debounce::{SwitchDebouncer, SwitchFilter};

use super::state::UiAction;

/// Number of entries in a binding table (one per [`UiAction`]).
pub const N_ACTIONS: usize = 8;

/// Where a UI action gets its switch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchBinding {
    /// A physical switch line.
    Line(usize),
    /// No switch wired; reads as a [`SwitchFilter::UNBOUND`] filter.
    Unbound,
}

impl SwitchBinding {
    /// Debounced state of the bound switch.
    pub fn is_on(self, debouncer: &SwitchDebouncer) -> bool {
        match self {
            SwitchBinding::Line(line) => debouncer.is_on(line),
            SwitchBinding::Unbound => SwitchFilter::UNBOUND.is_on(),
        }
    }
}

/// The instrument's wiring, in `Idle` priority order: the first action whose
/// switch is on wins when several are held together.
pub const SWITCH_BINDINGS: [(UiAction, SwitchBinding); N_ACTIONS] = [
    (UiAction::Reset, SwitchBinding::Unbound),
    (UiAction::StartStop, SwitchBinding::Line(0)),
    (UiAction::VolumeDown, SwitchBinding::Line(4)),
    (UiAction::VolumeUp, SwitchBinding::Line(5)),
    (UiAction::OctaveDown, SwitchBinding::Line(2)),
    (UiAction::OctaveUp, SwitchBinding::Line(3)),
    (UiAction::NotePrev, SwitchBinding::Unbound),
    (UiAction::NoteNext, SwitchBinding::Unbound),
];

/// Ordered action → switch table.
#[derive(Debug, Clone)]
pub struct SwitchBindings {
    table: [(UiAction, SwitchBinding); N_ACTIONS],
}

impl Default for SwitchBindings {
    fn default() -> Self {
        Self::new(SWITCH_BINDINGS)
    }
}

impl SwitchBindings {
    pub const fn new(table: [(UiAction, SwitchBinding); N_ACTIONS]) -> Self {
        Self { table }
    }

    /// The binding of `action`. Actions missing from the table are unbound.
    pub fn binding(&self, action: UiAction) -> SwitchBinding {
        self.table
            .iter()
            .find(|(a, _)| *a == action)
            .map_or(SwitchBinding::Unbound, |(_, binding)| *binding)
    }

    pub fn is_on(&self, action: UiAction, debouncer: &SwitchDebouncer) -> bool {
        self.binding(action).is_on(debouncer)
    }

    /// Highest-priority action whose switch is currently on.
    pub fn first_pressed(&self, debouncer: &SwitchDebouncer) -> Option<UiAction> {
        self.table
            .iter()
            .find(|(_, binding)| binding.is_on(debouncer))
            .map(|(action, _)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(UiAction, SwitchBinding)> {
        self.table.iter()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn debounced(levels: u8) -> SwitchDebouncer {
        let mut deb = SwitchDebouncer::new();
        deb.update(levels);
        deb.update(levels);
        deb
    }

    #[test]
    fn wiring_matches_panel() {
        let b = SwitchBindings::default();
        assert_eq!(b.binding(UiAction::StartStop), SwitchBinding::Line(0));
        assert_eq!(b.binding(UiAction::OctaveDown), SwitchBinding::Line(2));
        assert_eq!(b.binding(UiAction::OctaveUp), SwitchBinding::Line(3));
        assert_eq!(b.binding(UiAction::VolumeDown), SwitchBinding::Line(4));
        assert_eq!(b.binding(UiAction::VolumeUp), SwitchBinding::Line(5));
        assert_eq!(b.binding(UiAction::Reset), SwitchBinding::Unbound);
        assert_eq!(b.binding(UiAction::NotePrev), SwitchBinding::Unbound);
        assert_eq!(b.binding(UiAction::NoteNext), SwitchBinding::Unbound);
    }

    #[test]
    fn priority_order_is_explicit() {
        let order: [UiAction; N_ACTIONS] = core::array::from_fn(|i| SWITCH_BINDINGS[i].0);
        assert_eq!(
            order,
            [
                UiAction::Reset,
                UiAction::StartStop,
                UiAction::VolumeDown,
                UiAction::VolumeUp,
                UiAction::OctaveDown,
                UiAction::OctaveUp,
                UiAction::NotePrev,
                UiAction::NoteNext,
            ]
        );
    }

    #[test]
    fn first_pressed_follows_priority() {
        let b = SwitchBindings::default();
        // Octave up (line 3) and volume down (line 4) together.
        assert_eq!(b.first_pressed(&debounced(0b0001_1000)), Some(UiAction::VolumeDown));
        // Everything pressed: start/stop wins, reset is unbound.
        assert_eq!(b.first_pressed(&debounced(0xFF)), Some(UiAction::StartStop));
    }

    #[test]
    fn unwired_lines_trigger_nothing() {
        let b = SwitchBindings::default();
        // Lines 1, 6 and 7 carry no action.
        assert_eq!(b.first_pressed(&debounced(0b1100_0010)), None);
    }

    #[test]
    fn unbound_actions_never_fire() {
        let b = SwitchBindings::default();
        let deb = debounced(0xFF);
        assert!(!b.is_on(UiAction::Reset, &deb));
        assert!(!b.is_on(UiAction::NoteNext, &deb));
        assert!(b.is_on(UiAction::OctaveUp, &deb));
    }

    #[test]
    fn custom_table_can_bind_note_keys() {
        let mut table = SWITCH_BINDINGS;
        table[6].1 = SwitchBinding::Line(6);
        table[7].1 = SwitchBinding::Line(7);
        let b = SwitchBindings::new(table);
        assert_eq!(b.first_pressed(&debounced(0b1000_0000)), Some(UiAction::NoteNext));
        assert_eq!(b.iter().count(), N_ACTIONS);
    }
}
