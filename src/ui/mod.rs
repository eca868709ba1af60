//! Switch-driven UI state machine.
//!
//! One [`UiController::poll()`] runs per heartbeat tick. It debounces the
//! switch lines, then moves through the states below, measuring time in
//! the current state with the [`Heartbeat`](crate::heartbeat::Heartbeat)
//! elapsed counter.
//!
//! ```text
//!            press                      release
//! Idle ──────────────► <Edit>Pressed ─────────────► Idle   (edit applied)
//!  │ press start/stop
//!  ▼          release          ≥ GAP_MS
//! StartPressed ──────► ScoreGap ───────► ScoreNote
//!                         ▲  │ score done    │ ≥ NOTE_DURATION_MS
//!                         │  ▼               │
//!                         │ Idle             │
//!                         └──────────────────┘
//! ```
//!
//! Edit actions fire once on release, never on press and never repeat
//! while held. Switches are ignored while the melody plays.

pub mod bindings;
pub mod controller;
pub mod state;

pub use bindings::{SwitchBinding, SwitchBindings, SWITCH_BINDINGS};
pub use controller::UiController;
pub use state::{UiAction, UiState};
