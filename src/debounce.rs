//! Hysteresis debouncing for the switch lines.
//!
//! Each line owns a [`SwitchFilter`]: a saturating counter that moves by one
//! per heartbeat tick towards `max` while the line is asserted and towards
//! `min` while it is released. The debounced state turns on when the counter
//! climbs to the `on` threshold and turns off only once it has fallen all the
//! way to the `off` threshold, so a single-tick glitch of either polarity
//! never changes the reported state.

/// Number of physical switch lines.
pub const N_SWITCHES: usize = 8;

/// Per-switch hysteresis filter.
///
/// **Invariant:** `min <= off <= on <= max` and `min <= accumulator <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchFilter {
    min: u8,
    off: u8,
    on: u8,
    max: u8,
    accumulator: u8,
    is_on: bool,
}

impl Default for SwitchFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SwitchFilter {
    /// Two consecutive asserted ticks turn the switch on; the counter must
    /// decay back to zero to turn it off.
    pub const DEFAULT: Self = Self::new(0, 0, 2, 4);

    /// Collapsed thresholds for actions with no physical switch. Never fed,
    /// so it always reports off.
    pub const UNBOUND: Self = Self::new(0, 0, 1, 1);

    /// Create a filter in the released state with the counter at `min`.
    pub const fn new(min: u8, off: u8, on: u8, max: u8) -> Self {
        debug_assert!(min <= off && off <= on && on <= max);
        Self {
            min,
            off,
            on,
            max,
            accumulator: min,
            is_on: false,
        }
    }

    /// Feed one sample of the raw line level and return the debounced state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::debounce::SwitchFilter;
    ///
    /// let mut sw = SwitchFilter::DEFAULT;
    /// assert!(!sw.update(true));
    /// assert!(sw.update(true));
    /// ```
    pub fn update(&mut self, active: bool) -> bool {
        if active {
            if self.accumulator < self.max {
                self.accumulator += 1;
            }
            if self.accumulator == self.on {
                self.is_on = true;
            }
        } else {
            if self.accumulator > self.min {
                self.accumulator -= 1;
            }
            if self.accumulator == self.off {
                self.is_on = false;
            }
        }
        self.is_on
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn accumulator(&self) -> u8 {
        self.accumulator
    }
}

/// Debounce filters for all [`N_SWITCHES`] lines.
#[derive(Debug, Clone)]
pub struct SwitchDebouncer {
    filters: [SwitchFilter; N_SWITCHES],
}

impl Default for SwitchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchDebouncer {
    /// All lines use [`SwitchFilter::DEFAULT`].
    pub const fn new() -> Self {
        Self::with_filters([SwitchFilter::DEFAULT; N_SWITCHES])
    }

    pub const fn with_filters(filters: [SwitchFilter; N_SWITCHES]) -> Self {
        Self { filters }
    }

    /// Run one debounce step for every line.
    ///
    /// Bit `i` of `levels` is the normalised level of line `i` (1 = asserted).
    pub fn update(&mut self, levels: u8) {
        for (line, filter) in self.filters.iter_mut().enumerate() {
            filter.update(levels & (1 << line) != 0);
        }
    }

    /// Debounced state of `line`. Lines past [`N_SWITCHES`] report off.
    pub fn is_on(&self, line: usize) -> bool {
        self.filters.get(line).is_some_and(SwitchFilter::is_on)
    }

    /// Debounced states packed as a bitmask (bit `i` = line `i`).
    pub fn states(&self) -> u8 {
        self.filters
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_on())
            .fold(0, |acc, (line, _)| acc | (1 << line))
    }

    pub fn filter(&self, line: usize) -> Option<&SwitchFilter> {
        self.filters.get(line)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
