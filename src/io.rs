//! Bindings from the core to `embedded-hal` pins.
//!
//! - [`SwitchBank`] reads the 8 switch lines into one level byte.
//! - [`LedBar`] drives the 8-line volume bar from one byte.
//! - [`PwmAudio`] turns 12-bit samples into PWM duty cycles.
//!
//! All three normalise polarity so the rest of the crate only sees
//! "bit set = line asserted".

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::debounce::N_SWITCHES;
use crate::error::IoError;
use crate::sine::OUTPUT_MAX;

/// Number of lines on the LED bar.
pub const N_LEDS: usize = 8;

/// Electrical level that means "asserted" on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    /// Asserted when driven low (switches to ground with pull-ups, LEDs
    /// sinking into the pin).
    ActiveLow,
}

impl Polarity {
    fn asserted_level(self) -> bool {
        matches!(self, Polarity::ActiveHigh)
    }
}

/// The switch lines, sampled together.
pub struct SwitchBank<P> {
    pins: [P; N_SWITCHES],
    polarity: Polarity,
}

impl<P> SwitchBank<P>
where
    P: InputPin,
{
    pub fn new(pins: [P; N_SWITCHES], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    /// Sample every line. Bit `i` is set when line `i` is asserted.
    ///
    /// # Errors
    /// [`IoError::Input`] for the first line the HAL fails to read.
    pub fn read(&mut self) -> Result<u8, IoError<P::Error>> {
        let asserted_high = self.polarity.asserted_level();
        let mut levels = 0u8;

        for (line, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_high().map_err(IoError::Input)? == asserted_high {
                levels |= 1 << line;
            }
        }

        Ok(levels)
    }
}

/// Bar-graph LEDs showing the volume.
pub struct LedBar<P> {
    pins: [P; N_LEDS],
    polarity: Polarity,
}

impl<P> LedBar<P>
where
    P: OutputPin,
{
    pub fn new(pins: [P; N_LEDS], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    /// Light line `i` when bit `i` of `bits` is set, extinguish it otherwise.
    ///
    /// # Errors
    /// [`IoError::Output`] for the first line the HAL fails to drive.
    pub fn write(&mut self, bits: u8) -> Result<(), IoError<P::Error>> {
        let asserted_high = self.polarity.asserted_level();

        for (line, pin) in self.pins.iter_mut().enumerate() {
            let lit = bits & (1 << line) != 0;
            pin.set_state(PinState::from(lit == asserted_high))
                .map_err(IoError::Output)?;
        }

        Ok(())
    }
}

/// Audio output through a PWM channel filtered externally.
pub struct PwmAudio<P> {
    pwm: P,
}

impl<P> PwmAudio<P>
where
    P: SetDutyCycle,
{
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Output one sample in `0..=OUTPUT_MAX`. Larger values are clipped.
    ///
    /// # Errors
    /// [`IoError::Audio`] when the HAL rejects the duty cycle.
    pub fn write(&mut self, sample: u16) -> Result<(), IoError<P::Error>> {
        self.pwm
            .set_duty_cycle_fraction(sample.min(OUTPUT_MAX), OUTPUT_MAX)
            .map_err(IoError::Audio)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::mock::{MockInput, MockOutput, MockPwm};
    use super::*;
    use crate::sine::BASELINE;

    #[test]
    fn active_low_switches_read_as_set_bits() {
        let lines: [Cell<bool>; 8] = core::array::from_fn(|_| Cell::new(true));
        let mut bank = SwitchBank::new(
            core::array::from_fn(|i| MockInput(&lines[i])),
            Polarity::ActiveLow,
        );
        assert_eq!(bank.read().unwrap(), 0);

        lines[0].set(false);
        lines[5].set(false);
        assert_eq!(bank.read().unwrap(), 0b0010_0001);
    }

    #[test]
    fn active_high_switches_read_as_set_bits() {
        let lines: [Cell<bool>; 8] = core::array::from_fn(|_| Cell::new(false));
        let mut bank = SwitchBank::new(
            core::array::from_fn(|i| MockInput(&lines[i])),
            Polarity::ActiveHigh,
        );
        lines[7].set(true);
        assert_eq!(bank.read().unwrap(), 0b1000_0000);
    }

    #[test]
    fn active_low_leds_are_driven_low_when_lit() {
        let lines: [Cell<bool>; 8] = core::array::from_fn(|_| Cell::new(false));
        let mut bar = LedBar::new(
            core::array::from_fn(|i| MockOutput(&lines[i])),
            Polarity::ActiveLow,
        );
        bar.write(0b0000_0011).unwrap();

        let levels: [bool; 8] = core::array::from_fn(|i| lines[i].get());
        assert_eq!(levels, [false, false, true, true, true, true, true, true]);
    }

    #[test]
    fn active_high_leds_follow_bits() {
        let lines: [Cell<bool>; 8] = core::array::from_fn(|_| Cell::new(false));
        let mut bar = LedBar::new(
            core::array::from_fn(|i| MockOutput(&lines[i])),
            Polarity::ActiveHigh,
        );
        bar.write(0b1000_0001).unwrap();
        assert!(lines[0].get());
        assert!(!lines[1].get());
        assert!(lines[7].get());
    }

    #[test]
    fn audio_maps_samples_onto_duty_range() {
        let duty = Cell::new(0);
        let mut audio = PwmAudio::new(MockPwm(&duty));

        audio.write(BASELINE).unwrap();
        assert_eq!(duty.get(), BASELINE);

        audio.write(OUTPUT_MAX).unwrap();
        assert_eq!(duty.get(), 4095);

        audio.write(u16::MAX).unwrap();
        assert_eq!(duty.get(), 4095);
    }

    #[test]
    fn io_error_displays_its_source() {
        let err: IoError<&str> = IoError::Input("stuck");
        assert_eq!(err.to_string(), "Switch input error: \"stuck\"");
    }
}
