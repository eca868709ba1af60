//! Error types for the hardware bindings.

use core::fmt;

/// Errors raised by the `embedded-hal` pins behind the IO bindings.
///
/// The control loop itself never fails; these only surface when a switch
/// read, LED write or audio write is rejected by the HAL. On targets whose
/// pins are infallible `E` is [`core::convert::Infallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoError<E> {
    /// Reading a switch line failed.
    Input(E),
    /// Driving an LED line failed.
    Output(E),
    /// Updating the audio PWM duty cycle failed.
    Audio(E),
}

impl<E: fmt::Debug> fmt::Display for IoError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::Input(e) => write!(f, "Switch input error: {:?}", e),
            IoError::Output(e) => write!(f, "LED output error: {:?}", e),
            IoError::Audio(e) => write!(f, "Audio output error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for IoError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            IoError::Input(_) => defmt::write!(f, "Switch input error"),
            IoError::Output(_) => defmt::write!(f, "LED output error"),
            IoError::Audio(_) => defmt::write!(f, "Audio output error"),
        }
    }
}
