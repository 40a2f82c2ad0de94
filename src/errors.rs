use snafu::prelude::*;

/// Errors of the [Ws2812Driver::write](crate::Ws2812Driver::write) function
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    /// The pin identifier does not name a registered strip pin.
    ///
    /// Raised before any hardware access.
    #[snafu(display("pin {pin} is not a registered strip pin"))]
    InvalidPin {
        /// The offending pin identifier.
        pin: u8,
    },
    /// The timing profile cannot be expressed on the platform clock.
    ///
    /// Either the clock reports a zero frequency, or one of the configured
    /// durations converts to zero clock ticks. Raised before any hardware
    /// access; durations are never clamped.
    TimingUnavailable,
    /// The transmission took longer than its timing budget allows.
    ///
    /// Some jitter source (interrupt, bus stall) paused the emit loop for
    /// more than one bit period. The data was still sent best-effort, but
    /// the strip most likely latched garbage. There is no mid-stream
    /// recovery; retry the whole transmission if desired.
    InterruptedTransmission,
}
