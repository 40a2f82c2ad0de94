use crate::errors::Error;

/// Per-bit pulse durations of the single-wire strip protocol.
///
/// All durations are in **nanoseconds** and must be greater than zero.
/// For every bit, the strip sees a high phase followed by a low phase;
/// high + low should sum to the nominal bit period of the protocol.
/// The driver does not enforce the sum and never clamps a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// High time of a `0` bit.
    pub t0h: u32,
    /// High time of a `1` bit.
    pub t1h: u32,
    /// Low time of a `0` bit.
    pub t0l: u32,
    /// Low time of a `1` bit.
    pub t1l: u32,
    /// Trailing low hold signalling end-of-frame to the strip.
    pub latch: u32,
}

impl Timing {
    /// Timing for 800kHz strips (WS2812, WS2812B, SK6812).
    pub const KHZ800: Timing = Timing {
        t0h: 400,
        t1h: 800,
        t0l: 850,
        t1l: 450,
        latch: 50_000,
    };

    /// Timing for the older 400kHz strips (WS2811 in slow mode).
    pub const KHZ400: Timing = Timing {
        t0h: 500,
        t1h: 1_200,
        t0l: 2_000,
        t1l: 1_300,
        latch: 50_000,
    };

    /// Converts the profile into clock ticks at the given counter frequency.
    ///
    /// Fails with [Error::TimingUnavailable] if the clock frequency is zero,
    /// too coarse to express one of the durations as at least one tick, or
    /// so fine that a duration exceeds the 32-bit counter range.
    pub(crate) fn to_cycles(&self, frequency: u32) -> Result<CycleTiming, Error> {
        if frequency == 0 {
            return Err(Error::TimingUnavailable);
        }

        let convert = |ns: u32| -> Result<u32, Error> {
            let ticks = u64::from(ns) * u64::from(frequency) / 1_000_000_000;
            if ticks == 0 {
                return Err(Error::TimingUnavailable);
            }
            // A count past u32 range cannot be waited on either; clamping
            // or wrapping it would shorten the phase silently.
            u32::try_from(ticks).map_err(|_| Error::TimingUnavailable)
        };

        let t0h = convert(self.t0h)?;
        let t1h = convert(self.t1h)?;
        let t0l = convert(self.t0l)?;
        let t1l = convert(self.t1l)?;
        let latch = convert(self.latch)?;

        Ok(CycleTiming {
            t0h,
            t1h,
            t0l,
            t1l,
            latch,
            bit_period: t0h.saturating_add(t0l).max(t1h.saturating_add(t1l)),
        })
    }
}

/// A [Timing] profile resolved to ticks of a concrete [PulseClock](crate::platform::PulseClock).
#[derive(Debug, Clone, Copy)]
pub(crate) struct CycleTiming {
    pub(crate) t0h: u32,
    pub(crate) t1h: u32,
    pub(crate) t0l: u32,
    pub(crate) t1l: u32,
    pub(crate) latch: u32,
    /// The longer of the two bit periods; used as jitter allowance.
    pub(crate) bit_period: u32,
}

impl CycleTiming {
    pub(crate) fn high(&self, bit: bool) -> u32 {
        if bit {
            self.t1h
        } else {
            self.t0h
        }
    }

    pub(crate) fn low(&self, bit: bool) -> u32 {
        if bit {
            self.t1l
        } else {
            self.t0l
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_sum_to_nominal_bit_period() {
        let t = Timing::KHZ800;
        assert_eq!(t.t0h + t.t0l, 1_250);
        assert_eq!(t.t1h + t.t1l, 1_250);

        let t = Timing::KHZ400;
        assert_eq!(t.t0h + t.t0l, 2_500);
        assert_eq!(t.t1h + t.t1l, 2_500);
    }

    #[test]
    fn conversion_at_160mhz() {
        // 160MHz: 1 tick = 6.25ns
        let cycles = Timing::KHZ800.to_cycles(160_000_000).unwrap();
        assert_eq!(cycles.t0h, 64);
        assert_eq!(cycles.t1h, 128);
        assert_eq!(cycles.t0l, 136);
        assert_eq!(cycles.t1l, 72);
        assert_eq!(cycles.latch, 8_000);
        assert_eq!(cycles.bit_period, 200);
    }

    #[test]
    fn conversion_does_not_clamp_to_zero() {
        // 1MHz is too coarse for a 400ns pulse
        assert_eq!(
            Timing::KHZ800.to_cycles(1_000_000).unwrap_err(),
            Error::TimingUnavailable
        );
    }

    #[test]
    fn conversion_does_not_wrap_oversized_tick_counts() {
        // 2s of latch at 4GHz is 8e9 ticks, beyond the 32-bit counter.
        let timing = Timing {
            latch: 2_000_000_000,
            ..Timing::KHZ800
        };
        assert_eq!(
            timing.to_cycles(4_000_000_000).unwrap_err(),
            Error::TimingUnavailable
        );
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert_eq!(
            Timing::KHZ800.to_cycles(0).unwrap_err(),
            Error::TimingUnavailable
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let timing = Timing {
            latch: 0,
            ..Timing::KHZ800
        };
        assert_eq!(
            timing.to_cycles(160_000_000).unwrap_err(),
            Error::TimingUnavailable
        );
    }

    #[test]
    fn bit_selection() {
        let cycles = Timing::KHZ800.to_cycles(1_000_000_000).unwrap();
        assert_eq!(cycles.high(false), 400);
        assert_eq!(cycles.high(true), 800);
        assert_eq!(cycles.low(false), 850);
        assert_eq!(cycles.low(true), 450);
    }
}
