//! The two hardware capabilities the driver needs: a cycle-accurate clock
//! and a GPIO data pin.
//!
//! Both are traits so the emit loop can run against fakes on hosted targets.

/// A free-running, cycle-accurate counter used to pace the emit loop.
///
/// Millisecond sleeps are far too coarse for this protocol; implementations
/// must be backed by a CPU cycle counter or an equally fine hardware timer.
pub trait PulseClock {
    /// Frequency of the counter, in Hz.
    fn frequency(&self) -> u32;

    /// Current counter value. Expected to wrap around.
    fn cycles(&self) -> u32;

    /// Busy-waits until the counter reaches `deadline`.
    ///
    /// The comparison is wrapping, so deadlines up to `u32::MAX / 2` ticks
    /// in the future work across counter overflow.
    fn spin_until(&self, deadline: u32) {
        while (deadline.wrapping_sub(self.cycles()) as i32) > 0 {}
    }
}

/// The strip's data-in line.
///
/// Transitions happen inside a timed loop, so the operations are infallible;
/// pin validation is done up front by the [PinRegistry](crate::PinRegistry).
pub trait DataPin {
    /// Drive the pin high.
    fn set_high(&mut self);

    /// Drive the pin low.
    fn set_low(&mut self);
}

/// Adapter for pins implementing [embedded_hal::digital::OutputPin].
///
/// Write errors are discarded; push-pull GPIO writes are infallible on
/// every HAL this driver is intended for.
pub struct HalPin<P> {
    pin: P,
}

impl<P: embedded_hal::digital::OutputPin> HalPin<P> {
    /// Wraps an `embedded-hal` output pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: embedded_hal::digital::OutputPin> DataPin for HalPin<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
    }
}

/// [PulseClock] backed by the Cortex-M DWT cycle counter.
#[cfg(feature = "cortex-m")]
#[cfg_attr(docsrs, doc(cfg(feature = "cortex-m")))]
pub struct DwtClock {
    hclk: u32,
}

#[cfg(feature = "cortex-m")]
#[cfg_attr(docsrs, doc(cfg(feature = "cortex-m")))]
impl DwtClock {
    /// Enables the cycle counter and creates the clock.
    ///
    /// `hclk` is the core clock frequency in Hz. Taking `DWT` by value
    /// guarantees nobody else reconfigures the counter afterwards.
    pub fn new(
        mut dwt: cortex_m::peripheral::DWT,
        dcb: &mut cortex_m::peripheral::DCB,
        hclk: u32,
    ) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        Self { hclk }
    }
}

#[cfg(feature = "cortex-m")]
impl PulseClock for DwtClock {
    fn frequency(&self) -> u32 {
        self.hclk
    }

    fn cycles(&self) -> u32 {
        cortex_m::peripheral::DWT::cycle_count()
    }
}
