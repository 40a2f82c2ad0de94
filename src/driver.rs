use crate::{
    errors::Error,
    pixel::Pixel,
    platform::{DataPin, PulseClock},
    registry::PinRegistry,
    timing::{CycleTiming, Timing},
};

/// A bit-banged WS2812 Neopixel LED strip driver paced by a cycle counter.
///
/// The driver owns a fixed-size [PinRegistry] of strip data pins and a
/// [PulseClock]. A transmission is strictly blocking: it runs inside a
/// critical section from the first bit to the end of the latch delay,
/// because any pause longer than one bit period corrupts the whole frame.
/// There is no cancellation and no mid-stream recovery; if a timeout is
/// needed, enforce it before calling [write](Ws2812Driver::write).
///
/// Expect a call to take `8 × len × bit period + latch`, which reaches
/// into the milliseconds for long strips.
pub struct Ws2812Driver<P, C, const N: usize> {
    pins: PinRegistry<P, N>,
    clock: C,
}

impl<P: DataPin, C: PulseClock, const N: usize> Ws2812Driver<P, C, N> {
    /// Creates the driver from a clock and an already-populated registry.
    pub fn new(clock: C, pins: PinRegistry<P, N>) -> Self {
        log::debug!("Initializing bit-bang neopixel driver.");
        log::debug!("    Clock frequency: {} Hz", clock.frequency());
        log::debug!("    Pin slots: {}", N);

        Self { pins, clock }
    }

    /// Registers a strip data pin under the identifier `id`.
    pub fn register_pin(&mut self, id: u8, pin: P) -> Result<(), Error> {
        self.pins.register(id, pin)
    }

    /// Writes raw strip bytes to the pin registered under `pin`.
    ///
    /// Each byte is emitted MSB-first as eight high/low pulses, followed by
    /// the latch delay. An empty buffer is a valid no-op that still issues
    /// the latch. The bytes must already be in the strip's channel order;
    /// see [Pixel] and [write_pixels](Ws2812Driver::write_pixels) for color
    /// data.
    pub fn write(&mut self, pin: u8, data: &[u8], timing: &Timing) -> Result<(), Error> {
        self.write_bytes(pin, data.iter().copied(), timing)
    }

    /// Writes pixels to the pin registered under `pin`.
    ///
    /// Streams the pixels through the same emit loop as
    /// [write](Ws2812Driver::write), without an intermediate buffer.
    pub fn write_pixels<I>(&mut self, pin: u8, pixels: I, timing: &Timing) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Pixel,
    {
        self.write_bytes(
            pin,
            pixels.into_iter().flat_map(Pixel::into_strip_bytes),
            timing,
        )
    }

    fn write_bytes(
        &mut self,
        pin: u8,
        bytes: impl Iterator<Item = u8>,
        timing: &Timing,
    ) -> Result<(), Error> {
        // Both checks fail before any hardware access.
        let cycles = timing.to_cycles(self.clock.frequency())?;
        let pin = self.pins.get_mut(pin)?;
        let clock = &self.clock;

        // Mask interrupts for the whole frame, latch included.
        let overshoot = critical_section::with(|_| emit(pin, clock, &cycles, bytes));

        if overshoot > 0 {
            log::warn!(
                "Transmission overshot its timing budget by {} ticks; the strip likely latched garbage.",
                overshoot
            );
            return Err(Error::InterruptedTransmission);
        }

        Ok(())
    }
}

/// Emits the pulse train and returns by how many ticks the transmission
/// exceeded its budget (0 = on time).
///
/// Deadlines are absolute counter targets advanced by per-phase tick
/// counts, so loop and branch overhead is absorbed by the following
/// busy-wait and the total high+low time per bit matches the configured
/// period.
fn emit<P: DataPin, C: PulseClock>(
    pin: &mut P,
    clock: &C,
    t: &CycleTiming,
    bytes: impl Iterator<Item = u8>,
) -> u32 {
    let start = clock.cycles();
    let mut deadline = start;
    let mut bits: u32 = 0;

    for byte in bytes {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1 != 0;

            pin.set_high();
            deadline = deadline.wrapping_add(t.high(bit));
            clock.spin_until(deadline);

            pin.set_low();
            deadline = deadline.wrapping_add(t.low(bit));
            clock.spin_until(deadline);

            bits += 1;
        }
    }

    if bits == 0 {
        // Nothing drove the pin low yet; the latch must still be a low hold.
        pin.set_low();
    }

    deadline = deadline.wrapping_add(t.latch);
    clock.spin_until(deadline);

    let elapsed = clock.cycles().wrapping_sub(start);
    let budget = deadline.wrapping_sub(start);

    // One bit period of slack; anything beyond that means a jitter source
    // stalled the loop long enough to corrupt the frame.
    elapsed.saturating_sub(budget.saturating_add(t.bit_period))
}
