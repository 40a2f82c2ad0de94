use crate::errors::Error;

/// A fixed-size table of strip data pins, indexed by pin identifier.
///
/// Mirrors a fixed hardware topology: `N` slots are allotted at process
/// start and the table is never resized. A slot that was never populated
/// yields [Error::InvalidPin] on lookup, before any hardware is touched.
pub struct PinRegistry<P, const N: usize> {
    slots: [Option<P>; N],
}

impl<P, const N: usize> PinRegistry<P, N> {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
        }
    }

    /// Registers `pin` under the identifier `id`.
    ///
    /// Fails with [Error::InvalidPin] if `id` is outside the fixed topology.
    /// Re-registering an identifier replaces the previous pin.
    pub fn register(&mut self, id: u8, pin: P) -> Result<(), Error> {
        let slot = self
            .slots
            .get_mut(usize::from(id))
            .ok_or(Error::InvalidPin { pin: id })?;

        log::debug!("Registering strip pin in slot {}.", id);
        *slot = Some(pin);
        Ok(())
    }

    /// Looks up a registered pin.
    pub fn get_mut(&mut self, id: u8) -> Result<&mut P, Error> {
        self.slots
            .get_mut(usize::from(id))
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidPin { pin: id })
    }
}

impl<P, const N: usize> Default for PinRegistry<P, N> {
    fn default() -> Self {
        Self::new()
    }
}
