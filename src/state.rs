//! Save-state serialization used by the individual hardware components.
//!
//! Each component that needs to be snapshotted (the CPU registers, the
//! timer, the serial port, the joypad, ...) implements [`StateComponent`]
//! and is responsible for its own binary layout. The format is kept
//! deliberately simple: a flat sequence of little-endian fields, read back
//! in the exact order they were written.

use pocketcore_common::error::Error;

/// Placeholder for future alternative encodings of component state.
///
/// Only the raw, component-private binary layout is implemented today;
/// the parameter exists so that callers of [`StateComponent`] do not need
/// to change once additional formats (e.g. a portable, cross-emulator
/// format) are introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    Raw,
}

pub trait StateComponent {
    /// Serializes the component's internal state into a byte buffer.
    fn state(&self, format: Option<StateFormat>) -> Result<Vec<u8>, Error>;

    /// Restores the component's internal state from a byte buffer
    /// previously produced by [`StateComponent::state`].
    fn set_state(&mut self, data: &[u8], format: Option<StateFormat>) -> Result<(), Error>;
}
