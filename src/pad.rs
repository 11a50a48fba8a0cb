//! Joypad (P1) input register and interrupt source.

use std::io::Cursor;

use pocketcore_common::{
    data::{read_u8, write_u8},
    error::Error,
};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    mmu::BusComponent,
    state::{StateComponent, StateFormat},
};

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,
    int_pad: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::Action,
            int_pad: false,
        }
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.up = false;
        self.left = false;
        self.right = false;
        self.start = false;
        self.select = false;
        self.b = false;
        self.a = false;
        self.selection = PadSelection::Action;
        self.int_pad = false;
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                let mut value;
                match self.selection {
                    PadSelection::Action => {
                        value = if self.a { 0x00 } else { 0x01 }
                            | if self.b { 0x00 } else { 0x02 }
                            | if self.select { 0x00 } else { 0x04 }
                            | if self.start { 0x00 } else { 0x08 }
                    }
                    PadSelection::Direction => {
                        value = if self.right { 0x00 } else { 0x01 }
                            | if self.left { 0x00 } else { 0x02 }
                            | if self.up { 0x00 } else { 0x04 }
                            | if self.down { 0x00 } else { 0x08 }
                    }
                }
                value |= if self.selection == PadSelection::Direction {
                    0x10
                } else {
                    0x00
                } | if self.selection == PadSelection::Action {
                    0x20
                } else {
                    0x00
                };
                value
            }
            addr => panic!("Reading from unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                self.selection = if value & 0x10 == 0x00 {
                    PadSelection::Direction
                } else {
                    PadSelection::Action
                }
            }
            addr => panic!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    /// Marks a key as pressed, requesting the joypad interrupt.
    ///
    /// Real hardware raises the interrupt on a high-to-low transition of
    /// one of the currently selected input lines; this is simplified to
    /// fire unconditionally on every press, which is the behavior games
    /// rely on to wake up from `HALT` while waiting for input.
    pub fn key_press(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }
        self.int_pad = true;
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }
}

impl BusComponent for Pad {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl StateComponent for Pad {
    fn state(&self, _format: Option<StateFormat>) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        let mut keys = 0x00u8;
        keys |= self.down as u8;
        keys |= (self.up as u8) << 1;
        keys |= (self.left as u8) << 2;
        keys |= (self.right as u8) << 3;
        keys |= (self.start as u8) << 4;
        keys |= (self.select as u8) << 5;
        keys |= (self.b as u8) << 6;
        keys |= (self.a as u8) << 7;
        write_u8(&mut cursor, keys)?;
        write_u8(&mut cursor, (self.selection == PadSelection::Action) as u8)?;
        write_u8(&mut cursor, self.int_pad as u8)?;
        Ok(cursor.into_inner())
    }

    fn set_state(&mut self, data: &[u8], _format: Option<StateFormat>) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        let keys = read_u8(&mut cursor)?;
        self.down = keys & 0x01 != 0;
        self.up = keys & 0x02 != 0;
        self.left = keys & 0x04 != 0;
        self.right = keys & 0x08 != 0;
        self.start = keys & 0x10 != 0;
        self.select = keys & 0x20 != 0;
        self.b = keys & 0x40 != 0;
        self.a = keys & 0x80 != 0;
        self.selection = if read_u8(&mut cursor)? != 0 {
            PadSelection::Action
        } else {
            PadSelection::Direction
        };
        self.int_pad = read_u8(&mut cursor)? != 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pad, PadKey};

    #[test]
    fn test_key_press_requests_interrupt() {
        let mut pad = Pad::new();
        assert!(!pad.int_pad());
        pad.key_press(PadKey::A);
        assert!(pad.int_pad());
        pad.ack_pad();
        assert!(!pad.int_pad());
    }

    #[test]
    fn test_selection_switches_nibble() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x10);
        pad.key_press(PadKey::A);
        assert_eq!(pad.read(0xff00) & 0x01, 0x00);

        pad.write(0xff00, 0x20);
        assert_eq!(pad.read(0xff00) & 0x01, 0x01);
    }
}
