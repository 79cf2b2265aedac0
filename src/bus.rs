/*!
bus.rs - Aggregates `Memory` and `IoPorts` into the single handle the CPU core reads
and writes through (spec.md §6, "Core API exposed to the host").

Address map
===========
There is no memory-mapped I/O on this machine: the CPU's 64 KiB address space is
served entirely by `Memory`; the shift register and discrete input/output ports live
in `IoPorts` and are reached only via the 8080's `IN`/`OUT` instructions, which the
decoder routes to `Bus::inport`/`Bus::outport`.

| Region | Contents |
|---|---|
| `$0000-$1FFF` | ROM (8 KiB cartridge image; writes succeed but are not hardware-faithful) |
| `$2000-$23FF` | work RAM |
| `$2400-$3FFF` | video RAM (7 KiB, 1bpp framebuffer; see `spec.md` §6) |
| `$4000-$FFFF` | RAM mirror / unused on the real cabinet, modeled as plain RAM here |

This module does not enforce the map above; like the real emulated bus (`spec.md`
§4.1), every address is readable and writable. The table is descriptive, not a
permission check.
*/

use crate::error::EmulatorError;
use crate::io::{IoPorts, OutputEvent};
use crate::memory::Memory;

/// The CPU's view of the outside world: flat memory plus discrete I/O ports.
pub struct Bus {
    pub memory: Memory,
    pub io: IoPorts,
}

impl Bus {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            io: IoPorts::new(),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value)
    }

    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value)
    }

    #[inline]
    pub fn inport(&self, port: u8) -> u8 {
        self.io.inport(port)
    }

    #[inline]
    pub fn outport(&mut self, port: u8, value: u8) {
        log::trace!("outport({port}, {value:#04x})");
        self.io.outport(port, value)
    }

    /// Load a raw ROM image at `offset` (`spec.md` §4.1, §6). Out of scope per
    /// `spec.md` §1 beyond this byte-copy: no container format is parsed.
    pub fn load_rom(&mut self, data: &[u8], offset: usize) -> Result<(), EmulatorError> {
        self.memory.load_image(data, offset)
    }

    #[inline]
    pub fn set_input_bit(&mut self, port: u8, bit: u8, pressed: bool) {
        self.io.set_input_bit(port, bit, pressed);
    }

    #[inline]
    pub fn drain_output_events(&mut self) -> Vec<OutputEvent> {
        self.io.drain_output_events()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
