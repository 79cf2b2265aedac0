/*!
misc.rs - Machine control: NOP and its six documented aliases, HLT, DI, EI,
IN, OUT (spec.md §4.7, §4.8).
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

pub fn handle(opcode: u8, cpu: &mut CpuState, bus: &mut Bus) -> Option<bool> {
    match opcode {
        // NOP, and its six documented aliases
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Some(false),

        0x76 => {
            cpu.halted = true;
            Some(false)
        }

        0xF3 => {
            cpu.interrupt_enable = false;
            Some(false)
        }
        0xFB => {
            cpu.interrupt_enable = true;
            Some(false)
        }

        0xDB => {
            let port = cpu.fetch_u8(bus);
            cpu.a = bus.inport(port);
            Some(false)
        }
        0xD3 => {
            let port = cpu.fetch_u8(bus);
            bus.outport(port, cpu.a);
            Some(false)
        }

        _ => None,
    }
}
