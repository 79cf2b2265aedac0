/*!
control_flow.rs - Subroutine linkage: CALL, Ccond, RET, Rcond, RST (spec.md
§4.6). Handles the documented aliases 0xD9 -> RET and 0xDD/0xED/0xFD -> CALL
(spec.md §4.8).

Overview
========
`CALL`/`Ccond` always fetch their 16-bit target before testing the condition,
matching real timing; only on a taken branch (or the unconditional form) is the
return address pushed and PC redirected. `RET`/`Rcond` and `RST` never read an
operand, so there is nothing to fetch regardless of outcome.
*/

use crate::bus::Bus;
use crate::cpu::addressing::condition_met;
use crate::cpu::state::CpuState;

pub fn handle(opcode: u8, cpu: &mut CpuState, bus: &mut Bus) -> Option<bool> {
    match opcode {
        // CALL addr, and its documented aliases
        0xCD | 0xDD | 0xED | 0xFD => {
            let target = cpu.fetch_u16(bus);
            cpu.push_u16(bus, cpu.pc);
            cpu.pc = target;
            Some(false)
        }

        // Ccond addr
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
            let cc = (opcode >> 3) & 0x07;
            let target = cpu.fetch_u16(bus);
            let taken = condition_met(cpu, cc);
            if taken {
                cpu.push_u16(bus, cpu.pc);
                cpu.pc = target;
            }
            Some(taken)
        }

        // RET, and its documented alias 0xD9
        0xC9 | 0xD9 => {
            cpu.pc = cpu.pop_u16(bus);
            Some(false)
        }

        // Rcond
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
            let cc = (opcode >> 3) & 0x07;
            let taken = condition_met(cpu, cc);
            if taken {
                cpu.pc = cpu.pop_u16(bus);
            }
            Some(taken)
        }

        // RST n: call to fixed vector n*8
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            let n = (opcode >> 3) & 0x07;
            cpu.push_u16(bus, cpu.pc);
            cpu.pc = (n as u16) * 8;
            Some(false)
        }

        _ => None,
    }
}
