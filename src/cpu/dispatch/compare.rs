/*!
compare.rs - Compare family: CMP r, CPI data (spec.md §4.4).

Overview
========
Both instructions compute `A - operand` purely for its flag outcome: Carry is
set when `A < operand` (a borrow occurred), Zero when they are equal, and
Sign/Parity/Auxiliary-Carry from the subtraction result exactly as for `SUB`.
`A` itself is left unmodified.
*/

use crate::bus::Bus;
use crate::cpu::addressing::read_reg;
use crate::cpu::alu::sub8;
use crate::cpu::state::{AUX_CARRY, CARRY, CpuState};

fn apply_compare(cpu: &mut CpuState, operand: u8) {
    let r = sub8(cpu.a, operand, false);
    cpu.assign_flag(CARRY, r.carry);
    cpu.assign_flag(AUX_CARRY, r.aux_carry);
    cpu.set_zsp(r.value);
}

pub fn handle(opcode: u8, cpu: &mut CpuState, bus: &mut Bus) -> Option<bool> {
    match opcode {
        // CMP r (0xB8-0xBF)
        0xB8..=0xBF => {
            let value = read_reg(cpu, bus, opcode & 0x07);
            apply_compare(cpu, value);
            Some(false)
        }
        // CPI data
        0xFE => {
            let value = cpu.fetch_u8(bus);
            apply_compare(cpu, value);
            Some(false)
        }
        _ => None,
    }
}
