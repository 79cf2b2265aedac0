/*!
branches.rs - Unconditional and conditional jump family: JMP, Jcond, PCHL
(spec.md §4.5). Handles the documented alias 0xCB -> JMP (spec.md §4.8).

Overview
========
None of these instructions touch the condition flags; they only move PC. The
16-bit target is always fetched before the condition is tested, matching real
8080 timing (the operand bytes are always read off the instruction stream
whether or not the jump is taken).
*/

use crate::bus::Bus;
use crate::cpu::addressing::condition_met;
use crate::cpu::state::CpuState;

pub fn handle(opcode: u8, cpu: &mut CpuState, bus: &mut Bus) -> Option<bool> {
    match opcode {
        // JMP addr, and its documented alias 0xCB
        0xC3 | 0xCB => {
            let target = cpu.fetch_u16(bus);
            cpu.pc = target;
            Some(false)
        }

        // Jcond addr (0xC2,0xCA,0xD2,0xDA,0xE2,0xEA,0xF2,0xFA)
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
            let cc = (opcode >> 3) & 0x07;
            let target = cpu.fetch_u16(bus);
            let taken = condition_met(cpu, cc);
            if taken {
                cpu.pc = target;
            }
            Some(taken)
        }

        // PCHL: PC <- HL
        0xE9 => {
            cpu.pc = cpu.hl();
            Some(false)
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::ZERO;

    #[test]
    fn jmp_sets_pc_to_fetched_target() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        bus.write(0, 0x34);
        bus.write(1, 0x12);
        cpu.pc = 0;
        assert_eq!(handle(0xC3, &mut cpu, &mut bus), Some(false));
        assert_eq!(cpu.pc, 0x1234);
    }

    #[test]
    fn jmp_alias_0xcb_behaves_identically() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        bus.write(0, 0x00);
        bus.write(1, 0x50);
        cpu.pc = 0;
        handle(0xCB, &mut cpu, &mut bus);
        assert_eq!(cpu.pc, 0x5000);
    }

    #[test]
    fn jz_only_jumps_when_zero_set() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        bus.write(0, 0x00);
        bus.write(1, 0x20);
        cpu.pc = 0;
        let taken = handle(0xCA, &mut cpu, &mut bus); // JZ
        assert_eq!(taken, Some(false));
        assert_eq!(cpu.pc, 2); // not taken: PC only advanced past the operand

        cpu.pc = 0;
        cpu.assign_flag(ZERO, true);
        let taken = handle(0xCA, &mut cpu, &mut bus);
        assert_eq!(taken, Some(true));
        assert_eq!(cpu.pc, 0x2000);
    }

    #[test]
    fn pchl_loads_pc_from_hl() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.set_hl(0x4400);
        handle(0xE9, &mut cpu, &mut bus);
        assert_eq!(cpu.pc, 0x4400);
    }
}
