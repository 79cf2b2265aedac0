/*!
logical.rs - Logical family: ANA/XRA/ORA (register, memory, and immediate
forms), CMA, CMC, STC, RLC/RRC/RAL/RAR (spec.md §4.3, §4.4).

Overview
========
`ANA` sets Auxiliary-Carry from the OR of bit 3 of both operands, a quirk of the
8080's internal precharge logic that real programs (and diagnostic ROMs such as
8080EXM) depend on; `XRA`/`ORA` always clear it. All three clear Carry
unconditionally. `CMA` and the rotate instructions use distinct, narrower flag
rules documented inline at each arm.
*/

use crate::bus::Bus;
use crate::cpu::addressing::read_reg;
use crate::cpu::state::{AUX_CARRY, CARRY, CpuState};

pub fn handle(opcode: u8, cpu: &mut CpuState, bus: &mut Bus) -> Option<bool> {
    match opcode {
        // ANA r (0xA0-0xA7)
        0xA0..=0xA7 => {
            let value = read_reg(cpu, bus, opcode & 0x07);
            let aux = ((cpu.a | value) & 0x08) != 0;
            cpu.a &= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, aux);
            cpu.set_zsp(cpu.a);
            Some(false)
        }
        // XRA r (0xA8-0xAF)
        0xA8..=0xAF => {
            let value = read_reg(cpu, bus, opcode & 0x07);
            cpu.a ^= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, false);
            cpu.set_zsp(cpu.a);
            Some(false)
        }
        // ORA r (0xB0-0xB7)
        0xB0..=0xB7 => {
            let value = read_reg(cpu, bus, opcode & 0x07);
            cpu.a |= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, false);
            cpu.set_zsp(cpu.a);
            Some(false)
        }

        // ANI data
        0xE6 => {
            let value = cpu.fetch_u8(bus);
            let aux = ((cpu.a | value) & 0x08) != 0;
            cpu.a &= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, aux);
            cpu.set_zsp(cpu.a);
            Some(false)
        }
        // XRI data
        0xEE => {
            let value = cpu.fetch_u8(bus);
            cpu.a ^= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, false);
            cpu.set_zsp(cpu.a);
            Some(false)
        }
        // ORI data
        0xF6 => {
            let value = cpu.fetch_u8(bus);
            cpu.a |= value;
            cpu.assign_flag(CARRY, false);
            cpu.assign_flag(AUX_CARRY, false);
            cpu.set_zsp(cpu.a);
            Some(false)
        }

        // CMA: complement A, no flags affected
        0x2F => {
            cpu.a = !cpu.a;
            Some(false)
        }
        // CMC: complement Carry
        0x3F => {
            let carry = cpu.is_flag_set(CARRY);
            cpu.assign_flag(CARRY, !carry);
            Some(false)
        }
        // STC: set Carry
        0x37 => {
            cpu.assign_flag(CARRY, true);
            Some(false)
        }

        // RLC: rotate A left, bit 7 -> bit 0 and -> Carry
        0x07 => {
            let carry = (cpu.a & 0x80) != 0;
            cpu.a = cpu.a.rotate_left(1);
            cpu.assign_flag(CARRY, carry);
            Some(false)
        }
        // RRC: rotate A right, bit 0 -> bit 7 and -> Carry
        0x0F => {
            let carry = (cpu.a & 0x01) != 0;
            cpu.a = cpu.a.rotate_right(1);
            cpu.assign_flag(CARRY, carry);
            Some(false)
        }
        // RAL: rotate A left through Carry
        0x17 => {
            let carry_in = cpu.is_flag_set(CARRY) as u8;
            let carry_out = (cpu.a & 0x80) != 0;
            cpu.a = (cpu.a << 1) | carry_in;
            cpu.assign_flag(CARRY, carry_out);
            Some(false)
        }
        // RAR: rotate A right through Carry
        0x1F => {
            let carry_in = cpu.is_flag_set(CARRY) as u8;
            let carry_out = (cpu.a & 0x01) != 0;
            cpu.a = (cpu.a >> 1) | (carry_in << 7);
            cpu.assign_flag(CARRY, carry_out);
            Some(false)
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ana_clears_carry_and_sets_aux_from_bit3_or() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x0F;
        cpu.b = 0xF0;
        cpu.assign_flag(CARRY, true);
        handle(0xA0, &mut cpu, &mut bus); // ANA B
        assert_eq!(cpu.a, 0x00);
        assert!(!cpu.is_flag_set(CARRY));
        assert!(cpu.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn xra_a_with_itself_zeroes_and_clears_flags() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x5A;
        handle(0xAF, &mut cpu, &mut bus); // XRA A
        assert_eq!(cpu.a, 0x00);
        assert!(!cpu.is_flag_set(CARRY));
        assert!(!cpu.is_flag_set(AUX_CARRY));
    }

    #[test]
    fn ora_sets_result_and_clears_carry() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x0F;
        cpu.c = 0xF0;
        handle(0xB1, &mut cpu, &mut bus); // ORA C
        assert_eq!(cpu.a, 0xFF);
    }

    #[test]
    fn cma_complements_without_touching_flags() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x0F;
        cpu.assign_flag(CARRY, true);
        handle(0x2F, &mut cpu, &mut bus);
        assert_eq!(cpu.a, 0xF0);
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn cmc_and_stc_toggle_and_set_carry() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        handle(0x37, &mut cpu, &mut bus); // STC
        assert!(cpu.is_flag_set(CARRY));
        handle(0x3F, &mut cpu, &mut bus); // CMC
        assert!(!cpu.is_flag_set(CARRY));
    }

    #[test]
    fn rlc_rotates_high_bit_into_carry_and_bit0() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x80;
        handle(0x07, &mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x01);
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn ral_rotates_through_carry_not_bit0() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x80;
        cpu.assign_flag(CARRY, true);
        handle(0x17, &mut cpu, &mut bus); // RAL
        assert_eq!(cpu.a, 0x01); // old carry shifted into bit 0
        assert!(cpu.is_flag_set(CARRY)); // old bit 7 shifted out
    }

    #[test]
    fn rar_rotates_through_carry_not_bit7() {
        let mut cpu = CpuState::new();
        let mut bus = Bus::new();
        cpu.a = 0x01;
        cpu.assign_flag(CARRY, true);
        handle(0x1F, &mut cpu, &mut bus); // RAR
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.is_flag_set(CARRY));
    }
}
