/*!
cpu::mod - Public façade for the 8080 CPU core (spec.md §3, §6).

    state.rs      - Registers, PSW-layout flags, stack/fetch helpers.
    addressing.rs - Register / register-pair field decode, condition codes.
    alu.rs        - Shared 8-bit arithmetic/flag primitives.
    cycles.rs     - Per-opcode T-state cost table.
    dispatch/     - One handler module per instruction family, chained by
                    `dispatch::step`.

`Cpu` is the only type a host needs: it owns a `CpuState` and drives it one
instruction (`step`) or one budget (`execute`) at a time, and exposes
`interrupt` for the host's frame-boundary RST injection (spec.md §4.9).
*/

mod addressing;
mod alu;
mod cycles;
mod dispatch;
mod state;

pub use state::CpuState;

use crate::bus::Bus;
use crate::error::EmulatorError;

/// The 8080 CPU core: architectural state plus the stepping/interrupt entry
/// points a host frame loop drives.
#[derive(Default)]
pub struct Cpu {
    pub state: CpuState,
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to power-on state, discarding all registers, flags, and latches.
    pub fn reset(&mut self) {
        self.state = CpuState::default();
    }

    /// Execute exactly one instruction, returning its T-state cost.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u32, EmulatorError> {
        dispatch::step(&mut self.state, bus)
    }

    /// Run instructions until at least `budget` T-states have been spent,
    /// returning the (possibly negative) carry-over into the next call
    /// (spec.md §5, "cycle budget"). A halted CPU consumes the whole budget in
    /// 7-cycle increments without making further progress.
    pub fn execute(&mut self, budget: i64, bus: &mut Bus) -> Result<i64, EmulatorError> {
        let mut remaining = budget;
        while remaining > 0 {
            let spent = self.step(bus)?;
            remaining -= spent as i64;
        }
        Ok(remaining)
    }

    /// Service a hardware interrupt by jumping to the RST vector for `n`
    /// (`PC <- n * 8`), pushing the current PC exactly as a `CALL` would. A
    /// no-op if the interrupt-enable latch is not set, or while the CPU is
    /// halted waiting on one (spec.md §4.9).
    ///
    /// `HLT` is exited by any serviced interrupt, matching real 8080 behavior.
    pub fn interrupt(&mut self, n: u8, bus: &mut Bus) -> bool {
        if !self.state.interrupt_enable {
            log::debug!("interrupt rst{n} suppressed: interrupts disabled");
            return false;
        }
        self.state.interrupt_enable = false;
        self.state.halted = false;
        let pc = self.state.pc;
        self.state.push_u16(bus, pc);
        self.state.pc = (n as u16) * 8;
        log::debug!("interrupt rst{n} serviced: pc={pc:#06x} -> {:#06x}", self.state.pc);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_runs_until_budget_exhausted() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        // Five NOPs (4 cycles each) starting at 0.
        for i in 0..5u16 {
            bus.write(i, 0x00);
        }
        let leftover = cpu.execute(18, &mut bus).unwrap();
        // 18 / 4 = 4.5 -> 4 NOPs consumed (16), 5th NOP consumed too since the
        // loop only checks remaining > 0 before each step: 18-4-4-4-4=2>0, runs
        // a 5th NOP, leftover = 2-4 = -2.
        assert_eq!(leftover, -2);
        assert_eq!(cpu.state.pc, 5);
    }

    #[test]
    fn reset_clears_registers_and_flags() {
        let mut cpu = Cpu::new();
        cpu.state.a = 0x42;
        cpu.state.pc = 0x1234;
        cpu.state.sp = 0x2400;
        cpu.state.interrupt_enable = true;
        cpu.reset();
        assert_eq!(cpu.state.a, 0);
        assert_eq!(cpu.state.pc, 0);
        assert_eq!(cpu.state.sp, 0);
        assert!(!cpu.state.interrupt_enable);
    }

    #[test]
    fn interrupt_is_ignored_when_disabled() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.state.interrupt_enable = false;
        cpu.state.pc = 0x1234;
        assert!(!cpu.interrupt(1, &mut bus));
        assert_eq!(cpu.state.pc, 0x1234);
    }

    #[test]
    fn interrupt_pushes_pc_and_jumps_to_vector_when_enabled() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.state.interrupt_enable = true;
        cpu.state.sp = 0x2400;
        cpu.state.pc = 0x0300;
        assert!(cpu.interrupt(2, &mut bus));
        assert_eq!(cpu.state.pc, 0x0010);
        assert_eq!(bus.read_word(0x23FE), 0x0300);
        assert!(!cpu.state.interrupt_enable);
    }

    #[test]
    fn interrupt_wakes_a_halted_cpu() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.state.interrupt_enable = true;
        cpu.state.halted = true;
        cpu.interrupt(1, &mut bus);
        assert!(!cpu.state.halted);
    }
}
