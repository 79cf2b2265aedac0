/*!
dispatch/mod.rs - Orchestrator for a single 8080 instruction step.

Overview
========
Coordinates one `Cpu::step`:
1. If halted, burns 7 T-states and does nothing else — the same cost as the
   `HLT` opcode itself, since a halted CPU is modeled as re-executing it every
   step until the next interrupt (spec.md §4.8).
2. Fetches the opcode, advancing PC by 1, and looks up its not-taken cost.
3. Chains through the seven instruction-family handlers in turn; the first
   family that recognizes the opcode executes it and reports whether a
   conditional branch/call/return was taken.
4. Adds the taken-bonus cycles (spec.md §5) when applicable.
5. Reports `EmulatorError::UnimplementedInstruction` if no family claims the
   opcode — unreachable for the shipped table, since all 256 byte values
   (including the seven documented aliases) are covered by some family.

Architecture
============
Each family module exposes `handle(opcode, cpu, bus) -> Option<bool>`: `None`
means "not mine", `Some(taken)` means "handled, and here is whether a
conditional branch was taken". `Option::or_else` chains the families with
the same short-circuiting spirit as `||`, but lets the result carry data.
*/

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod load_store;
mod logical;
mod misc;

use crate::bus::Bus;
use crate::cpu::cycles;
use crate::cpu::state::CpuState;
use crate::error::EmulatorError;

/// Execute exactly one instruction (or the halted no-op), returning the number
/// of T-states it cost.
pub fn step(cpu: &mut CpuState, bus: &mut Bus) -> Result<u32, EmulatorError> {
    if cpu.halted {
        return Ok(7);
    }

    let pc = cpu.pc;
    let opcode = cpu.fetch_u8(bus);
    log::trace!("pc={pc:#06x} opcode={opcode:#04x}");
    let mut total = cycles::base_cycles(opcode);

    let taken = load_store::handle(opcode, cpu, bus)
        .or_else(|| arithmetic::handle(opcode, cpu, bus))
        .or_else(|| logical::handle(opcode, cpu, bus))
        .or_else(|| compare::handle(opcode, cpu, bus))
        .or_else(|| branches::handle(opcode, cpu, bus))
        .or_else(|| control_flow::handle(opcode, cpu, bus))
        .or_else(|| misc::handle(opcode, cpu, bus))
        .ok_or(EmulatorError::UnimplementedInstruction { pc, opcode })?;

    if taken {
        total += cycles::taken_bonus(opcode);
    }

    Ok(total)
}
