/*!
error.rs - Typed error surface for the emulator core.

`spec.md` §7 names exactly two error kinds: a fatal ROM-size mismatch surfaced from
loading, and an unimplemented-opcode condition that is unreachable in a conforming
implementation (all 256 opcode values are mapped, with the documented "alternate"
encodings aliased to real instructions) but is still given a typed shape rather than
a panic, so a host can report it instead of crashing.

Everything else in the 8080 instruction set that looks like a runtime error on other
architectures — arithmetic overflow, stack-pointer wraparound, popping from an empty
stack — is in-band 8080 behavior modeled with wrapping arithmetic, not an error.
*/

use thiserror::Error;

/// Errors surfaced by the emulator core to its host.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum EmulatorError {
    /// `Memory::load_image` was asked to place a ROM image where `offset + len`
    /// overflows the 64 KiB address space.
    #[error("ROM of {rom_len} bytes at offset {offset:#06x} does not fit in 64 KiB memory")]
    InvalidRomSize { offset: usize, rom_len: usize },

    /// The decoder reached its final fallback arm for a byte that is not one of the
    /// 256 documented (or aliased) 8080 opcodes. Unreachable for a correct opcode
    /// table; kept as a typed, non-panicking failure mode per `spec.md` §7.
    #[error("unimplemented opcode {opcode:#04x} at pc={pc:#06x}")]
    UnimplementedInstruction { pc: u16, opcode: u8 },
}
