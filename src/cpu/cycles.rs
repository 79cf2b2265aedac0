/*!
cycles.rs - Per-opcode T-state cost table for the 8080 (spec.md §5).

Overview
========
`base_cycles` returns the T-state cost charged for an opcode the moment it is
fetched. For the four conditional instructions whose cost depends on whether the
branch is taken (`Jcond`, `Ccond`, `Rcond`), this is the *not-taken* cost; the
family handler in `dispatch::branches`/`control_flow` adds the extra cycles when
the condition holds (spec.md §5, "conditional cost").

The table is exhaustive over all 256 byte values, including the seven documented
"alternate" opcodes that alias real instructions (spec.md §4.8): their cost is
that of the instruction they alias, not a fixed NOP/CALL/RET cost, since the
alias *is* that instruction as far as the hardware is concerned.
*/

/// T-state cost charged when `opcode` is fetched (not-taken cost for the three
/// conditional families).
pub fn base_cycles(opcode: u8) -> u32 {
    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => 4, // NOP + aliases
        0x76 => 7,                                                 // HLT
        0xF3 | 0xFB => 4,                                          // DI / EI

        // MOV r,r' (0x40-0x7F except 0x76)
        0x40..=0x7F => {
            let dst_m = (opcode >> 3) & 0x07 == 6;
            let src_m = opcode & 0x07 == 6;
            if dst_m || src_m { 7 } else { 5 }
        }

        // MVI r,data
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => 7,
        0x36 => 10, // MVI M,data

        // INR r / DCR r
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x3C => 5,
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x3D => 5,
        0x34 | 0x35 => 10, // INR M / DCR M

        // LXI rp,data16
        0x01 | 0x11 | 0x21 | 0x31 => 10,

        // INX / DCX rp
        0x03 | 0x13 | 0x23 | 0x33 => 5,
        0x0B | 0x1B | 0x2B | 0x3B => 5,

        // DAD rp
        0x09 | 0x19 | 0x29 | 0x39 => 10,

        // LDAX / STAX
        0x0A | 0x1A | 0x02 | 0x12 => 7,

        // Direct-address data transfer
        0x32 | 0x3A => 13, // STA / LDA
        0x22 | 0x2A => 16, // SHLD / LHLD

        0xEB => 5,  // XCHG
        0xE3 => 18, // XTHL
        0xF9 => 5,  // SPHL

        // PUSH rp
        0xC5 | 0xD5 | 0xE5 | 0xF5 => 11,
        // POP rp
        0xC1 | 0xD1 | 0xE1 | 0xF1 => 10,

        // ALU A,r (ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP) 0x80-0xBF
        0x80..=0xBF => {
            if opcode & 0x07 == 6 { 7 } else { 4 }
        }

        // ALU A,immediate
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => 7,

        // RLC/RRC/RAL/RAR/CMA/STC/CMC
        0x07 | 0x0F | 0x17 | 0x1F | 0x2F | 0x37 | 0x3F => 4,

        0x27 => 4, // DAA

        0xC3 | 0xCB => 10, // JMP + alias
        // Jcond
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => 10,
        0xE9 => 5, // PCHL

        0xCD | 0xDD | 0xED | 0xFD => 17, // CALL + aliases
        // Ccond (not-taken cost)
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => 11,

        0xC9 | 0xD9 => 10, // RET + alias
        // Rcond (not-taken cost)
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => 5,

        // RST n
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => 11,

        0xDB | 0xD3 => 10, // IN / OUT

        // Any opcode not matched above is unreachable for a complete table; cost
        // is irrelevant because dispatch will report UnimplementedInstruction
        // before this value is used.
        _ => 4,
    }
}

/// Extra T-states paid on top of `base_cycles` when a conditional branch/call/
/// return is actually taken (spec.md §5).
pub fn taken_bonus(opcode: u8) -> u32 {
    match opcode {
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => 6, // Ccond: 11 -> 17
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => 6, // Rcond: 5 -> 11
        _ => 0,
    }
}
