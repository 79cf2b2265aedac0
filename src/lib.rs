#![doc = r#"
invaders8080: an Intel 8080 CPU core plus the Space Invaders cabinet's I/O
subsystem (shift register, discrete input/output ports).

Modules:
- error: typed error surface returned by the core to its host
- memory: flat 64 KiB address space
- io: discrete input ports, shift register, edge-triggered output events
- bus: aggregates memory + io into the single handle the CPU reads/writes
- cpu: register/flag state, instruction decode, and the `Cpu` facade

Out of scope (spec.md §1): a renderer, a sound mixer, a keyboard-to-input
mapper, frame pacing, a disassembler, and ROM-container parsing. Those are
the host's job; this crate exposes the contracts they integrate against.
"#]

pub mod bus;
pub mod cpu;
pub mod error;
pub mod io;
pub mod memory;

pub use bus::Bus;
pub use cpu::Cpu;
pub use error::EmulatorError;
