//! Reference host: loads a ROM and runs the core for a fixed number of frames,
//! driving it the way the real cabinet's timing does (spec.md §5, §6). No
//! rendering, audio, or input mapping — those are external collaborators this
//! binary does not implement, it only demonstrates the contract they'd use.

use std::process::ExitCode;

use invaders8080::{Bus, Cpu};

/// T-states per half-frame at 2 MHz / 60 Hz (spec.md §5).
const HALF_FRAME_CYCLES: i64 = 16_666;

fn main() -> ExitCode {
    env_logger::init();

    let rom_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            log::error!("usage: invaders8080 <rom-path>");
            return ExitCode::FAILURE;
        }
    };

    let rom = match std::fs::read(&rom_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("failed to read {rom_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut bus = Bus::new();
    if let Err(err) = bus.load_rom(&rom, 0) {
        log::error!("failed to load {rom_path}: {err}");
        return ExitCode::FAILURE;
    }

    let mut cpu = Cpu::new();
    let mut carry = 0i64;

    loop {
        carry = match cpu.execute(HALF_FRAME_CYCLES + carry, &mut bus) {
            Ok(remaining) => remaining,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        };
        cpu.interrupt(1, &mut bus);

        carry = match cpu.execute(HALF_FRAME_CYCLES + carry, &mut bus) {
            Ok(remaining) => remaining,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        };
        cpu.interrupt(2, &mut bus);

        for (port, prev, curr) in bus.drain_output_events() {
            log::trace!("output event: port={port} prev={prev:#04x} curr={curr:#04x}");
        }

        if cpu.state.halted {
            log::info!("CPU halted, shutting down");
            return ExitCode::SUCCESS;
        }
    }
}
