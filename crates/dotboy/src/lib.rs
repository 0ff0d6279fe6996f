use std::fmt::Write as _;

use anyhow::{Context, Result};
use dotboy_core::{Cpu, CpuInit, Memory, RunSummary};
use typed_builder::TypedBuilder;

/// Default instruction budget for a run.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Program used when no ROM path is given: a single `ADD A,B`.
pub const DEMO_PROGRAM: &[u8] = &[0x80];

#[derive(Debug, TypedBuilder)]
pub struct RunConfig {
    pub rom: Vec<u8>,
    /// Address the image is copied to.
    #[builder(default = 0x0000)]
    pub load_addr: u16,
    #[builder(default)]
    pub init: CpuInit,
    #[builder(default = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,
}

impl RunConfig {
    /// The bundled demo: A=0x10, B=0x20, one instruction.
    pub fn demo() -> Self {
        RunConfig::builder()
            .rom(DEMO_PROGRAM.to_vec())
            .init(CpuInit::builder().af(0x1000).bc(0x2000).build())
            .max_steps(DEMO_PROGRAM.len())
            .build()
    }
}

pub struct RunReport {
    pub cpu: Cpu,
    pub memory: Memory,
    pub summary: RunSummary,
}

/// Load the image, run the CPU for at most `max_steps` instructions and
/// hand back the final state.
///
/// A CPU fault does not make this fail; it is recorded in
/// `RunReport::summary` so the caller can still print the registers.
pub fn run(config: RunConfig) -> Result<RunReport> {
    let RunConfig {
        rom,
        load_addr,
        init,
        max_steps,
    } = config;

    let mut memory = Memory::new();
    memory
        .load(load_addr, &rom)
        .with_context(|| format!("failed to load {} byte image", rom.len()))?;

    let mut cpu = Cpu::with_init(init);
    log::info!(
        "running {} byte image from PC=0x{:04X} (budget {} steps)",
        rom.len(),
        cpu.pc(),
        max_steps
    );

    let summary = cpu.run(&mut memory, max_steps);
    log::info!(
        "stopped after {} steps / {} cycles",
        summary.steps,
        summary.cycles
    );

    Ok(RunReport {
        cpu,
        memory,
        summary,
    })
}

/// One-line register dump followed by the flag view.
pub fn format_state(cpu: &Cpu) -> String {
    let flags = cpu.flags();
    let mut out = String::new();
    let _ = write!(
        out,
        "A=0x{:02X} F=0x{:02X} B=0x{:02X} C=0x{:02X} D=0x{:02X} E=0x{:02X} H=0x{:02X} L=0x{:02X} SP=0x{:04X} PC=0x{:04X}",
        cpu.a(),
        cpu.f(),
        cpu.b(),
        cpu.c(),
        cpu.d(),
        cpu.e(),
        cpu.h(),
        cpu.l(),
        cpu.sp(),
        cpu.pc(),
    );
    let _ = write!(
        out,
        "\nFlags: Z={} N={} H={} C={}",
        flags.z, flags.n, flags.h, flags.c
    );
    out
}
