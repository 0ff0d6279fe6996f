use anyhow::{Context, Result};
use dotboy::{RunConfig, DEFAULT_MAX_STEPS};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = args.next().unwrap_or_default();
    let max_steps = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("invalid step budget '{}'", raw))?,
        None => DEFAULT_MAX_STEPS,
    };

    let config = if rom_path.is_empty() {
        log::info!("No ROM path provided, running the bundled ADD A,B demo");
        RunConfig::demo()
    } else {
        log::info!("Running ROM path: '{}'", rom_path);
        let rom = std::fs::read(&rom_path)
            .with_context(|| format!("failed to read ROM file '{}'", rom_path))?;
        RunConfig::builder()
            .rom(rom)
            .max_steps(max_steps)
            .build()
    };

    let before = config.init;
    println!(
        "A before: 0x{:02X}  B before: 0x{:02X}",
        (before.af >> 8) as u8,
        (before.bc >> 8) as u8
    );

    let report = dotboy::run(config)?;
    println!("{}", dotboy::format_state(&report.cpu));
    println!(
        "{} instructions, {} cycles",
        report.summary.steps, report.summary.cycles
    );

    report.summary.into_result()?;
    Ok(())
}
