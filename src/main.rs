use anyhow::Result;
use menagerie::{demo, logging, Runner};
use std::io::{self, Write};

fn main() -> Result<()> {
    logging::init_logger()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = demo::run(&Runner::sequential(), &mut out)?;
    out.flush()?;

    let json = report.to_json()?;
    tracing::info!(report = %json, "all queries printed");
    Ok(())
}
