use anyhow::{Context, Result};
use log::{info, warn};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::io::{BufWriter, stdout};

mod cli;
mod config;
mod diagnostics;
mod io;
mod selection;

use cli::get_args;
use config::{CHANNEL_LABELS, DIAG_VAR, RADIAL_INDEX};
use io::ascii::write_table;
use io::netcdf::load_zf_diag;
use selection::{MirroredPair, build_rows};

fn main() -> Result<()> {
    // Configuration
    let config = get_args();

    // Logs go to stderr, the table owns stdout
    TermLogger::init(
        config.log_level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    // Load zf_diag and t
    let input = config.input_path();
    let data = load_zf_diag(&input)
        .with_context(|| format!("Failed to load diagnostics from {:?}", input))?;

    if data.ncol() != CHANNEL_LABELS.len() {
        warn!(
            "{} has {} channels but the header lists {} labels",
            DIAG_VAR,
            data.ncol(),
            CHANNEL_LABELS.len()
        );
    }

    // Time integral
    let cumulative = data.running_integral()?;

    // Mirrored radial points
    let pair = MirroredPair::new(data.nx(), RADIAL_INDEX)?;
    info!(
        "Summing radial points {} and {} of {}",
        pair.ind,
        pair.mirror,
        data.nx()
    );
    let rows = build_rows(&data.time, &data.diag, &cumulative, pair);

    let out = BufWriter::new(stdout().lock());
    write_table(out, &rows)?;

    info!("Wrote {} of {} time steps", rows.len(), data.nt());
    Ok(())
}
