use crate::config::{DEFAULT_BASE_DIR, DEFAULT_FILE_PREFIX, RunConfig};
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Print zf_diag at the mirrored radial points, with its running time integral, as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the simulation output
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Run name; the input file is <BASE_DIR>/<PREFIX>.out.nc
    #[arg(short, long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new();
        config.base_dir = self.base_dir;
        config.file_prefix = self.prefix;
        if self.quiet {
            config.log_level = LevelFilter::Warn;
        }
        config
    }
}

pub fn get_args() -> RunConfig {
    Args::parse().into_config()
}
