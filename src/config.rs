use simplelog::LevelFilter;
use std::path::PathBuf;

// Input file location used when nothing is given on the command line
pub const DEFAULT_FILE_PREFIX: &str = "center";
pub const DEFAULT_BASE_DIR: &str = "/work/e607/e607/dstonge/zf_test/test_proj/";
pub const FILE_SUFFIX: &str = ".out.nc";

// Variable names inside the simulation output
pub const DIAG_VAR: &str = "zf_diag";
pub const TIME_VAR: &str = "t";

/// Radial point one in from the boundary; its mirror is `nx - RADIAL_INDEX`.
pub const RADIAL_INDEX: usize = 1;

// What measurements are in zf_diag, along with the time
pub const CHANNEL_LABELS: [&str; 12] = [
    "time",
    "prl_str",
    "prl_str_rad",
    "prl_str_rad_phi",
    "mirror",
    "mirror_rad",
    "mgn_drft",
    "mgn_drft_rad",
    "mgn_drft_rad_phi",
    "exb_nl",
    "zf_source",
    "zf_comm",
];

// Settings for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub file_prefix: String,
    pub log_level: LevelFilter,
}

impl RunConfig {
    pub fn new() -> Self {
        RunConfig {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            log_level: LevelFilter::Info,
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.base_dir
            .join(format!("{}{}", self.file_prefix, FILE_SUFFIX))
    }
}
