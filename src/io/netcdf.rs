use crate::config::{DIAG_VAR, TIME_VAR};
use crate::diagnostics::ZfDiagnostics;
use anyhow::{Context, Result, anyhow, bail};
use log::info;
use ndarray::Array3;
use netcdf::{self};
use std::path::Path;

// Function to load zf_diag and the time coordinate from a simulation output file
pub fn load_zf_diag(path: &Path) -> Result<ZfDiagnostics> {
    info!("Reading {}", path.display());
    let file = netcdf::open(path)
        .with_context(|| format!("Failed to open netCDF file: {:?}", path))?;

    // zf_diag(time, x, col)
    let diag_var = file
        .variable(DIAG_VAR)
        .ok_or_else(|| anyhow!("Variable {} not found in {:?}", DIAG_VAR, path))?;
    let dims: Vec<usize> = diag_var.dimensions().iter().map(|d| d.len()).collect();
    let (nt, nx, ncol) = match dims.as_slice() {
        &[nt, nx, ncol] => (nt, nx, ncol),
        _ => bail!("{} should have 3 dimensions, found {:?}", DIAG_VAR, dims),
    };
    let raw: Vec<f64> = diag_var
        .get_values(..)
        .with_context(|| format!("Failed to read {}", DIAG_VAR))?;
    let diag = Array3::from_shape_vec((nt, nx, ncol), raw)
        .with_context(|| format!("{} data does not match its dimensions", DIAG_VAR))?;

    // t(time)
    let time_var = file
        .variable(TIME_VAR)
        .ok_or_else(|| anyhow!("Variable {} not found in {:?}", TIME_VAR, path))?;
    if time_var.dimensions().len() != 1 {
        bail!(
            "{} should have 1 dimension, found {}",
            TIME_VAR,
            time_var.dimensions().len()
        );
    }
    let time: Vec<f64> = time_var
        .get_values(..)
        .with_context(|| format!("Failed to read {}", TIME_VAR))?;

    let data = ZfDiagnostics::new(diag, time)?;
    info!("{} shape: ({}, {}, {})", DIAG_VAR, nt, nx, ncol);
    Ok(data)
}
