use anyhow::{Result, bail};
use ndarray::Array3;

// Pair of radial points symmetric about the midplane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirroredPair {
    pub ind: usize,
    pub mirror: usize,
}

impl MirroredPair {
    pub fn new(nx: usize, ind: usize) -> Result<Self> {
        if ind == 0 || ind >= nx {
            bail!(
                "radial index {} and its mirror {} need 0 < ind < nx, but nx = {}",
                ind,
                nx as isize - ind as isize,
                nx
            );
        }
        Ok(MirroredPair {
            ind,
            mirror: nx - ind,
        })
    }
}

// One output line: time, then per-channel sums of the instantaneous and cumulative values
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub time: f64,
    pub instantaneous: Vec<f64>,
    pub cumulative: Vec<f64>,
}

/// Sum of `values[t, ind, c]` and `values[t, nx - ind, c]` for every channel `c`.
pub fn mirrored_sum(values: &Array3<f64>, t: usize, pair: MirroredPair) -> Vec<f64> {
    let (_, _, ncol) = values.dim();
    (0..ncol)
        .map(|c| values[[t, pair.ind, c]] + values[[t, pair.mirror, c]])
        .collect()
}

pub fn build_rows(
    time: &[f64],
    diag: &Array3<f64>,
    cumulative: &Array3<f64>,
    pair: MirroredPair,
) -> Vec<TableRow> {
    time.iter()
        .enumerate()
        .map(|(t, &time)| TableRow {
            time,
            instantaneous: mirrored_sum(diag, t, pair),
            cumulative: mirrored_sum(cumulative, t, pair),
        })
        .collect()
}
