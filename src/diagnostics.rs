use anyhow::{Result, bail};
use ndarray::{Array3, Axis};

// zf_diag and its time coordinate, as read from the simulation output
#[derive(Debug, Clone)]
pub struct ZfDiagnostics {
    pub diag: Array3<f64>,
    pub time: Vec<f64>,
}

impl ZfDiagnostics {
    pub fn new(diag: Array3<f64>, time: Vec<f64>) -> Result<Self> {
        if diag.len_of(Axis(0)) != time.len() {
            bail!(
                "zf_diag has {} time steps but t has {} values",
                diag.len_of(Axis(0)),
                time.len()
            );
        }
        Ok(ZfDiagnostics { diag, time })
    }

    pub fn nt(&self) -> usize {
        self.diag.len_of(Axis(0))
    }

    pub fn nx(&self) -> usize {
        self.diag.len_of(Axis(1))
    }

    pub fn ncol(&self) -> usize {
        self.diag.len_of(Axis(2))
    }

    pub fn running_integral(&self) -> Result<Array3<f64>> {
        running_integral(&self.diag, &self.time)
    }
}

/// Running time integral of `diag` along its first axis.
///
/// The first step is copied as-is. Each later step adds the current sample
/// times the width of the interval ending at it (left-endpoint sum, not
/// trapezoidal).
pub fn running_integral(diag: &Array3<f64>, time: &[f64]) -> Result<Array3<f64>> {
    let (nt, nx, ncol) = diag.dim();
    if time.len() != nt {
        bail!("expected {} time values, got {}", nt, time.len());
    }

    let mut sum = Array3::<f64>::zeros((nt, nx, ncol));
    if nt == 0 {
        return Ok(sum);
    }

    sum.index_axis_mut(Axis(0), 0)
        .assign(&diag.index_axis(Axis(0), 0));

    for t in 1..nt {
        let dt = time[t] - time[t - 1];
        for c in 0..ncol {
            for r in 0..nx {
                sum[[t, r, c]] = sum[[t - 1, r, c]] + diag[[t, r, c]] * dt;
            }
        }
    }

    Ok(sum)
}
