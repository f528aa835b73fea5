pub mod ascii;
pub mod netcdf;
