pub mod algebra;
pub mod config;
pub mod consts;
pub mod coords;
pub mod error;
pub mod frame;
pub mod io;
pub mod raster;
pub mod resample;
