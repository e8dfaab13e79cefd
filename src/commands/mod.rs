pub mod barcode;
pub mod config;
pub mod run;
pub mod screen;
