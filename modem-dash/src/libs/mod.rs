pub mod bima;
pub mod config;
pub mod hnap;
pub mod quality;
pub mod units;
pub mod upstream;
