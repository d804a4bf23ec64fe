pub mod config;
pub mod consts;
pub mod coverage;
pub mod error;
pub mod generate;
pub mod known;
pub mod logger;
pub mod manifest;
pub mod runner;
