pub mod analysis;
pub mod config;
pub mod export;
pub mod plot;
pub mod report;
pub mod stats;
pub mod thermal;
