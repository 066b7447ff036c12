// Public module exports for the binary crate
pub mod error;
pub mod logging;
pub mod report;
