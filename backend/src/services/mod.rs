//! Business logic services

pub mod log_io;
pub mod session;

pub use log_io::LogCsvService;
pub use session::Session;
