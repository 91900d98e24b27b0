#[macro_use]
mod macros;

pub mod record;
pub mod sink;
pub mod facade;
pub mod backend;
pub mod structured;

#[cfg(feature = "legacy")]
pub mod legacy;

pub mod console;
pub mod capture_sink;
pub mod terminate;
pub mod init;
pub mod env;

pub use facade::Facade;
pub use record::{CallSite, LogRecord, Severity};
