//! Definições de sistema compartilhadas (tipos e códigos de erro da ABI).

pub mod error;
pub mod types;

pub use error::Errno;
pub use types::Pid;
