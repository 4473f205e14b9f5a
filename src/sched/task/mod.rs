//! Registro de escalonamento por processo.

pub mod accounting;
pub mod entity;
pub mod state;

pub use accounting::Accounting;
pub use entity::{Task, TaskFlags};
pub use state::TaskState;
