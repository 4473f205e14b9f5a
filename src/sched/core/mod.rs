//! Núcleo do escalonador: tabela, sorteio, PALS e o loop por CPU.

pub mod lottery;
pub mod pals;
pub mod scheduler;
pub mod sleep_queue;
pub mod table;

pub use scheduler::CpuScheduler;
pub use table::ProcessTable;
