//! Brasa Scheduler Core.
//!
//! Núcleo de escalonamento por loteria do Brasa OS. Cada processo RUNNABLE
//! carrega um número de tickets; a cada decisão de escalonamento sorteamos um
//! ticket vencedor uniformemente sobre o conjunto pronto e o dono roda por um
//! quantum fixo. O mecanismo PALS compensa processos recém-acordados de um
//! bloqueio com um boost temporário de peso, limitando a latência
//! wakeup-to-run de cargas interativas sem distorcer a fatia de CPU de longo
//! prazo dos processos CPU-bound.
//!
//! Esta crate é deliberadamente independente de arquitetura: o kernel que a
//! embute fornece o timer (incrementando jiffies), o context switch e o sink
//! de log. Aqui vive apenas a estrutura de dados e o algoritmo.

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (necessário para Vec/Box)
extern crate alloc;

// --- Módulos Centrais ---
pub mod core; // Logging, Jiffies
pub mod klib; // Utilitários Internos (RNG)
pub mod sys; // Definições de Sistema (Tipos, Errno)

// --- Subsistemas ---
pub mod sched; // Ledger, Loteria, PALS, Loop do Scheduler
pub mod syscall; // Interface com Userspace

pub use crate::sched::core::scheduler::CpuScheduler;
pub use crate::sched::core::table::ProcessTable;
pub use crate::sched::error::{SchedError, SchedResult};
pub use crate::sys::types::Pid;
