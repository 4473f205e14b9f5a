//! Testes para o módulo Scheduler
//!
//! Testes unitários e estatísticos do escalonador de loteria, rodando no
//! host.
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Executar todos os testes do escalonador
//! cargo test --lib sched::tests
//!
//! # Executar testes de um módulo específico
//! cargo test --lib sched::tests::lottery
//! cargo test --lib sched::tests::pals
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `ledger.rs` - Ledger de tickets: limites, herança, fronteira de syscall
//! - `lottery.rs` - Sorteio: exclusões, proporcionalidade, não-inanição
//! - `pals.rs` - Compensação de wakeup: função de boost, sobrescrita, decaimento
//! - `scheduler.rs` - Loop por CPU: despacho, quantum, sleep, exit
//!
//! # Convenções
//!
//! - Prefixo `test_` para todos os testes
//! - Seeds fixas nos testes estatísticos (sorteios reproduzíveis)
//! - O relógio global de jiffies é compartilhado entre os testes do
//!   processo; asserções temporais toleram avanço externo do relógio

#![cfg(test)]

pub mod pals;
pub mod scheduler;

use crate::sched::task::Task;
use crate::sys::types::Pid;

/// Helper: registro pronto construído à mão, fora de qualquer tabela.
pub fn ready_task(pid: u32, tickets: u32) -> Task {
    let mut task = Task::new(Pid::new(pid), None, tickets, "teste");
    task.set_ready();
    task
}
