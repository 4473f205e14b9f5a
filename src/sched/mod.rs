//! # Lottery Scheduler Subsystem
//!
//! O módulo `sched` é o motor de decisão do Brasa OS. Em vez de prioridades
//! fixas ou round-robin, cada processo pronto carrega `tickets`; a cada ponto
//! de escalonamento um ticket vencedor é sorteado uniformemente sobre o
//! conjunto pronto e o dono ganha a CPU por um quantum fixo.
//!
//! ## Componentes (folhas primeiro)
//! - **Ledger de Tickets** (`core::table` + `task`): registro por processo de
//!   `tickets` e do peso derivado; dono é a tabela de processos.
//! - **PALS** (`core::pals`): compensação de wakeup. Processos que bloqueiam
//!   com frequência não acumulam vantagem enquanto dormem; no wake recebem um
//!   boost temporário, limitado e decadente, sobre o peso.
//! - **Seletor de Loteria** (`core::lottery`): o sorteio em si, sobre um
//!   snapshot tirado sob o lock da tabela.
//! - **Loop do Scheduler** (`core::scheduler`): uma instância por CPU,
//!   orquestra estados, sorteio e bookkeeping em cada ponto de escalonamento.
//!
//! ## Justiça
//! O quantum é fixo e idêntico para todos. Toda a justiça é expressa via
//! peso efetivo = `tickets × boost`; nada de filas por prioridade.

pub mod config;
pub mod core;
pub mod error;
pub mod task;


#[cfg(test)]
mod tests;
