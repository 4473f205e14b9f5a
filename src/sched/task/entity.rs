//! Registro de escalonamento (Process Scheduling Record)
//!
//! Um `Task` existe do spawn/fork até o reap e pertence à tabela de
//! processos. Os campos de loteria (`tickets`, `boost`) e os timestamps de
//! bloqueio/wake são mutados apenas sob o lock da tabela.

use bitflags::bitflags;

use super::accounting::Accounting;
use super::state::TaskState;
use crate::sched::config::{BOOST_ONE, BOOST_SHIFT};
use crate::sys::types::Pid;

bitflags! {
    /// Flags de bookkeeping do despacho.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TaskFlags: u8 {
        /// Acordou de um bloqueio e ainda não foi despachada desde então.
        /// Consumida no primeiro despacho pós-wake.
        const FRESH_WAKE = 1 << 0;
    }
}

/// Registro de escalonamento por processo
pub struct Task {
    /// ID único
    pub pid: Pid,
    /// Pai (origem da herança de tickets), se houver
    pub parent: Option<Pid>,
    /// Estado atual
    pub state: TaskState,

    // --- Loteria ---
    /// Tickets base. Invariante: em [MIN_TICKETS, MAX_TICKETS] enquanto o
    /// processo vive; a tabela valida toda mutação.
    pub tickets: u32,
    /// Multiplicador de compensação em ponto fixo (BOOST_ONE = 1.0).
    /// Só difere de 1.0 numa janela limitada após um wake.
    pub boost: u32,

    // --- PALS ---
    /// Tick em que a task bloqueou pela última vez
    pub last_block_time: u64,
    /// Tick em que a task acordou pela última vez
    pub last_wake_time: u64,
    /// Deadline de sleep voluntário (jiffies), se dormindo
    pub wake_at: Option<u64>,

    /// Flags de despacho
    pub flags: TaskFlags,
    /// Estatísticas de contabilidade
    pub accounting: Accounting,

    /// Código de saída (para o reaper)
    pub exit_code: Option<i32>,
    /// Nome (debug)
    pub name: [u8; 32],
}

impl Task {
    /// Cria um registro novo. `tickets` vem do criador (herança) ou do
    /// default; a validação de faixa é responsabilidade da tabela.
    pub fn new(pid: Pid, parent: Option<Pid>, tickets: u32, name: &str) -> Self {
        // Preparar buffer de nome
        let mut name_buf = [0u8; 32];
        let bytes = name.as_bytes();
        let len = bytes.len().min(31);
        name_buf[..len].copy_from_slice(&bytes[..len]);

        Self {
            pid,
            parent,
            state: TaskState::Created,
            tickets,
            boost: BOOST_ONE,
            last_block_time: 0,
            last_wake_time: 0,
            wake_at: None,
            flags: TaskFlags::empty(),
            accounting: Accounting::new(),
            exit_code: None,
            name: name_buf,
        }
    }

    /// Peso efetivo no sorteio: `tickets × boost`.
    ///
    /// Função pura do snapshot atual; nunca cacheada. Como `boost >=
    /// BOOST_ONE` e `tickets >= 1`, o peso de uma task pronta é sempre > 0.
    #[inline]
    pub fn effective_weight(&self) -> u64 {
        (self.tickets as u64 * self.boost as u64) >> BOOST_SHIFT
    }

    /// Marca como pronta
    pub fn set_ready(&mut self) {
        self.state = TaskState::Ready;
    }

    /// Marca como bloqueada
    pub fn set_blocked(&mut self) {
        self.state = TaskState::Blocked;
    }

    /// Nome como &str (para logs)
    pub fn name_str(&self) -> &str {
        let len = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
        core::str::from_utf8(&self.name[..len]).unwrap_or("?")
    }
}
