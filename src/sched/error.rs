//! Tipos de Erro do Escalonador
//!
//! Erros estruturados reportados de forma síncrona ao chamador. Falha nunca
//! altera estado: uma mutação rejeitada deixa o ledger exatamente como
//! estava. Uma decisão de escalonamento em si não falha (fila vazia é o
//! estado idle, não um erro).

use crate::sys::error::Errno;

/// Erros do subsistema de escalonamento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedError {
    /// Contagem de tickets fora de [MIN_TICKETS, MAX_TICKETS]
    InvalidTicketCount,
    /// PID não existe na tabela de processos
    NoSuchProcess,
}

impl SchedError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTicketCount => "Contagem de tickets inválida",
            Self::NoSuchProcess => "Processo inexistente",
        }
    }

    /// Mapeia para o errno da ABI de syscalls.
    pub fn as_errno(&self) -> Errno {
        match self {
            Self::InvalidTicketCount => Errno::EINVAL,
            Self::NoSuchProcess => Errno::ESRCH,
        }
    }
}

impl core::fmt::Display for SchedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tipo Result específico para operações do escalonador
pub type SchedResult<T> = Result<T, SchedError>;
